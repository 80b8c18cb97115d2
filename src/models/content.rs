use serde::Deserialize;

#[derive(Clone, Deserialize)]
pub struct SiteContent {
    pub site: SiteInfo,
    pub hero: Hero,
    pub overview: Overview,
    pub targets: Vec<Target>,
    pub impact: Impact,
    pub articles: Vec<Article>,
    pub involvement: Involvement,
    pub faqs: Vec<Faq>,
    pub about: About,
    pub contact: ContactInfo,
}

#[derive(Clone, Deserialize)]
pub struct SiteInfo {
    pub title: String,
    pub brand: String,
    pub copyright: String,
    pub footer_note: String,
}

#[derive(Clone, Deserialize)]
pub struct Hero {
    pub heading: Vec<String>,
    pub subtitle: String,
    pub stats: Vec<HeroStat>,
}

#[derive(Clone, Deserialize)]
pub struct HeroStat {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Deserialize)]
pub struct Overview {
    pub intro: String,
    pub stats: Vec<StatCard>,
    pub why_it_matters: String,
}

#[derive(Clone, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub stat: String,
    pub detail: String,
}

#[derive(Clone, Deserialize)]
pub struct Target {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Deserialize)]
pub struct Impact {
    pub cards: Vec<ImpactCard>,
    pub regions: Vec<RegionRow>,
    pub successes: Vec<String>,
    pub challenges: Vec<String>,
    pub connections: Vec<SdgConnection>,
}

#[derive(Clone, Deserialize)]
pub struct ImpactCard {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Deserialize)]
pub struct RegionRow {
    pub region: String,
    pub corruption_index: u8,
    pub justice_access: u8,
    pub peace_index: u8,
}

#[derive(Clone, Deserialize)]
pub struct SdgConnection {
    pub sdg: String,
    pub description: String,
}

#[derive(Clone, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub read_time: String,
    pub link: String,
    pub questions: Vec<Question>,
}

#[derive(Clone, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
}

#[derive(Clone, Deserialize)]
pub struct Involvement {
    pub individual_actions: Vec<String>,
    pub community_initiatives: Vec<String>,
    pub organizations: Vec<Organization>,
    pub interest_areas: Vec<String>,
}

#[derive(Clone, Deserialize)]
pub struct Organization {
    pub name: String,
    pub description: String,
    pub website: String,
}

#[derive(Clone, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Deserialize)]
pub struct About {
    pub blurb: String,
    pub mission: String,
    pub members: Vec<TeamMember>,
}

#[derive(Clone, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub reg_no: String,
    pub email: String,
    pub group: String,
}

#[derive(Clone, Deserialize)]
pub struct ContactInfo {
    pub channels: Vec<ContactChannel>,
}

#[derive(Clone, Deserialize)]
pub struct ContactChannel {
    pub label: String,
    pub value: String,
}
