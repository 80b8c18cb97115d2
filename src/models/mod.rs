mod content;
mod section;

pub use content::{
    About, Article, ContactChannel, ContactInfo, Faq, Hero, HeroStat, Impact, ImpactCard,
    Involvement, Organization, Overview, Question, RegionRow, SdgConnection, SiteContent,
    SiteInfo, StatCard, Target, TeamMember,
};
pub use section::Section;

/// Top-level screen the application is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Startup progress screen.
    Loading,
    /// The tabbed site itself.
    Site,
}
