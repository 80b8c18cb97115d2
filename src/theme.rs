use ratatui::style::Color;

/// Palette for one display mode. Views pull every color from the active
/// theme so the dark/light toggle restyles the whole site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub selection_fg: Color,
    pub selection_bg: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            muted: Color::DarkGray,
            accent: Color::Cyan,
            border: Color::DarkGray,
            selection_fg: Color::Black,
            selection_bg: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            muted: Color::Gray,
            accent: Color::Blue,
            border: Color::Gray,
            selection_fg: Color::White,
            selection_bg: Color::Blue,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Magenta,
        }
    }
}
