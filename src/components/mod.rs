// ABOUTME: UI components: page renderers, navigation bar, overlays, and the
// theme palettes they draw with

pub mod about;
pub mod contact_view;
pub mod help;
pub mod home;
pub mod layout;
pub mod navbar;
pub mod projects;
pub mod skills;
pub mod splash;
pub mod toast;

pub use layout::LayoutComponent;

use ratatui::style::Color;

use crate::app::state::Theme;

/// Colors shared by every component for the active theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight: Color,
}

/// Resolve the palette for a theme; the easter egg repaints the accent.
pub fn palette(theme: Theme, easter_egg: bool) -> Palette {
    let mut palette = match theme {
        Theme::Dark => Palette {
            fg: Color::White,
            muted: Color::DarkGray,
            accent: Color::Cyan,
            highlight: Color::Yellow,
        },
        Theme::Light => Palette {
            fg: Color::Black,
            muted: Color::Gray,
            accent: Color::Blue,
            highlight: Color::Magenta,
        },
    };
    if easter_egg {
        palette.accent = Color::Magenta;
        palette.highlight = Color::LightMagenta;
    }
    palette
}
