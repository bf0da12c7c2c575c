use crossterm::style::{Color, Stylize};

/// Design tokens for the firecat CLI.
///
/// Only 5 semantic colors; every icon comes from this module.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
    pub const PREVIEW: &str = "▶";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";
    pub const PREVIEW: &str = "[>]";
}

/// Pick the unicode or ASCII variant of an icon
pub fn icon(unicode: bool, fancy: &'static str, ascii: &'static str) -> &'static str {
    if unicode {
        fancy
    } else {
        ascii
    }
}

/// Color `text` when color output is enabled
pub fn paint(color_enabled: bool, text: &str, color: Color) -> String {
    if color_enabled {
        format!("{}", text.with(color))
    } else {
        text.to_string()
    }
}
