//! Asset category value object - which output directory a static asset lands in

use serde::{Deserialize, Serialize};

/// Output bucket for non-code assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetCategory {
    /// `css`
    Stylesheet,
    /// `svg`, `png`
    Image,
    /// `mp3`
    Audio,
    /// `ttf`
    Font,
    /// Everything else
    Generic,
}

impl AssetCategory {
    /// Every category, in table priority order
    pub const ALL: [AssetCategory; 5] = [
        AssetCategory::Stylesheet,
        AssetCategory::Image,
        AssetCategory::Audio,
        AssetCategory::Font,
        AssetCategory::Generic,
    ];

    /// Categorize a file by the last three characters of its name.
    ///
    /// The match is case-sensitive and does not look for a dot, so
    /// `logo.PNG` is generic while `theme.xcss` is a stylesheet.
    pub fn from_file_name(name: &str) -> Self {
        let suffix = name
            .char_indices()
            .rev()
            .nth(2)
            .map(|(i, _)| &name[i..])
            .unwrap_or(name);
        Self::from_suffix(suffix)
    }

    /// Table lookup on an exact three-letter suffix
    pub fn from_suffix(suffix: &str) -> Self {
        match suffix {
            "css" => AssetCategory::Stylesheet,
            "svg" | "png" => AssetCategory::Image,
            "mp3" => AssetCategory::Audio,
            "ttf" => AssetCategory::Font,
            _ => AssetCategory::Generic,
        }
    }

    /// Directory name inside the output directory
    pub fn directory_name(&self) -> &'static str {
        match self {
            AssetCategory::Stylesheet => "css",
            AssetCategory::Image => "img",
            AssetCategory::Audio => "sounds",
            AssetCategory::Font => "fonts",
            AssetCategory::Generic => "assets",
        }
    }
}

impl std::fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.directory_name())
    }
}
