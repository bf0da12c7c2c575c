//! Target language level for emitted JavaScript
//!
//! Declarative only: the value is recorded in the manifest and passed
//! through, nothing is transpiled.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EsTarget {
    Es2015,
    Es2016,
    Es2017,
    Es2018,
    Es2019,
    Es2020,
    Es2021,
    Es2022,
    Es2023,
    EsNext,
}

impl EsTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            EsTarget::Es2015 => "es2015",
            EsTarget::Es2016 => "es2016",
            EsTarget::Es2017 => "es2017",
            EsTarget::Es2018 => "es2018",
            EsTarget::Es2019 => "es2019",
            EsTarget::Es2020 => "es2020",
            EsTarget::Es2021 => "es2021",
            EsTarget::Es2022 => "es2022",
            EsTarget::Es2023 => "es2023",
            EsTarget::EsNext => "esnext",
        }
    }

    /// Parse a target name, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es2015" | "es6" => Some(EsTarget::Es2015),
            "es2016" => Some(EsTarget::Es2016),
            "es2017" => Some(EsTarget::Es2017),
            "es2018" => Some(EsTarget::Es2018),
            "es2019" => Some(EsTarget::Es2019),
            "es2020" => Some(EsTarget::Es2020),
            "es2021" => Some(EsTarget::Es2021),
            "es2022" => Some(EsTarget::Es2022),
            "es2023" => Some(EsTarget::Es2023),
            "esnext" => Some(EsTarget::EsNext),
            _ => None,
        }
    }
}

impl std::fmt::Display for EsTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
