//! ABS numeric state codes.

use serde::{Deserialize, Serialize};

/// Australian state or territory as coded in ABS tables (1-9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateCode {
    Nsw,
    Vic,
    Qld,
    Sa,
    Wa,
    Tas,
    Nt,
    Act,
    Other,
}

impl StateCode {
    /// Resolves a numeric code field such as `"3"`.
    ///
    /// Surrounding whitespace is ignored. Anything outside `1..=9` is `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "1" => Some(Self::Nsw),
            "2" => Some(Self::Vic),
            "3" => Some(Self::Qld),
            "4" => Some(Self::Sa),
            "5" => Some(Self::Wa),
            "6" => Some(Self::Tas),
            "7" => Some(Self::Nt),
            "8" => Some(Self::Act),
            "9" => Some(Self::Other),
            _ => None,
        }
    }

    /// Abbreviation used in output files.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Nsw => "NSW",
            Self::Vic => "VIC",
            Self::Qld => "QLD",
            Self::Sa => "SA",
            Self::Wa => "WA",
            Self::Tas => "TAS",
            Self::Nt => "NT",
            Self::Act => "ACT",
            Self::Other => "OTHER",
        }
    }

    /// Label for a raw code field; unmapped codes give the empty string.
    pub fn label(code: &str) -> &'static str {
        Self::from_code(code).map_or("", |state| state.abbreviation())
    }
}

impl std::fmt::Display for StateCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbreviation())
    }
}
