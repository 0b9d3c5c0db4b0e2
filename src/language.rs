use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two languages the service translates between
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    #[default]
    En,
    Ru,
}

impl TargetLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetLanguage::En => "en",
            TargetLanguage::Ru => "ru",
        }
    }

    /// Case-insensitive parse of an explicit override. Anything other than
    /// `en`/`ru` yields `None` and is treated as absent.
    pub fn from_explicit(value: Option<&str>) -> Option<Self> {
        value.and_then(|v| v.parse().ok())
    }

    /// Binary toggle: Russian input goes to English, everything else to Russian.
    pub fn opposite_of_detected(detected_code: &str) -> Self {
        if detected_code.trim().to_lowercase().starts_with("ru") {
            TargetLanguage::En
        } else {
            TargetLanguage::Ru
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported target language: {0}")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for TargetLanguage {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(TargetLanguage::En),
            "ru" => Ok(TargetLanguage::Ru),
            _ => Err(UnsupportedLanguage(s.to_string())),
        }
    }
}
