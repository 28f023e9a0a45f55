use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of photography session. The admin workflow can enter free-form
/// types, which round-trip through `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SessionType {
    Wedding,
    Portrait,
    Event,
    Family,
    Custom(String),
}

impl SessionType {
    pub fn is_blank(&self) -> bool {
        matches!(self, SessionType::Custom(s) if s.trim().is_empty())
    }

    /// Static rule table; unknown types fall back to the permissive default.
    pub fn rule(&self) -> SessionRule {
        match self {
            SessionType::Wedding => SessionRule { min_hours: 4, max_hours: 8, price_multiplier: 1.5 },
            SessionType::Portrait => SessionRule { min_hours: 1, max_hours: 2, price_multiplier: 1.0 },
            SessionType::Event => SessionRule { min_hours: 2, max_hours: 6, price_multiplier: 1.2 },
            SessionType::Family => SessionRule { min_hours: 1, max_hours: 3, price_multiplier: 1.1 },
            SessionType::Custom(_) => DEFAULT_RULE,
        }
    }
}

impl From<String> for SessionType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "wedding" => SessionType::Wedding,
            "portrait" => SessionType::Portrait,
            "event" => SessionType::Event,
            "family" => SessionType::Family,
            _ => SessionType::Custom(value),
        }
    }
}

impl From<SessionType> for String {
    fn from(value: SessionType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionType::Wedding => f.write_str("wedding"),
            SessionType::Portrait => f.write_str("portrait"),
            SessionType::Event => f.write_str("event"),
            SessionType::Family => f.write_str("family"),
            SessionType::Custom(s) => f.write_str(s),
        }
    }
}

/// Duration bounds (hours) and price multiplier for a session type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionRule {
    pub min_hours: u32,
    pub max_hours: u32,
    pub price_multiplier: f64,
}

pub const DEFAULT_RULE: SessionRule = SessionRule {
    min_hours: 1,
    max_hours: 8,
    price_multiplier: 1.0,
};

/// Where the session takes place; affects the hourly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Studio,
    Outdoor,
    Client,
}

impl Location {
    pub fn price_multiplier(self) -> f64 {
        match self {
            Location::Studio => 1.0,
            Location::Outdoor => 1.2,
            Location::Client => 1.3,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Studio => f.write_str("studio"),
            Location::Outdoor => f.write_str("outdoor"),
            Location::Client => f.write_str("client"),
        }
    }
}
