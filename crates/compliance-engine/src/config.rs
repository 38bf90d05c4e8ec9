//! Engine configuration
//!
//! Defaults reflect federal minimums. `from_env` and `from_json` let a
//! deployment widen the firearm-type keyword list or tighten thresholds
//! without code changes.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How a keyword is compared to a firearm line's type text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    Exact,
    Contains,
}

/// One firearm-type keyword that puts a line in the handgun/other category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryKeyword {
    pub term: String,
    pub mode: MatchMode,
}

impl CategoryKeyword {
    pub fn exact(term: &str) -> Self {
        Self {
            term: term.to_lowercase(),
            mode: MatchMode::Exact,
        }
    }

    pub fn contains(term: &str) -> Self {
        Self {
            term: term.to_lowercase(),
            mode: MatchMode::Contains,
        }
    }

    /// `*term*` is a contains match, anything else is exact.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.len() > 2 && raw.starts_with('*') && raw.ends_with('*') {
            Some(Self::contains(&raw[1..raw.len() - 1]))
        } else if !raw.is_empty() && !raw.contains('*') {
            Some(Self::exact(raw))
        } else {
            None
        }
    }

    /// `type_text` must already be trimmed and lowercased.
    pub fn matches(&self, type_text: &str) -> bool {
        match self.mode {
            MatchMode::Exact => type_text == self.term,
            MatchMode::Contains => type_text.contains(&self.term),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Line types that require the handgun/other minimum age
    pub category_keywords: Vec<CategoryKeyword>,

    pub handgun_min_age: i32,

    pub long_gun_min_age: i32,

    /// A NICS check is valid through day `nics_validity_days - 1`
    pub nics_validity_days: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            category_keywords: crate::patterns::default_category_keywords(),
            handgun_min_age: 21,
            long_gun_min_age: 18,
            nics_validity_days: 30,
        }
    }
}

impl EngineConfig {
    /// Load from environment variables, falling back to defaults for unset ones
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("COMPLIANCE_CATEGORY_KEYWORDS") {
            config.category_keywords = parse_keyword_list(&raw)?;
        }
        if let Some(age) = env_number("COMPLIANCE_HANDGUN_MIN_AGE")? {
            config.handgun_min_age = age as i32;
        }
        if let Some(age) = env_number("COMPLIANCE_LONG_GUN_MIN_AGE")? {
            config.long_gun_min_age = age as i32;
        }
        if let Some(days) = env_number("COMPLIANCE_NICS_VALIDITY_DAYS")? {
            config.nics_validity_days = days;
        }

        config.validate()?;
        Ok(config)
    }

    /// Decode a JSON document; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.category_keywords.is_empty() {
            return Err(ConfigError::NoCategoryKeywords);
        }
        Ok(())
    }
}

fn env_number(name: &'static str) -> Result<Option<i64>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|n| *n > 0 && *n <= 365)
            .map(Some)
            .ok_or(ConfigError::InvalidEnvValue { name, value }),
        Err(_) => Ok(None),
    }
}

fn parse_keyword_list(raw: &str) -> Result<Vec<CategoryKeyword>, ConfigError> {
    let mut keywords = Vec::new();
    for entry in raw.split(',').filter(|e| !e.trim().is_empty()) {
        let keyword = CategoryKeyword::parse(entry).ok_or_else(|| ConfigError::InvalidEnvValue {
            name: "COMPLIANCE_CATEGORY_KEYWORDS",
            value: raw.to_string(),
        })?;
        keywords.push(keyword);
    }
    Ok(keywords)
}
