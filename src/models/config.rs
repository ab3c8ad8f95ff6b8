//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::Topic;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where the catalog is loaded from
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Chat assistant behavior and keyword rules
    #[serde(default)]
    pub chat: ChatConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.chat.min_delay_ms > self.chat.max_delay_ms {
            return Err(AppError::validation(
                "chat.min_delay_ms must not exceed chat.max_delay_ms",
            ));
        }
        if self.chat.rules.is_empty() {
            return Err(AppError::validation("No chat rules defined"));
        }
        for (index, rule) in self.chat.rules.iter().enumerate() {
            if rule.keywords.is_empty() || rule.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(AppError::validation(format!(
                    "chat.rules[{index}] ({:?}) has an empty keyword",
                    rule.topic
                )));
            }
        }
        if !defaults::LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(AppError::validation(format!(
                "logging.level '{}' is not one of {:?}",
                self.logging.level,
                defaults::LOG_LEVELS
            )));
        }
        Ok(())
    }
}

/// Catalog source settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog file (`.toml` or `.json`); builtin data when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Chat assistant settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Whether replies wait for a simulated typing delay
    #[serde(default = "defaults::simulate_delay")]
    pub simulate_delay: bool,

    /// Delay per response character in milliseconds
    #[serde(default = "defaults::ms_per_char")]
    pub ms_per_char: u64,

    /// Lower bound of the reply delay
    #[serde(default = "defaults::min_delay")]
    pub min_delay_ms: u64,

    /// Upper bound of the reply delay
    #[serde(default = "defaults::max_delay")]
    pub max_delay_ms: u64,

    /// Keyword rules, tried in order
    #[serde(default = "defaults::rules")]
    pub rules: Vec<KeywordRule>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            simulate_delay: defaults::simulate_delay(),
            ms_per_char: defaults::ms_per_char(),
            min_delay_ms: defaults::min_delay(),
            max_delay_ms: defaults::max_delay(),
            rules: defaults::rules(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log filter when RUST_LOG is unset
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

/// Mapping from input keywords to an FAQ topic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeywordRule {
    /// Substrings to search for in the message; any one matches
    pub keywords: Vec<String>,

    /// Topic answered when the rule matches
    pub topic: Topic,
}

impl KeywordRule {
    pub fn new(keywords: &[&str], topic: Topic) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            topic,
        }
    }
}

mod defaults {
    use super::KeywordRule;
    use crate::models::Topic;

    pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

    // Chat defaults
    pub fn simulate_delay() -> bool {
        true
    }
    pub fn ms_per_char() -> u64 {
        10
    }
    pub fn min_delay() -> u64 {
        1000
    }
    pub fn max_delay() -> u64 {
        3000
    }

    // Logging defaults
    pub fn log_level() -> String {
        "info".into()
    }

    // Rule defaults: order is priority, first match wins.
    // Bare "exclusion" answers with the financial script.
    pub fn rules() -> Vec<KeywordRule> {
        vec![
            KeywordRule::new(&["department"], Topic::Departments),
            KeywordRule::new(&["academic exclusion"], Topic::AcademicExclusion),
            KeywordRule::new(&["financial exclusion"], Topic::FinancialExclusion),
            KeywordRule::new(&["exclusion"], Topic::FinancialExclusion),
            KeywordRule::new(&["nsfas"], Topic::Nsfas),
            KeywordRule::new(&["change of course"], Topic::CourseChange),
            KeywordRule::new(&["course"], Topic::CourseChange),
            KeywordRule::new(&["special exam", "exit exam"], Topic::SpecialExam),
            KeywordRule::new(&["probation"], Topic::Probation),
            KeywordRule::new(&["timetable"], Topic::Timetable),
            KeywordRule::new(&["readmission"], Topic::Readmission),
            KeywordRule::new(&["intercampus"], Topic::IntercampusTransfer),
            KeywordRule::new(&["admission"], Topic::Admission),
            KeywordRule::new(&["newcomer", "walk-in"], Topic::Newcomer),
            KeywordRule::new(&["bursary"], Topic::Bursary),
            KeywordRule::new(&["residence"], Topic::Residence),
            KeywordRule::new(&["cat", "credit"], Topic::Cat),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_inverted_delay_bounds() {
        let mut config = Config::default();
        config.chat.min_delay_ms = 5000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_keyword() {
        let mut config = Config::default();
        config.chat.rules.push(KeywordRule::new(&["  "], Topic::Bursary));
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_rules() {
        let config: Config = toml::from_str("[chat]\nrules = []\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_unknown_log_level() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [chat]
            simulate_delay = false

            [catalog]
            path = "data/catalog.toml"
            "#,
        )
        .unwrap();
        assert!(!config.chat.simulate_delay);
        assert_eq!(config.chat.max_delay_ms, 3000);
        assert_eq!(config.chat.rules.len(), 17);
        assert_eq!(config.catalog.path, Some(PathBuf::from("data/catalog.toml")));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn custom_rules_replace_defaults() {
        let config: Config = toml::from_str(
            r#"
            [[chat.rules]]
            keywords = ["money"]
            topic = "bursary"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.chat.rules,
            vec![KeywordRule::new(&["money"], Topic::Bursary)]
        );
    }
}
