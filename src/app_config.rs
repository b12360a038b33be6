use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

use crate::providers::catalog;
use crate::translation::DEFAULT_PROMPT_TEMPLATE;
use crate::worksheet::ExerciseVariant;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Worksheet defaults
    #[serde(default)]
    pub worksheet: WorksheetConfig,

    /// Translation config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Worksheet defaults, each overridable from the command line
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WorksheetConfig {
    // @field: Worksheet title
    #[serde(default = "default_title")]
    pub title: String,

    // @field: Optional subtitle, empty for none
    #[serde(default)]
    pub subtitle: String,

    // @field: Exercise variant
    #[serde(default)]
    pub variant: ExerciseVariant,

    // @field: Print Korean reference footers
    #[serde(default = "default_true")]
    pub show_reference: bool,
}

impl Default for WorksheetConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: String::new(),
            variant: ExerciseVariant::default(),
            show_reference: true,
        }
    }
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TranslationConfig {
    /// Provider id from the catalog, or "none"
    #[serde(default = "default_provider")]
    pub provider: String,

    /// API key for the selected provider
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Temperature parameter for text generation (0.0 to 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Prompt template; `{passage}` is replaced by the English passage
    #[serde(default = "default_prompt_template")]
    pub prompt_template: String,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
            temperature: default_temperature(),
            prompt_template: default_prompt_template(),
        }
    }
}

impl TranslationConfig {
    /// Whether an AI provider is selected
    pub fn has_provider(&self) -> bool {
        !catalog::is_none_id(&self.provider)
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_title() -> String {
    "영어 독해 및 번역 연습".to_string()
}

fn default_provider() -> String {
    catalog::NO_PROVIDER_ID.to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_temperature() -> f32 {
    0.7
}

fn default_prompt_template() -> String {
    DEFAULT_PROMPT_TEMPLATE.to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.worksheet.title.trim().is_empty() {
            return Err(anyhow!("Worksheet title must not be empty"));
        }

        let translation = &self.translation;
        if translation.has_provider() && catalog::find(&translation.provider).is_none() {
            return Err(anyhow!("Unknown AI provider in config: {}", translation.provider));
        }

        if translation.timeout_secs == 0 {
            return Err(anyhow!("Translation timeout must be at least one second"));
        }

        if !(0.0..=2.0).contains(&translation.temperature) {
            return Err(anyhow!("Temperature must be between 0.0 and 2.0, got {}", translation.temperature));
        }

        if translation.prompt_template.trim().is_empty() {
            return Err(anyhow!("Translation prompt template must not be empty"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            worksheet: WorksheetConfig::default(),
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
