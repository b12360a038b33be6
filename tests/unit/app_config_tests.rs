/*!
 * Tests for application configuration functionality
 */

use workbookgen::app_config::{Config, LogLevel, TranslationConfig};
use workbookgen::translation::DEFAULT_PROMPT_TEMPLATE;
use workbookgen::worksheet::ExerciseVariant;
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.worksheet.title, "영어 독해 및 번역 연습");
    assert!(config.worksheet.subtitle.is_empty());
    assert_eq!(config.worksheet.variant, ExerciseVariant::Translation);
    assert!(config.worksheet.show_reference);

    assert_eq!(config.translation.provider, "none");
    assert!(!config.translation.has_provider());
    assert_eq!(config.translation.timeout_secs, 120);
    assert_eq!(config.translation.prompt_template, DEFAULT_PROMPT_TEMPLATE);

    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();

    config.worksheet.title = "   ".to_string();
    assert!(config.validate().is_err());
    config.worksheet.title = "Lesson".to_string();

    config.translation.provider = "claude-3".to_string();
    assert!(config.validate().is_err());
    config.translation.provider = common::TEST_PROVIDER.to_string();
    assert!(config.validate().is_ok());

    config.translation.timeout_secs = 0;
    assert!(config.validate().is_err());
    config.translation.timeout_secs = 30;

    config.translation.temperature = 2.5;
    assert!(config.validate().is_err());
    config.translation.temperature = 0.3;

    config.translation.prompt_template = String::new();
    assert!(config.validate().is_err());
    config.translation.prompt_template = "Translate: {passage}".to_string();

    assert!(config.validate().is_ok());
}

/// Test a selected provider without a key still validates; the key is checked per request
#[test]
fn test_config_withProviderButNoKey_shouldStillValidate() {
    let mut config = Config::default();
    config.translation.provider = "openai-gpt4o".to_string();
    assert!(config.translation.has_provider());
    assert!(config.validate().is_ok());
}

/// Test saving and loading a configuration file
#[test]
fn test_config_saveAndLoad_shouldRoundTrip() -> anyhow::Result<()> {
    let dir = common::create_temp_dir()?;
    let path = dir.path().join("conf.json");

    let mut config = common::config_with_provider();
    config.worksheet.variant = ExerciseVariant::KoreanOnly;
    config.worksheet.subtitle = "Unit 3".to_string();
    config.log_level = LogLevel::Debug;
    config.save(&path)?;

    let loaded = Config::load(&path)?;
    assert_eq!(loaded, config);
    Ok(())
}

/// Test a config file missing sections takes the defaults
#[test]
fn test_config_load_withPartialFile_shouldFillDefaults() -> anyhow::Result<()> {
    let dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        dir.path(),
        "conf.json",
        r#"{ "translation": { "provider": "openai-gpt5", "api_key": "sk-test" }, "log_level": "warn" }"#,
    )?;

    let config = Config::load(&path)?;
    assert_eq!(config.translation.provider, "openai-gpt5");
    assert_eq!(config.translation.api_key, "sk-test");
    assert_eq!(config.translation.timeout_secs, TranslationConfig::default().timeout_secs);
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.worksheet, Config::default().worksheet);
    Ok(())
}

/// Test malformed JSON is reported with the file path
#[test]
fn test_config_load_withMalformedJson_shouldFail() -> anyhow::Result<()> {
    let dir = common::create_temp_dir()?;
    let path = common::create_test_file(dir.path(), "conf.json", "{ not json")?;

    let error = Config::load(&path).unwrap_err();
    assert!(error.to_string().contains("Failed to parse config file"));
    Ok(())
}
