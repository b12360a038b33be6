/*!
 * Integration tests for application lifecycle
 */

use anyhow::Result;
use workbookgen::app_config::Config;
use workbookgen::app_controller::Controller;
use workbookgen::worksheet::ExerciseVariant;
use crate::common;

/// Test the controller initialization with default config
#[test]
fn test_controller_initialization_withDefaultConfig_shouldSucceed() -> Result<()> {
    let controller = Controller::with_config(Config::default())?;
    assert_eq!(controller.config(), &Config::default());
    Ok(())
}

/// Test the controller rejects an invalid configuration
#[test]
fn test_controller_withInvalidConfig_shouldFail() {
    let mut config = Config::default();
    config.translation.provider = "not-a-provider".to_string();
    assert!(Controller::with_config(config).is_err());
}

/// Test a saved config drives the generated worksheet
#[test]
fn test_savedConfig_shouldControlVariantAndTitle() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let config_path = dir.path().join("conf.json");

    let mut config = Config::default();
    config.worksheet.title = "Week 7 Reading".to_string();
    config.worksheet.variant = ExerciseVariant::Scramble;
    config.save(&config_path)?;

    let controller = Controller::with_config(Config::load(&config_path)?)?;
    let document = controller.build_document(common::SAMPLE_PASSAGE, "")?;
    assert_eq!(document.title, "Week 7 Reading");
    assert_eq!(document.variant, ExerciseVariant::Scramble);

    let html = controller.render(&document, workbookgen::OutputFormat::Html)?;
    assert!(html.contains("Week 7 Reading"));
    assert_eq!(common::count_blocks(&html), 4);
    Ok(())
}
