/*!
 * Common test utilities for the workbookgen test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

use workbookgen::app_config::Config;

/// Four-sentence English passage used across the suite
pub const SAMPLE_PASSAGE: &str = "The students opened their books quietly. \
Reading every morning builds strong habits! \
Why do some people enjoy difficult puzzles? \
Practice makes progress.";

/// Sentence-aligned Korean translation of `SAMPLE_PASSAGE`
pub const SAMPLE_KOREAN: &str = "학생들은 조용히 책을 폈다. \
매일 아침 읽기는 좋은 습관을 만든다! \
왜 어떤 사람들은 어려운 퍼즐을 즐길까? \
연습은 발전을 만든다.";

/// Provider id used when a test needs a valid selection
pub const TEST_PROVIDER: &str = "gemini-2.5-flash";

/// Route library logs through env_logger; safe to call from every test
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Writes the sample English passage and its Korean translation
pub fn create_sample_pair(dir: &Path) -> Result<(PathBuf, PathBuf)> {
    let english = create_test_file(dir, "lesson.txt", SAMPLE_PASSAGE)?;
    let korean = create_test_file(dir, "lesson.ko.txt", SAMPLE_KOREAN)?;
    Ok((english, korean))
}

/// Default config with a provider and key selected
pub fn config_with_provider() -> Config {
    let mut config = Config::default();
    config.translation.provider = TEST_PROVIDER.to_string();
    config.translation.api_key = "test-key".to_string();
    config
}

/// Number of rendered sentence blocks in an HTML page
pub fn count_blocks(html: &str) -> usize {
    html.matches("<div class=\"sentence-block\">").count()
}
