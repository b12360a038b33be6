/*!
 * Tests for file utilities
 */

use std::path::PathBuf;
use workbookgen::file_utils::FileManager;
use crate::common;

/// Test output names carry the variant and format
#[test]
fn test_generateOutputPath_withVariant_shouldInsertVariantBeforeExtension() {
    let path = FileManager::generate_output_path("passages/week2.txt", "korean-only", "html");
    assert_eq!(path, PathBuf::from("passages/week2.korean-only.html"));
}

/// Test file existence only holds for regular files
#[test]
fn test_fileExists_withDirectory_shouldBeFalse() -> anyhow::Result<()> {
    let dir = common::create_temp_dir()?;
    assert!(!FileManager::file_exists(dir.path()));

    let file = common::create_test_file(dir.path(), "a.txt", "A.")?;
    assert!(FileManager::file_exists(&file));
    Ok(())
}

/// Test reading a missing file reports the path
#[test]
fn test_readToString_withMissingFile_shouldFail() -> anyhow::Result<()> {
    let dir = common::create_temp_dir()?;
    let error = FileManager::read_to_string(dir.path().join("missing.txt")).unwrap_err();
    assert!(error.to_string().contains("Failed to read file"));
    Ok(())
}

/// Test writing replaces existing content
#[test]
fn test_writeToFile_withExistingFile_shouldOverwrite() -> anyhow::Result<()> {
    let dir = common::create_temp_dir()?;
    let file = common::create_test_file(dir.path(), "out.html", "old")?;
    FileManager::write_to_file(&file, "new")?;
    assert_eq!(FileManager::read_to_string(&file)?, "new");
    Ok(())
}
