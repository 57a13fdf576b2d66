/*!
 * Tests for file utility functions
 */

use scriptsense::file_utils::FileManager;

/// Test directory creation including parents
#[test]
fn test_ensure_dir_withNestedPath_shouldCreateAll() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b").join("c");

    assert!(!FileManager::dir_exists(&nested));
    FileManager::ensure_dir(&nested).unwrap();
    assert!(FileManager::dir_exists(&nested));

    // Idempotent on an existing directory
    FileManager::ensure_dir(&nested).unwrap();
}

/// Test a text write/read round trip
#[test]
fn test_write_to_file_withText_shouldRoundTrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("artifacts").join("prescription.txt");

    FileManager::write_to_file(&path, "translated text").unwrap();

    assert!(FileManager::file_exists(&path));
    assert_eq!(FileManager::read_to_string(&path).unwrap(), "translated text");
}

/// Test writing raw bytes creates parent directories
#[test]
fn test_write_bytes_withMissingParent_shouldCreateAndWrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("audio").join("prescription_audio_Tamil.mp3");

    let audio = vec![0xFF, 0xF3, 0x01, 0x02];
    FileManager::write_bytes(&path, &audio).unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), audio);
}

/// Test that last write wins on the same path
#[test]
fn test_write_bytes_withSamePath_shouldOverwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("audio.mp3");

    FileManager::write_bytes(&path, b"first").unwrap();
    FileManager::write_bytes(&path, b"second").unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"second");
}

/// Test reading a missing file surfaces an error
#[test]
fn test_read_to_string_withMissingFile_shouldFail() {
    let dir = tempfile::tempdir().unwrap();
    assert!(FileManager::read_to_string(dir.path().join("absent.txt")).is_err());
}
