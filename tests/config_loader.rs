use hhserver_options::config::{
    merge, ConfigError, ConfigReader, GcTuning, HhconfigReader, ServerConfig,
};

/// Test that the merged defaults match the compiled-in baseline.
#[test]
fn test_server_config_default_values() {
    let config = ServerConfig::default();

    assert_eq!(config.gc.minor_heap_size, 256 * 1024);
    assert_eq!(config.gc.space_overhead, 80);
    assert!(config.assume_php);
}

/// Test that the config path lives at the project root.
#[test]
fn test_config_path_ends_with_expected() {
    let path = HhconfigReader::config_path(std::path::Path::new("/srv/www"));
    assert!(path.ends_with(".hhconfig"));
    assert!(path.starts_with("/srv/www"));
}

/// Test reading and merging a real file.
#[test]
fn test_read_and_merge_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".hhconfig"),
        "# tuning\ngc_minor_heap_size = 500000\ngc_space_overhead = 120\nassume_php = false\n",
    )
    .unwrap();

    let raw = HhconfigReader.read(dir.path()).unwrap();
    let config = merge(&raw, GcTuning::BASELINE).unwrap();

    assert_eq!(config.gc.minor_heap_size, 500_000);
    assert_eq!(config.gc.space_overhead, 120);
    assert!(!config.assume_php);
}

/// Test that unrelated keys are ignored by the merger.
#[test]
fn test_unrelated_keys_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".hhconfig"), "ignored_paths = [\"vendor/.*\"]\n").unwrap();

    let raw = HhconfigReader.read(dir.path()).unwrap();
    assert_eq!(merge(&raw, GcTuning::BASELINE).unwrap(), ServerConfig::default());
}

/// Test that a missing file is a read error, not an empty config.
#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = HhconfigReader.read(dir.path());

    match result.unwrap_err() {
        ConfigError::ReadError { path, .. } => assert!(path.ends_with(".hhconfig")),
        other => panic!("Expected ReadError, got {other:?}"),
    }
}

/// Test that a negative GC value is rejected rather than defaulted.
#[test]
fn test_negative_minor_heap_is_invalid() {
    let raw = [("gc_minor_heap_size", "-1")].into_iter().collect();
    let err = merge(&raw, GcTuning::BASELINE).unwrap_err();
    assert!(err.to_string().contains("gc_minor_heap_size"));
}
