//! Loading config files from disk

use std::fs;

use lepeva::config::{find_config_path, Config};
use lepeva::{IconMode, Theme};

#[test]
fn test_load_full_config_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");
    fs::write(
        &path,
        "theme: space\nicon_mode: nerdfont\nvim_mode: true\nconfetti: false\nupload:\n  max_files: 4\n  max_size_mb: 2\n  accepted_types: [\"image/*\"]\n  delay_ms: 10\n",
    )
    .expect("write config");

    let found = find_config_path(path.to_str()).expect("explicit path exists");
    let config = Config::load(found.as_deref()).expect("valid config");

    assert_eq!(config.theme, Theme::Space);
    assert_eq!(IconMode::from_config(&config.icon_mode), IconMode::NerdFont);
    assert!(config.vim_mode);
    assert!(!config.confetti);

    let policy = config.upload.policy();
    assert_eq!(policy.max_files, 4);
    assert_eq!(policy.max_size_bytes(), 2 * 1024 * 1024);
    assert_eq!(policy.accepted_types, vec!["image/*".to_string()]);
    assert_eq!(config.upload.delay_ms, 10);
}

#[test]
fn test_no_file_means_defaults() {
    let config = Config::load(None).expect("defaults");
    assert_eq!(config.theme, Theme::Default);
    assert_eq!(IconMode::from_config(&config.icon_mode), IconMode::Emoji);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");
    fs::write(&path, "upload: [not, a, map]\n").expect("write config");
    assert!(Config::load(Some(&path)).is_err());
}
