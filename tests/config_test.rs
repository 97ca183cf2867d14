//! 設定ファイルのテスト

use recipe_photo::config::Config;
use recipe_photo_common::PhotoSource;
use tempfile::tempdir;

/// ファイルがなければ既定値
#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();

    assert_eq!(config.provider_delay_ms, 1000);
    assert_eq!(config.recipe_delay_ms, 1500);
    assert!(config.unsplash_access_key.is_none());
}

/// 保存して読み戻す（親ディレクトリも作る）
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("recipe-photo").join("config.json");

    let config = Config {
        pexels_api_key: Some("pexels-secret".into()),
        provider_order: vec![PhotoSource::Pexels],
        recipe_timeout_seconds: Some(45),
        ..Config::default()
    };
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.pexels_api_key.as_deref(), Some("pexels-secret"));
    assert_eq!(loaded.provider_order, vec![PhotoSource::Pexels]);
    assert_eq!(loaded.recipe_timeout().map(|d| d.as_secs()), Some(45));
}

/// 不正なJSONはエラー
#[test]
fn test_load_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(Config::load_from(&path).is_err());
}

/// 空文字のキーは未設定扱い
#[test]
fn test_blank_key_is_unset() {
    let config = Config {
        pexels_api_key: Some("   ".into()),
        ..Config::default()
    };
    if std::env::var("PEXELS_API_KEY").is_err() {
        assert!(config.api_key(PhotoSource::Pexels).is_none());
    }
}
