// SPDX-License-Identifier: MPL-2.0
use reelsbook::app::config::{self, Config};
use reelsbook::app::i18n::I18n;
use tempfile::tempdir;

fn config_with_language(lang: &str) -> Config {
    let mut config = Config::default();
    config.general.language = Some(lang.to_string());
    config
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");

    // Saving a new language and reloading swaps the active locale
    for lang in ["en-US", "fr"] {
        config::save_to_path(&config_with_language(lang), &path).expect("save config");
        let loaded = config::load_from_path(&path).expect("load config");

        let i18n = I18n::new(None, None, &loaded);
        assert_eq!(i18n.current_locale().to_string(), lang);
    }
}

#[test]
fn test_backend_settings_survive_a_save_and_load() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");

    let mut written = Config::default();
    written.backend.base_url = Some("http://reels.example.net:9000/".to_string());
    written.backend.request_timeout_secs = Some(45);
    written.upload.chunk_kb = Some(512);
    config::save_to_path(&written, &path).expect("save config");

    let loaded = config::load_from_path(&path).expect("load config");

    // Accessors apply normalisation on top of the raw values
    assert_eq!(loaded.backend_base_url(), "http://reels.example.net:9000");
    assert_eq!(loaded.request_timeout_secs(), 45);
    assert_eq!(loaded.upload_chunk_bytes(), 512 * 1024);
}
