// SPDX-License-Identifier: MPL-2.0
use sequestered_atelier::config::{self, Config, GeneralConfig};
use sequestered_atelier::i18n::fluent::I18n;
use sequestered_atelier::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::Dark,
        },
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("close-label"), "Close");

    // 2. Change config to fr
    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::Dark,
        },
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("close-label"), "Fermer");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn every_locale_defines_the_visible_labels() {
    const KEYS: [&str; 7] = [
        "window-title",
        "header-title",
        "header-title-accent",
        "header-subtitle",
        "close-label",
        "loading-caption",
        "warning-config-load-error",
    ];

    for locale in ["en-US", "fr"] {
        let i18n = I18n::new(Some(locale.to_string()), None, &Config::default());
        for key in KEYS {
            let value = i18n.tr(key);
            assert!(!value.starts_with("MISSING"), "{locale} lacks {key}");
        }
    }
}

#[test]
fn hand_written_settings_file_is_understood() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        r#"
[general]
language = "fr"
theme_mode = "light"

[gallery]
assets_dir = "/srv/atelier/public"
max_columns = 2

[effects]
enabled = true
cursor_dot_radius = 8.0
glow_radius = 200.0
"#,
    )
    .expect("Failed to write settings");

    let config = config::load_from_path(&path).expect("settings parse");
    assert_eq!(config.general.theme_mode, ThemeMode::Light);
    assert_eq!(config.gallery.max_columns(), 2);
    assert_eq!(
        config.gallery.assets_dir.as_deref(),
        Some(std::path::Path::new("/srv/atelier/public"))
    );
    approx::assert_abs_diff_eq!(config.effects.cursor_dot_radius(), 8.0);
    approx::assert_abs_diff_eq!(config.effects.glow_radius(), 200.0);
}
