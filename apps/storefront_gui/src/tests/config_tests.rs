use super::*;

use std::{collections::HashMap, fs};

fn no_env(_: &str) -> Option<String> {
    None
}

fn args_for(path: &Path) -> Args {
    Args {
        config: Some(path.to_path_buf()),
        ..Args::default()
    }
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = load_startup_config_with_env(&args_for(&dir.path().join("absent.toml")), no_env);

    assert_eq!(config, StartupConfig::default());
}

#[test]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("storefront.toml");
    fs::write(
        &path,
        "window_title = \"Shop\"\ntheme = \"light\"\ntext_scale = 1.2\nwindow_width = 900.0\n",
    )
    .expect("write config");

    let config = load_startup_config_with_env(&args_for(&path), no_env);
    assert_eq!(config.window_title, "Shop");
    assert_eq!(config.theme, ThemePreset::Light);
    assert_eq!(config.text_scale, 1.2);
    assert_eq!(config.window_width, 900.0);
    assert_eq!(config.window_height, StartupConfig::default().window_height);
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("storefront.toml");
    fs::write(&path, "theme = [not toml").expect("write config");

    let config = load_startup_config_with_env(&args_for(&path), no_env);
    assert_eq!(config, StartupConfig::default());
}

#[test]
fn env_overrides_file_and_cli_overrides_env() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("storefront.toml");
    fs::write(&path, "theme = \"dark\"\ntext_scale = 0.9\n").expect("write config");

    let env: HashMap<&str, &str> = [("STOREFRONT_THEME", "Light"), ("STOREFRONT_TEXT_SCALE", "1.1")]
        .into_iter()
        .collect();
    let lookup = |name: &str| env.get(name).map(|v| v.to_string());

    let config = load_startup_config_with_env(&args_for(&path), lookup);
    assert_eq!(config.theme, ThemePreset::Light);
    assert_eq!(config.text_scale, 1.1);

    let args = Args {
        theme: Some(ThemePreset::Dark),
        text_scale: Some(1.3),
        ..args_for(&path)
    };
    let config = load_startup_config_with_env(&args, lookup);
    assert_eq!(config.theme, ThemePreset::Dark);
    assert_eq!(config.text_scale, 1.3);
}

#[test]
fn invalid_env_values_are_ignored() {
    let dir = tempfile::tempdir().expect("tempdir");
    let lookup = |name: &str| match name {
        "STOREFRONT_THEME" => Some("neon".to_string()),
        "STOREFRONT_TEXT_SCALE" => Some("huge".to_string()),
        _ => None,
    };

    let config = load_startup_config_with_env(&args_for(&dir.path().join("none.toml")), lookup);
    assert_eq!(config.theme, ThemePreset::Dark);
    assert_eq!(config.text_scale, 1.0);
}

#[test]
fn clamps_out_of_range_values() {
    let dir = tempfile::tempdir().expect("tempdir");
    let args = Args {
        text_scale: Some(5.0),
        width: Some(10.0),
        height: Some(f32::NAN),
        ..args_for(&dir.path().join("none.toml"))
    };

    let config = load_startup_config_with_env(&args, no_env);
    assert_eq!(config.text_scale, 1.6);
    assert_eq!(config.window_width, MIN_WINDOW_WIDTH);
    assert_eq!(config.window_height, StartupConfig::default().window_height);
}
