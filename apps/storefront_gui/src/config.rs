use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "storefront.toml";

pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;
const MIN_TEXT_SCALE: f32 = 0.8;
const MAX_TEXT_SCALE: f32 = 1.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreset {
    #[default]
    Dark,
    Light,
}

impl ThemePreset {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }
}

#[derive(Parser, Debug, Default)]
#[command(name = "storefront", about = "Product catalog with an in-memory cart")]
pub struct Args {
    /// TOML file with window and theme settings.
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub theme: Option<ThemePreset>,
    #[arg(long)]
    pub text_scale: Option<f32>,
    #[arg(long)]
    pub width: Option<f32>,
    #[arg(long)]
    pub height: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub theme: ThemePreset,
    pub text_scale: f32,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            window_title: "Storefront".to_string(),
            window_width: 1100.0,
            window_height: 760.0,
            theme: ThemePreset::Dark,
            text_scale: 1.0,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    window_title: Option<String>,
    window_width: Option<f32>,
    window_height: Option<f32>,
    theme: Option<ThemePreset>,
    text_scale: Option<f32>,
}

/// Defaults, then the TOML file, then `STOREFRONT_*` variables, then CLI flags.
pub fn load_startup_config(args: &Args) -> StartupConfig {
    load_startup_config_with_env(args, |name| std::env::var(name).ok())
}

pub fn load_startup_config_with_env(
    args: &Args,
    env: impl Fn(&str) -> Option<String>,
) -> StartupConfig {
    let mut config = StartupConfig::default();

    let path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    match read_file_config(&path) {
        Ok(Some(file)) => config.apply_file(file),
        Ok(None) if args.config.is_some() => {
            tracing::warn!(path = %path.display(), "config file not found; using defaults");
        }
        Ok(None) => {}
        Err(err) => {
            tracing::warn!(error = %format!("{err:#}"), "ignoring unreadable config file");
        }
    }

    if let Some(raw) = env("STOREFRONT_THEME") {
        match ThemePreset::parse(&raw) {
            Some(theme) => config.theme = theme,
            None => tracing::warn!(value = %raw, "ignoring unknown STOREFRONT_THEME"),
        }
    }
    if let Some(raw) = env("STOREFRONT_TEXT_SCALE") {
        match raw.trim().parse::<f32>() {
            Ok(scale) => config.text_scale = scale,
            Err(_) => tracing::warn!(value = %raw, "ignoring invalid STOREFRONT_TEXT_SCALE"),
        }
    }

    if let Some(theme) = args.theme {
        config.theme = theme;
    }
    if let Some(scale) = args.text_scale {
        config.text_scale = scale;
    }
    if let Some(width) = args.width {
        config.window_width = width;
    }
    if let Some(height) = args.height {
        config.window_height = height;
    }

    config.clamped()
}

fn read_file_config(path: &Path) -> anyhow::Result<Option<FileConfig>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read '{}'", path.display()))
        }
    };

    let file = toml::from_str::<FileConfig>(&raw)
        .with_context(|| format!("failed to parse '{}'", path.display()))?;
    Ok(Some(file))
}

impl StartupConfig {
    fn apply_file(&mut self, file: FileConfig) {
        if let Some(title) = file.window_title.filter(|t| !t.trim().is_empty()) {
            self.window_title = title;
        }
        if let Some(width) = file.window_width {
            self.window_width = width;
        }
        if let Some(height) = file.window_height {
            self.window_height = height;
        }
        if let Some(theme) = file.theme {
            self.theme = theme;
        }
        if let Some(scale) = file.text_scale {
            self.text_scale = scale;
        }
    }

    fn clamped(mut self) -> Self {
        let defaults = Self::default();
        self.text_scale = if self.text_scale.is_finite() {
            self.text_scale.clamp(MIN_TEXT_SCALE, MAX_TEXT_SCALE)
        } else {
            defaults.text_scale
        };
        self.window_width = if self.window_width.is_finite() {
            self.window_width.max(MIN_WINDOW_WIDTH)
        } else {
            defaults.window_width
        };
        self.window_height = if self.window_height.is_finite() {
            self.window_height.max(MIN_WINDOW_HEIGHT)
        } else {
            defaults.window_height
        };
        self
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
