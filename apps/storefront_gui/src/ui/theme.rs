use std::collections::BTreeMap;

use eframe::egui;

use crate::config::ThemePreset;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeSettings {
    pub preset: ThemePreset,
    pub accent_color: egui::Color32,
    pub panel_rounding: u8,
    pub text_scale: f32,
}

impl ThemeSettings {
    pub fn new(preset: ThemePreset, text_scale: f32) -> Self {
        Self {
            preset,
            accent_color: egui::Color32::from_rgb(88, 101, 242),
            panel_rounding: 10,
            text_scale,
        }
    }

    /// Card and cart panel background.
    pub fn surface_fill(&self) -> egui::Color32 {
        match self.preset {
            ThemePreset::Dark => egui::Color32::from_rgb(43, 45, 49),
            ThemePreset::Light => egui::Color32::WHITE,
        }
    }

    pub fn placeholder_fill(&self) -> egui::Color32 {
        match self.preset {
            ThemePreset::Dark => egui::Color32::from_rgb(64, 68, 75),
            ThemePreset::Light => egui::Color32::from_rgb(226, 228, 233),
        }
    }

    pub fn price_color(&self) -> egui::Color32 {
        self.accent_color
    }
}

pub fn visuals_for_theme(theme: ThemeSettings) -> egui::Visuals {
    let mut visuals = match theme.preset {
        ThemePreset::Dark => {
            let mut v = egui::Visuals::dark();
            v.window_fill = egui::Color32::from_rgb(49, 51, 56);
            v.panel_fill = egui::Color32::from_rgb(30, 31, 34);
            v.extreme_bg_color = egui::Color32::from_rgb(24, 25, 28);
            v.faint_bg_color = egui::Color32::from_rgb(43, 45, 49);
            v
        }
        ThemePreset::Light => {
            let mut v = egui::Visuals::light();
            v.panel_fill = egui::Color32::from_rgb(242, 243, 245);
            v
        }
    };

    visuals.hyperlink_color = theme.accent_color;
    visuals.selection.bg_fill = theme.accent_color;
    visuals.widgets.active.bg_fill = theme.accent_color;
    visuals.widgets.hovered.bg_fill = theme.accent_color.gamma_multiply(0.85);
    visuals.window_corner_radius = egui::CornerRadius::same(theme.panel_rounding);
    visuals.menu_corner_radius = egui::CornerRadius::same(theme.panel_rounding.clamp(4, 16));
    visuals
}

pub fn scaled_text_styles(text_scale: f32) -> BTreeMap<egui::TextStyle, egui::FontId> {
    let mut styles = egui::Style::default().text_styles;
    for font in styles.values_mut() {
        font.size *= text_scale;
    }
    styles
}
