use cart_core::Storefront;
use eframe::egui;

use crate::{
    config::StartupConfig,
    controller::{events::UiAction, reducer::apply_actions},
    ui::{
        panels::{cart_panel, product_grid},
        theme::{scaled_text_styles, visuals_for_theme, ThemeSettings},
    },
};

pub struct StorefrontApp {
    storefront: Storefront,
    theme: ThemeSettings,
    applied_theme: Option<ThemeSettings>,
    pending_actions: Vec<UiAction>,
}

impl StorefrontApp {
    pub fn new(startup: &StartupConfig) -> Self {
        Self {
            storefront: Storefront::new(),
            theme: ThemeSettings::new(startup.theme, startup.text_scale),
            applied_theme: None,
            pending_actions: Vec::new(),
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.theme) {
            return;
        }

        let mut style = (*ctx.style()).clone();
        style.visuals = visuals_for_theme(self.theme);
        style.text_styles = scaled_text_styles(self.theme.text_scale);
        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        style.spacing.interact_size = egui::vec2(40.0, 28.0);
        ctx.set_style(style);
        self.applied_theme = Some(self.theme);
    }

    fn show_page(&mut self, ctx: &egui::Context) {
        let cards = self.storefront.card_views();
        let cart = self.storefront.cart_panel();
        let theme = self.theme;
        let actions = &mut self.pending_actions;

        egui::CentralPanel::default()
            .frame(
                egui::Frame::central_panel(&ctx.style()).inner_margin(egui::Margin::same(24)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        product_grid(ui, &cards, theme, actions);
                        if let Some(cart) = &cart {
                            ui.add_space(24.0);
                            cart_panel(ui, cart, theme, actions);
                        }
                    });
            });
    }
}

impl eframe::App for StorefrontApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme_if_needed(ctx);
        self.show_page(ctx);

        if !self.pending_actions.is_empty() {
            apply_actions(&mut self.storefront, self.pending_actions.drain(..));
            ctx.request_repaint();
        }
    }
}
