use cart_core::{grid_columns, CartPanelView, ProductCardView};
use eframe::egui;

use crate::{
    controller::events::UiAction,
    ui::{
        theme::ThemeSettings,
        widgets::{icon_btn, product_card, REMOVE_GLYPH},
    },
};

const GRID_GAP: f32 = 24.0;

pub fn product_grid(
    ui: &mut egui::Ui,
    cards: &[ProductCardView],
    theme: ThemeSettings,
    actions: &mut Vec<UiAction>,
) {
    let columns = grid_columns(ui.available_width());
    ui.spacing_mut().item_spacing = egui::vec2(GRID_GAP, GRID_GAP);

    for row in cards.chunks(columns) {
        ui.columns(columns, |cols| {
            for (col, card) in cols.iter_mut().zip(row) {
                product_card(col, card, theme, actions);
            }
        });
    }
}

pub fn cart_panel(
    ui: &mut egui::Ui,
    panel: &CartPanelView,
    theme: ThemeSettings,
    actions: &mut Vec<UiAction>,
) {
    let text_color = ui.visuals().text_color();
    egui::Frame::new()
        .fill(theme.surface_fill())
        .corner_radius(egui::CornerRadius::same(theme.panel_rounding))
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);

            ui.label(egui::RichText::new("Cart").strong().size(18.0 * theme.text_scale));
            ui.add_space(8.0);

            for line in &panel.lines {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&line.label).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add(icon_btn(REMOVE_GLYPH, text_color))
                            .on_hover_text("Remove from cart")
                            .clicked()
                        {
                            actions.push(UiAction::RemoveFromCart(line.id));
                        }
                        ui.label(
                            egui::RichText::new(&line.subtotal_label)
                                .strong()
                                .color(theme.price_color()),
                        );
                    });
                });
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Total:").strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&panel.total_label)
                            .strong()
                            .color(theme.price_color())
                            .size(16.0 * theme.text_scale),
                    );
                });
            });

            ui.add_space(8.0);
            let checkout = egui::Button::new(
                egui::RichText::new("Checkout").color(egui::Color32::WHITE),
            )
            .fill(theme.accent_color)
            .corner_radius(egui::CornerRadius::same(6))
            .min_size(egui::vec2(ui.available_width(), 30.0));
            if ui.add(checkout).clicked() {
                actions.push(UiAction::Checkout);
            }
        });
}
