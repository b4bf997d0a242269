use cart_core::ProductCardView;
use eframe::egui;

use crate::{controller::events::UiAction, ui::theme::ThemeSettings};

const MINUS_GLYPH: &str = "\u{2212}";
const PLUS_GLYPH: &str = "+";
pub const REMOVE_GLYPH: &str = "\u{00D7}";

pub fn icon_btn(icon: &str, color: egui::Color32) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(icon).color(color).strong())
        .min_size(egui::vec2(28.0, 28.0))
        .stroke(egui::Stroke::NONE)
        .fill(egui::Color32::TRANSPARENT)
}

/// 4:3 image area standing in for product artwork.
pub fn placeholder_image(ui: &mut egui::Ui, theme: ThemeSettings) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, width * 0.75), egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(
        rect,
        egui::CornerRadius::same(theme.panel_rounding / 2),
        theme.placeholder_fill(),
    );

    let frame_size = egui::vec2(rect.width() * 0.3, rect.height() * 0.3);
    let frame = egui::Rect::from_center_size(rect.center(), frame_size);
    let stroke = egui::Stroke::new(2.0, ui.visuals().weak_text_color());
    painter.rect_stroke(
        frame,
        egui::CornerRadius::same(4),
        stroke,
        egui::StrokeKind::Inside,
    );
    painter.line_segment([frame.left_bottom(), frame.center()], stroke);
    painter.line_segment([frame.center(), frame.right_bottom()], stroke);
}

pub fn product_card(
    ui: &mut egui::Ui,
    card: &ProductCardView,
    theme: ThemeSettings,
    actions: &mut Vec<UiAction>,
) {
    let text_color = ui.visuals().text_color();
    egui::Frame::new()
        .fill(theme.surface_fill())
        .corner_radius(egui::CornerRadius::same(theme.panel_rounding))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            placeholder_image(ui, theme);
            ui.add_space(8.0);

            ui.label(
                egui::RichText::new(&card.title)
                    .strong()
                    .size(17.0 * theme.text_scale),
            );
            ui.label(
                egui::RichText::new(&card.price_label)
                    .strong()
                    .color(theme.price_color())
                    .size(20.0 * theme.text_scale),
            );
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let enabled = card.controls_enabled;
                if ui
                    .add_enabled(enabled, icon_btn(MINUS_GLYPH, text_color))
                    .on_hover_text("Decrease quantity")
                    .clicked()
                {
                    actions.push(UiAction::Decrement(card.id));
                }
                ui.label(egui::RichText::new(card.quantity.to_string()).size(14.0 * theme.text_scale));
                if ui
                    .add_enabled(enabled, icon_btn(PLUS_GLYPH, text_color))
                    .on_hover_text("Increase quantity")
                    .clicked()
                {
                    actions.push(UiAction::Increment(card.id));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let add_btn = egui::Button::new(
                        egui::RichText::new("Add to Cart").color(egui::Color32::WHITE),
                    )
                    .fill(theme.accent_color)
                    .corner_radius(egui::CornerRadius::same(6));
                    if ui.add_enabled(enabled, add_btn).clicked() {
                        actions.push(UiAction::AddToCart(card.id));
                    }
                });
            });
        });
}
