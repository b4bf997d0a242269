//! Display models derived from `Storefront` state each frame.

use shared::domain::{ProductId, Quantity};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    pub id: ProductId,
    pub title: String,
    pub price_label: String,
    pub quantity: Quantity,
    /// False while the product is in the cart; covers minus, plus and add.
    pub controls_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub id: ProductId,
    pub label: String,
    pub subtotal_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPanelView {
    pub lines: Vec<CartLineView>,
    pub total_label: String,
}

const SM_BREAKPOINT: f32 = 640.0;
const MD_BREAKPOINT: f32 = 768.0;
const LG_BREAKPOINT: f32 = 1024.0;

/// Responsive product grid column count for the given available width.
pub fn grid_columns(available_width: f32) -> usize {
    if available_width >= LG_BREAKPOINT {
        4
    } else if available_width >= MD_BREAKPOINT {
        3
    } else if available_width >= SM_BREAKPOINT {
        2
    } else {
        1
    }
}
