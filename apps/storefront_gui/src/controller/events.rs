//! User intents emitted by widgets while a frame is drawn.

use shared::domain::ProductId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Increment(ProductId),
    Decrement(ProductId),
    AddToCart(ProductId),
    RemoveFromCart(ProductId),
    Checkout,
}

impl UiAction {
    pub fn name(&self) -> &'static str {
        match self {
            UiAction::Increment(_) => "increment",
            UiAction::Decrement(_) => "decrement",
            UiAction::AddToCart(_) => "add_to_cart",
            UiAction::RemoveFromCart(_) => "remove_from_cart",
            UiAction::Checkout => "checkout",
        }
    }

    pub fn product_id(&self) -> Option<ProductId> {
        match *self {
            UiAction::Increment(id)
            | UiAction::Decrement(id)
            | UiAction::AddToCart(id)
            | UiAction::RemoveFromCart(id) => Some(id),
            UiAction::Checkout => None,
        }
    }
}
