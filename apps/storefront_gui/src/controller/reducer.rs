//! Applies queued `UiAction`s to the page state after the draw pass.

use cart_core::Storefront;
use shared::error::CartError;

use crate::controller::events::UiAction;

pub fn apply_actions(storefront: &mut Storefront, actions: impl IntoIterator<Item = UiAction>) {
    for action in actions {
        apply_action(storefront, action);
    }
}

pub fn apply_action(storefront: &mut Storefront, action: UiAction) {
    let result = match action {
        UiAction::Increment(id) => storefront.increment(id).map(drop),
        UiAction::Decrement(id) => storefront.decrement(id).map(drop),
        UiAction::AddToCart(id) => storefront.add_to_cart(id).map(drop),
        UiAction::RemoveFromCart(id) => {
            storefront.remove_from_cart(id);
            Ok(())
        }
        UiAction::Checkout => {
            tracing::debug!("checkout is not wired to any handler");
            Ok(())
        }
    };

    match result {
        Ok(()) => tracing::debug!(
            action = action.name(),
            product_id = ?action.product_id(),
            "applied ui action"
        ),
        Err(CartError::AlreadyInCart(id)) => {
            tracing::warn!(product_id = %id, "ignored duplicate add to cart");
        }
        Err(err) => tracing::warn!(action = action.name(), error = %err, "ui action rejected"),
    }
}
