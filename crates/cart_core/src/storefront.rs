//! Page-level state owner: the cart plus every card's quantity selector.

use std::collections::HashMap;

use shared::{
    catalog,
    domain::{CartItem, Product, ProductId, Quantity},
    error::CartError,
};

use crate::{
    card::ProductCardState,
    cart::Cart,
    view::{CartLineView, CartPanelView, ProductCardView},
};

#[derive(Debug, Clone)]
pub struct Storefront {
    products: &'static [Product],
    cards: HashMap<ProductId, ProductCardState>,
    cart: Cart,
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new()
    }
}

impl Storefront {
    pub fn new() -> Self {
        let products = catalog::products();
        Self {
            products,
            cards: products
                .iter()
                .map(|product| (product.id, ProductCardState::default()))
                .collect(),
            cart: Cart::new(),
        }
    }

    pub fn products(&self) -> &'static [Product] {
        self.products
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn is_in_cart(&self, id: ProductId) -> bool {
        self.cart.contains(id)
    }

    pub fn quantity(&self, id: ProductId) -> Option<Quantity> {
        self.cards.get(&id).map(ProductCardState::quantity)
    }

    /// Quantity edits on a card whose product is in the cart are ignored, matching its
    /// disabled controls.
    pub fn increment(&mut self, id: ProductId) -> Result<Quantity, CartError> {
        self.edit_card(id, ProductCardState::increment)
    }

    pub fn decrement(&mut self, id: ProductId) -> Result<Quantity, CartError> {
        self.edit_card(id, ProductCardState::decrement)
    }

    /// Sets the card quantity directly; used by the command-line quote path.
    pub fn set_quantity(
        &mut self,
        id: ProductId,
        quantity: Quantity,
    ) -> Result<Quantity, CartError> {
        self.edit_card(id, |card| *card = ProductCardState::with_quantity(quantity))
    }

    pub fn add_to_cart(&mut self, id: ProductId) -> Result<CartItem, CartError> {
        let product = self.product(id)?;
        let card = self.cards.get(&id).ok_or(CartError::UnknownProduct(id))?;
        let item = card.add_to_cart(product);
        self.cart.add_to_cart(item.clone())?;
        tracing::debug!(product_id = %id, cart_len = self.cart.len(), "added to cart");
        Ok(item)
    }

    pub fn remove_from_cart(&mut self, id: ProductId) -> Option<CartItem> {
        let removed = self.cart.remove_from_cart(id);
        if removed.is_some() {
            tracing::debug!(product_id = %id, cart_len = self.cart.len(), "removed from cart");
        }
        removed
    }

    pub fn card_views(&self) -> Vec<ProductCardView> {
        self.products
            .iter()
            .map(|product| ProductCardView {
                id: product.id,
                title: product.title.clone(),
                price_label: product.price.to_string(),
                quantity: self.quantity(product.id).unwrap_or_default(),
                controls_enabled: !self.is_in_cart(product.id),
            })
            .collect()
    }

    /// `None` while the cart is empty: the cart section is not rendered at all.
    pub fn cart_panel(&self) -> Option<CartPanelView> {
        if self.cart.is_empty() {
            return None;
        }

        Some(CartPanelView {
            lines: self
                .cart
                .items()
                .iter()
                .map(|item| CartLineView {
                    id: item.id,
                    label: format!("{} x {}", item.title, item.quantity),
                    subtotal_label: item.subtotal().to_string(),
                })
                .collect(),
            total_label: self.cart.total().to_string(),
        })
    }

    fn product(&self, id: ProductId) -> Result<&'static Product, CartError> {
        self.products
            .iter()
            .find(|product| product.id == id)
            .ok_or(CartError::UnknownProduct(id))
    }

    fn edit_card(
        &mut self,
        id: ProductId,
        edit: impl FnOnce(&mut ProductCardState),
    ) -> Result<Quantity, CartError> {
        let locked = self.cart.contains(id);
        let card = self
            .cards
            .get_mut(&id)
            .ok_or(CartError::UnknownProduct(id))?;
        if !locked {
            edit(card);
        }
        Ok(card.quantity())
    }
}

#[cfg(test)]
#[path = "tests/storefront_tests.rs"]
mod tests;
