use serde::{Deserialize, Serialize};
use shared::{
    domain::{CartItem, Price, ProductId},
    error::CartError,
};

/// Ordered cart lines, unique by product id. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CartLines")]
pub struct Cart {
    items: Vec<CartItem>,
}

#[derive(Deserialize)]
struct CartLines {
    items: Vec<CartItem>,
}

impl TryFrom<CartLines> for Cart {
    type Error = CartError;

    /// Replays each line through `add_to_cart` so duplicate ids are rejected.
    fn try_from(lines: CartLines) -> Result<Self, Self::Error> {
        let mut cart = Cart::new();
        for item in lines.items {
            cart.add_to_cart(item)?;
        }
        Ok(cart)
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_to_cart(&mut self, item: CartItem) -> Result<(), CartError> {
        if self.contains(item.id) {
            return Err(CartError::AlreadyInCart(item.id));
        }
        self.items.push(item);
        Ok(())
    }

    /// Removing an absent id is a no-op.
    pub fn remove_from_cart(&mut self, id: ProductId) -> Option<CartItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> Price {
        self.items
            .iter()
            .fold(Price::ZERO, |total, item| total.saturating_add(item.subtotal()))
    }
}
