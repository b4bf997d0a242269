use shared::domain::{CartItem, Product, Quantity};

/// Per-card quantity selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductCardState {
    quantity: Quantity,
}

impl ProductCardState {
    pub fn with_quantity(quantity: Quantity) -> Self {
        Self { quantity }
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn increment(&mut self) {
        self.quantity = self.quantity.incremented();
    }

    pub fn decrement(&mut self) {
        self.quantity = self.quantity.decremented();
    }

    /// Builds the line item to hand to the cart owner. The card never touches the cart.
    pub fn add_to_cart(&self, product: &Product) -> CartItem {
        CartItem::from_product(product, self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use shared::{catalog, domain::ProductId};

    use super::*;

    #[test]
    fn starts_at_one() {
        assert_eq!(ProductCardState::default().quantity(), Quantity::ONE);
    }

    #[test]
    fn decrement_never_goes_below_one() {
        let mut card = ProductCardState::default();
        for _ in 0..10 {
            card.decrement();
            assert_eq!(card.quantity().get(), 1);
        }
        card.increment();
        card.increment();
        card.decrement();
        assert_eq!(card.quantity().get(), 2);
    }

    #[test]
    fn add_to_cart_carries_product_and_quantity() {
        let product = catalog::find(ProductId(2)).expect("backpack");
        let mut card = ProductCardState::default();
        card.increment();

        let item = card.add_to_cart(product);
        assert_eq!(item.id, ProductId(2));
        assert_eq!(item.title, "Leather Backpack");
        assert_eq!(item.price, product.price);
        assert_eq!(item.quantity.get(), 2);
    }
}
