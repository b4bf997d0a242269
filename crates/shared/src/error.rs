use thiserror::Error;

use crate::domain::ProductId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("product {0} is already in the cart")]
    AlreadyInCart(ProductId),
    #[error("product {0} is not in the catalog")]
    UnknownProduct(ProductId),
    #[error("quantity must be at least 1")]
    ZeroQuantity,
}
