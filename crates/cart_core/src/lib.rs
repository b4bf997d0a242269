//! UI-agnostic storefront state: the cart, per-card quantity selectors, and the
//! display models the window renders from them.

pub mod card;
pub mod cart;
pub mod storefront;
pub mod view;

pub use card::ProductCardState;
pub use cart::Cart;
pub use storefront::Storefront;
pub use view::{grid_columns, CartLineView, CartPanelView, ProductCardView};
