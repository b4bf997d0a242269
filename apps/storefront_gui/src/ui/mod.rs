//! UI layer: app shell, product grid and cart panels, widgets, and themes.

pub mod app;
pub mod panels;
pub mod theme;
pub mod widgets;

pub use app::StorefrontApp;
