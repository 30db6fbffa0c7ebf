use crate::cart::{default_stock, Cart, Product};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq)]
pub struct ShopState {
    pub cart: Cart,
    /// Fixed for the lifetime of the process.
    pub stock: Vec<Product>,
    /// Message of the last failed intent, if it has not been cleared yet.
    pub error: Option<String>,
    /// Carts from the most recent valid broadcast.
    pub peer_carts: Vec<Cart>,
}

impl ShopState {
    pub fn new(stock: Vec<Product>) -> Self {
        Self {
            cart: Cart::new(),
            stock,
            error: None,
            peer_carts: Vec::new(),
        }
    }
}

impl Default for ShopState {
    fn default() -> Self {
        Self::new(default_stock())
    }
}

impl UiState for ShopState {}
