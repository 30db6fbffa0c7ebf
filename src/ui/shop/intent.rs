use crate::cart::Product;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum ShopIntent {
    /// "Add" control on a stock row was activated.
    AddToCart(Product),
    /// Quantity field of a cart row changed. `raw` is the field text as typed.
    ChangeQuantity { product: Product, raw: String },
    /// Text frame received from the transport, expected to hold a cart list.
    PeerCartsUpdate(String),
}

impl Intent for ShopIntent {}
