//! JSON wire format shared by the shop client and the relay.
//!
//! ```text
//! cart       {"items":[{"product":{"name":"Bicycle","price":100.5},"qty":2}]}
//! cart list  [cart, cart, ...]
//! ```
//!
//! Quantities must be at least 1. Repeated products inside one cart are
//! merged rather than rejected.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::{Cart, Item};

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Malformed cart data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Malformed cart data: quantity of '{name}' must be at least 1")]
    ZeroQuantity { name: String },
}

#[derive(Serialize)]
struct CartRef<'a> {
    items: &'a [Item],
}

#[derive(Deserialize)]
struct WireCart {
    items: Vec<Item>,
}

impl TryFrom<WireCart> for Cart {
    type Error = CodecError;

    fn try_from(wire: WireCart) -> Result<Self, Self::Error> {
        if let Some(item) = wire.items.iter().find(|item| item.qty == 0) {
            return Err(CodecError::ZeroQuantity {
                name: item.product.name.clone(),
            });
        }
        Ok(Cart::from_items(wire.items))
    }
}

/// Encodes one cart.
pub fn encode_cart(cart: &Cart) -> String {
    // Serializing plain strings and numbers into a String cannot fail.
    serde_json::to_string(&CartRef {
        items: cart.items(),
    })
    .unwrap_or_default()
}

/// Encodes a list of carts, preserving order.
pub fn encode_carts(carts: &[Cart]) -> String {
    let refs: Vec<CartRef<'_>> = carts
        .iter()
        .map(|cart| CartRef {
            items: cart.items(),
        })
        .collect();
    serde_json::to_string(&refs).unwrap_or_default()
}

/// Decodes one cart.
pub fn decode_cart(text: &str) -> Result<Cart, CodecError> {
    let wire: WireCart = serde_json::from_str(text)?;
    Cart::try_from(wire)
}

/// Decodes a list of carts. Any invalid element fails the whole list.
pub fn decode_carts(text: &str) -> Result<Vec<Cart>, CodecError> {
    let wire: Vec<WireCart> = serde_json::from_str(text)?;
    wire.into_iter().map(Cart::try_from).collect()
}
