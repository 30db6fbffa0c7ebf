//! Cart data model: products, cart lines and the pure operations over them.

pub mod money;
mod model;

pub use model::{Cart, CartError, Item, Product, MAX_QTY};
pub use money::Money;

/// The catalog every shopper starts with unless the config overrides it.
pub fn default_stock() -> Vec<Product> {
    vec![
        Product::new("Bicycle", Money::from_cents(10050)),
        Product::new("Rocket", Money::from_cents(1536)),
        Product::new("Bisquit", Money::from_cents(2115)),
    ]
}
