use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::money::Money;

/// Largest quantity a shopper may type in. Lines are stored as `u64`, so
/// adding units on top of this never saturates in practice.
pub const MAX_QTY: u64 = u32::MAX as u64;

/// Errors returned by cart operations that validate their input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("Quantity must be a whole number between 1 and {max}, got {qty}", max = MAX_QTY)]
    InvalidQuantity { qty: i64 },

    #[error("'{name}' is not in the cart")]
    NotInCart { name: String },
}

/// A catalog entry. Immutable once the stock is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: Money,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// One cart line: a product and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub product: Product,
    pub qty: u64,
}

impl Item {
    /// Price times quantity for this line.
    pub fn subtotal(&self) -> Money {
        self.product.price * self.qty
    }
}

/// Ordered list of items, at most one line per product.
///
/// All operations return a new cart and leave `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<Item>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from arbitrary lines, merging repeated products into
    /// the first line that carries them.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        items.into_iter().fold(Cart::new(), |mut cart, item| {
            match cart.position(&item.product) {
                Some(idx) => {
                    let line = &mut cart.items[idx];
                    line.qty = line.qty.saturating_add(item.qty);
                }
                None => cart.items.push(item),
            }
            cart
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds one unit of `product`, appending a new line if needed.
    pub fn add(&self, product: &Product) -> Cart {
        let mut items = self.items.clone();
        match self.position(product) {
            Some(idx) => items[idx].qty = items[idx].qty.saturating_add(1),
            None => items.push(Item {
                product: product.clone(),
                qty: 1,
            }),
        }
        Cart { items }
    }

    /// Sets the quantity of a product already in the cart.
    pub fn change_qty(&self, product: &Product, qty: i64) -> Result<Cart, CartError> {
        let qty = u64::try_from(qty)
            .ok()
            .filter(|qty| (1..=MAX_QTY).contains(qty))
            .ok_or(CartError::InvalidQuantity { qty })?;
        let idx = self.position(product).ok_or_else(|| CartError::NotInCart {
            name: product.name.clone(),
        })?;

        let mut items = self.items.clone();
        items[idx].qty = qty;
        Ok(Cart { items })
    }

    /// Sum of every line's subtotal.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(Item::subtotal).sum()
    }

    /// Total number of units across all lines.
    pub fn qty(&self) -> u64 {
        self.items
            .iter()
            .fold(0, |total: u64, item| total.saturating_add(item.qty))
    }

    fn position(&self, product: &Product) -> Option<usize> {
        self.items.iter().position(|item| &item.product == product)
    }
}
