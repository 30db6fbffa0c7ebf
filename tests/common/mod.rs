//! Shared test helpers.

#![allow(dead_code)]

use shopcart::cart::{default_stock, Cart, Product};

pub fn stock() -> Vec<Product> {
    default_stock()
}

pub fn bicycle() -> Product {
    stock().remove(0)
}

pub fn rocket() -> Product {
    stock().remove(1)
}

pub fn bisquit() -> Product {
    stock().remove(2)
}

/// Cart holding `qty` units of `product`.
pub fn cart_with(product: &Product, qty: u32) -> Cart {
    (0..qty).fold(Cart::new(), |cart, _| cart.add(product))
}
