mod common;

use common::{bicycle, bisquit, cart_with, rocket};
use shopcart::cart::{Cart, CartError, Item, Money, MAX_QTY};

#[test]
fn new_cart_is_empty() {
    let cart = Cart::new();
    assert!(cart.is_empty());
    assert_eq!(cart.qty(), 0);
    assert_eq!(cart.subtotal(), Money::ZERO);
}

#[test]
fn add_appends_new_products_in_order() {
    let cart = Cart::new().add(&rocket()).add(&bicycle());
    let names: Vec<_> = cart.items().iter().map(|i| i.product.name.as_str()).collect();
    assert_eq!(names, ["Rocket", "Bicycle"]);
}

#[test]
fn add_existing_product_increments_quantity() {
    let cart = cart_with(&bicycle(), 3);
    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].qty, 3);
}

#[test]
fn add_leaves_original_untouched() {
    let before = cart_with(&bicycle(), 1);
    let after = before.add(&bicycle());
    assert_eq!(before.qty(), 1);
    assert_eq!(after.qty(), 2);
}

#[test]
fn change_qty_sets_quantity() {
    let cart = Cart::new().add(&bicycle()).add(&rocket());
    let updated = cart.change_qty(&rocket(), 7).expect("accepted");
    assert_eq!(updated.items()[1].qty, 7);
    assert_eq!(updated.items()[0].qty, 1);
}

#[test]
fn change_qty_rejects_non_positive() {
    let cart = cart_with(&bicycle(), 1);
    assert_eq!(
        cart.change_qty(&bicycle(), 0),
        Err(CartError::InvalidQuantity { qty: 0 })
    );
    assert_eq!(
        cart.change_qty(&bicycle(), -4),
        Err(CartError::InvalidQuantity { qty: -4 })
    );
}

#[test]
fn change_qty_rejects_overflowing_quantity() {
    let cart = cart_with(&bicycle(), 1);
    let too_big = i64::from(u32::MAX) + 1;
    assert!(matches!(
        cart.change_qty(&bicycle(), too_big),
        Err(CartError::InvalidQuantity { .. })
    ));
}

#[test]
fn add_goes_past_the_largest_typed_quantity() {
    let cart = cart_with(&bicycle(), 1)
        .change_qty(&bicycle(), MAX_QTY as i64)
        .expect("largest quantity accepted");
    let cart = cart.add(&bicycle());
    assert_eq!(cart.items()[0].qty, MAX_QTY + 1);
    assert_eq!(cart.qty(), MAX_QTY + 1);
}

#[test]
fn change_qty_rejects_product_not_in_cart() {
    let cart = cart_with(&bicycle(), 1);
    assert_eq!(
        cart.change_qty(&bisquit(), 2),
        Err(CartError::NotInCart {
            name: "Bisquit".to_string()
        })
    );
}

#[test]
fn subtotals_and_quantities() {
    let cart = cart_with(&bicycle(), 2).add(&rocket());
    assert_eq!(cart.items()[0].subtotal(), Money::from_cents(20100));
    assert_eq!(cart.subtotal(), Money::from_cents(21636));
    assert_eq!(cart.qty(), 3);
}

#[test]
fn from_items_merges_duplicates() {
    let cart = Cart::from_items(vec![
        Item {
            product: rocket(),
            qty: 2,
        },
        Item {
            product: bicycle(),
            qty: 1,
        },
        Item {
            product: rocket(),
            qty: 3,
        },
    ]);
    assert_eq!(cart.items().len(), 2);
    assert_eq!(cart.items()[0].qty, 5);
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(
        CartError::InvalidQuantity { qty: -1 }.to_string(),
        "Quantity must be a whole number between 1 and 4294967295, got -1"
    );
    assert_eq!(
        CartError::NotInCart {
            name: "Rocket".to_string()
        }
        .to_string(),
        "'Rocket' is not in the cart"
    );
}
