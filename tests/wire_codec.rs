mod common;

use common::{bicycle, cart_with, rocket};
use shopcart::cart::Cart;
use shopcart::codec::{decode_cart, decode_carts, encode_cart, encode_carts, CodecError};

#[test]
fn encode_cart_format() {
    let cart = cart_with(&bicycle(), 2);
    assert_eq!(
        encode_cart(&cart),
        r#"{"items":[{"product":{"name":"Bicycle","price":100.5},"qty":2}]}"#
    );
}

#[test]
fn encode_empty_cart() {
    assert_eq!(encode_cart(&Cart::new()), r#"{"items":[]}"#);
    assert_eq!(encode_carts(&[]), "[]");
}

#[test]
fn encoded_carts_decode_back() {
    let carts = vec![
        cart_with(&bicycle(), 1).add(&rocket()),
        Cart::new(),
        cart_with(&rocket(), 4),
    ];
    let decoded = decode_carts(&encode_carts(&carts)).expect("decode");
    assert_eq!(decoded, carts);
}

#[test]
fn decode_single_cart() {
    let cart = decode_cart(r#"{"items":[{"product":{"name":"Rocket","price":15.36},"qty":3}]}"#)
        .expect("decode");
    assert_eq!(cart, cart_with(&rocket(), 3));
}

#[test]
fn decode_rejects_garbage() {
    assert!(matches!(decode_carts("hello"), Err(CodecError::Malformed(_))));
    assert!(matches!(decode_carts(""), Err(CodecError::Malformed(_))));
}

#[test]
fn decode_carts_rejects_single_cart() {
    assert!(decode_carts(r#"{"items":[]}"#).is_err());
}

#[test]
fn decode_rejects_zero_quantity() {
    let result = decode_carts(r#"[{"items":[{"product":{"name":"Rocket","price":15.36},"qty":0}]}]"#);
    match result {
        Err(CodecError::ZeroQuantity { name }) => assert_eq!(name, "Rocket"),
        other => panic!("expected zero quantity error, got {other:?}"),
    }
}

#[test]
fn decode_rejects_negative_values() {
    assert!(decode_cart(r#"{"items":[{"product":{"name":"Rocket","price":15.36},"qty":-1}]}"#).is_err());
    assert!(decode_cart(r#"{"items":[{"product":{"name":"Rocket","price":-2},"qty":1}]}"#).is_err());
}

#[test]
fn decode_merges_repeated_products() {
    let cart = decode_cart(
        r#"{"items":[
            {"product":{"name":"Rocket","price":15.36},"qty":1},
            {"product":{"name":"Rocket","price":15.36},"qty":2}
        ]}"#,
    )
    .expect("decode");
    assert_eq!(cart, cart_with(&rocket(), 3));
}

#[test]
fn one_bad_cart_fails_the_list() {
    let text = r#"[{"items":[]},{"items":"nope"}]"#;
    assert!(decode_carts(text).is_err());
}
