mod common;

use common::{bicycle, cart_with, rocket, stock};
use shopcart::cart::Cart;
use shopcart::ui::shop::{ShopIntent, ShopState};
use shopcart::ui::view::{
    render, CartView, ErrorView, PeerRow, PeersView, EMPTY_CART_PROMPT, EMPTY_PEER_CART,
    NO_PEERS_PLACEHOLDER,
};

#[test]
fn render_is_pure() {
    let state = ShopState {
        cart: cart_with(&bicycle(), 2),
        error: Some("boom".to_string()),
        peer_carts: vec![Cart::new(), cart_with(&rocket(), 1)],
        ..ShopState::new(stock())
    };
    let first = render(&state);
    let second = render(&state);
    assert_eq!(first, second);
}

#[test]
fn stock_rows_carry_add_intents_and_currency() {
    let view = render(&ShopState::new(stock()));
    let rows = &view.stock.rows;
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].name, "Bicycle");
    assert_eq!(rows[0].price, "$100.50");
    assert_eq!(rows[1].price, "$15.36");
    assert_eq!(rows[2].price, "$21.15");
    assert_eq!(rows[1].add, ShopIntent::AddToCart(rocket()));
}

#[test]
fn empty_cart_shows_prompt() {
    let view = render(&ShopState::new(stock()));
    assert_eq!(
        view.cart,
        CartView::Empty {
            prompt: EMPTY_CART_PROMPT
        }
    );
    assert!(view.cart.rows().is_empty());
}

#[test]
fn filled_cart_rows_and_total() {
    let state = ShopState {
        cart: cart_with(&bicycle(), 12).add(&rocket()),
        ..ShopState::new(stock())
    };
    let view = render(&state);
    let CartView::Filled { rows, total } = &view.cart else {
        panic!("expected filled cart");
    };
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Bicycle");
    assert_eq!(rows[0].price, "$100.50");
    assert_eq!(rows[0].quantity.text, "12");
    assert_eq!(rows[0].subtotal, "$1,206.00");
    assert_eq!(total, "$1,221.36");
}

#[test]
fn quantity_field_emits_change_intent() {
    let state = ShopState {
        cart: cart_with(&rocket(), 1),
        ..ShopState::new(stock())
    };
    let view = render(&state);
    let field = &view.cart.rows()[0].quantity;
    assert_eq!(
        field.on_change("7"),
        ShopIntent::ChangeQuantity {
            product: rocket(),
            raw: "7".to_string()
        }
    );
}

#[test]
fn error_view_follows_error() {
    let mut state = ShopState::new(stock());
    assert_eq!(render(&state).error, ErrorView::Hidden);
    state.error = Some("bad".to_string());
    assert_eq!(render(&state).error, ErrorView::Alert("bad".to_string()));
}

#[test]
fn no_peers_placeholder() {
    let view = render(&ShopState::new(stock()));
    assert_eq!(
        view.peers,
        PeersView::Nobody {
            placeholder: NO_PEERS_PLACEHOLDER
        }
    );
}

#[test]
fn peer_rows_summarize_each_cart() {
    let state = ShopState {
        peer_carts: vec![cart_with(&bicycle(), 2).add(&rocket()), Cart::new()],
        ..ShopState::new(stock())
    };
    let PeersView::Carts(rows) = render(&state).peers else {
        panic!("expected peer rows");
    };
    assert_eq!(
        rows[0],
        PeerRow::Items {
            position: 1,
            listing: "Bicycle (2)\nRocket (1)".to_string(),
            qty: 3,
            subtotal: "$216.36".to_string(),
        }
    );
    assert_eq!(
        rows[1],
        PeerRow::Empty {
            position: 2,
            placeholder: EMPTY_PEER_CART
        }
    );
}
