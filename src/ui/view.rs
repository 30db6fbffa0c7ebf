//! Pure view tree for the shop screen.
//!
//! [`render`] maps a [`ShopState`] to a [`ShopView`]: plain data describing
//! what is on screen, with the intents that interactive controls emit
//! embedded in them. Drawing the tree is done separately by
//! [`crate::ui::render`].

use crate::cart::{Cart, Item, Product};
use crate::ui::shop::{ShopIntent, ShopState};

pub const EMPTY_CART_PROMPT: &str = "Your cart is empty. Pick something from the stock.";
pub const NO_PEERS_PLACEHOLDER: &str = "Nobody else is shopping";
pub const EMPTY_PEER_CART: &str = "empty cart";

#[derive(Debug, Clone, PartialEq)]
pub struct ShopView {
    pub stock: StockView,
    pub cart: CartView,
    pub error: ErrorView,
    pub peers: PeersView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StockView {
    pub rows: Vec<StockRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StockRow {
    pub name: String,
    pub price: String,
    /// Emitted when the row's add control is activated.
    pub add: ShopIntent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CartView {
    Empty { prompt: &'static str },
    Filled { rows: Vec<CartRow>, total: String },
}

impl CartView {
    pub fn rows(&self) -> &[CartRow] {
        match self {
            CartView::Empty { .. } => &[],
            CartView::Filled { rows, .. } => rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartRow {
    pub name: String,
    pub price: String,
    pub quantity: QuantityField,
    pub subtotal: String,
}

/// Editable quantity of one cart row.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityField {
    pub text: String,
    product: Product,
}

impl QuantityField {
    /// Intent produced when the field's text is changed to `text`.
    pub fn on_change(&self, text: impl Into<String>) -> ShopIntent {
        ShopIntent::ChangeQuantity {
            product: self.product.clone(),
            raw: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorView {
    Hidden,
    Alert(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PeersView {
    Nobody { placeholder: &'static str },
    Carts(Vec<PeerRow>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PeerRow {
    Empty {
        position: usize,
        placeholder: &'static str,
    },
    Items {
        /// 1-based.
        position: usize,
        /// One `name (qty)` entry per line.
        listing: String,
        qty: u64,
        subtotal: String,
    },
}

pub fn render(state: &ShopState) -> ShopView {
    ShopView {
        stock: stock_view(&state.stock),
        cart: cart_view(&state.cart),
        error: error_view(state.error.as_deref()),
        peers: peers_view(&state.peer_carts),
    }
}

pub fn stock_view(stock: &[Product]) -> StockView {
    let rows = stock
        .iter()
        .map(|product| StockRow {
            name: product.name.clone(),
            price: product.price.to_string(),
            add: ShopIntent::AddToCart(product.clone()),
        })
        .collect();
    StockView { rows }
}

pub fn cart_view(cart: &Cart) -> CartView {
    if cart.is_empty() {
        return CartView::Empty {
            prompt: EMPTY_CART_PROMPT,
        };
    }

    let rows = cart
        .items()
        .iter()
        .map(|item| CartRow {
            name: item.product.name.clone(),
            price: item.product.price.to_string(),
            quantity: QuantityField {
                text: item.qty.to_string(),
                product: item.product.clone(),
            },
            subtotal: item.subtotal().to_string(),
        })
        .collect();

    CartView::Filled {
        rows,
        total: cart.subtotal().to_string(),
    }
}

pub fn error_view(error: Option<&str>) -> ErrorView {
    match error {
        Some(message) => ErrorView::Alert(message.to_string()),
        None => ErrorView::Hidden,
    }
}

pub fn peers_view(peer_carts: &[Cart]) -> PeersView {
    if peer_carts.is_empty() {
        return PeersView::Nobody {
            placeholder: NO_PEERS_PLACEHOLDER,
        };
    }

    let rows = peer_carts
        .iter()
        .enumerate()
        .map(|(idx, cart)| peer_row(idx + 1, cart))
        .collect();
    PeersView::Carts(rows)
}

fn peer_row(position: usize, cart: &Cart) -> PeerRow {
    if cart.is_empty() {
        return PeerRow::Empty {
            position,
            placeholder: EMPTY_PEER_CART,
        };
    }

    let listing = cart
        .items()
        .iter()
        .map(|Item { product, qty }| format!("{} ({})", product.name, qty))
        .collect::<Vec<_>>()
        .join("\n");

    PeerRow::Items {
        position,
        listing,
        qty: cart.qty(),
        subtotal: cart.subtotal().to_string(),
    }
}
