use crate::cart::Cart;
use crate::codec;
use crate::ui::mvi::Reducer;
use crate::ui::shop::error::ShopError;
use crate::ui::shop::intent::ShopIntent;
use crate::ui::shop::state::ShopState;

/// Whether an intent changed the cart and, if so, what to broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    Unchanged,
    /// Encoded new cart, ready for the transport.
    Changed(String),
}

impl Outbound {
    /// `Changed` only when `after` differs from `before`.
    fn between(before: &Cart, after: &Cart) -> Self {
        if before == after {
            Outbound::Unchanged
        } else {
            Outbound::Changed(codec::encode_cart(after))
        }
    }
}

pub struct ShopReducer;

impl Reducer for ShopReducer {
    type State = ShopState;
    type Intent = ShopIntent;
    type Effect = Outbound;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Self::Effect) {
        match intent {
            ShopIntent::AddToCart(product) => {
                let cart = state.cart.add(&product);
                let outbound = Outbound::between(&state.cart, &cart);
                (ShopState { cart, ..state }, outbound)
            }
            ShopIntent::ChangeQuantity { product, raw } => {
                let updated = raw
                    .trim()
                    .parse::<i64>()
                    .map_err(|source| ShopError::QuantityParse {
                        raw: raw.clone(),
                        source,
                    })
                    .and_then(|qty| {
                        state
                            .cart
                            .change_qty(&product, qty)
                            .map_err(ShopError::from)
                    });

                match updated {
                    Ok(cart) => {
                        let outbound = Outbound::Changed(codec::encode_cart(&cart));
                        (
                            ShopState {
                                cart,
                                error: None,
                                ..state
                            },
                            outbound,
                        )
                    }
                    Err(err) => {
                        tracing::debug!(product = %product.name, %raw, "quantity change rejected: {err}");
                        (
                            ShopState {
                                error: Some(err.to_string()),
                                ..state
                            },
                            Outbound::Unchanged,
                        )
                    }
                }
            }
            ShopIntent::PeerCartsUpdate(raw) => match codec::decode_carts(&raw) {
                Ok(peer_carts) => (ShopState { peer_carts, ..state }, Outbound::Unchanged),
                Err(err) => {
                    let err = ShopError::from(err);
                    tracing::warn!(len = raw.len(), "discarding peer carts: {err}");
                    (
                        ShopState {
                            error: Some(err.to_string()),
                            peer_carts: Vec::new(),
                            ..state
                        },
                        Outbound::Unchanged,
                    )
                }
            },
        }
    }
}
