use std::num::ParseIntError;

use thiserror::Error;

use crate::cart::CartError;
use crate::codec::CodecError;

/// Everything that can go wrong while handling a shop intent.
///
/// None of these are fatal; the reducer stores the message in
/// [`ShopState::error`](super::ShopState) and carries on.
#[derive(Debug, Error)]
pub enum ShopError {
    #[error("'{raw}' is not a valid quantity: {source}")]
    QuantityParse {
        raw: String,
        #[source]
        source: ParseIntError,
    },

    #[error(transparent)]
    QuantityRejected(#[from] CartError),

    #[error("Could not read other shoppers' carts: {0}")]
    PeerDecode(#[from] CodecError),
}
