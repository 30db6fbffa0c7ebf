mod error;
mod intent;
mod reducer;
mod state;

pub use error::ShopError;
pub use intent::ShopIntent;
pub use reducer::{Outbound, ShopReducer};
pub use state::ShopState;
