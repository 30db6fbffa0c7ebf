//! Broadcast relay: keeps the latest cart of every connected shopper and
//! pushes each of them the carts of everybody else.

mod roster;
mod server;
mod state;

pub use roster::Roster;
pub use server::{build_router, HealthStatus, RelayError, RelayServer};
pub use state::RelayState;
