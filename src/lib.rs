pub mod cart;
pub mod codec;
pub mod config;
pub mod logging;
pub mod relay;
pub mod shutdown;
pub mod transport;
pub mod ui;
