//! WebSocket link between a shopper and the relay.
//!
//! The link is opened once at startup. Inbound text frames are handed to a
//! callback as [`TransportEvent::Message`]; outbound payloads are queued on a
//! [`TransportHandle`] and written by a background task without any
//! acknowledgement or retry.

mod client;

pub use client::{connect, ConnectionStatus, TransportError, TransportEvent, TransportHandle};
