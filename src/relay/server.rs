use std::net::SocketAddr;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use futures_util::{SinkExt, StreamExt};
use serde::Serialize;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast::error::RecvError;
use uuid::Uuid;

use crate::codec;
use crate::relay::state::RelayState;
use crate::shutdown::ShutdownHandle;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid bind address '{addr}': {source}")]
    InvalidAddr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("Failed to bind relay to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Relay server failed: {0}")]
    Serve(#[from] std::io::Error),
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub shoppers: usize,
}

pub struct RelayServer {
    addr: SocketAddr,
    /// Bound in `bind()` and kept until `run()` so the port cannot be taken
    /// in between.
    listener: TcpListener,
    state: RelayState,
}

impl RelayServer {
    pub async fn bind(addr: &str) -> Result<Self, RelayError> {
        let requested: SocketAddr = addr.parse().map_err(|source| RelayError::InvalidAddr {
            addr: addr.to_string(),
            source,
        })?;
        let listener = TcpListener::bind(requested)
            .await
            .map_err(|source| RelayError::Bind {
                addr: requested,
                source,
            })?;
        let addr = listener.local_addr()?;
        tracing::info!("Relay bound to {}", addr);

        Ok(Self {
            addr,
            listener,
            state: RelayState::new(),
        })
    }

    /// Actual bound address (differs from the requested one for port 0).
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn state(&self) -> RelayState {
        self.state.clone()
    }

    /// Serves until `shutdown` is signaled.
    pub async fn run(self, shutdown: ShutdownHandle) -> Result<(), RelayError> {
        tracing::info!("Starting relay on ws://{}", self.addr);
        let app = build_router(self.state);
        axum::serve(self.listener, app)
            .with_graceful_shutdown(async move { shutdown.wait().await })
            .await?;
        tracing::info!("Relay stopped");
        Ok(())
    }
}

pub fn build_router(state: RelayState) -> Router {
    Router::new()
        .route("/", get(upgrade))
        .route("/health", get(health))
        .with_state(state)
}

async fn health(State(state): State<RelayState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        service: "shopcart-relay".to_string(),
        shoppers: state.shoppers(),
    })
}

async fn upgrade(ws: WebSocketUpgrade, State(state): State<RelayState>) -> Response {
    ws.on_upgrade(move |socket| serve_shopper(socket, state))
}

/// One connected shopper: every text frame replaces their cart, and every
/// roster change pushes them everybody else's carts.
async fn serve_shopper(socket: WebSocket, state: RelayState) {
    let id = Uuid::new_v4();
    // Subscribe before joining so the join itself triggers the first snapshot.
    let mut changes = state.subscribe();
    state.join(id);
    tracing::info!(shopper = %id, shoppers = state.shoppers(), "shopper joined");

    let (mut sink, mut stream) = socket.split();

    let snapshot_state = state.clone();
    let writer = tokio::spawn(async move {
        loop {
            match changes.recv().await {
                Ok(()) | Err(RecvError::Lagged(_)) => {
                    let payload = codec::encode_carts(&snapshot_state.others(id));
                    if sink.send(Message::Text(payload.into())).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    while let Some(frame) = stream.next().await {
        match frame {
            Ok(Message::Text(text)) => match codec::decode_cart(text.as_str()) {
                Ok(cart) => {
                    tracing::debug!(shopper = %id, items = cart.qty(), "cart updated");
                    state.update(id, cart);
                }
                Err(err) => tracing::warn!(shopper = %id, "ignoring frame: {err}"),
            },
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(err) => {
                tracing::debug!(shopper = %id, "socket error: {err}");
                break;
            }
        }
    }

    writer.abort();
    state.leave(id);
    tracing::info!(shopper = %id, shoppers = state.shoppers(), "shopper left");
}
