use futures_util::{SinkExt, StreamExt};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to connect to '{url}': {source}")]
    Connect {
        url: String,
        #[source]
        source: tokio_tungstenite::tungstenite::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// A text frame from the relay. Binary frames are converted lossily.
    Message(String),
    /// The relay closed the connection or the socket failed.
    Closed,
}

/// What the header shows about the relay link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected { url: String },
    /// The initial connect failed; the shop works locally only.
    Offline { reason: String },
    /// Was connected, then the link dropped.
    Disconnected,
}

/// Sending half of the transport. Cloning shares the same connection.
#[derive(Debug, Clone)]
pub struct TransportHandle {
    outbound: Option<mpsc::UnboundedSender<String>>,
}

impl TransportHandle {
    /// A handle together with the receiver its payloads are queued on.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { outbound: Some(tx) }, rx)
    }

    /// A handle that silently drops everything.
    pub fn offline() -> Self {
        Self { outbound: None }
    }

    /// Fire-and-forget send. Failures are logged, never reported.
    pub fn send(&self, payload: String) {
        let Some(outbound) = &self.outbound else {
            tracing::debug!("offline, dropping outbound payload");
            return;
        };
        if outbound.send(payload).is_err() {
            tracing::debug!("transport writer gone, dropping outbound payload");
        }
    }
}

/// Opens the WebSocket connection to `url` and starts its reader and writer
/// tasks. Every inbound event is passed to `on_event`, ending with
/// [`TransportEvent::Closed`].
pub async fn connect<F>(url: &str, mut on_event: F) -> Result<TransportHandle, TransportError>
where
    F: FnMut(TransportEvent) + Send + 'static,
{
    let (socket, _response) =
        tokio_tungstenite::connect_async(url)
            .await
            .map_err(|source| TransportError::Connect {
                url: url.to_string(),
                source,
            })?;
    tracing::info!(%url, "connected to relay");

    let (mut sink, mut stream) = socket.split();
    let (handle, mut outbound) = TransportHandle::channel();

    tokio::spawn(async move {
        while let Some(payload) = outbound.recv().await {
            if let Err(err) = sink.send(Message::Text(payload)).await {
                tracing::debug!("outbound send failed: {err}");
            }
        }
        let _ = sink.close().await;
    });

    tokio::spawn(async move {
        while let Some(frame) = stream.next().await {
            match frame {
                Ok(Message::Text(text)) => on_event(TransportEvent::Message(text)),
                Ok(Message::Binary(bytes)) => on_event(TransportEvent::Message(
                    String::from_utf8_lossy(&bytes).into_owned(),
                )),
                Ok(Message::Close(_)) => break,
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!("relay connection failed: {err}");
                    break;
                }
            }
        }
        tracing::info!("relay connection closed");
        on_event(TransportEvent::Closed);
    });

    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_queues_payload() {
        let (handle, mut rx) = TransportHandle::channel();
        handle.send("[]".to_string());
        assert_eq!(rx.recv().await.as_deref(), Some("[]"));
    }

    #[test]
    fn send_after_receiver_dropped_does_not_panic() {
        let (handle, rx) = TransportHandle::channel();
        drop(rx);
        handle.send("{}".to_string());
    }

    #[test]
    fn offline_handle_drops_payloads() {
        TransportHandle::offline().send("{}".to_string());
    }

    #[tokio::test]
    async fn connect_to_closed_port_fails() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().expect("addr").port();
        drop(listener);

        let result = connect(&format!("ws://127.0.0.1:{port}"), |_| {}).await;
        assert!(matches!(result, Err(TransportError::Connect { .. })));
    }
}
