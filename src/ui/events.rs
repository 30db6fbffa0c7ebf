use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use tokio::sync::mpsc;

use crate::shutdown::ShutdownHandle;
use crate::transport::TransportEvent;

pub enum AppEvent {
    Key(KeyEvent),
    /// Terminal size changed; the next draw picks up the new size.
    Resize,
    /// Something arrived from (or happened to) the relay link.
    Transport(TransportEvent),
    /// Ctrl+C or another shutdown signal.
    Shutdown,
}

/// Single queue that every event source feeds and the runtime loop drains,
/// one event at a time, in arrival order.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl EventHandler {
    pub fn new(shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let input_tx = tx.clone();
        let input_shutdown = shutdown.clone();
        tokio::spawn(async move {
            let mut reader = EventStream::new();
            loop {
                tokio::select! {
                    _ = input_shutdown.wait() => break,
                    event = reader.next() => {
                        let forwarded = match event {
                            Some(Ok(Event::Key(key))) => input_tx.send(AppEvent::Key(key)),
                            Some(Ok(Event::Resize(_, _))) => input_tx.send(AppEvent::Resize),
                            Some(Ok(_)) => Ok(()),
                            Some(Err(err)) => {
                                tracing::error!("terminal input failed: {err}");
                                break;
                            }
                            None => break,
                        };
                        if forwarded.is_err() {
                            break;
                        }
                    }
                }
            }
        });

        let shutdown_tx = tx.clone();
        tokio::spawn(async move {
            shutdown.wait().await;
            let _ = shutdown_tx.send(AppEvent::Shutdown);
        });

        Self { rx, tx }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.tx.clone()
    }
}
