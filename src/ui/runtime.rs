use std::time::Duration;

use anyhow::Context;

use crate::config::Config;
use crate::shutdown::ShutdownCoordinator;
use crate::transport::{self, ConnectionStatus, TransportEvent, TransportHandle};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

pub async fn run(config: Config) -> anyhow::Result<()> {
    let shutdown = ShutdownCoordinator::new();
    shutdown.signal_on_ctrl_c();
    let mut events = EventHandler::new(shutdown.handle());

    let (transport, connection) = connect(&config.client.server_url, &events).await;
    let mut app = App::new(config.stock, transport, connection);

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next().await {
            Some(AppEvent::Key(key)) => handle_key(&mut app, key),
            Some(AppEvent::Resize) => {}
            Some(AppEvent::Transport(event)) => app.on_transport_event(event),
            Some(AppEvent::Shutdown) | None => break,
        }
    }

    shutdown.signal();
    drop(guard);
    Ok(())
}

/// Opens the relay link once. On failure the shop keeps working locally
/// and the header says why.
async fn connect(url: &str, events: &EventHandler) -> (TransportHandle, ConnectionStatus) {
    let sender = events.sender();
    let on_event = move |event: TransportEvent| {
        let _ = sender.send(AppEvent::Transport(event));
    };

    match tokio::time::timeout(CONNECT_TIMEOUT, transport::connect(url, on_event)).await {
        Ok(Ok(handle)) => (
            handle,
            ConnectionStatus::Connected {
                url: url.to_string(),
            },
        ),
        Ok(Err(err)) => {
            tracing::warn!("{err}");
            (
                TransportHandle::offline(),
                ConnectionStatus::Offline {
                    reason: err.to_string(),
                },
            )
        }
        Err(_) => {
            tracing::warn!(%url, "relay connect timed out");
            (
                TransportHandle::offline(),
                ConnectionStatus::Offline {
                    reason: format!("timed out connecting to {url}"),
                },
            )
        }
    }
}
