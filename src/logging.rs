use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file for the terminal client.
pub const LOG_ENV: &str = "SHOPCART_LOG";

/// `RUST_LOG` if set and valid, `info` otherwise.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// `{base}.{unix_secs}.{pid}`, so several shoppers on one machine never
/// share a file.
fn client_log_path(base: &str) -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{base}.{secs}.{}", std::process::id())
}

/// Tracing for the terminal client.
///
/// Off unless `SHOPCART_LOG` names a file: anything written to the terminal
/// would tear the shop display.
pub fn init_client_tracing() {
    let Ok(base) = std::env::var(LOG_ENV) else {
        return;
    };
    let path = client_log_path(&base);
    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: cannot create log file {path}: {err}");
            return;
        }
    };

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_writer(file).with_ansi(false).with_target(true))
        .init();
    tracing::info!(log = %path, "shop logging started");
}

/// Tracing for the relay: stdout, RFC 3339 UTC timestamps.
pub fn init_relay_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_log_path_keeps_base_and_appends_pid() {
        let path = client_log_path("/tmp/shop.log");
        assert!(path.starts_with("/tmp/shop.log."));
        assert!(path.ends_with(&format!(".{}", std::process::id())));
    }
}
