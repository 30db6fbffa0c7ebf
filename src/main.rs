use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use shopcart::config::Config;
use shopcart::logging;
use shopcart::relay::RelayServer;
use shopcart::shutdown::ShutdownCoordinator;
use shopcart::ui;

#[derive(Debug, Parser)]
#[command(
    name = "shopcart",
    version,
    about = "Terminal shopping cart with a live feed of other shoppers' carts"
)]
struct Cli {
    /// Config file (default: ~/.config/shopcart/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open the shop (default)
    Shop {
        /// Relay endpoint to connect to, overriding the config
        #[arg(long, value_name = "URL")]
        server: Option<String>,
    },
    /// Run the relay that shares carts between shoppers
    Relay {
        /// Address to listen on, overriding the config
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load config")?;

    match cli.command.unwrap_or(Command::Shop { server: None }) {
        Command::Shop { server } => {
            if let Some(url) = server {
                config.client.server_url = url;
            }
            config.validate()?;
            logging::init_client_tracing();
            ui::run(config).await
        }
        Command::Relay { bind } => {
            if let Some(addr) = bind {
                config.relay.bind_addr = addr;
            }
            config.validate()?;
            logging::init_relay_tracing();

            let shutdown = ShutdownCoordinator::new();
            shutdown.signal_on_ctrl_c();
            let server = RelayServer::bind(&config.relay.bind_addr).await?;
            server.run(shutdown.handle()).await?;
            Ok(())
        }
    }
}
