mod cache;
mod cli;
mod server;

use std::env;
use std::process;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;
use tokio::signal;

use crate::cache::{Cache, Config};
use crate::server::AppState;

fn setup_logging() {
    if env::var("LOG").is_err() {
        env::set_var("LOG", "agenda_proxy=info");
    }

    pretty_env_logger::init_custom_env("LOG");
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {err}");
    }
}

#[tokio::main]
async fn main() {
    let args = cli::parse(env::args().skip(1).collect());

    setup_logging();

    let state = Arc::new(AppState {
        cache: Cache::new(Config {
            enabled: args.enable_cache,
            ttl: args.cache_ttl,
        }),
        upstream: args.upstream,
    });

    let listener = match TcpListener::bind(args.address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind {}: {err}", args.address);
            process::exit(1);
        }
    };

    info!("Listening at http://{}", args.address);

    if let Err(err) = axum::serve(listener, server::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {err}");
        process::exit(1);
    }
}
