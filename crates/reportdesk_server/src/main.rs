#![forbid(unsafe_code)]

use log::{error, info, warn};
use reportdesk_core::{core_version, init_logging, SharedDb};
use reportdesk_server::{build_router, AppState, ServerConfig};
use std::error::Error;
use std::process::ExitCode;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("reportdesk: invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging(config.log_level, config.log_target.clone()) {
        eprintln!("reportdesk: logging init failed: {err}");
        return ExitCode::FAILURE;
    }

    match serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=server_exit module=server status=error error={err}");
            eprintln!("reportdesk: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn serve(config: ServerConfig) -> Result<(), Box<dyn Error>> {
    if config.uses_default_token() {
        warn!("event=config module=server status=warn reason=default_api_token");
    }

    let db = SharedDb::open(&config.db_path)?;
    let state = AppState::new(db, config.api_token);
    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(
        "event=server_start module=server status=ok addr={} db_path={} version={}",
        listener.local_addr()?,
        config.db_path.display(),
        core_version()
    );

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("event=server_stop module=server status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("event=shutdown_signal module=server status=error error={err}");
    }
}
