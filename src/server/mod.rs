pub mod response;
pub mod router;

use std::{convert::Infallible, future::Future, net::SocketAddr, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use hyper::{server::conn::http1, service::service_fn};
use hyper_util::{rt::TokioIo, server::graceful::GracefulShutdown};
use tokio::{
    net::{TcpListener, TcpStream},
    signal,
};
use tracing::{debug, info, warn};

use crate::{config::Config, services::StockDataService};

/// How long open connections may take to finish after a shutdown signal.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

pub struct AppState {
    service: StockDataService,
}

impl AppState {
    pub fn new(service: StockDataService) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &StockDataService {
        &self.service
    }
}

pub async fn run(config: &Config, state: Arc<AppState>) -> Result<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(%addr, "stock data endpoint listening");
    info!("  - GET http://{}{}?symbol=<ticker|WKN|ISIN|name>", addr, router::STOCK_DATA_PATH);
    info!("  - GET http://{}{}", addr, router::HEALTH_PATH);

    serve(listener, state, shutdown_signal(), SHUTDOWN_GRACE).await
}

/// Accepts connections until `shutdown` resolves, then stops accepting and
/// waits up to `grace` for in-flight requests to be answered.
pub async fn serve(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: impl Future<Output = ()>,
    grace: Duration,
) -> Result<()> {
    let graceful = GracefulShutdown::new();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok((stream, peer_addr)) => {
                    handle_connection(stream, peer_addr, Arc::clone(&state), &graceful)
                }
                Err(e) => warn!(error = %e, "failed to accept connection"),
            },
            () = &mut shutdown => break,
        }
    }

    drop(listener);
    match tokio::time::timeout(grace, graceful.shutdown()).await {
        Ok(()) => info!("all connections closed"),
        Err(_) => warn!(grace_secs = grace.as_secs(), "connections still open after grace period"),
    }

    Ok(())
}

fn handle_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
    graceful: &GracefulShutdown,
) {
    debug!(%peer_addr, "accepted connection");

    let io = TokioIo::new(stream);
    let service = service_fn(move |req| {
        let state = Arc::clone(&state);
        async move { Ok::<_, Infallible>(router::handle_request(req, state).await) }
    });
    let conn = graceful.watch(http1::Builder::new().serve_connection(io, service));

    tokio::spawn(async move {
        if let Err(err) = conn.await {
            debug!(%peer_addr, error = %err, "connection error");
        }
    });
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received Ctrl+C, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}
