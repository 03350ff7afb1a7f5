// HTTP surface for the lookup pipeline

mod error;
mod routes;
mod state;

pub use error::{Error, Result};
pub use routes::build_router;
pub use state::ServeState;

use std::net::SocketAddr;

/// Bind and run the endpoint until Ctrl+C
pub async fn serve(addr: SocketAddr, state: ServeState) -> Result<()> {
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| Error::Bind { addr, source })?;

    tracing::info!("Lookup endpoint listening on http://{}", addr);

    let shutdown = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        tracing::info!("Received Ctrl+C, shutting down...");
    };

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(Error::Io)?;

    Ok(())
}
