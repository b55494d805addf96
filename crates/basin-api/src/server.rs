//! Server loop for `bsn serve`.

use crate::create_router;
use crate::state::AppState;

/// Bind `addr` and serve the API until the process is stopped.
///
/// # Errors
///
/// Returns the underlying I/O error if the listener cannot bind or the
/// server loop fails.
pub async fn serve(state: AppState, addr: &str) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(%local_addr, "basin API listening");
    axum::serve(listener, create_router(state)).await
}
