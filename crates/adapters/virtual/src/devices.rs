//! Simulated upstream devices.
//!
//! Each device is a small axum router that speaks the same wire protocol as
//! the real hardware. [`serve`] binds one to an ephemeral local port so the
//! gateway can proxy to it over real TCP.

pub mod light;
pub mod switch;
pub mod thermometer;

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve a virtual device router on an ephemeral local port.
///
/// Returns the bound address and the join handle of the serving task; the
/// task runs until the handle is dropped or aborted.
///
/// # Errors
///
/// Returns the IO error if the listener cannot be bound.
pub async fn serve(router: Router) -> std::io::Result<(SocketAddr, JoinHandle<()>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let handle = tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, router).await {
            tracing::error!(error = %err, "virtual device server failed");
        }
    });
    Ok((addr, handle))
}
