use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::http::connection::Connection;
use crate::resource::Registry;

/// Binds the listen address and accepts forever, spawning one detached
/// task per connection. A task's failure is logged and contained; it
/// never affects the accept loop or other connections.
pub async fn run(listen_addr: &str, registry: Arc<Registry>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(listen_addr).await?;
    info!("Listening on {}", listen_addr);

    loop {
        let (socket, peer) = listener.accept().await?;
        tracing::debug!("Accepted connection from {}", peer);

        if let Err(e) = socket.set_nodelay(true) {
            tracing::warn!(peer = %peer, error = %e, "Failed to disable Nagle");
        }

        let registry = Arc::clone(&registry);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, registry);
            if let Err(e) = conn.run().await {
                tracing::debug!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
