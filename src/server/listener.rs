use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;

/// Binds the listening socket once, then accepts connections forever,
/// serving each one to completion before accepting the next.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(cfg.listen_addr()).await?;
    info!("Listening on {}", cfg.listen_addr());

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        // Strictly sequential: one transaction at a time. A failed
        // transaction (including a client that resets mid-write) is logged
        // and never takes the accept loop down with it.
        let mut conn = Connection::new(socket);
        if let Err(e) = conn.run().await {
            tracing::error!("Connection error from {}: {}", peer, e);
        }
    }
}
