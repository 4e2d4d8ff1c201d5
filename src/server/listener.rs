use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(cfg.server.listen_addr()).await?;
    info!("Listening on {}", cfg.server.listen_addr());
    info!("Serving files from {}", cfg.server.root.display());

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let server_cfg = cfg.server.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, server_cfg);
            if let Err(e) = conn.handle().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
            // Socket is dropped (closed) here, after handling returns.
        });
    }
}
