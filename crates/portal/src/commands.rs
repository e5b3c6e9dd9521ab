//! CLI command implementations.

use std::net::SocketAddr;

use color_eyre::eyre::{Result, WrapErr};
use portal_server::{Server, ServerConfig};

use crate::config::Config;

/// Starts the HTTP server, CLI flags overriding configuration.
pub async fn serve(
    cfg: Config,
    host: Option<String>,
    port: Option<u16>,
    database_url: Option<String>,
) -> Result<()> {
    let host = host.unwrap_or(cfg.host);
    let port = port.unwrap_or(cfg.port);
    let database_url = database_url.unwrap_or(cfg.database_url);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .wrap_err("invalid host/port")?;

    let pool = portal_db::connect_lazy(&database_url, cfg.db_max_connections)
        .wrap_err("invalid database URL")?;

    let server_config = ServerConfig::builder()
        .addr(addr)
        .cors(cfg.cors)
        .session_ttl_minutes(cfg.session_ttl_minutes)
        .build();

    Server::new(server_config, pool).run().await?;
    Ok(())
}

/// Prints version information.
pub fn version() {
    println!("portal {}", env!("CARGO_PKG_VERSION"));
}
