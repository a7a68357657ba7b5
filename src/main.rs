use std::io;

use anyhow::{Context, Result};

use markdown_writer::server::{RequestHandler, Server};
use markdown_writer::tools::ToolContext;
use markdown_writer::{init_logger, ServerConfig};

fn main() -> Result<()> {
    let config = ServerConfig::from_env();
    init_logger(&config);

    log::info!(
        "SERVER_STARTING name={} version={} log_level={}",
        config.server_name,
        config.server_version,
        config.log_level
    );

    let handler = RequestHandler::new(config, ToolContext::os());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut server = Server::new(stdin.lock(), stdout.lock(), handler);

    server.run().context("stdio transport failed")?;
    Ok(())
}
