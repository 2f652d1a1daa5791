use crate::logger::setup_logger;
use crate::router::handle;
use astra::Server;
use log::{error, info};
use std::net::SocketAddr;

mod catalog;
mod config;
mod domain;
mod errors;
mod logger;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    if let Err(e) = setup_logger() {
        eprintln!("Logger initialization failed: {e}");
        std::process::exit(1);
    }

    let config = config::read_config();

    let addr: SocketAddr = match config.bind_address.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!("Invalid bind address {:?}: {e}", config.bind_address);
            std::process::exit(1);
        }
    };
    info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &config) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
