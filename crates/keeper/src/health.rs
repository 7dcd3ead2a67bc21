use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    thread,
};

use tiny_http::{Response, Server};
use tracing::{info, warn};

use keeper_core::{Error, Result};

/// Start the deployment health listener on a dedicated thread.
///
/// `GET /health` answers 200 with an empty body; everything else 404.
pub fn spawn(port: u16) -> Result<()> {
    let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port);
    let server = Server::http(addr)
        .map_err(|e| Error::Platform(format!("failed to bind health listener on {addr}: {e}")))?;

    info!("health listener @ {addr}");
    thread::spawn(move || serve(server));
    Ok(())
}

fn serve(server: Server) {
    for request in server.incoming_requests() {
        let status: u16 = if request.url() == "/health" { 200 } else { 404 };
        if let Err(error) = request.respond(Response::empty(status)) {
            warn!("failed to answer health request: {error}");
        }
    }
}
