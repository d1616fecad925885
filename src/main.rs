use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;

mod analysis;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;


fn main() {
    // 1️⃣ Resolve the listen address (BIND_ADDR overrides the default)
    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let addr: SocketAddr = match bind.parse() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("❌ Invalid BIND_ADDR \"{bind}\": {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Start the server
    println!("Starting server at http://{addr}");
    let server = Server::bind(&addr).max_workers(8);

    // 3️⃣ Serve requests; analysis failures become JSON error responses
    let result = server.serve(move |req, _info| match handle(req) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
