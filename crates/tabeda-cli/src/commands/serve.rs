//! `serve` command: run the quality HTTP API.

use tabeda::Analyzer;

use crate::server::{app, state::AppState};

pub fn run(host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    // Uploads get delimiter auto-detection and UTF-8 decoding.
    let state = AppState::new(Analyzer::new());

    println!("Serving quality API on http://{}:{}", host, port);
    println!("  GET  /health");
    println!("  POST /quality?n_rows=&n_cols=&missing_count=");
    println!("  POST /quality-from-csv");
    println!("  POST /quality-flags-from-csv");

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(app::run_server(state, &host, port))
}
