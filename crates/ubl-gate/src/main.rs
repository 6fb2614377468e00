//! Universal Ban List gate entry point
//!
//! Run with:
//! ```bash
//! cargo run -p ubl-gate -- stats
//! cargo run -p ubl-gate -- check 069a79f4-44e9-4726-a5be-fca90e38aaf5
//! ```
//!
//! Configuration is loaded from `ubl.toml` (or `--config`) and `UBL__*` environment variables.

use clap::Parser;
use ubl_common::ErrorResponse;
use ubl_gate::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    // Tracing may not be set up yet when this fails, so report on stderr directly
    if let Err(e) = ubl_gate::run(cli).await {
        if json {
            let response = ErrorResponse::from(&e);
            match serde_json::to_string(&response) {
                Ok(body) => eprintln!("{body}"),
                Err(_) => eprintln!("Error: {e}"),
            }
        } else {
            eprintln!("Error: {e}");
        }

        std::process::exit(e.exit_code());
    }
}
