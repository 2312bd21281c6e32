//! # Shopfront Entry Point
//!
//! Prints the storefront for the configured data directory.
//!
//! ```text
//! shopfront            # every product
//! shopfront lamp       # products whose name or description contains "lamp"
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    let search = std::env::args().nth(1);

    // The actual setup is in lib.rs for testability
    match shopfront_app::run(search) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("shopfront: {err}");
            ExitCode::FAILURE
        }
    }
}
