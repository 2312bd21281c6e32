//! # Seed Data Writer
//!
//! Writes the default catalog and coupons into a data directory.
//!
//! ## Usage
//! ```bash
//! # Seed ./shopfront_data (default)
//! cargo run -p shopfront-store --bin seed
//!
//! # Specify the data directory
//! cargo run -p shopfront-store --bin seed -- --dir ./data
//!
//! # Overwrite existing data and empty the cart
//! cargo run -p shopfront-store --bin seed -- --force
//! ```

use std::env;

use shopfront_store::seed::{default_catalog, default_coupon_book};
use shopfront_store::Store;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut dir = String::from("./shopfront_data");
    let mut force = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--dir" | "-d" => {
                if i + 1 < args.len() {
                    dir = args[i + 1].clone();
                    i += 1;
                }
            }
            "--force" | "-f" => force = true,
            "--help" | "-h" => {
                println!("Shopfront Seed Data Writer");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --dir <PATH>   Data directory (default: ./shopfront_data)");
                println!("  -f, --force        Overwrite existing data and empty the cart");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Shopfront Seed Data Writer");
    println!("==========================");
    println!("Directory: {}", dir);
    println!();

    let store = Store::open(&dir)?;

    if store.products().is_stored()? && !force {
        println!("⚠ Data directory already has a catalog");
        println!("  Skipping seed to avoid overwriting edits.");
        println!("  Pass --force to reset it.");
        return Ok(());
    }

    let catalog = default_catalog();
    store.products().save(&catalog)?;
    println!("✓ Wrote {} products", catalog.len());

    let coupons = default_coupon_book();
    store.coupons().save(&coupons)?;
    println!("✓ Wrote {} coupons", coupons.len());

    if force {
        store.cart().save(&shopfront_core::Cart::new())?;
        println!("✓ Cleared cart");
    }

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
