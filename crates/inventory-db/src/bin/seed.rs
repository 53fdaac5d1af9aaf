//! # Seed Data Generator
//!
//! Populates the database with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 20 products (default)
//! cargo run -p inventory-db --bin seed
//!
//! # Generate custom amount into a specific file
//! cargo run -p inventory-db --bin seed -- --count 200 --db ./data/inventory.db
//! ```
//!
//! Names come from a fixed menu of coffee-shop items; prices are whole
//! rupiah between 5.000 and 50.000 in steps of 500.

use std::env;

use anyhow::Context;
use inventory_core::ProductPayload;
use inventory_db::{Database, DbConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const MENU: &[&str] = &[
    "Kopi Susu",
    "Kopi Tubruk",
    "Es Kopi Gula Aren",
    "Cappuccino",
    "Teh Manis",
    "Teh Tarik",
    "Es Jeruk",
    "Wedang Jahe",
    "Roti Bakar",
    "Pisang Goreng",
    "Nasi Goreng",
    "Mie Goreng",
    "Indomie Rebus",
    "Tahu Isi",
    "Cireng",
];

const DEFAULT_COUNT: usize = 20;
const DEFAULT_DB_PATH: &str = "./inventory_dev.db";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(SeedArgs { count, db_path }) = parse_args(&args)? else {
        print_help();
        return Ok(());
    };

    info!(db = %db_path, count, "Seeding products");

    let db = Database::new(DbConfig::new(&db_path)).await?;

    let existing = db.products().count().await?;
    if existing > 0 {
        warn!(
            existing,
            "Database already has products, skipping seed to avoid duplicates"
        );
        return Ok(());
    }

    let mut generated = 0;
    for seed in 0..count {
        let payload = sample_product(seed);
        match db.products().create(&payload).await {
            Ok(_) => generated += 1,
            Err(e) => warn!(error = %e, name = ?payload.name, "Failed to insert product"),
        }
    }

    info!(generated, "Seed complete");
    db.close().await;
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
struct SeedArgs {
    count: usize,
    db_path: String,
}

/// Parses the arguments after the program name. `None` means `--help`.
fn parse_args(args: &[String]) -> anyhow::Result<Option<SeedArgs>> {
    let mut parsed = SeedArgs {
        count: DEFAULT_COUNT,
        db_path: DEFAULT_DB_PATH.to_string(),
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--count" | "-c" => {
                let Some(value) = iter.next() else {
                    anyhow::bail!("{arg} needs a value");
                };
                parsed.count = value
                    .parse()
                    .with_context(|| format!("invalid --count value: {value}"))?;
            }
            "--db" | "-d" => {
                let Some(value) = iter.next() else {
                    anyhow::bail!("{arg} needs a value");
                };
                parsed.db_path = value.clone();
            }
            "--help" | "-h" => return Ok(None),
            other => warn!(arg = other, "Ignoring unknown argument"),
        }
    }

    Ok(Some(parsed))
}

fn print_help() {
    println!("Inventory Seed Data Generator");
    println!();
    println!("Usage: seed [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --count <N>    Number of products to generate (default: {DEFAULT_COUNT})");
    println!("  -d, --db <PATH>    Database file path (default: {DEFAULT_DB_PATH})");
    println!("  -h, --help         Show this help message");
}

/// Builds the `seed`-th sample product.
fn sample_product(seed: usize) -> ProductPayload {
    let base = MENU[seed % MENU.len()];
    let round = seed / MENU.len();
    let name = if round == 0 {
        base.to_string()
    } else {
        format!("{} #{}", base, round + 1)
    };

    // 5.000 - 50.000 in steps of 500
    let price = 5000 + ((seed * 37) % 91) * 500;

    ProductPayload::new(name, price as f64)
}
