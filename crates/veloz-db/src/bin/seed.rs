//! # Seed Data Generator
//!
//! Populates the database with a development fleet.
//!
//! ## Usage
//! ```bash
//! # Seed the default database
//! cargo run -p veloz-db --bin seed
//!
//! # Specify database path
//! cargo run -p veloz-db --bin seed -- --db ./data/veloz.db
//! ```
//!
//! ## Generated Fleet
//! One category per market segment, each with its candidate pool and
//! base daily rate in centavos:
//! - Hatch  (R$ 37,60/day)
//! - Sedan  (R$ 56,90/day)
//! - SUV    (R$ 99,90/day)

use std::env;

use tracing::info;
use uuid::Uuid;
use veloz_core::{Car, CarCategory};
use veloz_db::{migrations, Database, DbConfig};

/// Fleet per category: (category name, daily rate in centavos, models).
const FLEET: &[(&str, i64, &[(&str, i32)])] = &[
    (
        "Hatch",
        3760,
        &[
            ("Fiat Uno", 2019),
            ("Volkswagen Gol", 2020),
            ("Chevrolet Onix", 2021),
            ("Hyundai HB20", 2021),
            ("Renault Kwid", 2020),
        ],
    ),
    (
        "Sedan",
        5690,
        &[
            ("Toyota Corolla", 2022),
            ("Honda Civic", 2021),
            ("Chevrolet Cruze", 2020),
            ("Volkswagen Virtus", 2021),
        ],
    ),
    (
        "SUV",
        9990,
        &[
            ("Jeep Renegade", 2022),
            ("Jeep Compass", 2021),
            ("Hyundai Creta", 2022),
            ("Volkswagen T-Cross", 2021),
        ],
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./veloz_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Veloz Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./veloz_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Veloz Seed Data Generator");
    println!("=========================");
    println!("Database: {}", db_path);
    println!();

    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    let (total, applied) = migrations::migration_status(db.pool()).await?;
    println!("- Connected to database, migrations: {}/{} applied", applied, total);

    // Skip seeding a populated database to avoid duplicates
    let existing = db.cars().count().await?;
    if existing > 0 {
        println!("! Database already has {} cars", existing);
        println!("  Skipping seed. Delete the database file to regenerate.");
        return Ok(());
    }

    let mut total_cars = 0;

    for (category_name, price_cents, models) in FLEET {
        let mut car_ids = Vec::with_capacity(models.len());

        for (model, release_year) in *models {
            let car = Car {
                id: Uuid::new_v4().to_string(),
                name: model.to_string(),
                release_year: *release_year,
                available: true,
                gas_available: true,
            };
            db.cars().insert(&car).await?;
            car_ids.push(car.id);
            total_cars += 1;
        }

        let category = CarCategory {
            id: Uuid::new_v4().to_string(),
            name: category_name.to_string(),
            car_ids,
            price_cents: *price_cents,
        };
        db.categories().insert(&category).await?;

        info!(
            category = category_name,
            cars = models.len(),
            "seeded category"
        );
        println!(
            "- {} ({} cars, R$ {},{:02}/day)",
            category_name,
            models.len(),
            price_cents / 100,
            price_cents % 100
        );
    }

    println!();
    println!(
        "Seed complete: {} cars in {} categories",
        total_cars,
        FLEET.len()
    );

    Ok(())
}
