use std::process;

use colored::*;
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;
use util::config::AppConfig;

use seeder::seed::{run_seeder, run_step};
use seeder::{DataSeeder, FakeGenerator, RawSeedOptions, SeedError, SeedTargets, Stage, normalize};

const USAGE: &str = "usage: seeder [seed|clear|stats|fresh]";

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env().unwrap_or_else(|e| fail(&e.to_string()));
    let raw = RawSeedOptions::from_env().unwrap_or_else(|e| fail(&e.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let command = std::env::args().nth(1).unwrap_or_else(|| "seed".to_string());
    if !matches!(command.as_str(), "seed" | "clear" | "stats" | "fresh") {
        fail(USAGE);
    }

    let db = match run_step("Connecting", &config.database_path, db::connect(&config.database_path)).await {
        Ok(db) => db,
        Err(e) => fail(&e.to_string()),
    };
    if let Err(e) = run_step("Migrating", "schema", db::migrate(&db)).await {
        fail(&e.to_string());
    }

    let targets = normalize(&raw);
    let mut seeder = DataSeeder::new(&db, FakeGenerator::from_seed_option(raw.rng_seed));

    let result = match command.as_str() {
        "clear" => clear(&seeder).await,
        "stats" => Ok(()),
        "fresh" => match clear(&seeder).await {
            Ok(()) => seed(&mut seeder, &targets).await,
            Err(e) => Err(e),
        },
        _ => seed(&mut seeder, &targets).await,
    };
    if let Err(e) = result {
        fail(&e.to_string());
    }

    match seeder.stats().await {
        Ok(stats) => {
            println!();
            println!("{:<12} {}", "countries".bold(), stats.countries);
            println!("{:<12} {}", "categories".bold(), stats.categories);
            println!("{:<12} {}", "cities".bold(), stats.cities);
            println!("{:<12} {}", "users".bold(), stats.users);
            println!("{:<12} {}", "attractions".bold(), stats.attractions);
            println!("{:<12} {}", "comments".bold(), stats.comments);
        }
        Err(e) => fail(&e.to_string()),
    }
}

async fn seed(
    seeder: &mut DataSeeder<'_, DatabaseConnection, FakeGenerator>,
    targets: &SeedTargets,
) -> Result<(), SeedError> {
    for stage in Stage::ALL {
        run_seeder(stage.name(), seeder.run_stage(stage, targets)).await?;
    }
    Ok(())
}

async fn clear(seeder: &DataSeeder<'_, DatabaseConnection, FakeGenerator>) -> Result<(), SeedError> {
    run_step("Clearing", "all tables", seeder.clear()).await.map(|_| ())
}

fn fail(message: &str) -> ! {
    eprintln!("{} {}", "error:".red().bold(), message);
    process::exit(1);
}
