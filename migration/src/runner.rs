use colored::*;
use migration::Migrator;
use sea_orm_migration::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

/// Applies every pending migration, printing one status line per migration.
///
/// Already-applied migrations are reported as `skipped`.
pub async fn run_all_migrations(url: &str) -> Result<(), DbErr> {
    let db = sea_orm::Database::connect(url).await?;

    println!("Running migrations...");
    let applied: Vec<String> = Migrator::get_applied_migrations(&db)
        .await?
        .iter()
        .map(|m| m.name().to_string())
        .collect();

    for migration in <Migrator as MigratorTrait>::migrations() {
        let name = migration.name().to_string();
        print_label(&name);

        if applied.contains(&name) {
            println!("{}", "skipped".dimmed());
            continue;
        }

        let start = Instant::now();
        // Apply one at a time so the tracking table records each step.
        match Migrator::up(&db, Some(1)).await {
            Ok(()) => {
                let time_str = format!("({:.2?})", start.elapsed()).dimmed();
                println!("{} {}", "done".green(), time_str);
            }
            Err(e) => {
                println!("{}", "failed".red());
                return Err(e);
            }
        }
    }

    Ok(())
}

fn print_label(name: &str) {
    let name_str = format!("Applying {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(name_str.len()));
    print!("{}{} ", name_str, dots);
    io::stdout().flush().ok();
}
