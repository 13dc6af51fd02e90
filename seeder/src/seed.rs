use colored::*;
use std::future::Future;
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

/// Prints `<verb> <name>....` then awaits `task` and finishes the line with
/// `done (elapsed)` or `failed`.
pub async fn run_step<T, E, F>(verb: &str, name: &str, task: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    let base_msg = format!("{} {}", verb, name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(base_msg.len()));
    print!("{}{} ", base_msg, dots);
    let _ = io::stdout().flush();

    let start = Instant::now();
    match task.await {
        Ok(value) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {}", "done".green(), time_str);
            Ok(value)
        }
        Err(err) => {
            println!("{}", "failed".red());
            Err(err)
        }
    }
}

pub async fn run_seeder<T, E, F>(name: &str, task: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    run_step("Seeding", name, task).await
}
