use std::net::SocketAddr;
use std::process;

use api::middleware::log_request;
use api::routes::routes;
use api::state::AppState;
use axum::{Router, middleware::from_fn};
use seeder::{DataSeeder, FakeGenerator, RawSeedOptions, normalize};
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};
use tracing_appender::rolling;
use util::config::AppConfig;

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            process::exit(1);
        }
    };

    // Keep the guard alive so buffered log lines are written on shutdown
    let _log_guard = init_logging(&config);

    let raw = match RawSeedOptions::from_env() {
        Ok(raw) => raw,
        Err(e) => {
            error!(error = %e, "invalid seed options");
            process::exit(1);
        }
    };
    let targets = normalize(&raw);

    let db = match db::connect(&config.database_path).await {
        Ok(db) => db,
        Err(e) => {
            error!(error = %e, path = %config.database_path, "failed to open database");
            process::exit(1);
        }
    };
    if let Err(e) = db::migrate(&db).await {
        error!(error = %e, "failed to apply migrations");
        process::exit(1);
    }

    let mut generator = FakeGenerator::from_seed_option(raw.rng_seed);
    if config.seed_on_startup {
        let mut seeder = DataSeeder::new(&db, &mut generator);
        match seeder.seed(&targets).await {
            Ok(report) => info!(created = report.total(), "startup seed complete"),
            Err(e) => warn!(error = %e, "startup seed failed; continuing without it"),
        }
    }

    let app_state = AppState::new(db, targets, generator);
    let app = Router::new()
        .nest("/api", routes(app_state))
        .layer(from_fn(log_request))
        .layer(CorsLayer::very_permissive());

    let addr: SocketAddr = match format!("{}:{}", config.host, config.port).parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!(error = %e, host = %config.host, port = config.port, "invalid listen address");
            process::exit(1);
        }
    };

    println!(
        "Starting {} ({}) on http://{}:{}",
        config.project_name, config.env, config.host, config.port
    );

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, %addr, "failed to bind");
            process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server stopped");
        process::exit(1);
    }
}

fn init_logging(config: &AppConfig) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", &config.log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true);

    let env_filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("api=info"));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    if config.log_to_stdout {
        registry.with(stdout_layer).init();
    } else {
        registry.init();
    }

    guard
}
