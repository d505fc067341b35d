//! rosterd - REST server for the roster user directory.
//!
//! This is a thin wrapper over the roster crates: it parses flags, wires
//! the flat-file store and the random-profile client into actix-web, and
//! serves until terminated.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use roster_core::{ProfileSource, UserStore};
use roster_file::FileStore;
use roster_randomuser::RandomUserClient;
use roster_server::cli::Cli;
use roster_server::routes;
use roster_server::uploads::Uploads;

#[actix_web::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    let store = FileStore::new(&cli.data_file)
        .with_context(|| format!("failed to open data file {}", cli.data_file.display()))?;
    let store: Arc<dyn UserStore> = Arc::new(store);

    let profiles: Arc<dyn ProfileSource> =
        Arc::new(RandomUserClient::new(cli.random_user_url.clone()));

    let uploads = Uploads::new(&cli.uploads_dir);
    uploads
        .ensure()
        .with_context(|| format!("failed to create uploads dir {}", cli.uploads_dir.display()))?;

    info!(
        listen = %cli.listen,
        data_file = %cli.data_file.display(),
        uploads_dir = %cli.uploads_dir.display(),
        "Starting rosterd"
    );

    let store = web::Data::new(store);
    let profiles = web::Data::new(profiles);
    let uploads = web::Data::new(uploads);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .app_data(store.clone())
            .app_data(profiles.clone())
            .app_data(uploads.clone())
            .configure(routes::configure)
    })
    .bind(&cli.listen)
    .with_context(|| format!("failed to bind {}", cli.listen))?
    .run()
    .await?;

    Ok(())
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
