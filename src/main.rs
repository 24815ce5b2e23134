//! Binary entry point: open the database, make sure the tables and sample
//! rows exist, then hand the connection to the menu loop.
use std::io;

use anyhow::Context;
use fleet_console::{
    create_schema, open_connection, print_banner, run_app, seed_if_empty, App, Config,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Any error returned here is a startup failure or a closed console; the
/// menu is never entered after a startup failure.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::resolve()?;
    let conn = open_connection(&config)?;
    info!(path = %config.db_path().display(), "connected");

    print_banner(&mut io::stdout(), config.db_path())?;

    create_schema(&conn)?;
    seed_if_empty(&conn)?;

    let app = App::new(conn);
    run_app(&app).context("the menu stopped unexpectedly")
}
