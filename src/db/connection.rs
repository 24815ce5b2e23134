use std::fs;

use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::{debug, info};

use crate::config::Config;
use crate::resources::{load_script, SCHEMA_SCRIPT, SEED_SCRIPT};

/// Open the database file named by `config`, creating its directory first.
/// Foreign keys are switched on so the cascade rules in the schema apply.
pub fn open_connection(config: &Config) -> Result<Connection> {
    let db_path = config.db_path();

    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent).context("failed to create data directory")?;
    }

    let conn = Connection::open(db_path)
        .with_context(|| format!("could not connect to the database ({})", db_path.display()))?;
    enable_foreign_keys(&conn)?;
    debug!(path = %db_path.display(), "database opened");
    Ok(conn)
}

/// Same as [`open_connection`] but backed by memory. Used by tests.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
    enable_foreign_keys(&conn)?;
    Ok(conn)
}

fn enable_foreign_keys(conn: &Connection) -> Result<()> {
    conn.execute("PRAGMA foreign_keys = ON", [])
        .context("failed to enable foreign keys")?;
    Ok(())
}

/// Create every table from the bundled DDL script. Safe to run on a database
/// that already has them.
pub fn create_schema(conn: &Connection) -> Result<()> {
    run_script(conn, SCHEMA_SCRIPT).context("problem creating the database structure")
}

/// Whether `CONDUCTOR` has no rows yet.
pub fn driver_table_is_empty(conn: &Connection) -> Result<bool> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM CONDUCTOR", [], |row| row.get(0))
        .context("failed to count drivers")?;
    Ok(count == 0)
}

/// Load the sample rows, but only into a database without drivers. Returns
/// whether the seed script ran.
pub fn seed_if_empty(conn: &Connection) -> Result<bool> {
    if !driver_table_is_empty(conn)? {
        debug!("drivers already present, skipping seed data");
        return Ok(false);
    }

    run_script(conn, SEED_SCRIPT).context("problem inserting seed data into the database")?;
    info!("seed data loaded");
    Ok(true)
}

/// Execute a bundled script as a single batch.
fn run_script(conn: &Connection, name: &str) -> Result<()> {
    let script = load_script(name)?;
    conn.execute_batch(script)
        .with_context(|| format!("failed to execute script {name}"))
}
