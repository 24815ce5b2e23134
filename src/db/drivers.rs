use anyhow::{anyhow, Context, Result};
use rusqlite::{params, Connection, Error as SqlError, ErrorCode, OptionalExtension};

use crate::models::Driver;

/// Every driver in the order SQLite returns them.
pub fn fetch_drivers(conn: &Connection) -> Result<Vec<Driver>> {
    let mut stmt = conn
        .prepare("SELECT NSS, NOMBRE, APELLIDOS FROM CONDUCTOR")
        .context("failed to prepare driver query")?;

    let drivers = stmt
        .query_map([], |row| {
            Ok(Driver {
                nss: row.get(0)?,
                first_name: row.get(1)?,
                surname: row.get(2)?,
            })
        })
        .context("failed to load drivers")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect drivers")?;

    Ok(drivers)
}

/// Look a driver up by NSS.
pub fn find_driver(conn: &Connection, nss: i64) -> Result<Option<Driver>> {
    conn.query_row(
        "SELECT NOMBRE, APELLIDOS FROM CONDUCTOR WHERE NSS = ?1",
        params![nss],
        |row| {
            Ok(Driver {
                nss,
                first_name: row.get(0)?,
                surname: row.get(1)?,
            })
        },
    )
    .optional()
    .context("failed to look up driver")
}

/// Insert a driver and return the number of rows written.
pub fn insert_driver(conn: &Connection, driver: &Driver) -> Result<usize> {
    conn.execute(
        "INSERT INTO CONDUCTOR (NSS, NOMBRE, APELLIDOS) VALUES (?1, ?2, ?3)",
        params![driver.nss, driver.first_name, driver.surname],
    )
    .map_err(|err| map_unique_constraint(err, driver.nss))
    .context("failed to insert driver")
}

/// Delete a driver by NSS and return the number of rows removed. Trips that
/// reference the driver go with it through the schema's cascade.
pub fn delete_driver(conn: &Connection, nss: i64) -> Result<usize> {
    conn.execute("DELETE FROM CONDUCTOR WHERE NSS = ?1", params![nss])
        .context("failed to delete driver")
}

/// Turn a primary key clash into a message the user can act on.
fn map_unique_constraint(err: SqlError, nss: i64) -> anyhow::Error {
    if matches!(
        err.sqlite_error_code(),
        Some(ErrorCode::ConstraintViolation)
    ) {
        anyhow!("A driver with NSS {nss} already exists.")
    } else {
        err.into()
    }
}
