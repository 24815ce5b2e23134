use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::models::{Car, ChassisBounds};

/// Every car in the order SQLite returns them.
pub fn fetch_cars(conn: &Connection) -> Result<Vec<Car>> {
    let mut stmt = conn
        .prepare("SELECT N_BASTIDOR, MATRICULA, MARCA, MODELO, COLOR FROM COCHE")
        .context("failed to prepare car query")?;

    let cars = stmt
        .query_map([], |row| {
            Ok(Car {
                chassis: row.get(0)?,
                plate: row.get(1)?,
                brand: row.get(2)?,
                model: row.get(3)?,
                color: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
            })
        })
        .context("failed to load cars")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect cars")?;

    Ok(cars)
}

/// Lowest and highest chassis numbers. `MIN`/`MAX` yield NULL on an empty
/// table, which collapses to 0.
pub fn chassis_bounds(conn: &Connection) -> Result<ChassisBounds> {
    let min: Option<i64> = conn
        .query_row("SELECT MIN(N_BASTIDOR) FROM COCHE", [], |row| row.get(0))
        .context("failed to read the first chassis number")?;
    let max: Option<i64> = conn
        .query_row("SELECT MAX(N_BASTIDOR) FROM COCHE", [], |row| row.get(0))
        .context("failed to read the last chassis number")?;

    Ok(ChassisBounds {
        min: min.unwrap_or(0),
        max: max.unwrap_or(0),
    })
}

/// Replace the plate of one car. Returns the number of rows changed; the
/// caller is responsible for validating and uppercasing `plate`.
pub fn update_plate(conn: &Connection, chassis: i64, plate: &str) -> Result<usize> {
    conn.execute(
        "UPDATE COCHE SET MATRICULA = ?1 WHERE N_BASTIDOR = ?2",
        params![plate, chassis],
    )
    .context("failed to update plate")
}
