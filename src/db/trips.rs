use anyhow::{Context, Result};
use rusqlite::Connection;

/// Total refuelling expense across all trips. The values are added up here
/// in row order rather than with `SUM()`, so the floating point result is the
/// plain left-to-right sum. NULL expenses count as zero.
pub fn total_refuel_expense(conn: &Connection) -> Result<f64> {
    let mut stmt = conn
        .prepare("SELECT GASTOREPOSTAJE FROM TRAYECTO")
        .context("failed to prepare trip expense query")?;
    let mut rows = stmt.query([]).context("failed to execute trip expense query")?;

    let mut total = 0.0_f64;
    while let Some(row) = rows.next().context("failed to fetch trip row")? {
        let expense: Option<f64> = row.get(0).context("failed to read refuel expense")?;
        total += expense.unwrap_or(0.0);
    }

    Ok(total)
}
