//! SQL scripts bundled into the binary. They are compiled in with
//! `include_str!` and looked up by name so startup can fail with a clear
//! diagnostic when a script it asks for is not part of the bundle.

use thiserror::Error;

/// Name of the DDL script that creates every table.
pub const SCHEMA_SCRIPT: &str = "schema.sql";
/// Name of the DML script that fills an empty database with sample rows.
pub const SEED_SCRIPT: &str = "seed.sql";

const BUNDLE: &[(&str, &str)] = &[
    (SCHEMA_SCRIPT, include_str!("../resources/schema.sql")),
    (SEED_SCRIPT, include_str!("../resources/seed.sql")),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResourceError {
    #[error("resource `{0}` is not bundled with this build")]
    Missing(String),
}

/// Fetch the text of a bundled script.
pub fn load_script(name: &str) -> Result<&'static str, ResourceError> {
    BUNDLE
        .iter()
        .find(|(bundled, _)| *bundled == name)
        .map(|(_, text)| *text)
        .ok_or_else(|| ResourceError::Missing(name.to_string()))
}
