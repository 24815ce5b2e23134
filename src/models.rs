//! Row types for the `CONDUCTOR` and `COCHE` tables. They are plain data
//! holders; the persistence layer fills them and the console renders them.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A driver, keyed by social-security number.
pub struct Driver {
    /// `NSS` primary key.
    pub nss: i64,
    pub first_name: String,
    pub surname: String,
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.surname)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A car, keyed by chassis number.
pub struct Car {
    /// `N_BASTIDOR` primary key.
    pub chassis: i64,
    /// Registration plate, always stored uppercase.
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub color: String,
}

/// Smallest and largest chassis number currently stored. Both are 0 when the
/// car table is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChassisBounds {
    pub min: i64,
    pub max: i64,
}
