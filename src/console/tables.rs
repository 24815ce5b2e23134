use anyhow::Error;

use crate::models::{Car, Driver};

/// Header and rows of the driver listing, one string per line.
pub(crate) fn driver_table(drivers: &[Driver]) -> Vec<String> {
    let mut lines = vec![
        "----------------- Driver list ------------------".to_string(),
        "  NSS    First name      Surname".to_string(),
        "-------------------------------------------------".to_string(),
    ];
    lines.extend(drivers.iter().map(driver_row));
    lines
}

pub(crate) fn driver_row(driver: &Driver) -> String {
    format!(
        "{:5}    {:<15} {:<24}",
        driver.nss, driver.first_name, driver.surname
    )
    .trim_end()
    .to_string()
}

/// Header and rows of the car listing, one string per line.
pub(crate) fn car_table(cars: &[Car]) -> Vec<String> {
    let mut lines = vec![
        "----------------------------------------------------------------".to_string(),
        "   Chassis       Plate        Brand      Model          Color".to_string(),
        "----------------------------------------------------------------".to_string(),
    ];
    lines.extend(cars.iter().map(car_row));
    lines
}

pub(crate) fn car_row(car: &Car) -> String {
    format!(
        "{:10} {:>11} {:>12} {:>10} {:>14}",
        car.chassis, car.plate, car.brand, car.model, car.color
    )
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}
