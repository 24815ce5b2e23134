use std::io::{BufRead, Write};

use anyhow::{anyhow, Result};
use rusqlite::Connection;
use tracing::{debug, info};

use crate::db::{
    chassis_bounds, delete_driver, fetch_cars, fetch_drivers, find_driver, insert_driver,
    total_refuel_expense, update_plate,
};
use crate::models::Driver;
use crate::plate::{normalize_plate, PLATE_HINT};

use super::io::{Console, ConsoleError};
use super::tables::{car_table, driver_table, surface_error};

const MENU: &[&str] = &[
    "",
    "",
    "---------------------- APPLICATION MENU ----------------------",
    "--------------------------------------------------------------",
    "1 - List drivers",
    "2 - List cars",
    "3 - Total refuelling expense of all trips",
    "4 - Change a car's plate",
    "5 - Delete driver",
    "6 - New driver",
    "0 - Exit",
    "--------------------------------------------------------------",
    "--------------------------------------------------------------",
    "",
];

/// Entries of the main menu, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    ListDrivers,
    ListCars,
    TripExpense,
    UpdatePlate,
    DeleteDriver,
    InsertDriver,
}

impl MenuChoice {
    /// Highest number shown in the menu; the prompt accepts `0..=MAX`.
    pub const MAX: i64 = 6;

    /// Map a menu number to its entry. Every number in `0..=MAX` has one.
    pub fn from_number(number: i64) -> Option<Self> {
        let choice = match number {
            0 => MenuChoice::Exit,
            1 => MenuChoice::ListDrivers,
            2 => MenuChoice::ListCars,
            3 => MenuChoice::TripExpense,
            4 => MenuChoice::UpdatePlate,
            5 => MenuChoice::DeleteDriver,
            6 => MenuChoice::InsertDriver,
            _ => return None,
        };
        Some(choice)
    }
}

/// Whether the loop keeps going after an iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Terminated,
}

/// Result of asking to delete a driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Driver),
    /// The driver was found but the delete changed nothing.
    NotDeleted(Driver),
    NotFound,
}

/// Application context: owns the single database connection every action
/// borrows.
pub struct App {
    conn: Connection,
}

impl App {
    /// Wrap an already prepared connection. Schema creation and seeding
    /// happen before this, so every action can assume the tables exist.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Borrow the connection, mainly so tests can inspect the tables after
    /// driving the menu.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Run the menu until the user picks 0. Action failures are reported and
    /// the loop continues; console failures end it.
    pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        let mut state = MenuState::Running;
        while state == MenuState::Running {
            state = self.step(console)?;
        }
        info!("menu terminated");
        Ok(())
    }

    /// Render the menu once, read a choice and run it.
    pub fn step<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<MenuState> {
        for line in MENU {
            console.msgln(line)?;
        }
        let number = console.read_int("Choose an option: ", 0, MenuChoice::MAX)?;
        let choice = MenuChoice::from_number(number)
            .ok_or_else(|| anyhow!("menu option {number} has no action"))?;

        match self.dispatch(choice, console) {
            Ok(state) => Ok(state),
            Err(err) if err.is::<ConsoleError>() => Err(err),
            Err(err) => {
                // Already shown on the console; keep stderr quiet at the default level.
                debug!(?choice, error = %format!("{err:#}"), "menu action failed");
                console.failure("An error occurred while running the SQL query.")?;
                console.failure(&surface_error(&err))?;
                Ok(MenuState::Running)
            }
        }
    }

    /// Run a single menu action. Only `Exit` ends the loop; errors are left
    /// to the caller, which decides whether they are fatal.
    pub fn dispatch<R: BufRead, W: Write>(
        &self,
        choice: MenuChoice,
        console: &mut Console<R, W>,
    ) -> Result<MenuState> {
        debug!(?choice, "dispatching menu action");
        match choice {
            MenuChoice::Exit => return Ok(MenuState::Terminated),
            MenuChoice::ListDrivers => self.list_drivers(console)?,
            MenuChoice::ListCars => self.list_cars(console)?,
            MenuChoice::TripExpense => self.show_trip_expense(console)?,
            MenuChoice::UpdatePlate => self.change_plate(console)?,
            MenuChoice::DeleteDriver => self.remove_driver(console)?,
            MenuChoice::InsertDriver => self.add_driver(console)?,
        }
        Ok(MenuState::Running)
    }

    fn list_drivers<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        let drivers = fetch_drivers(&self.conn)?;
        for line in driver_table(&drivers) {
            console.msgln(&line)?;
        }
        Ok(())
    }

    fn list_cars<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        let cars = fetch_cars(&self.conn)?;
        for line in car_table(&cars) {
            console.msgln(&line)?;
        }
        Ok(())
    }

    fn show_trip_expense<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        let total = total_refuel_expense(&self.conn)?;
        console.msgln("------------------ Total expense across all trips ------------------")?;
        console.msgln(&format!(
            "Total refuelling expense of all trips, in euros: {total:?}"
        ))?;
        Ok(())
    }

    /// Chassis bounds are read first so out-of-range numbers are rejected by
    /// the prompt before the update runs.
    fn change_plate<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        let bounds = chassis_bounds(&self.conn)?;
        let chassis = console.read_int(
            &format!(
                "Enter the chassis number of the car whose plate will change ({}-{}): ",
                bounds.min, bounds.max
            ),
            bounds.min,
            bounds.max,
        )?;
        let plate = read_plate(console)?;

        if update_plate(&self.conn, chassis, &plate)? > 0 {
            info!(chassis, %plate, "plate updated");
            console.success(&format!("The plate was updated successfully: {plate}"))?;
        } else {
            console.failure("No car was found with the given chassis number.")?;
        }
        Ok(())
    }

    fn remove_driver<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        let nss =
            console.read_int("Enter the NSS of the driver to delete: ", i64::MIN, i64::MAX)?;

        match delete_driver_checked(&self.conn, nss)? {
            DeleteOutcome::Deleted(driver) => {
                info!(nss, "driver deleted");
                console.success(&format!(
                    "Deleted driver with NSS {}: {}",
                    driver.nss, driver
                ))?;
            }
            DeleteOutcome::NotDeleted(_) => {
                console.failure("No changes were made to the database.")?;
            }
            DeleteOutcome::NotFound => {
                console.failure("No driver found with the given NSS.")?;
            }
        }
        Ok(())
    }

    fn add_driver<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        let nss = console.read_int_at_least("Enter the NSS of the new driver: ", 1)?;
        let first_name = console.read_text("Enter the first name of the new driver: ")?;
        let surname = console.read_text("Enter the surname of the new driver: ")?;
        let driver = Driver {
            nss,
            first_name,
            surname,
        };

        if insert_driver(&self.conn, &driver)? > 0 {
            info!(nss, "driver inserted");
            console.success("Driver added successfully.")?;
            console.msgln(&format!("NSS:        {}", driver.nss))?;
            console.msgln(&format!("First name: {}", driver.first_name))?;
            console.msgln(&format!("Surname:    {}", driver.surname))?;
        } else {
            console.failure("The driver could not be added.")?;
        }
        Ok(())
    }
}

/// Prompt until a valid plate is typed, returning it uppercased.
fn read_plate<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<String, ConsoleError> {
    loop {
        console.msgln(&format!("Enter the new plate ({PLATE_HINT}):"))?;
        let raw = console.read_line()?;
        if let Some(plate) = normalize_plate(&raw) {
            return Ok(plate);
        }
        console.failure("The plate does not have a valid format. Please try again.")?;
    }
}

/// Read the driver first so the outcome can name who was deleted, and tell
/// "not found" apart from "found but nothing deleted".
pub fn delete_driver_checked(conn: &Connection, nss: i64) -> Result<DeleteOutcome> {
    let Some(driver) = find_driver(conn, nss)? else {
        return Ok(DeleteOutcome::NotFound);
    };

    if delete_driver(conn, nss)? > 0 {
        Ok(DeleteOutcome::Deleted(driver))
    } else {
        Ok(DeleteOutcome::NotDeleted(driver))
    }
}
