//! Persistence module split across logical submodules.

mod cars;
mod connection;
mod drivers;
mod trips;

pub use cars::{chassis_bounds, fetch_cars, update_plate};
pub use connection::{
    create_schema, driver_table_is_empty, open_connection, open_in_memory, seed_if_empty,
};
pub use drivers::{delete_driver, fetch_drivers, find_driver, insert_driver};
pub use trips::total_refuel_expense;
