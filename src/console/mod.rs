//! Console front-end: prompt helpers, table rendering and the menu loop.

mod app;
mod io;
mod tables;
mod terminal;

pub use app::{delete_driver_checked, App, DeleteOutcome, MenuChoice, MenuState};
pub use io::{Console, ConsoleError, ConsoleResult};
pub use terminal::{print_banner, run_app};
