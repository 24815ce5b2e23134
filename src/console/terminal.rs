use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use super::app::App;
use super::io::Console;

/// Drive the menu over the process's standard input and output.
pub fn run_app(app: &App) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    app.run(&mut console)
}

/// Tell the user where the database lives so it can be inspected with any
/// SQLite client while the program runs.
pub fn print_banner(out: &mut impl Write, db_path: &Path) -> Result<()> {
    writeln!(out, "Attention!")?;
    writeln!(out)?;
    writeln!(out, "While the application is running you can open the")?;
    writeln!(out, "database with any SQLite client.")?;
    writeln!(out)?;
    writeln!(out, "Database file: {}", db_path.display())?;
    writeln!(out, "User: (none)")?;
    writeln!(out, "Password: (none)")?;
    out.flush().context("failed to write startup banner")
}
