use std::io::Cursor;

use fleet_console::console::{App, Console, ConsoleError};
use fleet_console::db::{create_schema, fetch_cars, fetch_drivers, open_in_memory, seed_if_empty};

fn seeded_app() -> App {
    let conn = open_in_memory().unwrap();
    create_schema(&conn).unwrap();
    assert!(seed_if_empty(&conn).unwrap());
    App::new(conn)
}

fn empty_app() -> App {
    let conn = open_in_memory().unwrap();
    create_schema(&conn).unwrap();
    App::new(conn)
}

/// Feed `input` to the menu and return the loop result plus everything it
/// printed.
fn drive(app: &App, input: &str) -> (anyhow::Result<()>, String) {
    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let result = app.run(&mut console);
    let output = String::from_utf8(console.into_writer()).unwrap();
    (result, output)
}

fn driver_count(app: &App) -> usize {
    fetch_drivers(app.connection()).unwrap().len()
}

#[test]
fn exit_immediately() {
    let app = seeded_app();
    let (result, output) = drive(&app, "0\n");
    result.unwrap();
    assert_eq!(output.matches("APPLICATION MENU").count(), 1);
}

#[test]
fn listing_drivers_shows_seed_rows() {
    let app = seeded_app();
    let (result, output) = drive(&app, "1\n0\n");
    result.unwrap();

    assert!(output.contains("Driver list"));
    for surname in [
        "Martin Gomez",
        "Ruiz Navarro",
        "Ortega Vidal",
        "Molina Serrano",
        "Castro Rubio",
    ] {
        assert!(output.contains(surname), "missing {surname}");
    }
    assert!(output.contains("10001    Lucia"));
}

#[test]
fn listing_cars_shows_plates() {
    let app = seeded_app();
    let (result, output) = drive(&app, "2\n0\n");
    result.unwrap();
    assert!(output.contains("1234BCD"));
    assert!(output.contains("5678RST"));
}

#[test]
fn out_of_range_choice_is_reprompted() {
    let app = seeded_app();
    let (result, output) = drive(&app, "9\nseven\n0\n");
    result.unwrap();
    assert!(output.contains("between 0 and 6"));
    assert!(output.contains("whole number"));
    assert_eq!(output.matches("APPLICATION MENU").count(), 1);
}

#[test]
fn trip_expense_is_stable_across_runs() {
    let app = seeded_app();
    let (result, output) = drive(&app, "3\n3\n0\n");
    result.unwrap();

    let totals: Vec<&str> = output
        .lines()
        .filter(|line| line.starts_with("Total refuelling expense of all trips, in euros:"))
        .collect();
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0], totals[1]);
    assert!(totals[0].contains("146.1"));
}

#[test]
fn chassis_below_minimum_is_rejected_before_update() {
    let app = seeded_app();
    let (result, output) = drive(&app, "4\n1\n5003\n1234abc\n9999xyz\n0\n");
    result.unwrap();

    assert!(output.contains("between 5001 and 5005"));
    assert!(output.contains("does not have a valid format"));
    assert!(output.contains("updated successfully: 9999XYZ"));

    let car = fetch_cars(app.connection())
        .unwrap()
        .into_iter()
        .find(|car| car.chassis == 5003)
        .unwrap();
    assert_eq!(car.plate, "9999XYZ");
}

#[test]
fn plate_update_without_cars_only_accepts_zero() {
    let app = empty_app();
    let (result, output) = drive(&app, "4\n1\n0\n1111BBB\n0\n");
    result.unwrap();

    assert!(output.contains("between 0 and 0"));
    assert!(output.contains("No car was found"));
}

#[test]
fn deleting_missing_driver_changes_nothing() {
    let app = seeded_app();
    let before = driver_count(&app);
    let (result, output) = drive(&app, "5\n12345678\n0\n");
    result.unwrap();

    assert!(output.contains("No driver found"));
    assert_eq!(driver_count(&app), before);
}

#[test]
fn deleting_existing_driver_removes_one_row() {
    let app = seeded_app();
    let before = driver_count(&app);
    let (result, output) = drive(&app, "5\n10002\n0\n");
    result.unwrap();

    assert!(output.contains("Deleted driver with NSS 10002: Javier Ruiz Navarro"));
    assert_eq!(driver_count(&app), before - 1);
}

#[test]
fn inserted_driver_is_listed_exactly_once() {
    let app = seeded_app();
    let (result, output) = drive(&app, "6\n0\n777\nNoelia\nPrieto Sanz\n1\n0\n");
    result.unwrap();

    assert!(output.contains("Driver added successfully."));
    assert!(output.contains("NSS:        777"));
    assert_eq!(output.matches("Prieto Sanz").count(), 2);

    let matches = fetch_drivers(app.connection())
        .unwrap()
        .into_iter()
        .filter(|driver| driver.nss == 777)
        .count();
    assert_eq!(matches, 1);
}

#[test]
fn duplicate_insert_is_reported_and_menu_continues() {
    let app = seeded_app();
    let before = driver_count(&app);
    let (result, output) = drive(&app, "6\n10001\nOtra\nPersona\n0\n");
    result.unwrap();

    assert!(output.contains("An error occurred while running the SQL query."));
    assert!(output.contains("A driver with NSS 10001 already exists."));
    assert_eq!(output.matches("APPLICATION MENU").count(), 2);
    assert_eq!(driver_count(&app), before);
}

#[test]
fn sql_failure_does_not_stop_the_menu() {
    let app = seeded_app();
    app.connection().execute_batch("DROP TABLE TRAYECTO; DROP TABLE COCHE;").unwrap();

    let (result, output) = drive(&app, "2\n1\n0\n");
    result.unwrap();
    assert!(output.contains("An error occurred while running the SQL query."));
    assert!(output.contains("Driver list"));
}

#[test]
fn closed_input_ends_the_loop_with_an_error() {
    let app = seeded_app();
    let (result, _) = drive(&app, "1\n");
    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConsoleError>(),
        Some(ConsoleError::Closed)
    ));
}

#[test]
fn found_but_undeleted_driver_is_reported_separately() {
    let app = seeded_app();
    app.connection()
        .execute_batch(
            "CREATE TRIGGER keep_drivers BEFORE DELETE ON CONDUCTOR
             BEGIN SELECT RAISE(IGNORE); END;",
        )
        .unwrap();
    let before = driver_count(&app);

    let (result, output) = drive(&app, "5\n10003\n0\n");
    result.unwrap();

    assert!(output.contains("No changes were made to the database."));
    assert!(!output.contains("No driver found"));
    assert_eq!(driver_count(&app), before);
}

#[test]
fn insert_that_writes_no_row_is_reported() {
    let app = seeded_app();
    app.connection()
        .execute_batch(
            "CREATE TRIGGER skip_new_drivers BEFORE INSERT ON CONDUCTOR
             BEGIN SELECT RAISE(IGNORE); END;",
        )
        .unwrap();
    let before = driver_count(&app);

    let (result, output) = drive(&app, "6\n888\nRosa\nVega\n0\n");
    result.unwrap();

    assert!(output.contains("The driver could not be added."));
    assert!(!output.contains("Driver added successfully."));
    assert_eq!(driver_count(&app), before);
}

#[test]
fn two_cars_may_share_a_plate() {
    let app = seeded_app();
    let (result, output) = drive(&app, "4\n5002\n1234bcd\n0\n");
    result.unwrap();

    assert!(output.contains("updated successfully: 1234BCD"));
    let shared = fetch_cars(app.connection())
        .unwrap()
        .into_iter()
        .filter(|car| car.plate == "1234BCD")
        .count();
    assert_eq!(shared, 2);
}
