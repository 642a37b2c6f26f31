use std::time::Duration;

/// Helper function for displaying the greeting of the application
pub fn show_greeting() {
    println!("\n# Sequent Peak Algorithm");
    println!("- Reservoir capacity estimation and storage simulation");
}

pub fn input_reading_line(path: &str, num_cases: usize) {
    println!("\nReading input from: {path}");
    println!("- Cases: {num_cases}");
}

/// Helper function for displaying the case results table header
pub fn cases_table_header() {
    println!(
        "\n{0: ^16} | {1: ^8} | {2: ^12} | {3: ^8} | {4: ^12}",
        "case", "periods", "capacity", "deficits", "overflow"
    )
}

/// Helper function for displaying a divider for the case results table
pub fn cases_table_divider() {
    println!(
        "------------------------------------------------------------------"
    )
}

/// Helper function for displaying a row of the case results table.
/// Cases without a capacity or without a simulation show a dash.
pub fn cases_table_row(
    name: &str,
    num_periods: usize,
    capacity: Option<f64>,
    deficit_periods: Option<usize>,
    overflow: Option<f64>,
) {
    let capacity = capacity.map_or("-".to_string(), |c| format!("{c:.4}"));
    let deficit_periods =
        deficit_periods.map_or("-".to_string(), |d| d.to_string());
    let overflow = overflow.map_or("-".to_string(), |o| format!("{o:.4}"));
    println!(
        "{0: <16} | {1: >8} | {2: >12} | {3: >8} | {4: >12}",
        name, num_periods, capacity, deficit_periods, overflow
    )
}

pub fn case_error(name: &str, error: &dyn std::error::Error) {
    println!("{name: <16} | error: {error}");
}

pub fn output_generation_line(path: &str) {
    println!("\nWriting outputs to: {path}");
}

pub fn show_farewell(time: Duration) {
    println!("\nTotal time: {:.2} s", time.as_millis() as f64 / 1000.0)
}
