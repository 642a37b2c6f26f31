pub mod batch;
pub mod capacity;
pub mod error;
pub mod extrema;
pub mod input;
mod log;
pub mod output;
pub mod series;
pub mod simulation;
pub mod spa;
pub mod utils;

pub use error::InvalidInput;
pub use simulation::{sim, SimResult};
pub use spa::{spa, SpaResult};

use input::Input;
use std::error::Error;
use std::time::Instant;

pub fn run(input_args: &InputArgs) -> Result<(), Box<dyn Error>> {
    log::show_greeting();

    let begin = Instant::now();
    let input = Input::build(&input_args.path)?;

    log::input_reading_line(&input_args.path, input.config.cases.len());

    let cases: Vec<batch::Case> =
        input.cases.iter().map(|c| c.case.clone()).collect();
    let reports = batch::evaluate(&cases);

    log::cases_table_header();
    log::cases_table_divider();
    for (case_data, report) in input.cases.iter().zip(reports.iter()) {
        match report {
            Ok(report) => log::cases_table_row(
                &report.name,
                report.spa.num_periods(),
                report.spa.capacity,
                report.sim.as_ref().map(|s| s.deficit_periods()),
                report.sim.as_ref().map(|s| s.total_overflow()),
            ),
            Err(e) => log::case_error(&case_data.case.name, e),
        }
    }
    log::cases_table_divider();

    log::output_generation_line(&input_args.path);
    for (case_data, report) in input.cases.iter().zip(reports.iter()) {
        if let Ok(report) = report {
            output::generate_outputs(
                report,
                &case_data.series,
                &input_args.path,
            )?;
        }
    }

    log::show_farewell(begin.elapsed());

    match reports.iter().filter(|r| r.is_err()).count() {
        0 => Ok(()),
        n => Err(format!("{n} case(s) had invalid input").into()),
    }
}

pub struct InputArgs {
    pub path: String,
}

impl InputArgs {
    pub fn build(args: &[String]) -> Result<Self, &'static str> {
        if args.len() < 2 {
            return Err("Not enough arguments [PATH]");
        }

        let path = args[1].clone();

        Ok(Self { path })
    }
}
