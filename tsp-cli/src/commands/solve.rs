#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use crate::formats::output::{write_json_tour, write_text_tour};
use crate::formats::pairs::PairsProblem;
use std::sync::Arc;
use tsp_core::prelude::*;

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const FORMAT_ARG_NAME: &str = "format";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const LOG_ARG_NAME: &str = "log";

/// Returns the definition of the `solve` command.
pub fn get_solve_command() -> Command {
    Command::new("solve")
        .about("Solves a problem provided as a list of city pair distances")
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(1))
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies the result format")
                .short('f')
                .long(FORMAT_ARG_NAME)
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for the result")
                .short('o')
                .long(OUT_RESULT_ARG_NAME),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether progress logging to stderr is enabled")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

/// Runs the `solve` command with the parsed arguments.
pub fn run_solve(matches: &ArgMatches) {
    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).unwrap();
    let problem = open_file(problem_path, "problem").read_pairs().unwrap_or_else(|err| {
        eprintln!("cannot read problem: '{err}'");
        process::exit(1);
    });

    let telemetry = Telemetry::new(if matches.get_flag(LOG_ARG_NAME) {
        TelemetryMode::OnlyLogging { logger: Arc::new(|message: &str| eprintln!("{message}")) }
    } else {
        TelemetryMode::None
    });

    let (tour, _metrics) = Solver::new(telemetry).solve(&problem).unwrap_or_else(|err| {
        eprintln!("cannot solve problem: '{err}'");
        process::exit(1);
    });

    let out_file = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "result"));
    let writer = create_write_buffer(out_file);

    match matches.get_one::<String>(FORMAT_ARG_NAME).map(String::as_str) {
        Some("json") => write_json_tour(writer, &problem, tour.as_ref()),
        _ => write_text_tour(writer, &problem, tour.as_ref()),
    }
    .unwrap_or_else(|err| {
        eprintln!("cannot write result: '{err}'");
        process::exit(1);
    });
}
