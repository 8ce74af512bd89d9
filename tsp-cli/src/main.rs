//! A command line entry point of the Traveling Salesman Problem solver.

use clap::Command;
use std::process;
use tsp_cli::commands::solve::{get_solve_command, run_solve};

fn main() {
    let matches = Command::new("TSP Solver")
        .version("0.1")
        .about("Computes the cheapest route visiting every city exactly once")
        .subcommand(get_solve_command())
        .get_matches();

    match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches),
        _ => {
            eprintln!("no subcommand was used. Use -h to print help information.");
            process::exit(1);
        }
    }
}
