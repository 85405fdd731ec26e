#[cfg(test)]
#[path = "../../tests/unit/commands/tsp_test.rs"]
mod tsp_test;

use super::*;
use daa_cli::core::prelude::TspStrategy;
use daa_cli::extensions::solve::solve_tsp_problem;

pub const STRATEGY_ARG_NAME: &str = "strategy";

pub fn get_tsp_app() -> Command {
    let command = Command::new("tsp")
        .about("Solves traveling salesman problem with the reduced cost matrix branch-and-bound")
        .arg(
            Arg::new(STRATEGY_ARG_NAME)
                .help("Specifies search strategy, default is descent")
                .short('s')
                .long(STRATEGY_ARG_NAME)
                .required(false)
                .value_parser(["descent", "exhaustive", "brute-force"]),
        );

    add_log_arg(add_solve_args(command))
}

pub fn run_tsp(matches: &ArgMatches) -> Result<(), String> {
    let config = get_config(matches)?;

    let strategy = match matches.get_one::<String>(STRATEGY_ARG_NAME) {
        Some(strategy) => strategy.parse::<TspStrategy>()?,
        None => config.tsp_strategy().unwrap_or_default(),
    };
    let format = get_output_format(matches, &config)?;
    let telemetry = get_telemetry(matches, &config);

    let reader = get_input(matches)?;
    let writer = get_output(matches)?;

    write_result(writer, |writer| solve_tsp_problem(reader, strategy, telemetry, format, writer))
        .map_err(|err| format!("cannot solve tsp problem: '{err}'"))
}
