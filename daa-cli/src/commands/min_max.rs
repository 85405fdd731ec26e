#[cfg(test)]
#[path = "../../tests/unit/commands/min_max_test.rs"]
mod min_max_test;

use super::*;
use daa_cli::extensions::solve::solve_min_max_problem;

pub fn get_min_max_app() -> Command {
    add_solve_args(Command::new("min-max").about("Finds min and max values with divide and conquer"))
}

pub fn run_min_max(matches: &ArgMatches) -> Result<(), String> {
    let config = get_config(matches)?;
    let format = get_output_format(matches, &config)?;

    let reader = get_input(matches)?;
    let writer = get_output(matches)?;

    write_result(writer, |writer| solve_min_max_problem(reader, format, writer))
        .map_err(|err| format!("cannot solve min max problem: '{err}'"))
}
