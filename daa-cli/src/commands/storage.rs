#[cfg(test)]
#[path = "../../tests/unit/commands/storage_test.rs"]
mod storage_test;

use super::*;
use daa_cli::extensions::solve::solve_storage_problem;

pub fn get_storage_app() -> Command {
    add_solve_args(Command::new("storage").about("Places programs on tapes minimizing their mean retrieval time"))
}

pub fn run_storage(matches: &ArgMatches) -> Result<(), String> {
    let config = get_config(matches)?;
    let format = get_output_format(matches, &config)?;

    let reader = get_input(matches)?;
    let writer = get_output(matches)?;

    write_result(writer, |writer| solve_storage_problem(reader, format, writer))
        .map_err(|err| format!("cannot solve storage problem: '{err}'"))
}
