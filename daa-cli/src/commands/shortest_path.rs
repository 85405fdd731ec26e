#[cfg(test)]
#[path = "../../tests/unit/commands/shortest_path_test.rs"]
mod shortest_path_test;

use super::*;
use daa_cli::extensions::solve::solve_shortest_path_problem;

pub const SOURCE_ARG_NAME: &str = "source";

pub fn get_shortest_path_app() -> Command {
    let command = Command::new("shortest-path")
        .about("Finds single source shortest paths with Bellman-Ford algorithm")
        .arg(
            Arg::new(SOURCE_ARG_NAME)
                .help("Specifies a name of the source vertex, default is the first vertex")
                .short('s')
                .long(SOURCE_ARG_NAME)
                .required(false),
        );

    add_log_arg(add_solve_args(command))
}

pub fn run_shortest_path(matches: &ArgMatches) -> Result<(), String> {
    let config = get_config(matches)?;

    let source = matches.get_one::<String>(SOURCE_ARG_NAME).map(|source| source.as_str());
    let source = source.or_else(|| config.shortest_path_source());
    let format = get_output_format(matches, &config)?;
    let telemetry = get_telemetry(matches, &config);

    let reader = get_input(matches)?;
    let writer = get_output(matches)?;

    write_result(writer, |writer| solve_shortest_path_problem(reader, source, telemetry, format, writer))
        .map_err(|err| format!("cannot solve shortest path problem: '{err}'"))
}
