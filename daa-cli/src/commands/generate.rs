#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use super::*;
use daa_cli::core::prelude::Cost;
use daa_cli::core::utils::DefaultRandom;
use daa_cli::extensions::generate::{generate_graph, generate_tsp_instance};
use daa_cli::formats::shortest_path::write_graph;
use daa_cli::formats::tsp::write_tsp_instance;

pub const FORMAT_ARG_NAME: &str = "FORMAT";
pub const SIZE_ARG_NAME: &str = "size";
pub const EDGES_ARG_NAME: &str = "edges";
pub const MIN_WEIGHT_ARG_NAME: &str = "min-weight";
pub const MAX_WEIGHT_ARG_NAME: &str = "max-weight";
pub const MISSING_ARG_NAME: &str = "missing";
pub const SEED_ARG_NAME: &str = "seed";

pub fn get_generate_app() -> Command {
    Command::new("generate")
        .about("Provides the way to generate random problems for testing")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies problem type")
                .required(true)
                .value_parser(["tsp", "graph"])
                .index(1),
        )
        .arg(
            Arg::new(SIZE_ARG_NAME)
                .help("Amount of vertices in generated problem")
                .short('n')
                .long(SIZE_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(EDGES_ARG_NAME)
                .help("Amount of edges in generated graph, default is four edges per vertex")
                .short('e')
                .long(EDGES_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MIN_WEIGHT_ARG_NAME)
                .help("Min edge weight of generated graph, negative values are allowed, default is 0")
                .long(MIN_WEIGHT_ARG_NAME)
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new(MAX_WEIGHT_ARG_NAME)
                .help("Max edge weight, default is 100")
                .short('w')
                .long(MAX_WEIGHT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MISSING_ARG_NAME)
                .help("Probability of a missing edge in generated tsp matrix, default is 0")
                .short('m')
                .long(MISSING_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies a seed to make generation repeatable")
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_generate(matches: &ArgMatches) -> Result<(), String> {
    let format = matches.get_one::<String>(FORMAT_ARG_NAME).map(String::as_str).unwrap_or("tsp");

    let size = parse_int_value::<usize>(matches, SIZE_ARG_NAME, "vertices size")?.unwrap_or_default();
    let edges = parse_int_value::<usize>(matches, EDGES_ARG_NAME, "edges size")?.unwrap_or(size.saturating_mul(4));
    let min_weight = parse_int_value::<Cost>(matches, MIN_WEIGHT_ARG_NAME, "min weight")?.unwrap_or(0);
    let max_weight = parse_int_value::<Cost>(matches, MAX_WEIGHT_ARG_NAME, "max weight")?.unwrap_or(100);
    let missing = parse_float_value::<f64>(matches, MISSING_ARG_NAME, "missing edge probability")?.unwrap_or(0.);

    let random = match parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")? {
        Some(seed) => DefaultRandom::new_repeatable(seed),
        None => DefaultRandom::default(),
    };

    let writer = get_output(matches)?;

    write_result(writer, |writer| match format {
        "tsp" => write_tsp_instance(&generate_tsp_instance(&random, size, max_weight, missing)?, writer),
        "graph" => write_graph(&generate_graph(&random, size, edges, min_weight, max_weight)?, writer),
        _ => Err(format!("unknown problem type: '{format}'").into()),
    })
    .map_err(|err| format!("cannot generate problem: '{err}'"))
}
