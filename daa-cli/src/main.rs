//! A command line interface to the classroom algorithms.

#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

mod commands;

use clap::Command;
use commands::generate::{get_generate_app, run_generate};
use commands::min_max::{get_min_max_app, run_min_max};
use commands::shortest_path::{get_shortest_path_app, run_shortest_path};
use commands::storage::{get_storage_app, run_storage};
use commands::tsp::{get_tsp_app, run_tsp};
use std::process;

fn main() {
    let matches = get_app().get_matches();

    let result = match matches.subcommand() {
        Some(("tsp", tsp_matches)) => run_tsp(tsp_matches),
        Some(("shortest-path", shortest_path_matches)) => run_shortest_path(shortest_path_matches),
        Some(("min-max", min_max_matches)) => run_min_max(min_max_matches),
        Some(("storage", storage_matches)) => run_storage(storage_matches),
        Some(("generate", generate_matches)) => run_generate(generate_matches),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn get_app() -> Command {
    Command::new("daa")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to TSP branch-and-bound, Bellman-Ford and other classroom algorithms")
        .subcommand(get_tsp_app())
        .subcommand(get_shortest_path_app())
        .subcommand(get_min_max_app())
        .subcommand(get_storage_app())
        .subcommand(get_generate_app())
}
