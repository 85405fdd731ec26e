use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod generate;
pub mod min_max;
pub mod shortest_path;
pub mod storage;
pub mod tsp;

use daa_cli::core::prelude::{GenericError, Telemetry};
use daa_cli::extensions::config::{Config, OutputFormat, create_telemetry, read_config};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write, stdin, stdout};
use std::str::FromStr;

pub const INPUT_ARG_NAME: &str = "INPUT";
pub const OUT_RESULT_ARG_NAME: &str = "out-result";
pub const OUTPUT_FORMAT_ARG_NAME: &str = "output-format";
pub const CONFIG_ARG_NAME: &str = "config";
pub const LOG_ARG_NAME: &str = "log";

pub(crate) fn create_read_buffer(in_file: Option<File>) -> BufReader<Box<dyn Read>> {
    if let Some(in_file) = in_file { BufReader::new(Box::new(in_file)) } else { BufReader::new(Box::new(stdin())) }
}

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file { BufWriter::new(Box::new(out_file)) } else { BufWriter::new(Box::new(stdout())) }
}

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn parse_float_value<T: FromStr<Err = std::num::ParseFloatError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get float value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

/// Adds arguments shared by every solving command.
fn add_solve_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(INPUT_ARG_NAME)
                .help("Sets input file with a problem, standard input is read when omitted")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUTPUT_FORMAT_ARG_NAME)
                .help("Specifies output format, default is text")
                .short('f')
                .long(OUTPUT_FORMAT_ARG_NAME)
                .required(false)
                .value_parser(["text", "json"]),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to the json configuration file, arguments take precedence over it")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
}

/// Adds a flag which enables progress logging to stderr.
fn add_log_arg(command: Command) -> Command {
    command.arg(
        Arg::new(LOG_ARG_NAME)
            .help("Specifies whether progress should be logged to stderr")
            .short('l')
            .long(LOG_ARG_NAME)
            .action(ArgAction::SetTrue)
            .required(false),
    )
}

fn get_config(matches: &ArgMatches) -> Result<Config, String> {
    match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?)).map_err(|err| err.to_string()),
        None => Ok(Config::default()),
    }
}

fn get_output_format(matches: &ArgMatches, config: &Config) -> Result<OutputFormat, String> {
    match matches.get_one::<String>(OUTPUT_FORMAT_ARG_NAME) {
        Some(format) => format.parse(),
        None => Ok(config.output_format().unwrap_or_default()),
    }
}

fn get_telemetry(matches: &ArgMatches, config: &Config) -> Telemetry {
    create_telemetry(matches.get_flag(LOG_ARG_NAME) || config.is_logging_enabled())
}

fn get_input(matches: &ArgMatches) -> Result<BufReader<Box<dyn Read>>, String> {
    let in_file = matches.get_one::<String>(INPUT_ARG_NAME).map(|path| open_file(path, "input")).transpose()?;

    Ok(create_read_buffer(in_file))
}

fn get_output(matches: &ArgMatches) -> Result<BufWriter<Box<dyn Write>>, String> {
    let out_file =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    Ok(create_write_buffer(out_file))
}

/// Runs writing function and flushes the buffer, so write errors are not lost on drop.
fn write_result<F>(mut writer: BufWriter<Box<dyn Write>>, write_fn: F) -> Result<(), GenericError>
where
    F: FnOnce(&mut BufWriter<Box<dyn Write>>) -> Result<(), GenericError>,
{
    write_fn(&mut writer)?;
    writer.flush()?;

    Ok(())
}
