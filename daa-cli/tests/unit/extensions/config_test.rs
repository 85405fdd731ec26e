use super::*;
use crate::helpers::{CONFIG_PATH, open_data_file};

#[test]
fn can_read_full_config() {
    let config = read_config(open_data_file(CONFIG_PATH)).unwrap();

    assert_eq!(config.tsp_strategy(), Some(TspStrategy::Exhaustive));
    assert_eq!(config.shortest_path_source(), Some("4"));
    assert!(!config.is_logging_enabled());
    assert_eq!(config.output_format(), Some(OutputFormat::Json));
}

#[test]
fn can_read_empty_config() {
    let config = read_config(BufReader::new("{}".as_bytes())).unwrap();

    assert_eq!(config.tsp_strategy(), None);
    assert_eq!(config.shortest_path_source(), None);
    assert!(!config.is_logging_enabled());
    assert_eq!(config.output_format(), None);
}

#[test]
fn can_read_partial_config() {
    let config =
        read_config(BufReader::new(r#"{ "tsp": {}, "telemetry": { "logging": { "enabled": true } } }"#.as_bytes()))
            .unwrap();

    assert_eq!(config.tsp_strategy(), None);
    assert!(config.is_logging_enabled());
}

#[test]
fn can_reject_unknown_strategy() {
    let result = read_config(BufReader::new(r#"{ "tsp": { "strategy": "greedy" } }"#.as_bytes()));

    assert!(result.unwrap_err().to_string().starts_with("cannot deserialize config"));
}

parameterized_test! {can_parse_output_format, (value, expected), {
    can_parse_output_format_impl(value, expected);
}}

can_parse_output_format! {
    case01_text: ("text", Ok(OutputFormat::Text)),
    case02_json: ("json", Ok(OutputFormat::Json)),
    case03_unknown: ("xml", Err("unknown output format: 'xml'".to_string())),
}

fn can_parse_output_format_impl(value: &str, expected: Result<OutputFormat, String>) {
    assert_eq!(value.parse::<OutputFormat>(), expected);
}
