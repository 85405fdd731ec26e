use super::*;
use crate::helpers::{get_data_reader, get_data_string};

#[test]
fn can_read_off_diagonal_format() {
    let instance = get_data_reader("tsp/example.txt").read_tsp().unwrap();

    assert_eq!(instance.source, 0);
    assert_eq!(instance.matrix.size(), 5);
    assert_eq!(instance.matrix.get(0, 0), Weight::Infinite);
    assert_eq!(instance.matrix.get(0, 1), Weight::Finite(20));
    assert_eq!(instance.matrix.get(1, 0), Weight::Finite(15));
    assert_eq!(instance.matrix.get(4, 3), Weight::Finite(16));
}

#[test]
fn can_read_full_format_with_same_matrix() {
    let full = get_data_string("tsp/example_full.txt").read_tsp().unwrap();
    let off_diagonal = get_data_string("tsp/example.txt").read_tsp().unwrap();

    assert_eq!(full.matrix, off_diagonal.matrix);
    assert_eq!(full.source, 1);
}

#[test]
fn can_read_missing_edges() {
    let instance = get_data_reader("tsp/sparse.txt").read_tsp().unwrap();

    assert_eq!(instance.matrix.get(0, 3), Weight::Infinite);
    assert_eq!(instance.matrix.get(1, 3), Weight::Finite(1));
}

#[test]
fn can_read_single_vertex() {
    let instance = "1\n1".to_string().read_tsp().unwrap();

    assert_eq!(instance.matrix.size(), 1);
    assert_eq!(instance.source, 0);
}

parameterized_test! {can_report_invalid_input, (content, expected), {
    let result = content.to_string().read_tsp().map(|_| ());

    assert_eq!(result, Err(expected.into()));
}}

can_report_invalid_input! {
    case01_empty: ("", "unexpected end of input, expecting vertex count"),
    case02_zero_vertices: ("0", "vertex count should be positive"),
    case03_wrong_amount: ("2\n1 2 3\n1", "expecting 2 or 4 weights followed by a source vertex, got 4 values"),
    case04_source_zero: ("2\n1 2\n0", "source vertex should be in [1, 2], got 0"),
    case05_source_too_big: ("2\n1 2\n3", "source vertex should be in [1, 2], got 3"),
    case06_negative_weight: ("2\n-1 2\n1", "invalid input: invalid matrix: cell [0][1] has negative cost -1"),
    case07_not_a_number: ("2\n1 x\n1", "cannot parse weight from 'x': 'invalid digit found in string'"),
    case08_huge_vertex_count: ("5000000000\n1\n", "vertex count 5000000000 is too large"),
    case09_total_overflow: (
        "2\n9223372036854775807 1\n1",
        "invalid input: invalid matrix: total cost exceeds 9223372036854775807"
    ),
}
