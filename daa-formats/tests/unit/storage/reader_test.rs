use super::*;
use crate::helpers::get_data_reader;

#[test]
fn can_read_programs() {
    let instance = get_data_reader("storage/example.txt").read_storage().unwrap();

    assert_eq!(instance.tape_count, 2);
    assert_eq!(
        instance.programs,
        vec![Program::new("pg1", 5), Program::new("pg2", 10), Program::new("pg3", 3)]
    );
}

parameterized_test! {can_report_invalid_input, (content, expected), {
    let result = content.to_string().read_storage().map(|_| ());

    assert_eq!(result, Err(expected.into()));
}}

can_report_invalid_input! {
    case01_missing_tapes: ("1", "unexpected end of input, expecting tape count"),
    case02_missing_length: ("1 1\npg1", "unexpected end of input, expecting program length"),
    case03_bad_length: ("1 1\npg1 five", "cannot parse program length from 'five': 'invalid digit found in string'"),
}
