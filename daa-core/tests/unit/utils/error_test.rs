use super::*;

#[test]
fn can_convert_algorithm_error_into_generic() {
    let error: GenericError = AlgorithmError::Unreachable { vertex: 3 }.into();

    assert_eq!(error.to_string(), "vertex 3 is unreachable from the source");
}

parameterized_test! {can_format_algorithm_error, (error, expected), {
    assert_eq!(error.to_string(), expected);
}}

can_format_algorithm_error! {
    case01_invalid_input: (AlgorithmError::invalid_input("bad row"), "invalid input: bad row"),
    case02_negative_cycle: (AlgorithmError::NegativeCycleDetected, "negative cycle detected"),
    case03_disconnected: (
        AlgorithmError::DisconnectedInstance { step: 2 },
        "instance is disconnected: no feasible extension at step 2"
    ),
}

#[test]
fn can_propagate_io_error() {
    let error: GenericError = std::io::Error::other("broken pipe").into();

    assert_eq!(error.to_string(), "broken pipe");
}
