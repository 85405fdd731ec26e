use super::*;
use crate::helpers::models::{create_example_matrix, create_matrix};

#[test]
fn can_reduce_example_matrix() {
    let mut matrix = create_example_matrix();

    let reduction = matrix.reduce();

    assert_eq!(reduction, 25);
    assert_eq!(
        matrix.row(0),
        &[Weight::Infinite, Weight::Finite(10), Weight::Finite(17), Weight::Finite(0), Weight::Finite(1)]
    );
    (0..matrix.size()).for_each(|row| {
        assert!(matrix.row(row).iter().any(|weight| *weight == Weight::Finite(0)));
        assert!((0..matrix.size()).any(|column| matrix.get(column, row) == Weight::Finite(0)));
    });
}

#[test]
fn can_skip_infinite_rows_and_columns_on_reduce() {
    let mut matrix = create_matrix(vec![vec![None, None, None], vec![Some(4), None, Some(6)], vec![Some(1), None, None]]);

    let reduction = matrix.reduce();

    // rows: 0 + 4 + 1, columns: 0 + 0 + 2
    assert_eq!(reduction, 7);
    assert_eq!(matrix.get(1, 2), Weight::Finite(0));
    assert_eq!(matrix.get(0, 1), Weight::Infinite);
}

#[test]
fn can_reduce_already_reduced_matrix_to_zero() {
    let mut matrix = create_example_matrix();
    matrix.reduce();

    assert_eq!(matrix.reduce(), 0);
}

#[test]
fn can_mask_cells() {
    let mut matrix = create_example_matrix();

    matrix.mask_row(0);
    matrix.mask_column(1);
    matrix.mask_cell(2, 0);

    assert!(matrix.row(0).iter().all(|weight| !weight.is_finite()));
    assert!((0..matrix.size()).all(|row| matrix.get(row, 1) == Weight::Infinite));
    assert_eq!(matrix.get(2, 0), Weight::Infinite);
    assert_eq!(matrix.get(2, 3), Weight::Finite(2));
}

#[test]
fn can_keep_original_when_copy_is_changed() {
    let original = create_example_matrix();
    let mut copy = original.clone();

    copy.mask_row(1);
    copy.reduce();

    assert_eq!(original, create_example_matrix());
    assert_ne!(original, copy);
}

parameterized_test! {can_calculate_tour_cost, (path, expected), {
    assert_eq!(create_example_matrix().tour_cost(path.as_slice()), expected);
}}

can_calculate_tour_cost! {
    case01_example_tour: (vec![0, 3, 1, 4, 2], Weight::Finite(28)),
    case02_identity_order: (vec![0, 1, 2, 3, 4], Weight::Finite(20 + 16 + 2 + 3 + 16)),
    case03_single_vertex: (vec![2], Weight::Finite(0)),
}

#[test]
fn can_get_infinite_tour_cost_with_missing_edge() {
    let matrix = create_matrix(vec![vec![None, Some(1), Some(1)], vec![None, None, Some(1)], vec![None, Some(1), None]]);

    assert_eq!(matrix.tour_cost(&[0, 1, 2]), Weight::Infinite);
}

parameterized_test! {can_validate_matrix, (rows, expected), {
    let result = CostMatrix::new(rows).map(|_| ());

    assert_eq!(result, expected);
}}

can_validate_matrix! {
    case01_empty: (vec![], Err(AlgorithmError::invalid_input("invalid matrix: no vertices"))),
    case02_not_square: (
        vec![vec![Weight::Infinite, Weight::Finite(1)], vec![Weight::Finite(1)]],
        Err(AlgorithmError::invalid_input("invalid matrix: row 1 has 1 values, expected 2"))
    ),
    case03_finite_diagonal: (
        vec![vec![Weight::Finite(0), Weight::Finite(1)], vec![Weight::Finite(1), Weight::Infinite]],
        Err(AlgorithmError::invalid_input("invalid matrix: diagonal cell [0][0] is not infinite"))
    ),
    case04_negative: (
        vec![vec![Weight::Infinite, Weight::Finite(-1)], vec![Weight::Finite(1), Weight::Infinite]],
        Err(AlgorithmError::invalid_input("invalid matrix: cell [0][1] has negative cost -1"))
    ),
    case05_single_vertex: (vec![vec![Weight::Infinite]], Ok(())),
    case06_total_overflow: (
        vec![vec![Weight::Infinite, Weight::Finite(Cost::MAX)], vec![Weight::Finite(1), Weight::Infinite]],
        Err(AlgorithmError::invalid_input(format!("invalid matrix: total cost exceeds {}", Cost::MAX)))
    ),
    case07_total_at_limit: (
        vec![vec![Weight::Infinite, Weight::Finite(Cost::MAX - 1)], vec![Weight::Finite(1), Weight::Infinite]],
        Ok(())
    ),
}

#[test]
fn can_force_infinite_diagonal_from_costs() {
    let matrix = CostMatrix::from_costs(vec![vec![5, 1], vec![2, 5]]).unwrap();

    assert_eq!(matrix.get(0, 0), Weight::Infinite);
    assert_eq!(matrix.get(1, 1), Weight::Infinite);
    assert_eq!(matrix.get(0, 1), Weight::Finite(1));
}
