use super::*;
use crate::helpers::models::{create_example_matrix, create_matrix, create_random_matrix};
use crate::utils::DefaultRandom;

#[test]
fn can_find_optimum_on_example() {
    let tour = solve_brute_force(&create_example_matrix(), 0).unwrap();

    assert_eq!(tour, Tour { cost: 28, path: vec![0, 3, 1, 4, 2], root_bound: 25 });
}

#[test]
fn can_prefer_lexicographically_smallest_path_on_ties() {
    let matrix = CostMatrix::from_costs(vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]).unwrap();

    let tour = solve_brute_force(&matrix, 0).unwrap();

    assert_eq!(tour.cost, 3);
    assert_eq!(tour.path, vec![0, 1, 2]);
}

#[test]
fn can_solve_single_vertex() {
    let tour = solve_brute_force(&create_matrix(vec![vec![None]]), 0).unwrap();

    assert_eq!(tour, Tour { cost: 0, path: vec![0], root_bound: 0 });
}

#[test]
fn can_fail_without_hamiltonian_cycle() {
    let matrix = create_matrix(vec![vec![None, Some(1), None], vec![None, None, Some(1)], vec![None, None, None]]);

    assert_eq!(solve_brute_force(&matrix, 0), Err(AlgorithmError::DisconnectedInstance { step: 1 }));
}

parameterized_test! {can_reject_invalid_input, (size, source), {
    let random = DefaultRandom::new_repeatable(0);
    let matrix = create_random_matrix(&random, size, 10);

    let result = solve_brute_force(&matrix, source);

    assert!(matches!(result, Err(AlgorithmError::InvalidInput(_))));
}}

can_reject_invalid_input! {
    case01_unknown_source: (3, 3),
    case02_too_big: (MAX_BRUTE_FORCE_SIZE + 1, 0),
}

#[test]
fn can_keep_root_bound_below_optimum() {
    let random = DefaultRandom::new_repeatable(5);

    (2..7).for_each(|size| {
        (0..20).for_each(|_| {
            let matrix = create_random_matrix(&random, size, 40);

            let tour = solve_brute_force(&matrix, 0).unwrap();

            assert!(tour.root_bound <= tour.cost);
            assert_eq!(matrix.tour_cost(tour.path.as_slice()), Weight::Finite(tour.cost));
        });
    });
}
