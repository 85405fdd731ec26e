use super::*;
use crate::helpers::models::{create_example_matrix, create_matrix};

#[test]
fn can_create_root_with_reduced_matrix() {
    let state = SearchState::new(&create_example_matrix(), 0);

    assert_eq!(state.bound, 25);
    assert_eq!(state.path, vec![0]);
    assert_eq!(state.source(), 0);
    assert_eq!(state.visited, vec![true, false, false, false, false]);
    assert!(!state.is_complete());
}

#[test]
fn can_bound_root_children() {
    let state = SearchState::new(&create_example_matrix(), 0);

    let bounds = state.children().map(|child| (child.parent, child.bound)).collect::<Vec<_>>();

    assert_eq!(bounds, vec![(1, 35), (2, 53), (3, 25), (4, 31)]);
}

#[test]
fn can_mask_committed_edge_on_branch() {
    let state = SearchState::new(&create_example_matrix(), 0);

    let child = state.branch(3).unwrap();

    assert_eq!(child.path, vec![0, 3]);
    assert!(child.matrix.row(0).iter().all(|weight| !weight.is_finite()));
    assert!((0..5).all(|row| !child.matrix.get(row, 3).is_finite()));
    assert_eq!(child.matrix.get(3, 0), Weight::Infinite);
    assert_eq!(state.matrix.get(3, 1), Weight::Finite(3));
}

#[test]
fn can_reject_visited_or_missing_edges_on_branch() {
    let matrix = create_matrix(vec![vec![None, Some(1), None], vec![Some(1), None, Some(1)], vec![Some(1), Some(1), None]]);
    let state = SearchState::new(&matrix, 0);

    assert!(state.branch(0).is_none());
    assert!(state.branch(2).is_none());
    assert!(state.branch(1).is_some());
}

#[test]
fn can_complete_single_vertex_root() {
    let matrix = create_matrix(vec![vec![None]]);

    let state = SearchState::new(&matrix, 0);

    assert!(state.is_complete());
    assert_eq!(state.bound, 0);
    assert!(state.can_close(&matrix));
}

#[test]
fn can_check_closing_edge_in_original_matrix() {
    let matrix = create_matrix(vec![vec![None, Some(1), None], vec![None, None, Some(1)], vec![None, None, None]]);
    let state = SearchState::new(&matrix, 0).branch(1).and_then(|state| state.branch(2)).unwrap();

    assert!(state.is_complete());
    assert!(!state.can_close(&matrix));
}
