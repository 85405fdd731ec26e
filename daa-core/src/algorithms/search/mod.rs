//! Divide and conquer search of extreme values.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/search/min_max_test.rs"]
mod min_max_test;

use crate::utils::AlgorithmError;

/// Finds the minimum and the maximum of the values by splitting the slice in halves until one or
/// two elements remain.
pub fn min_max<T: Ord + Copy>(values: &[T]) -> Result<(T, T), AlgorithmError> {
    if values.is_empty() {
        return Err(AlgorithmError::invalid_input("cannot find min and max of no values"));
    }

    Ok(min_max_range(values, 0, values.len() - 1))
}

fn min_max_range<T: Ord + Copy>(values: &[T], start: usize, end: usize) -> (T, T) {
    match end - start {
        0 => (values[start], values[start]),
        1 if values[start] > values[end] => (values[end], values[start]),
        1 => (values[start], values[end]),
        _ => {
            let mid = (start + end) / 2;

            let (left_min, left_max) = min_max_range(values, start, mid);
            let (right_min, right_max) = min_max_range(values, mid + 1, end);

            (left_min.min(right_min), left_max.max(right_max))
        }
    }
}
