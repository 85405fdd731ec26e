//! Sorting routines.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/sorting/merge_sort_test.rs"]
mod merge_sort_test;

/// Sorts items in place by the key using a top-down merge sort. The sort is stable: when keys are
/// equal, the item from the left half is taken first.
pub fn merge_sort_by_key<T, K, F>(items: &mut [T], key: F)
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    if items.len() < 2 {
        return;
    }

    let mut scratch = items.to_vec();
    sort_range(items, &mut scratch, 0, items.len() - 1, &key);
}

fn sort_range<T, K, F>(items: &mut [T], scratch: &mut [T], low: usize, high: usize, key: &F)
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    if low >= high {
        return;
    }

    let mid = (low + high) / 2;

    sort_range(items, scratch, low, mid, key);
    sort_range(items, scratch, mid + 1, high, key);
    merge(items, scratch, low, mid, high, key);
}

fn merge<T, K, F>(items: &mut [T], scratch: &mut [T], low: usize, mid: usize, high: usize, key: &F)
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let (mut left, mut right) = (low, mid + 1);

    for slot in scratch[low..=high].iter_mut() {
        let take_left = right > high || (left <= mid && key(&items[left]) <= key(&items[right]));

        let source = if take_left { &mut left } else { &mut right };
        *slot = items[*source].clone();
        *source += 1;
    }

    items[low..=high].clone_from_slice(&scratch[low..=high]);
}
