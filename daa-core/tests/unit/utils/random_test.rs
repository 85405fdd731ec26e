use super::*;

#[test]
fn can_produce_values_within_closed_range() {
    let random = DefaultRandom::new_repeatable(0);

    let values = (0..1000).map(|_| random.uniform_int(-2, 2)).collect::<Vec<_>>();

    assert!(values.iter().all(|value| (-2..=2).contains(value)));
    assert!(values.contains(&-2));
    assert!(values.contains(&2));
}

#[test]
fn can_return_bound_when_range_is_single_value() {
    let random = DefaultRandom::new_repeatable(0);

    assert_eq!(random.uniform_int(7, 7), 7);
}

#[test]
fn can_repeat_sequence_with_same_seed() {
    let first = DefaultRandom::new_repeatable(42);
    let second = DefaultRandom::new_repeatable(42);

    let first = (0..10).map(|_| first.uniform_int(0, 100)).collect::<Vec<_>>();
    let second = (0..10).map(|_| second.uniform_int(0, 100)).collect::<Vec<_>>();

    assert_eq!(first, second);
}

parameterized_test! {can_handle_probability_bounds, (probability, expected), {
    let random = DefaultRandom::new_repeatable(1);

    assert!((0..100).all(|_| random.is_hit(probability) == expected));
}}

can_handle_probability_bounds! {
    case01_never: (0., false),
    case02_always: (1., true),
    case03_clamped_negative: (-1., false),
    case04_clamped_above_one: (2., true),
    case05_not_a_number: (f64::NAN, false),
}
