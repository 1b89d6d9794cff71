use super::*;

#[test]
fn can_return_weights() {
    let random = DefaultRandom::default();
    let weights = &[100, 50, 20];
    let experiments = 10000_usize;
    let total_sum = weights.iter().sum::<usize>();
    let mut counter = [0_usize; 3];

    (0..experiments).for_each(|_| {
        let idx = random.weighted(weights);
        *counter.get_mut(idx).unwrap() += 1;
    });

    weights.iter().enumerate().for_each(|(idx, weight)| {
        let actual_ratio = counter[idx] as Float / experiments as Float;
        let expected_ratio = *weight as Float / total_sum as Float;

        assert!((actual_ratio - expected_ratio).abs() < 0.05);
    });
}

#[test]
fn can_reproduce_sequence_with_seed() {
    let first = DefaultRandom::with_seed(42);
    let second = DefaultRandom::with_seed(42);

    let first_values = (0..100).map(|_| first.uniform_int(0, 1000)).collect::<Vec<_>>();
    let second_values = (0..100).map(|_| second.uniform_int(0, 1000)).collect::<Vec<_>>();

    assert_eq!(first_values, second_values);
}

#[test]
fn can_respect_value_bounds() {
    let random = DefaultRandom::with_seed(123);

    (0..1000).for_each(|_| {
        let integral = random.uniform_int(-5, 5);
        assert!((-5..=5).contains(&integral));

        let real = random.uniform_real(0.25, 0.75);
        assert!((0.25..0.75).contains(&real));
    });

    assert_eq!(random.uniform_int(7, 7), 7);
    assert_eq!(random.uniform_real(0.5, 0.5), 0.5);
}
