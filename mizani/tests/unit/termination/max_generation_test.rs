use super::*;

parameterized_test! {can_detect_termination, (generation, limit, expected), {
    can_detect_termination_impl(generation, limit, expected);
}}

can_detect_termination! {
    case_01: (11, 10, true),
    case_02: (9, 10, false),
    case_03: (10, 10, true),
}

fn can_detect_termination_impl(generation: usize, limit: usize, expected: bool) {
    let statistics = SearchStatistics { generation, ..SearchStatistics::default() };

    let result = MaxGeneration::new(limit).is_termination(&statistics);

    assert_eq!(result, expected);
}

#[test]
fn can_estimate_progress() {
    let statistics = SearchStatistics { generation: 5, ..SearchStatistics::default() };

    assert_eq!(MaxGeneration::new(10).estimate(&statistics), 0.5);
    assert_eq!(MaxGeneration::new(4).estimate(&statistics), 1.);
}
