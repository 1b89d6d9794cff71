use super::*;
use crate::helpers::builders::{create_test_environment, create_test_profile};

#[test]
fn can_generate_three_named_alternatives() {
    let environment = create_test_environment(1);
    let profile = create_test_profile();

    let candidates = generate_candidates(&profile, "nairobi cbd", "mombasa port", environment.random.as_ref()).unwrap();

    assert_eq!(candidates.len(), 3);
    assert_eq!(
        candidates.iter().map(|candidate| candidate.id.as_str()).collect::<Vec<_>>(),
        vec!["express-highway", "southern-bypass", "economy-corridor"]
    );
}

#[test]
fn can_keep_relative_ordering_across_seeds() {
    let profile = create_test_profile();

    for seed in 0..25 {
        let environment = create_test_environment(seed);
        let candidates =
            generate_candidates(&profile, "nairobi cbd", "mombasa port", environment.random.as_ref()).unwrap();

        let express = &candidates[0];
        let bypass = &candidates[1];
        let economy = &candidates[2];

        // the fastest is always fastest, the cheapest is always cheapest
        assert!(express.estimated_time_hours < bypass.estimated_time_hours);
        assert!(bypass.estimated_time_hours < economy.estimated_time_hours);
        assert!(economy.total_cost() < bypass.total_cost());
        assert!(bypass.total_cost() < express.total_cost());
        assert!(bypass.reliability_score > express.reliability_score);
        assert!(bypass.traffic_risk < express.traffic_risk.min(economy.traffic_risk));
    }
}

#[test]
fn can_keep_attributes_within_declared_tolerance() {
    let environment = create_test_environment(8);
    let profile = create_test_profile();

    let candidates = generate_candidates(&profile, "nairobi cbd", "mombasa port", environment.random.as_ref()).unwrap();

    let express = &candidates[0];
    let expected_time = profile.baseline_time_hours() * 0.85;

    assert!((express.estimated_time_hours - expected_time).abs() <= expected_time * 0.03 + 1e-9);
    assert!(candidates.iter().all(|candidate| (0. ..=1.).contains(&candidate.reliability_score)));
    assert!(candidates.iter().all(|candidate| (0. ..=1.).contains(&candidate.traffic_risk)));
    assert!(candidates.iter().all(|candidate| (0. ..=1.).contains(&candidate.weather_risk)));
}

parameterized_test! {can_reject_blank_locations, (origin, destination, field), {
    can_reject_blank_locations_impl(origin, destination, field);
}}

can_reject_blank_locations! {
    case_01: ("", "mombasa port", "origin"),
    case_02: ("nairobi cbd", "  ", "destination"),
}

fn can_reject_blank_locations_impl(origin: &str, destination: &str, field: &str) {
    let environment = create_test_environment(1);
    let profile = create_test_profile();

    let result = generate_candidates(&profile, origin, destination, environment.random.as_ref());

    match result {
        Err(EngineError::Validation { field: actual, .. }) => assert_eq!(actual, field),
        other => panic!("expected validation error, got {other:?}"),
    }
}
