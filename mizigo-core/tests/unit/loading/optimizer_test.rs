use super::*;
use crate::helpers::builders::{create_routed_shipment, create_shipment, create_test_environment, create_vehicle};
use proptest::prelude::*;
use std::collections::HashSet;

fn create_fast_settings() -> OptimizerSettings {
    OptimizerSettings { population_size: 10, max_generations: 10, stagnation_limit: 5, ..OptimizerSettings::default() }
}

#[test]
fn can_reject_empty_fleet() {
    let result =
        optimize(&[], &[create_shipment("s1", 100.)], None, &OptimizerSettings::default(), create_test_environment(1));

    assert!(matches!(result, Err(EngineError::NoCapacity { .. })));
}

#[test]
fn can_return_empty_plan_for_empty_backlog() {
    let vehicles = vec![create_vehicle("v1", 7000.)];

    let plan = optimize(&vehicles, &[], None, &OptimizerSettings::default(), create_test_environment(1)).unwrap();

    assert!(plan.assignments.is_empty());
    assert!(plan.unassigned.is_empty());
    assert_eq!(plan.efficiency, 0.);
}

#[test]
fn can_reject_unnormalized_objective_weights() {
    let vehicles = vec![create_vehicle("v1", 7000.)];
    let shipments = vec![create_shipment("s1", 100.)];
    let constraints = OptimizationConstraints {
        weights: ObjectiveWeights { fuel: 0.5, time: 0.5, cost: 0.5 },
        ..OptimizationConstraints::default()
    };

    let result =
        optimize(&vehicles, &shipments, Some(constraints), &OptimizerSettings::default(), create_test_environment(1));

    match result {
        Err(EngineError::Validation { field, .. }) => assert_eq!(field, "constraints.weights"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

parameterized_test! {can_reject_malformed_backlog, (weight, volume, id_a, id_b), {
    can_reject_malformed_backlog_impl(weight, volume, id_a, id_b);
}}

can_reject_malformed_backlog! {
    case_01_negative_weight: (-1., 0., "s1", "s2"),
    case_02_non_finite_volume: (1., Float::NAN, "s1", "s2"),
    case_03_duplicate_ids: (1., 0., "s1", "s1"),
}

fn can_reject_malformed_backlog_impl(weight: Float, volume: Float, id_a: &str, id_b: &str) {
    let vehicles = vec![create_vehicle("v1", 7000.)];
    let shipments =
        vec![Shipment { volume, ..create_shipment(id_a, weight) }, create_shipment(id_b, 100.)];

    let result = optimize(&vehicles, &shipments, None, &OptimizerSettings::default(), create_test_environment(1));

    match result {
        Err(EngineError::Validation { field, .. }) => assert_eq!(field, "shipments"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn can_split_backlog_exceeding_single_vehicle() {
    let vehicles = vec![create_vehicle("V1", 7000.)];
    let shipments = vec![create_shipment("S1", 3000.), create_shipment("S2", 5000.)];

    let plan =
        optimize(&vehicles, &shipments, None, &OptimizerSettings::default(), create_test_environment(42)).unwrap();

    // both shipments can never ride together: 3000 + 5000 exceeds the capacity
    assert_eq!(plan.assignments[0].shipment_ids.len(), 1);
    assert_eq!(plan.unassigned.len(), 1);
    let assigned_weight = if plan.assignments[0].shipment_ids[0] == "S1" { 3000. } else { 5000. };
    assert!(assigned_weight <= 7000.);
}

#[test]
fn can_place_whole_backlog_when_fleet_has_capacity() {
    let vehicles = vec![create_vehicle("v1", 7000.), create_vehicle("v2", 7000.)];
    let shipments = vec![create_shipment("s1", 3000.), create_shipment("s2", 4000.), create_shipment("s3", 5000.)];

    let plan =
        optimize(&vehicles, &shipments, None, &OptimizerSettings::default(), create_test_environment(42)).unwrap();

    assert!(plan.unassigned.is_empty());
    assert!(plan.efficiency > 0.);
}

#[test]
fn can_prefer_placing_high_priority_shipments() {
    let vehicles = vec![create_vehicle("v1", 5000.)];
    let shipments = vec![
        create_routed_shipment("bulk", 5000., ShipmentPriority::Low, "kisumu"),
        create_routed_shipment("urgent", 4000., ShipmentPriority::High, "kisumu"),
    ];

    let plan =
        optimize(&vehicles, &shipments, None, &OptimizerSettings::default(), create_test_environment(42)).unwrap();

    assert!(plan.assignments[0].shipment_ids.contains(&"urgent".to_string()));
    assert_eq!(plan.unassigned, vec!["bulk"]);
}

#[test]
fn can_reproduce_plan_with_seed() {
    let vehicles = vec![create_vehicle("v1", 7000.), create_vehicle("v2", 4000.)];
    let shipments = (0..20).map(|idx| create_shipment(&format!("s{idx}"), 100. + idx as Float * 250.)).collect::<Vec<_>>();
    // a generous time budget keeps termination driven by generations alone
    let settings = OptimizerSettings { max_time_secs: 3600., ..OptimizerSettings::default() };

    let first = optimize(&vehicles, &shipments, None, &settings, create_test_environment(13)).unwrap();
    let second = optimize(&vehicles, &shipments, None, &settings, create_test_environment(13)).unwrap();

    assert_eq!(serde_json::to_string(&first).unwrap(), serde_json::to_string(&second).unwrap());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]
    #[test]
    fn can_keep_plan_invariants_on_random_fleets(
        capacities in prop::collection::vec(0_f64..10_000., 1..20),
        weights in prop::collection::vec(0_f64..5_000., 0..100),
    ) {
        let vehicles = capacities
            .iter()
            .enumerate()
            .map(|(idx, &capacity)| create_vehicle(&format!("v{idx}"), capacity))
            .collect::<Vec<_>>();
        let shipments = weights
            .iter()
            .enumerate()
            .map(|(idx, &weight)| create_shipment(&format!("s{idx}"), weight))
            .collect::<Vec<_>>();

        let plan =
            optimize(&vehicles, &shipments, None, &create_fast_settings(), create_test_environment(7)).unwrap();

        // no vehicle exceeds its capacity
        for assignment in &plan.assignments {
            let vehicle = vehicles.iter().find(|vehicle| vehicle.id == assignment.vehicle_id).unwrap();
            let load = assignment
                .shipment_ids
                .iter()
                .map(|id| shipments.iter().find(|shipment| &shipment.id == id).unwrap().weight)
                .sum::<Float>();

            prop_assert!(load <= vehicle.capacity + 1e-6);
        }

        // every shipment is either assigned exactly once or reported as unassigned
        let mut seen = HashSet::new();
        let assigned = plan.assignments.iter().flat_map(|assignment| assignment.shipment_ids.iter());
        for id in assigned.chain(plan.unassigned.iter()) {
            prop_assert!(seen.insert(id.clone()), "shipment {} appears twice", id);
        }
        prop_assert_eq!(seen.len(), shipments.len());
    }
}
