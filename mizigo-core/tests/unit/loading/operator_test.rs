use super::*;
use crate::helpers::builders::{create_routed_shipment, create_shipment, create_test_environment, create_vehicle};
use crate::models::OptimizationConstraints;

fn create_context(vehicles: Vec<crate::models::Vehicle>, shipments: Vec<crate::models::Shipment>) -> Arc<ProblemContext> {
    Arc::new(ProblemContext::new(&vehicles, &shipments, OptimizationConstraints::default()))
}

fn create_small_context() -> Arc<ProblemContext> {
    create_context(
        vec![create_vehicle("v1", 5000.), create_vehicle("v2", 5000.)],
        (0..10).map(|idx| create_shipment(&format!("s{idx}"), 100.)).collect(),
    )
}

#[test]
fn can_create_genome_with_slot_per_shipment() {
    let environment = create_test_environment(1);
    let context = create_small_context();
    let variation = LoadVariation::new(context.clone());

    let genome = variation.create(environment.random.as_ref());

    assert_eq!(genome.len(), context.shipments.len());
    assert!(genome.iter().all(|slot| slot.map_or(true, |vehicle| vehicle < context.vehicles.len())));
}

#[test]
fn can_prefilter_shipment_no_vehicle_can_carry() {
    let context = create_context(
        vec![create_vehicle("v1", 5000.)],
        vec![create_shipment("light", 100.), create_shipment("oversized", 9000.)],
    );
    let variation = LoadVariation::new(context);

    for seed in 0..20 {
        let environment = create_test_environment(seed);
        let genome = variation.create(environment.random.as_ref());

        assert_eq!(genome[1], None);
    }
}

#[test]
fn can_combine_genes_from_both_parents() {
    let environment = create_test_environment(5);
    let context = create_small_context();
    let variation = LoadVariation::new(context.clone());

    let parent_a: Assignment = vec![Some(0); context.shipments.len()];
    let parent_b: Assignment = vec![Some(1); context.shipments.len()];

    let child = variation.combine(&parent_a, &parent_b, environment.random.as_ref());

    assert_eq!(child.len(), context.shipments.len());
    assert!(child.iter().all(|slot| matches!(slot, Some(0) | Some(1))));
}

#[test]
fn can_mutate_limited_amount_of_slots() {
    let context = create_small_context();
    let variation = LoadVariation::new(context.clone());

    for seed in 0..20 {
        let environment = create_test_environment(seed);
        let original: Assignment = vec![Some(0); context.shipments.len()];

        let mutated = variation.mutate(original.clone(), environment.random.as_ref());

        let changed = original.iter().zip(mutated.iter()).filter(|(a, b)| a != b).count();
        assert!(changed <= 3);
    }
}

#[test]
fn can_penalize_capacity_overage() {
    let context = create_context(
        vec![create_vehicle("v1", 1000.), create_vehicle("v2", 1000.)],
        vec![create_shipment("s1", 800.), create_shipment("s2", 800.)],
    );

    let overloaded = fitness(&context, &vec![Some(0), Some(0)]);
    let spread = fitness(&context, &vec![Some(0), Some(1)]);

    assert!(spread > overloaded);
}

#[test]
fn can_reward_high_priority_placement() {
    let context = create_context(
        vec![create_vehicle("v1", 5000.)],
        vec![create_routed_shipment("urgent", 1000., ShipmentPriority::High, "kisumu")],
    );

    let placed = fitness(&context, &vec![Some(0)]);
    let skipped = fitness(&context, &vec![None]);

    assert!(placed > skipped);
}

#[test]
fn can_reward_same_destination_consolidation() {
    let context = create_context(
        vec![create_vehicle("v1", 5000.), create_vehicle("v2", 5000.)],
        vec![
            create_routed_shipment("s1", 500., ShipmentPriority::Medium, "kisumu"),
            create_routed_shipment("s2", 500., ShipmentPriority::Medium, "kisumu"),
        ],
    );

    let consolidated = fitness(&context, &vec![Some(0), Some(0)]);
    let split = fitness(&context, &vec![Some(0), Some(1)]);

    assert!(consolidated > split);
}

#[test]
fn can_keep_fitness_finite_for_zero_capacity_fleet() {
    let context = create_context(vec![create_vehicle("v1", 0.)], vec![create_shipment("s1", 100.)]);

    let score = fitness(&context, &vec![Some(0)]);

    assert!(score.is_finite());
}
