#[cfg(test)]
#[path = "../../tests/unit/loading/plan_test.rs"]
mod plan_test;

use super::{Assignment, ProblemContext};
use crate::models::{LoadPlan, Shipment, ShipmentPriority, Vehicle, VehicleAssignment};
use mizani::prelude::Float;
use rustc_hash::FxHashMap;

/// A per-dispatch cost used to estimate savings versus one-shipment-per-vehicle dispatch.
const DISPATCH_COST: Float = 2500.;

/// A utilization level below which a dispatched vehicle is flagged as wasteful.
const LOW_UTILIZATION: Float = 0.5;

fn priority_rank(priority: ShipmentPriority) -> u8 {
    match priority {
        ShipmentPriority::High => 0,
        ShipmentPriority::Medium => 1,
        ShipmentPriority::Low => 2,
    }
}

/// Converts the best found chromosome into a valid `LoadPlan`, enforcing the plan
/// invariants the search itself does not guarantee: evicts capacity overflow per
/// vehicle (keeping higher priority, then earlier shipments), then re-places evicted
/// and unassigned shipments into remaining capacity best-effort. Whatever still does
/// not fit is reported in `unassigned`, never dropped.
pub(crate) fn decode(context: &ProblemContext, genome: &Assignment) -> LoadPlan {
    let vehicle_count = context.vehicles.len();

    let mut per_vehicle: Vec<Vec<usize>> = vec![vec![]; vehicle_count];
    let mut pool: Vec<usize> = vec![];

    for (index, slot) in genome.iter().enumerate() {
        match *slot {
            Some(vehicle) if vehicle < vehicle_count => per_vehicle[vehicle].push(index),
            _ => pool.push(index),
        }
    }

    let mut loads = vec![0.; vehicle_count];
    let mut volumes = vec![0.; vehicle_count];

    // Eviction pass: within a vehicle, higher priority keeps its seat, ties keep input order.
    for vehicle in 0..vehicle_count {
        let mut candidates = std::mem::take(&mut per_vehicle[vehicle]);
        candidates.sort_by_key(|&index| priority_rank(context.shipments[index].priority));

        for index in candidates {
            let shipment = &context.shipments[index];
            if fits(context, vehicle, loads[vehicle], volumes[vehicle], shipment) {
                loads[vehicle] += shipment.weight;
                volumes[vehicle] += shipment.volume;
                per_vehicle[vehicle].push(index);
            } else {
                pool.push(index);
            }
        }
    }

    // Completion pass: place what is left, high priority and heavy shipments first.
    pool.sort_by(|&a, &b| {
        let (left, right) = (&context.shipments[a], &context.shipments[b]);
        priority_rank(left.priority)
            .cmp(&priority_rank(right.priority))
            .then(right.weight.partial_cmp(&left.weight).unwrap_or(std::cmp::Ordering::Equal))
            .then(a.cmp(&b))
    });

    let mut unassigned_indices = vec![];
    for index in pool {
        let shipment = &context.shipments[index];
        let slot = (0..vehicle_count).find(|&vehicle| fits(context, vehicle, loads[vehicle], volumes[vehicle], shipment));

        match slot {
            Some(vehicle) => {
                loads[vehicle] += shipment.weight;
                volumes[vehicle] += shipment.volume;
                per_vehicle[vehicle].push(index);
            }
            None => unassigned_indices.push(index),
        }
    }

    unassigned_indices.sort_unstable();

    let assignments = context
        .vehicles
        .iter()
        .enumerate()
        .map(|(vehicle, descriptor)| {
            let mut indices = std::mem::take(&mut per_vehicle[vehicle]);
            indices.sort_unstable();

            let utilization = if descriptor.capacity > 0. {
                descriptor.current_utilization + loads[vehicle] / descriptor.capacity
            } else {
                0.
            };

            VehicleAssignment {
                vehicle_id: descriptor.id.clone(),
                route_label: route_label(descriptor, &indices, &context.shipments),
                shipment_ids: indices.into_iter().map(|index| context.shipments[index].id.clone()).collect(),
                utilization,
            }
        })
        .collect::<Vec<_>>();

    let used = assignments.iter().filter(|assignment| !assignment.shipment_ids.is_empty()).collect::<Vec<_>>();
    let efficiency = if used.is_empty() {
        0.
    } else {
        used.iter().map(|assignment| assignment.utilization).sum::<Float>() / used.len() as Float
    };

    let assigned_count = genome.len() - unassigned_indices.len();
    let cost_savings = assigned_count.saturating_sub(used.len()) as Float * DISPATCH_COST;

    let recommendations = build_recommendations(context, &assignments, &unassigned_indices);

    LoadPlan {
        assignments,
        unassigned: unassigned_indices.into_iter().map(|index| context.shipments[index].id.clone()).collect(),
        efficiency,
        cost_savings,
        recommendations,
    }
}

fn fits(context: &ProblemContext, vehicle: usize, load: Float, volume: Float, shipment: &Shipment) -> bool {
    load + shipment.weight <= context.weight_caps[vehicle] && volume + shipment.volume <= context.volume_caps[vehicle]
}

/// Labels the load by its dominant origin-destination pair, falling back to the
/// vehicle home base for an idle vehicle.
fn route_label(vehicle: &Vehicle, indices: &[usize], shipments: &[Shipment]) -> String {
    let mut counts: Vec<((&str, &str), usize)> = vec![];
    for &index in indices {
        let shipment = &shipments[index];
        if shipment.destination.is_empty() {
            continue;
        }

        let pair = (shipment.origin.as_str(), shipment.destination.as_str());
        match counts.iter_mut().find(|(existing, _)| *existing == pair) {
            Some((_, count)) => *count += 1,
            None => counts.push((pair, 1)),
        }
    }

    let dominant = counts.iter().max_by_key(|(_, count)| *count).map(|(pair, _)| *pair);

    match dominant {
        Some(("", destination)) => destination.to_string(),
        Some((origin, destination)) => format!("{origin} -> {destination}"),
        None => vehicle.home_base.clone().unwrap_or_else(|| "unrouted".to_string()),
    }
}

fn build_recommendations(
    context: &ProblemContext,
    assignments: &[VehicleAssignment],
    unassigned: &[usize],
) -> Vec<String> {
    let mut recommendations = vec![];

    let by_id: FxHashMap<&str, &Shipment> =
        context.shipments.iter().map(|shipment| (shipment.id.as_str(), shipment)).collect();

    // A destination split across vehicles is a consolidation opportunity.
    let mut destination_vehicles: FxHashMap<&str, usize> = FxHashMap::default();
    for assignment in assignments {
        let mut seen: Vec<&str> = vec![];
        for id in &assignment.shipment_ids {
            if let Some(shipment) = by_id.get(id.as_str()) {
                let destination = shipment.destination.as_str();
                if !destination.is_empty() && !seen.contains(&destination) {
                    seen.push(destination);
                    *destination_vehicles.entry(destination).or_insert(0) += 1;
                }
            }
        }
    }

    let split_destination = context
        .shipments
        .iter()
        .map(|shipment| shipment.destination.as_str())
        .find(|destination| destination_vehicles.get(destination).is_some_and(|&count| count >= 2));

    if let Some(destination) = split_destination {
        recommendations
            .push(format!("Consolidate shipments bound for {destination} onto fewer vehicles to cut dispatch costs"));
    }

    let has_urgent_cargo =
        context.shipments.iter().any(|shipment| shipment.priority == ShipmentPriority::High || shipment.perishable);
    if has_urgent_cargo {
        recommendations.push("Dispatch vehicles carrying high-priority or perishable cargo first".to_string());
    }

    for assignment in assignments {
        if !assignment.shipment_ids.is_empty() && assignment.utilization < LOW_UTILIZATION {
            recommendations.push(format!(
                "Vehicle {} departs below half capacity; consider merging its load",
                assignment.vehicle_id
            ));
        }
    }

    if !unassigned.is_empty() {
        recommendations.push(format!(
            "{} shipment(s) exceed the remaining fleet capacity; schedule a follow-up dispatch",
            unassigned.len()
        ));
    }

    recommendations
}
