#[cfg(test)]
#[path = "../../tests/unit/loading/operator_test.rs"]
mod operator_test;

use super::{Assignment, ProblemContext};
use crate::models::ShipmentPriority;
use mizani::prelude::{Float, Random, VariationOperator};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// A floor applied to capacity denominators in penalty terms.
const MIN_CAP: Float = 1e-3;

/// Probability to leave a shipment unassigned when seeding the initial population,
/// keeps some slack in the gene pool.
const INITIAL_SKIP_PROBABILITY: Float = 0.1;

/// Probability that a mutated slot becomes unassigned instead of moving to a vehicle.
const MUTATION_DROP_PROBABILITY: Float = 0.15;

/// Variation logic of the load assignment search. Initial candidates are produced by
/// randomly distributing shipments across vehicles with only a loose pre-filter; hard
/// capacity checks happen at decode time, the search itself only pays fitness penalties.
pub(crate) struct LoadVariation {
    context: Arc<ProblemContext>,
}

impl LoadVariation {
    pub fn new(context: Arc<ProblemContext>) -> Self {
        Self { context }
    }

    fn random_slot(&self, random: &dyn Random) -> usize {
        random.uniform_int(0, self.context.vehicles.len() as i32 - 1) as usize
    }
}

impl VariationOperator for LoadVariation {
    type Genome = Assignment;

    fn create(&self, random: &dyn Random) -> Self::Genome {
        self.context
            .shipments
            .iter()
            .map(|shipment| {
                if shipment.weight > self.context.largest_weight_cap {
                    return None;
                }

                if random.is_hit(INITIAL_SKIP_PROBABILITY) {
                    None
                } else {
                    Some(self.random_slot(random))
                }
            })
            .collect()
    }

    fn combine(&self, a: &Self::Genome, b: &Self::Genome, random: &dyn Random) -> Self::Genome {
        a.iter().zip(b.iter()).map(|(&left, &right)| if random.is_head_not_tails() { left } else { right }).collect()
    }

    fn mutate(&self, mut genome: Self::Genome, random: &dyn Random) -> Self::Genome {
        let moves = random.uniform_int(1, 3);

        for _ in 0..moves {
            let index = random.uniform_int(0, genome.len() as i32 - 1) as usize;
            genome[index] =
                if random.is_hit(MUTATION_DROP_PROBABILITY) { None } else { Some(self.random_slot(random)) };
        }

        genome
    }

    fn evaluate(&self, genome: &Self::Genome) -> Float {
        fitness(&self.context, genome)
    }
}

/// Evaluates assignment fitness: a base of 100, a penalty proportional to the overage
/// of every vehicle exceeding its budget, and rewards scaled by the objective weights
/// for placing high-priority shipments, utilizing aggregate capacity, and consolidating
/// same-destination shipments.
pub(crate) fn fitness(context: &ProblemContext, genome: &Assignment) -> Float {
    let vehicle_count = context.vehicles.len();
    let mut loads = vec![0.; vehicle_count];
    let mut volumes = vec![0.; vehicle_count];
    let mut placed_high = 0_usize;
    let mut assigned_count = 0_usize;
    let mut assigned_weight = 0.;

    for (shipment, slot) in context.shipments.iter().zip(genome.iter()) {
        if let Some(vehicle) = *slot {
            loads[vehicle] += shipment.weight;
            volumes[vehicle] += shipment.volume;
            assigned_count += 1;
            assigned_weight += shipment.weight;

            if shipment.priority == ShipmentPriority::High {
                placed_high += 1;
            }
        }
    }

    let mut score = 100.;

    for vehicle in 0..vehicle_count {
        let weight_cap = context.weight_caps[vehicle];
        if loads[vehicle] > weight_cap {
            score -= (loads[vehicle] - weight_cap) / weight_cap.max(MIN_CAP) * 40.;
        }

        let volume_cap = context.volume_caps[vehicle];
        if volumes[vehicle] > volume_cap {
            score -= (volumes[vehicle] - volume_cap) / volume_cap.max(MIN_CAP) * 40.;
        }
    }

    let high_ratio = if context.high_priority_total > 0 {
        placed_high as Float / context.high_priority_total as Float
    } else {
        1.
    };

    let total_cap = context.weight_caps.iter().sum::<Float>();
    let aggregate_utilization = if total_cap > 0. { (assigned_weight / total_cap).min(1.) } else { 0. };

    let assigned_ratio = assigned_count as Float / context.shipments.len() as Float;

    score += context.weights.time * high_ratio * 20.;
    score += context.weights.fuel * aggregate_utilization * 15.;
    score += context.weights.cost * consolidation_ratio(context, genome, assigned_count) * 10.;
    score += assigned_ratio * 5.;

    score
}

/// Returns the fraction of assigned shipments which share a destination with another
/// shipment on the same vehicle.
fn consolidation_ratio(context: &ProblemContext, genome: &Assignment, assigned_count: usize) -> Float {
    if assigned_count == 0 {
        return 0.;
    }

    let mut groups: FxHashMap<(usize, &str), usize> = FxHashMap::default();
    for (shipment, slot) in context.shipments.iter().zip(genome.iter()) {
        if let Some(vehicle) = *slot {
            if !shipment.destination.is_empty() {
                *groups.entry((vehicle, shipment.destination.as_str())).or_insert(0) += 1;
            }
        }
    }

    let consolidated = groups.values().filter(|&&count| count >= 2).sum::<usize>();

    consolidated as Float / assigned_count as Float
}
