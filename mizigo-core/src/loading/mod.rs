//! The loading module searches for an assignment of shipments to vehicles which respects
//! capacity constraints and maximizes a fitness function, using a bounded stochastic
//! local search with elitism. Capacity invariants are enforced on the returned plan,
//! not during the intermediate search.

#[cfg(test)]
#[path = "../../tests/unit/loading/optimizer_test.rs"]
mod optimizer_test;

use crate::error::{EngineError, EngineResult};
use crate::models::{LoadPlan, ObjectiveWeights, OptimizationConstraints, Shipment, ShipmentPriority, Vehicle};
use mizani::prelude::*;
use std::sync::Arc;

mod operator;
use self::operator::LoadVariation;

mod plan;
use self::plan::decode;

/// Search parameters of the load assignment optimizer.
#[derive(Clone, Debug)]
pub struct OptimizerSettings {
    /// Amount of candidate assignments kept in the population.
    pub population_size: usize,
    /// A hard cap on search generations.
    pub max_generations: usize,
    /// Amount of non-improving generations tolerated before an early exit.
    pub stagnation_limit: usize,
    /// A wall-clock budget: the search aborts and returns the best-so-far candidate
    /// once the budget is exceeded.
    pub max_time_secs: Float,
    /// Amount of generations between progress log statements, zero disables logging.
    pub log_interval: usize,
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self { population_size: 50, max_generations: 100, stagnation_limit: 15, max_time_secs: 1., log_interval: 0 }
    }
}

/// An assignment chromosome: one slot per shipment holding the vehicle index, or
/// nothing when the shipment is left unassigned.
pub(crate) type Assignment = Vec<Option<usize>>;

/// A validated, search-ready view of the load assignment problem.
pub(crate) struct ProblemContext {
    pub vehicles: Vec<Vehicle>,
    pub shipments: Vec<Shipment>,
    /// Per-vehicle weight budget: remaining capacity capped by the constraint.
    pub weight_caps: Vec<Float>,
    /// Per-vehicle volume budget, infinite when unconstrained.
    pub volume_caps: Vec<Float>,
    pub weights: ObjectiveWeights,
    pub high_priority_total: usize,
    pub largest_weight_cap: Float,
}

impl ProblemContext {
    fn new(vehicles: &[Vehicle], shipments: &[Shipment], constraints: OptimizationConstraints) -> Self {
        let weight_caps = vehicles
            .iter()
            .map(|vehicle| {
                let available = vehicle.available_capacity();
                constraints.max_weight.map_or(available, |cap| available.min(cap))
            })
            .collect::<Vec<_>>();

        let volume_caps = vehicles.iter().map(|_| constraints.max_volume.unwrap_or(Float::INFINITY)).collect();

        let largest_weight_cap = weight_caps.iter().cloned().fold(0., Float::max);
        let high_priority_total =
            shipments.iter().filter(|shipment| shipment.priority == ShipmentPriority::High).count();

        Self {
            vehicles: vehicles.to_vec(),
            shipments: shipments.to_vec(),
            weight_caps,
            volume_caps,
            weights: constraints.weights,
            high_priority_total,
            largest_weight_cap,
        }
    }
}

/// Searches for the best shipment-to-vehicle assignment under the given constraints.
///
/// Returns an empty plan for an empty backlog and `NoCapacity` for an empty fleet.
/// The returned plan never exceeds vehicle capacity and never assigns a shipment twice;
/// shipments which cannot be placed anywhere are reported in `unassigned`.
pub fn optimize(
    vehicles: &[Vehicle],
    shipments: &[Shipment],
    constraints: Option<OptimizationConstraints>,
    settings: &OptimizerSettings,
    environment: Arc<Environment>,
) -> EngineResult<LoadPlan> {
    let constraints = constraints.unwrap_or_default();
    validate_inputs(vehicles, shipments, &constraints, settings)?;

    if shipments.is_empty() {
        return Ok(LoadPlan::default());
    }

    let context = Arc::new(ProblemContext::new(vehicles, shipments, constraints));

    let config = EvolutionConfigBuilder::default()
        .with_population_size(settings.population_size)
        .with_log_interval(settings.log_interval)
        .build()
        .map_err(|err| EngineError::validation("settings", err.to_string(), "adjust the optimizer settings"))?;

    let termination = CompositeTermination::new(vec![
        Box::new(MaxGeneration::new(settings.max_generations)),
        Box::new(MaxStagnation::new(settings.stagnation_limit)),
        Box::new(MaxTime::new(settings.max_time_secs)),
    ]);

    let evolution = Evolution::new(LoadVariation::new(context.clone()), environment, config);
    let outcome = evolution
        .run(&termination)
        .map_err(|err| EngineError::validation("settings", err.to_string(), "adjust the optimizer settings"))?;

    Ok(decode(&context, &outcome.best.genome))
}

fn validate_inputs(
    vehicles: &[Vehicle],
    shipments: &[Shipment],
    constraints: &OptimizationConstraints,
    settings: &OptimizerSettings,
) -> EngineResult<()> {
    if vehicles.is_empty() {
        return Err(EngineError::NoCapacity {
            cause: "the fleet is empty".to_string(),
            action: "register at least one vehicle before optimizing".to_string(),
        });
    }

    for vehicle in vehicles {
        if !vehicle.capacity.is_finite() || vehicle.capacity < 0. {
            return Err(EngineError::validation(
                "vehicles",
                format!("vehicle '{}' has invalid capacity {}", vehicle.id, vehicle.capacity),
                "provide a non-negative, finite capacity",
            ));
        }

        if !vehicle.current_utilization.is_finite() || !(0. ..=1.).contains(&vehicle.current_utilization) {
            return Err(EngineError::validation(
                "vehicles",
                format!("vehicle '{}' has utilization outside [0, 1]", vehicle.id),
                "provide utilization as a fraction of capacity",
            ));
        }
    }

    let mut seen_ids = std::collections::HashSet::new();
    for shipment in shipments {
        if !shipment.weight.is_finite() || shipment.weight < 0. {
            return Err(EngineError::validation(
                "shipments",
                format!("shipment '{}' has invalid weight {}", shipment.id, shipment.weight),
                "provide a non-negative, finite weight",
            ));
        }

        if !shipment.volume.is_finite() || shipment.volume < 0. {
            return Err(EngineError::validation(
                "shipments",
                format!("shipment '{}' has invalid volume {}", shipment.id, shipment.volume),
                "provide a non-negative, finite volume",
            ));
        }

        if !seen_ids.insert(shipment.id.as_str()) {
            return Err(EngineError::validation(
                "shipments",
                format!("duplicate shipment id '{}'", shipment.id),
                "make shipment ids unique",
            ));
        }
    }

    let weight_sum = constraints.weights.fuel + constraints.weights.time + constraints.weights.cost;
    if (weight_sum - 1.).abs() > 1e-6 {
        return Err(EngineError::validation(
            "constraints.weights",
            format!("fuel + time + cost must sum to 1.0, got {weight_sum}"),
            "normalize the objective weights",
        ));
    }

    for (field, value) in [("constraints.max_weight", constraints.max_weight), ("constraints.max_volume", constraints.max_volume)] {
        if let Some(value) = value {
            if !value.is_finite() || value <= 0. {
                return Err(EngineError::validation(field, format!("must be positive, got {value}"), "drop the cap or make it positive"));
            }
        }
    }

    if settings.population_size < 2 {
        return Err(EngineError::validation(
            "settings.population_size",
            "population size must be at least 2".to_string(),
            "increase the population size",
        ));
    }

    Ok(())
}
