use mizani::prelude::Float;
use serde::{Deserialize, Serialize};

/// A shipment priority tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShipmentPriority {
    /// Must be placed first and dispatched early.
    High,
    /// A default tier.
    Medium,
    /// Can wait for spare capacity.
    Low,
}

impl Default for ShipmentPriority {
    fn default() -> Self {
        Self::Medium
    }
}

/// A fleet vehicle available for load assignment.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Vehicle {
    /// A vehicle id.
    pub id: String,
    /// Weight capacity in weight units.
    pub capacity: Float,
    /// Fraction of capacity already consumed before this assignment, in `[0, 1]` range.
    #[serde(default)]
    pub current_utilization: Float,
    /// A home route or base of the vehicle.
    #[serde(default)]
    pub home_base: Option<String>,
}

impl Vehicle {
    /// Creates a new vehicle with a free capacity.
    pub fn new(id: &str, capacity: Float) -> Self {
        Self { id: id.to_string(), capacity, current_utilization: 0., home_base: None }
    }

    /// Returns capacity still available for new shipments.
    pub fn available_capacity(&self) -> Float {
        self.capacity * (1. - self.current_utilization)
    }
}

/// A shipment waiting for assignment.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Shipment {
    /// A shipment id.
    pub id: String,
    /// Shipment weight in weight units.
    pub weight: Float,
    /// Shipment volume in volume units.
    #[serde(default)]
    pub volume: Float,
    /// A priority tier.
    #[serde(default)]
    pub priority: ShipmentPriority,
    /// An origin name.
    #[serde(default)]
    pub origin: String,
    /// A destination name.
    #[serde(default)]
    pub destination: String,
    /// True if the cargo is perishable and should be dispatched early.
    #[serde(default)]
    pub perishable: bool,
}

impl Shipment {
    /// Creates a new medium-priority shipment.
    pub fn new(id: &str, weight: Float) -> Self {
        Self {
            id: id.to_string(),
            weight,
            volume: 0.,
            priority: ShipmentPriority::default(),
            origin: String::default(),
            destination: String::default(),
            perishable: false,
        }
    }
}

/// Objective weighting used by the load assignment fitness function.
/// The three weights must sum up to 1.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ObjectiveWeights {
    /// A fuel objective weight.
    pub fuel: Float,
    /// A time objective weight.
    pub time: Float,
    /// A cost objective weight.
    pub cost: Float,
}

impl Default for ObjectiveWeights {
    fn default() -> Self {
        Self { fuel: 0.3, time: 0.4, cost: 0.3 }
    }
}

/// Constraints applied to a load assignment request.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OptimizationConstraints {
    /// A hard per-vehicle weight cap, applied on top of vehicle capacity.
    #[serde(default)]
    pub max_weight: Option<Float>,
    /// A hard per-vehicle volume cap.
    #[serde(default)]
    pub max_volume: Option<Float>,
    /// Objective weighting, defaults to fuel 0.3 / time 0.4 / cost 0.3.
    #[serde(default)]
    pub weights: ObjectiveWeights,
}

/// A single vehicle assignment within a load plan.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VehicleAssignment {
    /// A vehicle id.
    pub vehicle_id: String,
    /// Ids of assigned shipments, in input order.
    pub shipment_ids: Vec<String>,
    /// A label of the dominant origin-destination pair of the load.
    pub route_label: String,
    /// Fraction of the vehicle capacity consumed by the assigned shipments.
    pub utilization: Float,
}

/// A load assignment plan. Invariants: no vehicle exceeds its capacity, every shipment
/// is assigned at most once, and shipments that cannot be placed anywhere are reported
/// in `unassigned` rather than silently dropped.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LoadPlan {
    /// Per-vehicle assignments, in fleet input order.
    pub assignments: Vec<VehicleAssignment>,
    /// Ids of shipments which could not be placed.
    pub unassigned: Vec<String>,
    /// Mean utilization across vehicles carrying at least one shipment.
    pub efficiency: Float,
    /// Estimated cost reduction versus a naive one-shipment-per-vehicle dispatch.
    pub cost_savings: Float,
    /// Rule-based recommendations for the dispatcher.
    pub recommendations: Vec<String>,
}
