use mizani::prelude::Float;
use serde::{Deserialize, Serialize};

/// A monitored vehicle subsystem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    /// An engine subsystem.
    Engine,
    /// A transmission subsystem.
    Transmission,
    /// A brakes subsystem.
    Brakes,
    /// A tires subsystem.
    Tires,
    /// An electrical subsystem.
    Electrical,
}

impl Component {
    /// All components in the fixed report order.
    pub const ALL: [Component; 5] =
        [Component::Engine, Component::Transmission, Component::Brakes, Component::Tires, Component::Electrical];
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Engine => "engine",
            Self::Transmission => "transmission",
            Self::Brakes => "brakes",
            Self::Tires => "tires",
            Self::Electrical => "electrical",
        };
        write!(f, "{name}")
    }
}

/// A three-level classification of how soon a maintenance action is needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// No action needed beyond the routine calendar.
    Low,
    /// Service within a few weeks.
    Medium,
    /// Immediate attention required.
    High,
}

/// Health state of a single vehicle component.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// A component kind.
    pub component: Component,
    /// Health score in `[0, 100]` range, higher is healthier.
    pub health_score: Float,
    /// An urgency classification.
    pub urgency: Urgency,
    /// Estimated replacement or service cost.
    pub estimated_cost: Float,
    /// Distance left until the next service interval, where the component has one.
    #[serde(default)]
    pub km_to_service: Option<Float>,
    /// True when the component state is a safety concern.
    #[serde(default)]
    pub safety_risk: bool,
}

/// A high-urgency component annotated with its estimated cost.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UrgentItem {
    /// A component kind.
    pub component: Component,
    /// Estimated replacement or service cost.
    pub estimated_cost: Float,
}

/// A maintenance health report computed from a point-in-time vehicle snapshot.
/// Never mutated after construction, only superseded by a newer report.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MaintenanceReport {
    /// A vehicle id.
    pub vehicle_id: String,
    /// Arithmetic mean of the five component scores.
    pub overall_score: Float,
    /// Component predictions in fixed order: engine, transmission, brakes, tires, electrical.
    pub predictions: Vec<ComponentHealth>,
    /// Components with high urgency.
    pub urgent_items: Vec<UrgentItem>,
    /// Ordered, rule-based maintenance actions.
    pub recommended_actions: Vec<String>,
    /// Sum of component cost estimates.
    pub total_cost_estimate: Float,
    /// A suggested scheduling window.
    pub schedule_suggestion: String,
}

/// Recent performance signals of a vehicle. Fields left unset fall back to the
/// vehicle baseline kept in the metrics store.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RecentPerformance {
    /// Days elapsed since the last full service.
    #[serde(default)]
    pub days_since_service: Option<u32>,
    /// Observed engine performance factor in `[0, 1]` range, 1 is nominal.
    #[serde(default)]
    pub performance_factor: Option<Float>,
    /// Amount of hard braking events over the recent telemetry window.
    #[serde(default)]
    pub hard_braking_events: u32,
    /// Amount of voltage drop events over the recent telemetry window.
    #[serde(default)]
    pub voltage_drop_events: u32,
    /// Battery age in years.
    #[serde(default)]
    pub battery_age_years: Option<Float>,
}
