use crate::error::{EngineError, EngineResult};
use mizani::prelude::Float;
use serde::{Deserialize, Serialize};

/// Scoring priority which selects the weighted blend used to rank route candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutePriority {
    /// Favors transit time.
    Speed,
    /// Favors direct cost.
    Cost,
    /// Favors historical reliability.
    Safety,
    /// A default blend of all factors.
    Balanced,
}

impl RoutePriority {
    /// Parses priority from its string form.
    pub fn parse(value: &str) -> EngineResult<Self> {
        match value.trim().to_lowercase().as_str() {
            "speed" => Ok(Self::Speed),
            "cost" => Ok(Self::Cost),
            "safety" => Ok(Self::Safety),
            "balanced" | "" => Ok(Self::Balanced),
            other => Err(EngineError::validation(
                "priority",
                format!("unknown priority: '{other}'"),
                "use one of: speed, cost, safety, balanced",
            )),
        }
    }
}

/// A request to score routes between an origin and a destination.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteRequest {
    /// An origin name, e.g. "Nairobi CBD".
    pub origin: String,
    /// A destination name, e.g. "Mombasa Port".
    pub destination: String,
    /// A vehicle type label, carried into insights.
    #[serde(default = "default_vehicle_type")]
    pub vehicle_type: String,
    /// A cargo type label, carried into insights.
    #[serde(default = "default_cargo")]
    pub cargo: String,
    /// A scoring priority: speed, cost, safety or balanced.
    #[serde(default = "default_priority")]
    pub priority: String,
    /// A planned departure time as RFC3339 string. When omitted, a neutral midweek
    /// off-peak departure is assumed.
    #[serde(default)]
    pub departure_time: Option<String>,
}

fn default_vehicle_type() -> String {
    "truck".to_string()
}

fn default_cargo() -> String {
    "general".to_string()
}

fn default_priority() -> String {
    "balanced".to_string()
}

impl RouteRequest {
    /// Creates a new request with default vehicle, cargo and priority.
    pub fn new(origin: &str, destination: &str) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            vehicle_type: default_vehicle_type(),
            cargo: default_cargo(),
            priority: default_priority(),
            departure_time: None,
        }
    }
}

/// An alternative route generated for a single routing request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteCandidate {
    /// A candidate id.
    pub id: String,
    /// A human-readable name.
    pub name: String,
    /// Route distance in km.
    pub distance_km: Float,
    /// Estimated transit time in hours.
    pub estimated_time_hours: Float,
    /// Direct fuel cost.
    pub fuel_cost: Float,
    /// Toll cost.
    pub toll_cost: Float,
    /// Historical reliability score in `[0, 1]` range.
    pub reliability_score: Float,
    /// Traffic risk in `[0, 1]` range.
    pub traffic_risk: Float,
    /// Weather risk in `[0, 1]` range.
    pub weather_risk: Float,
}

impl RouteCandidate {
    /// Returns total direct cost of the route.
    pub fn total_cost(&self) -> Float {
        self.fuel_cost + self.toll_cost
    }
}

/// Estimated savings of the selected route versus the corridor baseline.
/// All values are non-negative.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EstimatedSavings {
    /// Saved transit time in hours.
    pub time_hours: Float,
    /// Saved fuel cost.
    pub fuel_cost: Float,
    /// Saved total cost.
    pub total_cost: Float,
}

/// A scored, not selected alternative kept for presentation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteAlternative {
    /// A candidate id.
    pub id: String,
    /// A human-readable name.
    pub name: String,
    /// An adjusted score, comparable only within one request's candidate set.
    pub ai_score: Float,
}

/// The selected route with its score, confidence, and explanation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScoredRoute {
    /// The winning candidate.
    pub route: RouteCandidate,
    /// An adjusted score, comparable only within one request's candidate set.
    pub ai_score: Float,
    /// Confidence in `[0, 100]` range.
    pub confidence: Float,
    /// Ordered, human-readable explanation of the selection.
    pub insights: Vec<String>,
    /// Estimated savings versus the corridor baseline.
    pub estimated_savings: EstimatedSavings,
    /// Scored but not selected alternatives, ordered by score.
    pub alternatives: Vec<RouteAlternative>,
}
