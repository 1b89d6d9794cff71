//! This module reimports commonly used types.

pub use crate::engine::Engine;

pub use crate::error::EngineError;
pub use crate::error::EngineResult;

pub use crate::loading::OptimizerSettings;

pub use crate::metrics::CorridorProfile;
pub use crate::metrics::MetricsStore;
pub use crate::metrics::PeakWindow;
pub use crate::metrics::VehicleBaseline;

pub use crate::models::Component;
pub use crate::models::ComponentHealth;
pub use crate::models::EstimatedSavings;
pub use crate::models::LoadPlan;
pub use crate::models::MaintenanceReport;
pub use crate::models::ObjectiveWeights;
pub use crate::models::OptimizationConstraints;
pub use crate::models::RecentPerformance;
pub use crate::models::RoutePriority;
pub use crate::models::RouteRequest;
pub use crate::models::ScoredRoute;
pub use crate::models::Shipment;
pub use crate::models::ShipmentPriority;
pub use crate::models::Urgency;
pub use crate::models::Vehicle;

pub use crate::routing::Departure;
