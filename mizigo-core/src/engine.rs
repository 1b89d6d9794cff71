//! This module exposes the engine facade consumed by the presentation layer. The engine
//! is a library, not a network service: its only boundary is this function-call API.

#[cfg(test)]
#[path = "../tests/unit/engine_test.rs"]
mod engine_test;

use crate::error::EngineResult;
use crate::loading::{optimize, OptimizerSettings};
use crate::maintenance::predict;
use crate::metrics::MetricsStore;
use crate::models::{
    LoadPlan, MaintenanceReport, OptimizationConstraints, RecentPerformance, RoutePriority, RouteRequest, ScoredRoute,
    Shipment, Vehicle,
};
use crate::routing::{generate_candidates, select_optimal, Departure};
use mizani::prelude::Environment;
use std::sync::{Arc, RwLock};

/// The decision-support engine. Each scoring, optimization, or prediction call is pure
/// with respect to its inputs aside from consuming the injected random source; callers
/// requiring reproducible output construct the environment with an explicit seed.
///
/// The metrics snapshot is the only shared state: it supports unlimited concurrent
/// readers and is refreshed by an explicit, serialized reload.
pub struct Engine {
    metrics: RwLock<Arc<MetricsStore>>,
    environment: Arc<Environment>,
    optimizer_settings: OptimizerSettings,
}

impl Engine {
    /// Creates a new instance of `Engine` with the given reference data and environment.
    pub fn new(metrics: MetricsStore, environment: Arc<Environment>) -> Self {
        Self {
            metrics: RwLock::new(Arc::new(metrics)),
            environment,
            optimizer_settings: OptimizerSettings::default(),
        }
    }

    /// Creates an engine with default Kenyan corridor profiles and an unseeded environment.
    pub fn with_defaults() -> Self {
        Self::new(MetricsStore::with_default_profiles(), Arc::new(Environment::default()))
    }

    /// Overrides the load optimizer search parameters.
    pub fn with_optimizer_settings(mut self, settings: OptimizerSettings) -> Self {
        self.optimizer_settings = settings;
        self
    }

    /// Swaps the metrics snapshot atomically. In-flight readers keep the old snapshot.
    pub fn reload_metrics(&self, metrics: MetricsStore) {
        *self.metrics.write().expect("metrics lock poisoned") = Arc::new(metrics);
    }

    /// Scores the generated route alternatives for the request and returns the winner.
    pub fn optimal_route(&self, request: &RouteRequest) -> EngineResult<ScoredRoute> {
        let priority = RoutePriority::parse(&request.priority)?;
        let departure = match &request.departure_time {
            Some(timestamp) => Departure::from_rfc3339(timestamp)?,
            None => Departure::neutral(),
        };

        let metrics = self.metrics_snapshot();
        let profile = metrics.get_corridor_profile(&request.origin, &request.destination);
        let candidates =
            generate_candidates(&profile, &request.origin, &request.destination, self.environment.random.as_ref())?;

        select_optimal(candidates, priority, &profile, &departure)
    }

    /// Searches for the best shipment-to-vehicle assignment under the given constraints.
    pub fn optimize_load(
        &self,
        vehicles: &[Vehicle],
        shipments: &[Shipment],
        constraints: Option<OptimizationConstraints>,
    ) -> EngineResult<LoadPlan> {
        optimize(vehicles, shipments, constraints, &self.optimizer_settings, self.environment.clone())
    }

    /// Computes a maintenance health report for the vehicle. An unknown vehicle gets a
    /// synthesized baseline, so the predictor is always able to produce a report.
    pub fn predict_maintenance(
        &self,
        vehicle_id: &str,
        current_mileage: i64,
        recent_performance: &RecentPerformance,
    ) -> EngineResult<MaintenanceReport> {
        let metrics = self.metrics_snapshot();
        let baseline = metrics.get_vehicle_baseline(vehicle_id);

        predict(vehicle_id, current_mileage, recent_performance, &baseline)
    }

    fn metrics_snapshot(&self) -> Arc<MetricsStore> {
        self.metrics.read().expect("metrics lock poisoned").clone()
    }
}
