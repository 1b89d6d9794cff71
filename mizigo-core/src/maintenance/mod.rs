//! The maintenance module computes independent health scores for five vehicle
//! subsystems from mileage, elapsed time, and recent-performance signals, then
//! aggregates them into an overall score and urgency classification.

#[cfg(test)]
#[path = "../../tests/unit/maintenance/predictor_test.rs"]
mod predictor_test;

use crate::error::{EngineError, EngineResult};
use crate::metrics::VehicleBaseline;
use crate::models::{Component, ComponentHealth, MaintenanceReport, RecentPerformance, UrgentItem, Urgency};
use mizani::prelude::Float;

/// Mileage at which an engine is considered fully worn.
const ENGINE_LIFETIME_KM: Float = 200_000.;
/// A transmission service interval; the wear counter resets every interval.
const TRANSMISSION_INTERVAL_KM: Float = 80_000.;
/// A brake pad service interval.
const BRAKE_INTERVAL_KM: Float = 40_000.;
/// A tire change interval.
const TIRE_INTERVAL_KM: Float = 60_000.;
/// Amount of voltage drop events treated as full electrical degradation.
const VOLTAGE_EVENT_WINDOW: Float = 10.;
/// Days elapsed per year, used to convert service age.
const DAYS_PER_YEAR: Float = 365.25;

/// Computes a maintenance report for the vehicle from a point-in-time snapshot.
/// Baseline fields not covered by `recent_performance` come from the vehicle baseline,
/// which is synthesized when the vehicle is unknown, so a report is always produced
/// for valid input.
pub fn predict(
    vehicle_id: &str,
    current_mileage: i64,
    recent_performance: &RecentPerformance,
    baseline: &VehicleBaseline,
) -> EngineResult<MaintenanceReport> {
    validate_inputs(current_mileage, recent_performance)?;

    let mileage = current_mileage as Float;
    let performance_factor = recent_performance.performance_factor.unwrap_or(baseline.typical_performance);
    let battery_age_years = recent_performance.battery_age_years.unwrap_or(baseline.battery_age_years);
    let service_age_years =
        recent_performance.days_since_service.unwrap_or(baseline.days_since_service) as Float / DAYS_PER_YEAR;

    let predictions = Component::ALL
        .iter()
        .map(|&component| {
            let (health, km_to_service) = match component {
                Component::Engine => {
                    let mileage_factor = mileage / ENGINE_LIFETIME_KM;
                    let health =
                        1. - (0.4 * mileage_factor + 0.4 * (1. - performance_factor) + 0.2 * service_age_years);
                    (health, None)
                }
                Component::Transmission => {
                    let km_since_service = mileage % TRANSMISSION_INTERVAL_KM;
                    (1. - km_since_service / TRANSMISSION_INTERVAL_KM, Some(TRANSMISSION_INTERVAL_KM - km_since_service))
                }
                Component::Brakes => {
                    let km_since_service = mileage % BRAKE_INTERVAL_KM;
                    let health = 1.
                        - km_since_service / BRAKE_INTERVAL_KM
                        - recent_performance.hard_braking_events as Float / 100.;
                    (health, Some(BRAKE_INTERVAL_KM - km_since_service))
                }
                Component::Tires => {
                    let km_since_change = mileage % TIRE_INTERVAL_KM;
                    (1. - km_since_change / TIRE_INTERVAL_KM, Some(TIRE_INTERVAL_KM - km_since_change))
                }
                Component::Electrical => {
                    let instability =
                        (recent_performance.voltage_drop_events as Float).min(VOLTAGE_EVENT_WINDOW) / VOLTAGE_EVENT_WINDOW;
                    (1. - (0.3 * battery_age_years + 0.7 * instability), None)
                }
            };

            build_component_health(component, health.clamp(0., 1.), km_to_service)
        })
        .collect::<Vec<_>>();

    let overall_score = predictions.iter().map(|health| health.health_score).sum::<Float>() / predictions.len() as Float;
    let total_cost_estimate = predictions.iter().map(|health| health.estimated_cost).sum::<Float>();

    let urgent_items = predictions
        .iter()
        .filter(|health| health.urgency == Urgency::High)
        .map(|health| UrgentItem { component: health.component, estimated_cost: health.estimated_cost })
        .collect::<Vec<_>>();

    let recommended_actions = predictions
        .iter()
        .filter_map(|health| recommended_action(health.component, health.urgency))
        .collect::<Vec<_>>();

    let schedule_suggestion = build_schedule_suggestion(&predictions);

    Ok(MaintenanceReport {
        vehicle_id: vehicle_id.to_string(),
        overall_score,
        predictions,
        urgent_items,
        recommended_actions,
        total_cost_estimate,
        schedule_suggestion,
    })
}

fn validate_inputs(current_mileage: i64, recent_performance: &RecentPerformance) -> EngineResult<()> {
    if current_mileage < 0 {
        return Err(EngineError::validation(
            "current_mileage",
            format!("mileage must not be negative, got {current_mileage}"),
            "provide the odometer reading in km",
        ));
    }

    if let Some(factor) = recent_performance.performance_factor {
        if !factor.is_finite() || !(0. ..=1.).contains(&factor) {
            return Err(EngineError::validation(
                "recent_performance.performance_factor",
                format!("must be a fraction in [0, 1], got {factor}"),
                "provide the performance factor relative to nominal",
            ));
        }
    }

    if let Some(age) = recent_performance.battery_age_years {
        if !age.is_finite() || age < 0. {
            return Err(EngineError::validation(
                "recent_performance.battery_age_years",
                format!("must be non-negative, got {age}"),
                "provide the battery age in years",
            ));
        }
    }

    Ok(())
}

fn build_component_health(component: Component, health: Float, km_to_service: Option<Float>) -> ComponentHealth {
    let urgency = classify(component, health);

    ComponentHealth {
        component,
        health_score: health * 100.,
        urgency,
        estimated_cost: base_cost(component) * severity_factor(urgency),
        km_to_service,
        safety_risk: component == Component::Brakes && urgency == Urgency::High,
    }
}

/// Maps health on the `[0, 1]` scale into urgency using component-specific thresholds.
fn classify(component: Component, health: Float) -> Urgency {
    let (high, medium) = match component {
        Component::Engine => (0.35, 0.65),
        Component::Transmission => (0.30, 0.60),
        Component::Brakes => (0.40, 0.70),
        Component::Tires => (0.35, 0.65),
        Component::Electrical => (0.30, 0.60),
    };

    if health < high {
        Urgency::High
    } else if health < medium {
        Urgency::Medium
    } else {
        Urgency::Low
    }
}

fn base_cost(component: Component) -> Float {
    match component {
        Component::Engine => 45_000.,
        Component::Transmission => 120_000.,
        Component::Brakes => 18_000.,
        Component::Tires => 40_000.,
        Component::Electrical => 12_000.,
    }
}

fn severity_factor(urgency: Urgency) -> Float {
    match urgency {
        Urgency::Low => 0.15,
        Urgency::Medium => 0.45,
        Urgency::High => 1.,
    }
}

fn recommended_action(component: Component, urgency: Urgency) -> Option<String> {
    let action = match (component, urgency) {
        (Component::Engine, Urgency::High) => "Engine overhaul required: take the vehicle out of service",
        (Component::Engine, Urgency::Medium) => "Book an engine diagnostic and oil service",
        (Component::Transmission, Urgency::High) => "Transmission service overdue: schedule immediately",
        (Component::Transmission, Urgency::Medium) => "Plan a transmission fluid change at the next depot stop",
        (Component::Brakes, Urgency::High) => "Replace brake pads before the next dispatch",
        (Component::Brakes, Urgency::Medium) => "Inspect brake pads and discs",
        (Component::Tires, Urgency::High) => "Fit a new tire set before the next long haul",
        (Component::Tires, Urgency::Medium) => "Rotate tires and check tread depth",
        (Component::Electrical, Urgency::High) => "Replace the battery and check the alternator",
        (Component::Electrical, Urgency::Medium) => "Test battery voltage under load",
        (_, Urgency::Low) => return None,
    };

    Some(action.to_string())
}

fn build_schedule_suggestion(predictions: &[ComponentHealth]) -> String {
    let worst = predictions.iter().map(|health| health.urgency).max().unwrap_or(Urgency::Low);

    match worst {
        Urgency::High => "Immediate service required: book the earliest available workshop slot".to_string(),
        Urgency::Medium => "Schedule preventive service within the next 2-4 weeks".to_string(),
        Urgency::Low => "All components healthy: keep to the routine service calendar".to_string(),
    }
}
