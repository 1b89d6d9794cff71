#[cfg(test)]
#[path = "../../tests/unit/routing/generator_test.rs"]
mod generator_test;

use crate::error::{EngineError, EngineResult};
use crate::metrics::CorridorProfile;
use crate::models::RouteCandidate;
use mizani::prelude::{Float, Random};

/// A template of a route alternative, expressed relative to the corridor baseline.
/// Factors are spread far enough apart that the bounded per-request jitter can never
/// reorder the alternatives on time, cost, or risk.
struct Blueprint {
    id: &'static str,
    name: &'static str,
    time_factor: Float,
    distance_factor: Float,
    fuel_factor: Float,
    toll_factor: Float,
    reliability_shift: Float,
    traffic_factor: Float,
    weather_factor: Float,
}

const BLUEPRINTS: [Blueprint; 3] = [
    Blueprint {
        id: "express-highway",
        name: "Express Highway",
        time_factor: 0.85,
        distance_factor: 1.0,
        fuel_factor: 1.15,
        toll_factor: 1.0,
        reliability_shift: 0.05,
        traffic_factor: 1.0,
        weather_factor: 0.8,
    },
    Blueprint {
        id: "southern-bypass",
        name: "Southern Bypass",
        time_factor: 1.05,
        distance_factor: 1.12,
        fuel_factor: 1.08,
        toll_factor: 0.4,
        reliability_shift: 0.08,
        traffic_factor: 0.45,
        weather_factor: 0.6,
    },
    Blueprint {
        id: "economy-corridor",
        name: "Economy Corridor",
        time_factor: 1.25,
        distance_factor: 1.05,
        fuel_factor: 0.8,
        toll_factor: 0.0,
        reliability_shift: -0.05,
        traffic_factor: 0.7,
        weather_factor: 1.0,
    },
];

/// A relative jitter applied to distance, time and fuel for realism. Kept well below
/// the gaps between blueprint factors so relative orderings are preserved.
const JITTER: Float = 0.03;

/// Generates the fixed set of route alternatives for the corridor. For an identical
/// origin-destination pair the same named alternatives are produced with consistent
/// relative ordering of their attributes: the fastest stays fastest and the cheapest
/// stays cheapest, even though absolute magnitudes vary within the jitter tolerance.
pub fn generate_candidates(
    profile: &CorridorProfile,
    origin: &str,
    destination: &str,
    random: &dyn Random,
) -> EngineResult<Vec<RouteCandidate>> {
    for (field, value) in [("origin", origin), ("destination", destination)] {
        if value.trim().is_empty() {
            return Err(EngineError::validation(
                field,
                format!("{field} must not be empty"),
                "provide a non-empty location name",
            ));
        }
    }

    let base_time = profile.baseline_time_hours();
    let base_traffic = profile.morning_peak.congestion.max(profile.evening_peak.congestion);
    let base_weather = (profile.rainy_season_multiplier - 1.).clamp(0., 1.);

    let candidates = BLUEPRINTS
        .iter()
        .map(|blueprint| {
            let jitter = |value: Float| value * random.uniform_real(1. - JITTER, 1. + JITTER);

            RouteCandidate {
                id: blueprint.id.to_string(),
                name: blueprint.name.to_string(),
                distance_km: jitter(profile.distance_km * blueprint.distance_factor),
                estimated_time_hours: jitter(base_time * blueprint.time_factor),
                fuel_cost: jitter(profile.baseline_fuel_cost * blueprint.fuel_factor),
                toll_cost: profile.baseline_toll_cost * blueprint.toll_factor,
                reliability_score: (profile.reliability + blueprint.reliability_shift
                    + random.uniform_real(-0.01, 0.01))
                .clamp(0., 1.),
                traffic_risk: (base_traffic * blueprint.traffic_factor).clamp(0., 1.),
                weather_risk: (base_weather * blueprint.weather_factor).clamp(0., 1.),
            }
        })
        .collect();

    Ok(candidates)
}
