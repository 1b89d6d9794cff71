#[cfg(test)]
#[path = "../../tests/unit/routing/scorer_test.rs"]
mod scorer_test;

use crate::error::{EngineError, EngineResult};
use crate::metrics::CorridorProfile;
use crate::models::{EstimatedSavings, RouteAlternative, RouteCandidate, RoutePriority, ScoredRoute};
use mizani::prelude::Float;
use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, Weekday};

/// A floor applied to score denominators so unfavorable input degrades the score
/// instead of failing on division by zero.
const MIN_DENOMINATOR: Float = 1e-3;

/// A departure moment reduced to the attributes the scorer reacts to.
#[derive(Clone, Copy, Debug)]
pub struct Departure {
    /// An hour of day, 0-23.
    pub hour: u8,
    /// A day of week.
    pub weekday: Weekday,
    /// A month, 1-12.
    pub month: u8,
}

impl Departure {
    /// Parses a departure from an RFC3339 timestamp.
    pub fn from_rfc3339(timestamp: &str) -> EngineResult<Self> {
        OffsetDateTime::parse(timestamp, &Rfc3339)
            .map(|moment| Self { hour: moment.hour(), weekday: moment.weekday(), month: u8::from(moment.month()) })
            .map_err(|err| {
                EngineError::validation(
                    "departure_time",
                    format!("cannot parse '{timestamp}': {err}"),
                    "provide an RFC3339 timestamp, e.g. '2024-03-18T08:30:00Z'",
                )
            })
    }

    /// Returns a neutral reference departure: midweek, off-peak, dry season.
    pub fn neutral() -> Self {
        Self { hour: 11, weekday: Weekday::Tuesday, month: 2 }
    }

    fn is_weekend(&self) -> bool {
        matches!(self.weekday, Weekday::Saturday | Weekday::Sunday)
    }
}

/// Scores a single candidate: a priority-weighted base formula plus additive temporal
/// adjustments. The result is floored at zero, scores are never negative.
pub fn score_route(
    candidate: &RouteCandidate,
    priority: RoutePriority,
    profile: &CorridorProfile,
    departure: &Departure,
) -> Float {
    let time = candidate.estimated_time_hours.max(MIN_DENOMINATOR);
    let distance = candidate.distance_km.max(MIN_DENOMINATOR);
    let total_cost = candidate.total_cost().max(MIN_DENOMINATOR);

    let inverse_time = 1. / time;
    let efficiency = 1000. / distance + 10. / time;
    let cost_efficiency = 1000. / total_cost;
    let reliability = candidate.reliability_score * 100.;

    let base = match priority {
        RoutePriority::Speed => 0.6 * inverse_time + 0.2 * cost_efficiency + 0.2 * reliability,
        RoutePriority::Cost => 0.6 * cost_efficiency + 0.2 * inverse_time + 0.2 * reliability,
        RoutePriority::Safety => 0.5 * reliability + 0.25 * inverse_time + 0.25 * cost_efficiency,
        RoutePriority::Balanced => 0.4 * efficiency + 0.3 * cost_efficiency + 0.3 * reliability,
    };

    let mut score = base;

    if profile.is_peak_hour(departure.hour) {
        score -= candidate.traffic_risk * 30.;
    }

    if departure.is_weekend() {
        score += 20.;
    }

    if profile.is_rainy_month(departure.month) {
        score -= candidate.weather_risk * 25.;
    }

    score -= (candidate.traffic_risk + candidate.weather_risk) * 50.;

    score.max(0.)
}

/// Ranks the candidates and builds the scored result for the winner. Exactly one
/// candidate is selected: the maximum adjusted score, ties broken by generation order.
pub fn select_optimal(
    candidates: Vec<RouteCandidate>,
    priority: RoutePriority,
    profile: &CorridorProfile,
    departure: &Departure,
) -> EngineResult<ScoredRoute> {
    if candidates.is_empty() {
        return Err(EngineError::NoRouteAvailable {
            origin: profile.origin.clone(),
            destination: profile.destination.clone(),
            action: "verify the requested corridor or refresh the metrics store".to_string(),
        });
    }

    let scored = candidates
        .into_iter()
        .map(|candidate| {
            let score = score_route(&candidate, priority, profile, departure);
            (candidate, score)
        })
        .collect::<Vec<_>>();

    let mut winner_index = 0;
    for (index, (_, score)) in scored.iter().enumerate().skip(1) {
        if *score > scored[winner_index].1 {
            winner_index = index;
        }
    }

    let alternatives = scored
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != winner_index)
        .map(|(_, (candidate, score))| RouteAlternative {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            ai_score: *score,
        })
        .collect::<Vec<_>>();

    let (winner, ai_score) = scored.into_iter().nth(winner_index).expect("winner index is valid");

    let estimated_savings = build_savings(&winner, profile);
    let confidence = build_confidence(&winner, profile);
    let insights = build_insights(&winner, profile, &estimated_savings, departure);

    Ok(ScoredRoute { route: winner, ai_score, confidence, insights, estimated_savings, alternatives })
}

fn build_confidence(winner: &RouteCandidate, profile: &CorridorProfile) -> Float {
    let bonus = if winner.reliability_score > profile.reliability { 20. } else { 0. };

    (winner.reliability_score * 100. + bonus).min(100.)
}

fn build_savings(winner: &RouteCandidate, profile: &CorridorProfile) -> EstimatedSavings {
    EstimatedSavings {
        time_hours: (profile.baseline_time_hours() - winner.estimated_time_hours).max(0.),
        fuel_cost: (profile.baseline_fuel_cost - winner.fuel_cost).max(0.),
        total_cost: (profile.baseline_total_cost() - winner.total_cost()).max(0.),
    }
}

fn build_insights(
    winner: &RouteCandidate,
    profile: &CorridorProfile,
    savings: &EstimatedSavings,
    departure: &Departure,
) -> Vec<String> {
    let mut insights = vec![];

    if winner.reliability_score - profile.reliability > 0.05 {
        insights.push(format!(
            "Historically more reliable than the corridor average ({:.0}% vs {:.0}%)",
            winner.reliability_score * 100.,
            profile.reliability * 100.
        ));
    }

    if savings.time_hours > 0.5 {
        insights.push(format!("Saves {:.1} h versus the corridor baseline", savings.time_hours));
    }

    if savings.fuel_cost > 500. {
        insights.push(format!("Cuts fuel spend by {:.0} versus the corridor baseline", savings.fuel_cost));
    }

    insights.push(match winner.traffic_risk {
        risk if risk < 0.2 => "Light traffic exposure expected".to_string(),
        risk if risk < 0.5 => "Moderate traffic exposure expected".to_string(),
        _ => "Heavy traffic exposure: consider an off-peak departure".to_string(),
    });

    if winner.weather_risk > 0.4 && profile.is_rainy_month(departure.month) {
        insights.push("Elevated weather risk during the rainy season".to_string());
    }

    insights
}
