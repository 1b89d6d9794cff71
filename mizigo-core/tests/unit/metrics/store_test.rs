use super::*;

#[test]
fn can_get_registered_profile_ignoring_case_and_spacing() {
    let store = MetricsStore::with_default_profiles();

    let profile = store.get_corridor_profile(" Nairobi CBD ", "MOMBASA PORT");

    assert_eq!(profile.distance_km, 485.);
    assert_eq!(profile.origin, "nairobi cbd");
    assert_eq!(profile.destination, "mombasa port");
}

#[test]
fn can_synthesize_consistent_default_profile() {
    let store = MetricsStore::empty();

    let first = store.get_corridor_profile("eldoret", "garissa");
    let second = store.get_corridor_profile("eldoret", "garissa");

    assert_eq!(first.distance_km, second.distance_km);
    assert_eq!(first.reliability, second.reliability);
    assert!((400. ..=600.).contains(&first.distance_km));
    assert!((0.7..=0.9).contains(&first.reliability));
    assert!((0. ..=0.5).contains(&first.morning_peak.congestion));
    assert!((0. ..=0.5).contains(&first.evening_peak.congestion));
    assert!(first.baseline_time_hours() > 0.);
}

#[test]
fn can_synthesize_different_profiles_for_different_pairs() {
    let store = MetricsStore::empty();

    let first = store.get_corridor_profile("eldoret", "garissa");
    let second = store.get_corridor_profile("garissa", "eldoret");

    assert_ne!(first.distance_km, second.distance_km);
}

#[test]
fn can_synthesize_vehicle_baseline() {
    let store = MetricsStore::empty();

    let baseline = store.get_vehicle_baseline("KDA 123X");

    assert!((0.85..=0.98).contains(&baseline.typical_performance));
    assert!((0.5..=3.).contains(&baseline.battery_age_years));
    assert!(baseline.days_since_service >= 30);
}

#[test]
fn can_replace_profile_on_insert() {
    let mut store = MetricsStore::with_default_profiles();
    let mut profile = store.get_corridor_profile("nairobi cbd", "kisumu").as_ref().clone();
    profile.reliability = 0.99;

    store.insert_corridor(profile);

    assert_eq!(store.corridor_count(), 3);
    assert_eq!(store.get_corridor_profile("nairobi cbd", "kisumu").reliability, 0.99);
}
