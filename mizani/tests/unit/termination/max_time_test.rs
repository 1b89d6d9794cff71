use super::*;
use std::thread::sleep;
use std::time::Duration;

#[test]
fn can_detect_termination() {
    let statistics = SearchStatistics::default();
    sleep(Duration::from_millis(20));

    assert_eq!(MaxTime::new(0.01).is_termination(&statistics), true);
    assert_eq!(MaxTime::new(1000.).is_termination(&statistics), false);
}

#[test]
fn can_cap_estimate() {
    let statistics = SearchStatistics::default();
    sleep(Duration::from_millis(20));

    assert_eq!(MaxTime::new(0.001).estimate(&statistics), 1.);
}
