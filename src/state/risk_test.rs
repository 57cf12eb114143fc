use super::*;

#[test]
fn for_score_maps_band_boundaries() {
    assert_eq!(RiskLevel::for_score(100.0), RiskLevel::Critical);
    assert_eq!(RiskLevel::for_score(80.0), RiskLevel::Critical);
    assert_eq!(RiskLevel::for_score(79.9), RiskLevel::High);
    assert_eq!(RiskLevel::for_score(60.0), RiskLevel::High);
    assert_eq!(RiskLevel::for_score(40.0), RiskLevel::Medium);
    assert_eq!(RiskLevel::for_score(20.0), RiskLevel::Low);
    assert_eq!(RiskLevel::for_score(19.9), RiskLevel::Minimal);
    assert_eq!(RiskLevel::for_score(0.0), RiskLevel::Minimal);
}

#[test]
fn from_name_is_case_insensitive_and_defaults_to_minimal() {
    assert_eq!(RiskLevel::from_name("critical"), RiskLevel::Critical);
    assert_eq!(RiskLevel::from_name("High"), RiskLevel::High);
    assert_eq!(RiskLevel::from_name("MEDIUM"), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_name("low"), RiskLevel::Low);
    assert_eq!(RiskLevel::from_name("whatever"), RiskLevel::Minimal);
}

#[test]
fn css_class_and_label_follow_the_level() {
    assert_eq!(RiskLevel::Critical.css_class(), "risk--critical");
    assert_eq!(RiskLevel::Minimal.css_class(), "risk--minimal");
    assert_eq!(RiskLevel::High.label(), "HIGH");
}

#[test]
fn default_state_is_empty() {
    let state = RiskState::default();
    assert!(state.assessment.is_none());
    assert!(state.history.is_empty());
    assert!(!state.loading);
}
