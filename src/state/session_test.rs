use super::*;

#[test]
fn default_session_attributes_as_system() {
    let session = Session::default();
    assert_eq!(session.attribution(), "system");
    assert_eq!(session.role, "COMPLIANCE_OFFICER");
}

#[test]
fn attribution_uses_the_configured_name() {
    let session = Session {
        name: "Dana Auditor".to_owned(),
        ..Session::default()
    };
    assert_eq!(session.attribution(), "Dana Auditor");
}

#[test]
fn blank_name_falls_back_to_system() {
    let session = Session {
        name: "   ".to_owned(),
        ..Session::default()
    };
    assert_eq!(session.attribution(), "system");
}

#[test]
fn session_round_trips_through_json_and_tolerates_missing_fields() {
    let session = Session {
        name: "Dana".to_owned(),
        organization: "Acme".to_owned(),
        role: "AUDITOR".to_owned(),
    };
    let json = serde_json::to_string(&session).expect("should serialize");
    let back: Session = serde_json::from_str(&json).expect("should deserialize");
    assert_eq!(back, session);

    // Older persisted sessions may predate newer fields.
    let partial: Session = serde_json::from_str(r#"{"name":"Dana"}"#).expect("should deserialize");
    assert_eq!(partial.name, "Dana");
    assert_eq!(partial.role, "COMPLIANCE_OFFICER");
}
