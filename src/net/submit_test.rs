use super::*;

#[test]
fn submission_serializes_its_wire_shape() {
    let submission = ContactSubmission {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        phone: String::new(),
        message: "Viewing request".to_owned(),
    };
    let json = serde_json::to_string(&submission).unwrap();
    assert!(json.contains("\"email\":\"ada@example.com\""));
    assert!(json.contains("\"phone\":\"\""));
}

#[test]
fn submit_error_displays_its_cause() {
    let err = SubmitError("endpoint unreachable".to_owned());
    assert_eq!(err.to_string(), "submission failed: endpoint unreachable");
}

#[test]
fn default_submission_is_empty() {
    assert_eq!(ContactSubmission::default(), ContactSubmission {
        name: String::new(),
        email: String::new(),
        phone: String::new(),
        message: String::new(),
    });
}
