use super::*;

#[test]
fn failure_record_carries_status_and_message() {
    let result = JobResult::failure("Baseline failed");
    assert_eq!(result.status, Some(false));
    assert_eq!(result.message.as_deref(), Some("Baseline failed"));
    assert_eq!(result.event_count, None);
}

#[test]
fn default_record_has_no_verdict() {
    let result = JobResult::default();
    assert_eq!(result.status, None);
    assert_eq!(result.message, None);
}
