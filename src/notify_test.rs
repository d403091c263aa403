use super::*;

#[test]
fn drain_returns_in_order_and_empties() {
    let log = NotificationLog::new();
    log.notify(Notification::positive("saved"));
    log.notify(Notification::negative("Error"));

    assert_eq!(log.pending().len(), 2);
    let drained = log.drain();
    assert_eq!(drained, vec![Notification::positive("saved"), Notification::negative("Error")]);
    assert!(log.drain().is_empty());
}

#[test]
fn serializes_with_type_field() {
    let value = serde_json::to_value(Notification::negative("Invalid credentials")).unwrap();
    assert_eq!(value, serde_json::json!({ "message": "Invalid credentials", "type": "negative" }));
}
