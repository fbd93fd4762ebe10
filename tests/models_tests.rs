use serde_json::json;
use thermo_relay::core::models::{ReadingEvent, Scalar, ThreadRecord};
use thermo_relay::errors::NotifyError;

/// Tests for inbound payload deserialization and the thread record model.

#[test]
fn test_full_payload_deserializes() {
    let payload = json!({
        "temperature": 25.3,
        "humidity": 48,
        "createThread": true,
        "currentTime": "09:00"
    });

    let event: ReadingEvent = serde_json::from_value(payload).unwrap();

    assert_eq!(event.temperature, Some(Scalar::Number(25.3)));
    assert_eq!(event.humidity, Some(Scalar::Number(48.0)));
    assert!(event.create_thread());
    assert_eq!(event.current_time.as_deref(), Some("09:00"));
    assert_eq!(event.error_message, None);
}

#[test]
fn test_empty_payload_deserializes_with_all_fields_absent() {
    let event: ReadingEvent = serde_json::from_value(json!({})).unwrap();

    assert_eq!(event.temperature, None);
    assert_eq!(event.humidity, None);
    assert!(!event.create_thread());
    assert_eq!(event.current_time, None);
}

#[test]
fn test_null_fields_deserialize_as_absent() {
    let payload = json!({
        "temperature": null,
        "humidity": null,
        "createThread": null,
        "currentTime": null,
        "message": null
    });

    let event: ReadingEvent = serde_json::from_value(payload).unwrap();

    assert_eq!(event.temperature, None);
    assert!(!event.create_thread());
    assert_eq!(event.override_message(), None);
}

#[test]
fn test_numeric_string_temperature_parses() {
    let payload = json!({ "temperature": "25.3", "humidity": "48" });
    let event: ReadingEvent = serde_json::from_value(payload).unwrap();

    let temperature = event.temperature.unwrap();
    assert_eq!(temperature, Scalar::Text("25.3".to_string()));
    assert_eq!(temperature.as_f64().unwrap(), 25.3);
}

#[test]
fn test_non_numeric_string_fails_to_parse() {
    let scalar = Scalar::Text("warm".to_string());

    match scalar.as_f64() {
        Err(NotifyError::Internal(msg)) => assert!(msg.contains("warm")),
        other => panic!("Expected Internal error, got {other:?}"),
    }
}

#[test]
fn test_scalar_display_keeps_wire_form() {
    assert_eq!(Scalar::Number(48.0).to_string(), "48");
    assert_eq!(Scalar::Number(25.3).to_string(), "25.3");
    assert_eq!(Scalar::Text("48".to_string()).to_string(), "48");
}

#[test]
fn test_override_message_ignores_empty_string() {
    let payload = json!({ "message": "" });
    let event: ReadingEvent = serde_json::from_value(payload).unwrap();
    assert_eq!(event.override_message(), None);

    let payload = json!({ "message": "sensor offline" });
    let event: ReadingEvent = serde_json::from_value(payload).unwrap();
    assert_eq!(event.override_message(), Some("sensor offline"));
}

#[test]
fn test_thread_record_timestamp_is_iso8601_utc() {
    let record = ThreadRecord::new("1700000000.000100".to_string());

    assert_eq!(record.thread_id, "1700000000.000100");
    assert!(
        chrono::DateTime::parse_from_rfc3339(&record.created_at).is_ok(),
        "created_at should be RFC 3339: {}",
        record.created_at
    );
}

#[test]
fn test_thread_record_timestamps_sort_lexicographically() {
    let earlier = ThreadRecord::new("T1".to_string());
    std::thread::sleep(std::time::Duration::from_millis(2));
    let later = ThreadRecord::new("T2".to_string());

    assert!(earlier.created_at < later.created_at);
}
