use thermo_relay::core::models::Scalar;
use thermo_relay::notify::compose;

/// Tests for message composition and the alert threshold.

#[test]
fn test_alert_threshold_is_inclusive() {
    assert!(compose::is_alert(27.0), "27.0 exactly must alert");
    assert!(compose::is_alert(30.5));
    assert!(!compose::is_alert(26.999));
    assert!(!compose::is_alert(0.0));
}

#[test]
fn test_alert_message_embeds_temperature() {
    let message = compose::alert_message(27.5);
    assert!(
        message.contains("27.5"),
        "Alert text should embed the numeric value"
    );
    assert!(message.contains("°C"));
}

#[test]
fn test_reading_message_format() {
    let message = compose::reading_message("09:00", 25.3, &Scalar::Number(48.0));
    assert_eq!(message, "09:00 / temperature - 25.3°C, humidity - 48%");
}

#[test]
fn test_reading_message_keeps_textual_humidity_verbatim() {
    let message = compose::reading_message("21:15", 19.0, &Scalar::Text("48".to_string()));
    assert!(message.contains("humidity - 48%"));
}

#[test]
fn test_banner_and_reject_texts_are_fixed() {
    assert!(compose::THREAD_BANNER.contains(":thermometer:"));
    assert_eq!(
        compose::INVALID_PAYLOAD,
        "Invalid payload: Missing temperature or humidity"
    );
}
