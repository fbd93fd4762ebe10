//! Message texts and the alert threshold.

use crate::core::models::Scalar;

/// Banner posted as the root message of each new daily thread.
pub const THREAD_BANNER: &str = ":thermometer: Today's room climate :thermometer:";

/// Reject text for payloads missing a reading.
pub const INVALID_PAYLOAD: &str = "Invalid payload: Missing temperature or humidity";

/// Readings at or above this temperature broadcast an alert. Inclusive.
pub const ALERT_THRESHOLD_C: f64 = 27.0;

pub fn is_alert(temperature: f64) -> bool {
    temperature >= ALERT_THRESHOLD_C
}

pub fn alert_message(temperature: f64) -> String {
    format!("The room is heating up :fire: Keep an eye on the temperature ( {temperature}°C )")
}

pub fn reading_message(current_time: &str, temperature: f64, humidity: &Scalar) -> String {
    format!("{current_time} / temperature - {temperature}°C, humidity - {humidity}%")
}
