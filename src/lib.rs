/// Thermo-relay - a Slack notification relay for room climate readings.
///
/// This crate implements a single-Lambda relay: an IoT rule forwards a sensor
/// reading (temperature, humidity, timestamp) and the Lambda posts a formatted
/// message into a persistent Slack thread. Daily-rollover events create a new
/// thread; all other events reply into the latest thread recorded in DynamoDB.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - DynamoDB for the thread lookup table
/// - slack-morphism for Slack API interactions
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// #[tokio::main]
/// async fn main() -> Result<(), lambda_runtime::Error> {
///     // Set up structured logging
///     thermo_relay::setup_logging();
///
///     // Serve the notifier handler
///     lambda_runtime::run(lambda_runtime::service_fn(
///         thermo_relay::notify::handler::handler,
///     ))
///     .await
/// }
/// ```
// Module declarations
pub mod clients;
pub mod core;
pub mod errors;
pub mod notify;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called at the start of each Lambda
/// handler.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// thermo_relay::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
