pub use thermo_relay::notify::handler::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    thermo_relay::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
