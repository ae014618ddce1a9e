pub mod configuration;
pub mod form;
pub mod subscription_client;
pub mod telemetry;
pub mod types;
