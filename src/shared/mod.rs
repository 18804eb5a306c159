pub mod config;
pub mod error;
pub mod greeter;
pub mod greeting;
pub mod session;
pub mod telemetry;
