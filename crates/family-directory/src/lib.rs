pub mod config;
pub mod error;
pub mod import;
pub mod listings;
pub mod telemetry;
