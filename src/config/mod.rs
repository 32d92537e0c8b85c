pub mod schema;

pub use schema::{AccessConfig, Config, GcloudConfig, ObservabilityConfig};
