mod access;
mod core;
mod gcloud;
mod observability;

pub use access::AccessConfig;
pub use self::core::Config;
pub use gcloud::GcloudConfig;
pub use observability::ObservabilityConfig;
