//! Built-in features and service kinds.
//!
//! These are the features the `surveyor` binary offers out of the box, and the
//! fixtures the end-to-end tests run against.

pub mod auth;
pub mod database;
pub mod gateway;
pub mod health;
pub mod tracker;

pub use auth::{Auth, AuthDefinition};
pub use database::{Database, DatabaseDefinition, DatabaseKind};
pub use gateway::{Gateway, GatewayDefinition, HTTP_METHODS, Rpc};
pub use health::Health;
pub use tracker::Tracker;

use surveyor::FeatureRegistry;

/// Registry of the built-in features.
pub fn features() -> FeatureRegistry {
    FeatureRegistry::new()
        .with(Auth)
        .with(Database)
        .with(Tracker)
        .with(Health)
}

/// Registry of the built-in service kinds.
pub fn services() -> FeatureRegistry {
    FeatureRegistry::new().with(Gateway)
}
