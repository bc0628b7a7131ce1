pub mod features;
pub mod init;

use surveyor::{FeatureRegistry, InitOptions};

/// Survey options over the built-in registries.
fn offered<'a>(
    features: &'a FeatureRegistry,
    services: &'a FeatureRegistry,
    prefix: &'a str,
) -> InitOptions<'a> {
    InitOptions::new()
        .with_features(features)
        .with_services(services)
        .with_feature_prefix(prefix)
}
