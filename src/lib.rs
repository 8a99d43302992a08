// Export modules for library usage
pub mod classify;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod normalize;
pub mod registry;

// Re-export commonly used types
pub use crate::classify::rules::{CarrierRule, Narrowing, RuleAlternative, RULE_TABLE};
pub use crate::classify::Classifier;
pub use crate::core::{classify_tracking_code, Carrier, Classification, Package, Provider};
pub use crate::errors::WaybillError;
pub use crate::normalize::{normalize, CanonicalCode};
pub use crate::registry::{all_carriers, CarrierIdentity, ProviderIdentity};
