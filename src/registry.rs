//! Display-name registries for carriers and providers.
//!
//! Both registries are fixed, process-wide tables established at startup and
//! never mutated. Resolving an unknown machine code is not an error: it
//! yields an unset identity whose accessors return empty strings, so callers
//! only ever test for presence.

use serde::Serialize;

use crate::core::{Carrier, Provider};

static CARRIER_NAMES: &[(&str, &str)] = &[
    ("dhl", "DHL"),
    ("fedex", "FedEx"),
    ("ups", "UPS"),
    ("usps", "USPS"),
    ("amazon", "AMAZON"),
    ("lasership", "LASERSHIP"),
    ("royalmail", "ROYALMAIL"),
    ("chinapost", "CHINAPOST"),
    ("canadapost", "CANADAPOST"),
];

// Providers mirror the carrier table plus carrier-managed sub-services.
static PROVIDER_NAMES: &[(&str, &str)] = &[
    ("dhl", "DHL"),
    ("fedex", "FedEx"),
    ("ups", "UPS"),
    ("usps", "USPS"),
    ("amazon", "AMAZON"),
    ("lasership", "LASERSHIP"),
    ("royalmail", "ROYALMAIL"),
    ("chinapost", "CHINAPOST"),
    ("canadapost", "CANADAPOST"),
    ("endicia", "ENDICIA"),
];

pub fn carrier_display_name(code: &str) -> Option<&'static str> {
    CARRIER_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

pub fn provider_display_name(code: &str) -> Option<&'static str> {
    PROVIDER_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Every supported carrier as `(machine code, display name)`, in stable
/// registry order. Independent of any classification; intended for UI
/// population and validation.
pub fn all_carriers() -> &'static [(&'static str, &'static str)] {
    CARRIER_NAMES
}

/// A carrier resolved against the registry. Default is the unset identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CarrierIdentity {
    #[serde(rename = "carrier_code")]
    code: Option<String>,
    #[serde(rename = "carrier_name")]
    name: Option<String>,
}

impl CarrierIdentity {
    /// Resolves a machine code. Unknown codes yield the unset identity
    /// rather than failing.
    pub fn resolve(code: &str) -> Self {
        match carrier_display_name(code) {
            Some(name) => Self {
                code: Some(code.to_string()),
                name: Some(name.to_string()),
            },
            None => Self::default(),
        }
    }

    pub fn from_carrier(carrier: Carrier) -> Self {
        Self::resolve(carrier.code())
    }

    pub fn is_set(&self) -> bool {
        self.code.is_some()
    }

    pub fn code(&self) -> &str {
        self.code.as_deref().unwrap_or("")
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// A provider resolved against the registry. Default is the unset identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProviderIdentity {
    #[serde(rename = "provider_code")]
    code: Option<String>,
    #[serde(rename = "provider_name")]
    name: Option<String>,
}

impl ProviderIdentity {
    pub fn resolve(code: &str) -> Self {
        match provider_display_name(code) {
            Some(name) => Self {
                code: Some(code.to_string()),
                name: Some(name.to_string()),
            },
            None => Self::default(),
        }
    }

    pub fn from_provider(provider: Provider) -> Self {
        Self::resolve(provider.code())
    }

    pub fn is_set(&self) -> bool {
        self.code.is_some()
    }

    pub fn code(&self) -> &str {
        self.code.as_deref().unwrap_or("")
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}
