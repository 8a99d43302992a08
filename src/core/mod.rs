//! Core types: the closed carrier/provider sets and the package record
//! assembled from a classification.

use serde::{Deserialize, Serialize};

use crate::classify::Classifier;
use crate::normalize::normalize;
use crate::registry::{CarrierIdentity, ProviderIdentity};

/// Closed set of carriers the deduction engine can identify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Carrier {
    Dhl,
    FedEx,
    Ups,
    Usps,
    Amazon,
    LaserShip,
    RoyalMail,
    ChinaPost,
    CanadaPost,
}

impl Carrier {
    /// Stable machine code, as used in results and the registry.
    pub fn code(&self) -> &'static str {
        static CODES: &[(Carrier, &str)] = &[
            (Carrier::Dhl, "dhl"),
            (Carrier::FedEx, "fedex"),
            (Carrier::Ups, "ups"),
            (Carrier::Usps, "usps"),
            (Carrier::Amazon, "amazon"),
            (Carrier::LaserShip, "lasership"),
            (Carrier::RoyalMail, "royalmail"),
            (Carrier::ChinaPost, "chinapost"),
            (Carrier::CanadaPost, "canadapost"),
        ];

        CODES
            .iter()
            .find(|(carrier, _)| carrier == self)
            .map(|(_, code)| *code)
            .unwrap_or("")
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().find(|c| c.code() == code).copied()
    }

    /// Every supported carrier, in registry enumeration order.
    pub fn all() -> &'static [Carrier] {
        &[
            Carrier::Dhl,
            Carrier::FedEx,
            Carrier::Ups,
            Carrier::Usps,
            Carrier::Amazon,
            Carrier::LaserShip,
            Carrier::RoyalMail,
            Carrier::ChinaPost,
            Carrier::CanadaPost,
        ]
    }
}

impl std::fmt::Display for Carrier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            crate::registry::carrier_display_name(self.code()).unwrap_or("")
        )
    }
}

/// The entity that generated the tracking label. Usually the carrier itself,
/// but carrier-managed sub-services (Endicia for USPS) can differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Dhl,
    FedEx,
    Ups,
    Usps,
    Amazon,
    LaserShip,
    RoyalMail,
    ChinaPost,
    CanadaPost,
    Endicia,
}

impl Provider {
    pub fn code(&self) -> &'static str {
        match self {
            Provider::Dhl => "dhl",
            Provider::FedEx => "fedex",
            Provider::Ups => "ups",
            Provider::Usps => "usps",
            Provider::Amazon => "amazon",
            Provider::LaserShip => "lasership",
            Provider::RoyalMail => "royalmail",
            Provider::ChinaPost => "chinapost",
            Provider::CanadaPost => "canadapost",
            Provider::Endicia => "endicia",
        }
    }
}

impl From<Carrier> for Provider {
    fn from(carrier: Carrier) -> Self {
        match carrier {
            Carrier::Dhl => Provider::Dhl,
            Carrier::FedEx => Provider::FedEx,
            Carrier::Ups => Provider::Ups,
            Carrier::Usps => Provider::Usps,
            Carrier::Amazon => Provider::Amazon,
            Carrier::LaserShip => Provider::LaserShip,
            Carrier::RoyalMail => Provider::RoyalMail,
            Carrier::ChinaPost => Provider::ChinaPost,
            Carrier::CanadaPost => Provider::CanadaPost,
        }
    }
}

/// Outcome of one classifier run over a canonical code.
///
/// `carrier` absent means no rule matched; `effective_code` then equals the
/// canonical code. Constructed once per call, never shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub effective_code: String,
    pub carrier: Option<Carrier>,
    pub provider: Option<Provider>,
}

/// A tracked package: the original input plus everything deduced from it.
#[derive(Debug, Clone, Serialize)]
pub struct Package {
    pub original_input: String,
    pub canonical_code: String,
    pub effective_code: String,
    #[serde(flatten)]
    carrier: CarrierIdentity,
    #[serde(flatten)]
    provider: ProviderIdentity,
}

impl Package {
    /// Builds a package from a tracking code using the default rule table.
    pub fn instance(tracking_code: &str) -> Package {
        Self::with_classifier(tracking_code, &Classifier::new())
    }

    pub fn with_classifier(tracking_code: &str, classifier: &Classifier) -> Package {
        let canonical = normalize(tracking_code);
        let classification = classifier.classify(&canonical);

        Package {
            original_input: tracking_code.to_string(),
            canonical_code: canonical.into_string(),
            effective_code: classification.effective_code,
            carrier: classification
                .carrier
                .map(CarrierIdentity::from_carrier)
                .unwrap_or_default(),
            provider: classification
                .provider
                .map(ProviderIdentity::from_provider)
                .unwrap_or_default(),
        }
    }

    pub fn carrier(&self) -> &CarrierIdentity {
        &self.carrier
    }

    pub fn provider(&self) -> &ProviderIdentity {
        &self.provider
    }

    /// Carrier machine code, or `""` when unclassified.
    pub fn carrier_code(&self) -> &str {
        self.carrier.code()
    }

    /// Carrier display name, or `""` when unclassified.
    pub fn carrier_name(&self) -> &str {
        self.carrier.name()
    }

    pub fn provider_code(&self) -> &str {
        self.provider.code()
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Effective tracking code, or the original input when `original` is set.
    pub fn tracking_code(&self, original: bool) -> &str {
        if original {
            &self.original_input
        } else {
            &self.effective_code
        }
    }

    pub fn is_classified(&self) -> bool {
        self.carrier.is_set()
    }
}

/// Classifies a raw tracking code end to end with the default rule table.
pub fn classify_tracking_code(raw: &str) -> Package {
    Package::instance(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carrier_codes_round_trip() {
        for carrier in Carrier::all() {
            assert_eq!(Carrier::from_code(carrier.code()), Some(*carrier));
        }
    }

    #[test]
    fn carrier_serde_uses_machine_codes() {
        let json = serde_json::to_string(&Carrier::FedEx).unwrap();
        assert_eq!(json, "\"fedex\"");
        let back: Carrier = serde_json::from_str("\"lasership\"").unwrap();
        assert_eq!(back, Carrier::LaserShip);
    }

    #[test]
    fn provider_defaults_to_carrier() {
        for carrier in Carrier::all() {
            assert_eq!(Provider::from(*carrier).code(), carrier.code());
        }
    }

    #[test]
    fn unclassified_package_accessors_are_empty() {
        let package = Package::instance("not a tracking code");
        assert!(!package.is_classified());
        assert_eq!(package.carrier_code(), "");
        assert_eq!(package.carrier_name(), "");
        assert_eq!(package.provider_code(), "");
        assert_eq!(package.provider_name(), "");
    }

    #[test]
    fn tracking_code_accessor_switches_on_original_flag() {
        let package = Package::instance("1Z 999 AA1 01 2345 678 4");
        assert_eq!(package.tracking_code(true), "1Z 999 AA1 01 2345 678 4");
        assert_eq!(package.tracking_code(false), "1Z999AA10123456784");
    }

    #[test]
    fn package_serializes_flat() {
        let package = Package::instance("1Z999AA10123456784");
        let value = serde_json::to_value(&package).unwrap();
        assert_eq!(value["carrier_code"], "ups");
        assert_eq!(value["carrier_name"], "UPS");
        assert_eq!(value["provider_code"], "ups");
        assert_eq!(value["effective_code"], "1Z999AA10123456784");
    }
}
