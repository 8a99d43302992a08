//! The carrier deduction engine.
//!
//! A [`Classifier`] walks the ordered rule table in [`rules`] and returns
//! the first carrier whose pattern group matches a canonical code. The rule
//! table is process-wide immutable configuration; a classifier instance only
//! carries per-run options (disabled carrier groups, the experimental
//! Endicia sub-provider override).

pub mod rules;

use log::{debug, trace};

use crate::core::{Carrier, Classification, Provider};
use crate::normalize::CanonicalCode;
use rules::{Narrowing, RULE_TABLE, USPS_IMPB_ZIP_20, USPS_IMPB_ZIP_22};

/// Applies the carrier rule table to canonical codes.
///
/// Pure and synchronous: no I/O, no shared mutable state, safe to use from
/// any number of threads at once.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    disabled: Vec<Carrier>,
    endicia_override: bool,
}

impl Classifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables the experimental Endicia sub-provider override: a USPS match
    /// on a 420 ZIP-prefixed Intelligent Mail Package Barcode reports
    /// provider `endicia` and narrows the tracking code to the embedded
    /// serial block. Off by default; the upstream trigger condition was
    /// never wired in.
    pub fn with_endicia_override(mut self) -> Self {
        self.endicia_override = true;
        self
    }

    /// Removes whole carrier groups from consideration. The table order of
    /// the remaining groups is unchanged.
    pub fn without_carriers(mut self, carriers: &[Carrier]) -> Self {
        self.disabled.extend_from_slice(carriers);
        self
    }

    /// Classifies a canonical code against the rule table.
    ///
    /// First matching group wins. No match is a valid terminal outcome, not
    /// an error: the result then carries no carrier and the effective code
    /// equals the canonical code.
    pub fn classify(&self, code: &CanonicalCode) -> Classification {
        let canonical = code.as_str();

        for rule in RULE_TABLE.iter() {
            if self.disabled.contains(&rule.carrier) {
                continue;
            }
            trace!("trying {:?} group against {canonical:?}", rule.carrier);

            let Some((matched, narrowing)) = rule.find(canonical) else {
                continue;
            };
            debug!(
                "classified {canonical:?} as {} (matched {:?})",
                rule.carrier.code(),
                matched.as_str()
            );

            let effective_code = match narrowing {
                Narrowing::MatchAbove(limit) if code.len() > limit => {
                    matched.as_str().to_string()
                }
                _ => canonical.to_string(),
            };
            let provider = rule
                .provider_override
                .unwrap_or_else(|| Provider::from(rule.carrier));

            let mut classification = Classification {
                effective_code,
                carrier: Some(rule.carrier),
                provider: Some(provider),
            };

            if self.endicia_override && rule.carrier == Carrier::Usps {
                if let Some(serial) = impb_serial(canonical) {
                    classification.provider = Some(Provider::Endicia);
                    classification.effective_code = serial.to_string();
                    debug!("endicia override applied, serial {serial:?}");
                }
            }

            return classification;
        }

        Classification {
            effective_code: canonical.to_string(),
            carrier: None,
            provider: None,
        }
    }
}

/// Serial block embedded in a 420 ZIP-prefixed IMpb code, if the code has
/// that shape.
fn impb_serial(canonical: &str) -> Option<&str> {
    USPS_IMPB_ZIP_22
        .captures(canonical)
        .or_else(|| USPS_IMPB_ZIP_20.captures(canonical))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn classify(raw: &str) -> Classification {
        Classifier::new().classify(&normalize(raw))
    }

    #[test]
    fn first_matching_group_wins() {
        // 12 digits starting 91 satisfies both the USPS prefix rules and the
        // FedEx 12-digit rule; USPS is earlier in the table.
        let result = classify("911234567890");
        assert_eq!(result.carrier, Some(Carrier::Usps));
    }

    #[test]
    fn fifteen_digits_resolve_to_fedex_not_later_groups() {
        let result = classify("123456789012345");
        assert_eq!(result.carrier, Some(Carrier::FedEx));
    }

    #[test]
    fn china_post_wins_over_canada_post_shape() {
        let result = classify("RB123456789CN");
        assert_eq!(result.carrier, Some(Carrier::ChinaPost));
    }

    #[test]
    fn bare_91_prefix_match_keeps_full_code() {
        // Only the two-character prefix alternative matches here; the rest
        // of the code must survive even above the narrowing threshold.
        let result = classify("91ABCDEFGHIJK");
        assert_eq!(result.carrier, Some(Carrier::Usps));
        assert_eq!(result.effective_code, "91ABCDEFGHIJK");
    }

    #[test]
    fn no_match_is_unclassified_with_canonical_code() {
        let result = classify("HELLO-WORLD");
        assert_eq!(result.carrier, None);
        assert_eq!(result.provider, None);
        assert_eq!(result.effective_code, "HELLOWORLD");
    }

    #[test]
    fn disabled_carrier_falls_through_to_later_group() {
        let classifier = Classifier::new().without_carriers(&[Carrier::FedEx]);
        let result = classifier.classify(&normalize("123456789012345"));
        // 15 digits matches nothing after FedEx is removed.
        assert_eq!(result.carrier, None);

        let result = classifier.classify(&normalize("1234567890"));
        assert_eq!(result.carrier, Some(Carrier::Dhl));
    }

    #[test]
    fn provider_defaults_to_carrier() {
        let result = classify("LT12345678");
        assert_eq!(result.carrier, Some(Carrier::LaserShip));
        assert_eq!(result.provider, Some(Provider::LaserShip));
    }

    #[test]
    fn endicia_override_is_off_by_default() {
        let result = classify("420123459400111699000367046792");
        assert_eq!(result.carrier, Some(Carrier::Usps));
        assert_eq!(result.provider, Some(Provider::Usps));
        // The all-digit alternative matches the whole 30-digit code first.
        assert_eq!(result.effective_code, "420123459400111699000367046792");
    }

    #[test]
    fn endicia_override_narrows_to_impb_serial() {
        let classifier = Classifier::new().with_endicia_override();
        let result = classifier.classify(&normalize("420123459400111699000367046792"));
        assert_eq!(result.carrier, Some(Carrier::Usps));
        assert_eq!(result.provider, Some(Provider::Endicia));
        assert_eq!(result.effective_code, "9400111699000367046792");
    }

    #[test]
    fn endicia_override_ignores_non_impb_usps_codes() {
        let classifier = Classifier::new().with_endicia_override();
        let result = classifier.classify(&normalize("9400111699000367046792"));
        assert_eq!(result.provider, Some(Provider::Usps));
    }
}
