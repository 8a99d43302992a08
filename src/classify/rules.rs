//! The carrier rule table.
//!
//! Each carrier contributes a group of pattern alternatives over the
//! canonical code. Groups are evaluated in the order of [`RULE_TABLE`] and
//! the first alternative to match decides the carrier, so table order is
//! load-bearing: many code shapes satisfy more than one carrier and the
//! earlier group always wins.
//!
//! All patterns match case-insensitively. Grouped paper forms (e.g. the DHL
//! 4-4-2 layout) collapse once the normalizer removes separators, so the
//! patterns here describe contiguous alphanumeric runs only.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{Carrier, Provider};

// UPS: 18-char 1Z service-point form, single-letter K/J prefix form, and the
// historical Mail Innovations numeric form.
static UPS_1Z: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^1Z[A-Z0-9]{6}\d{2}\d{8}$").unwrap());
static UPS_KJ: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^[KJ]\d{10}$").unwrap());
static UPS_MAIL_INNOVATIONS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^[0-9T]\d{10}$").unwrap());

// Amazon Logistics: TBA + 12 digits, possibly embedded in adjacent noise.
static AMAZON_TBA: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)TBA\d{12}").unwrap());

// USPS, most specific shapes first. The last two are the 420 ZIP-prefixed
// Intelligent Mail Package Barcode variants; their capture group is the
// embedded serial used by the experimental Endicia override.
static USPS_30_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{30}$").unwrap());
static USPS_91_SERIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^91\d+$").unwrap());
static USPS_20_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{20}$").unwrap());
static USPS_26_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{26}$").unwrap());
static USPS_EXPRESS_INTL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^E[A-Z]\d{9}[A-Z]{2}$").unwrap());
static USPS_22_LEADING_9: Lazy<Regex> = Lazy::new(|| Regex::new(r"^9\d{21}$").unwrap());
static USPS_91_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^91").unwrap());
static USPS_US_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^[A-Z]{2}\d+US$").unwrap());
static USPS_22_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{22}$").unwrap());
pub(crate) static USPS_IMPB_ZIP_20: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^420\d{5}(\d{20})$").unwrap());
pub(crate) static USPS_IMPB_ZIP_22: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^420\d{5}(\d{22})$").unwrap());

// FedEx: express/ground 12-digit form with a non-zero leading block, the
// "96"-prefixed 22-digit block (prefix match, trailing digits tolerated),
// plain 15- and 12-digit forms, and the SmartPost "98" family.
static FEDEX_EXPRESS_12: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[1-9]{4}\d{4}\d{4}$").unwrap());
static FEDEX_96_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^96\d{20}").unwrap());
static FEDEX_15_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{15}$").unwrap());
static FEDEX_12_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{12}$").unwrap());
static FEDEX_SMARTPOST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^98(?:\d{2}|\d{4}|\d{9})\d{12}(?:\d{3})?$").unwrap());

static DHL_10_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{10}$").unwrap());

static LASERSHIP: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(?:LT|LE|1L)\d{8}$").unwrap());

static ROYAL_MAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^[A-Z]{2}\d+GB$").unwrap());

static CHINA_POST: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^[RE][A-Z]\d{9}CN$").unwrap());

static CANADA_POST_16: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{16}$").unwrap());
static CANADA_POST_INTL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[A-Z]{2}\d{9}[A-Z]{2}$").unwrap());

/// Effective-code policy for a matched alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Narrowing {
    /// Effective code is always the full canonical code.
    Keep,
    /// Effective code is the matched substring, but only when the canonical
    /// code is longer than this threshold; at or below it, the canonical
    /// code is kept even on a match.
    MatchAbove(usize),
}

/// A single pattern alternative and its narrowing policy. Narrowing applies
/// to the longer, structured forms only; bare prefix alternatives keep the
/// canonical code so a match never discards the bulk of it.
pub struct RuleAlternative {
    pub pattern: &'static Lazy<Regex>,
    pub narrowing: Narrowing,
}

impl RuleAlternative {
    const fn keep(pattern: &'static Lazy<Regex>) -> Self {
        Self {
            pattern,
            narrowing: Narrowing::Keep,
        }
    }

    const fn narrow_above(pattern: &'static Lazy<Regex>, limit: usize) -> Self {
        Self {
            pattern,
            narrowing: Narrowing::MatchAbove(limit),
        }
    }
}

/// One carrier's rule group: its pattern alternatives, tried in order, plus
/// an optional provider override.
pub struct CarrierRule {
    pub carrier: Carrier,
    pub alternatives: Vec<RuleAlternative>,
    pub provider_override: Option<Provider>,
}

impl CarrierRule {
    /// First matching alternative against a canonical code, if any, with
    /// that alternative's narrowing policy.
    pub fn find<'a>(&self, code: &'a str) -> Option<(regex::Match<'a>, Narrowing)> {
        self.alternatives
            .iter()
            .find_map(|alt| alt.pattern.find(code).map(|m| (m, alt.narrowing)))
    }

    pub fn is_match(&self, code: &str) -> bool {
        self.alternatives.iter().any(|alt| alt.pattern.is_match(code))
    }
}

/// The ordered rule table. First match wins; do not reorder.
pub static RULE_TABLE: Lazy<Vec<CarrierRule>> = Lazy::new(|| {
    vec![
        CarrierRule {
            carrier: Carrier::Ups,
            alternatives: vec![
                RuleAlternative::keep(&UPS_1Z),
                RuleAlternative::keep(&UPS_KJ),
                RuleAlternative::keep(&UPS_MAIL_INNOVATIONS),
            ],
            provider_override: None,
        },
        CarrierRule {
            carrier: Carrier::Amazon,
            alternatives: vec![RuleAlternative::narrow_above(&AMAZON_TBA, 15)],
            provider_override: None,
        },
        CarrierRule {
            carrier: Carrier::Usps,
            alternatives: vec![
                RuleAlternative::narrow_above(&USPS_30_DIGIT, 12),
                RuleAlternative::narrow_above(&USPS_91_SERIAL, 12),
                RuleAlternative::narrow_above(&USPS_20_DIGIT, 12),
                RuleAlternative::narrow_above(&USPS_26_DIGIT, 12),
                RuleAlternative::narrow_above(&USPS_EXPRESS_INTL, 12),
                RuleAlternative::narrow_above(&USPS_22_LEADING_9, 12),
                // Bare prefix: matching two characters must not discard the
                // rest of the code.
                RuleAlternative::keep(&USPS_91_PREFIX),
                RuleAlternative::narrow_above(&USPS_US_SUFFIX, 12),
                RuleAlternative::narrow_above(&USPS_22_DIGIT, 12),
                RuleAlternative::narrow_above(&USPS_IMPB_ZIP_20, 12),
                RuleAlternative::narrow_above(&USPS_IMPB_ZIP_22, 12),
            ],
            provider_override: None,
        },
        CarrierRule {
            carrier: Carrier::FedEx,
            alternatives: vec![
                RuleAlternative::keep(&FEDEX_EXPRESS_12),
                RuleAlternative::keep(&FEDEX_96_PREFIX),
                RuleAlternative::keep(&FEDEX_15_DIGIT),
                RuleAlternative::keep(&FEDEX_12_DIGIT),
                RuleAlternative::keep(&FEDEX_SMARTPOST),
            ],
            provider_override: None,
        },
        CarrierRule {
            carrier: Carrier::Dhl,
            alternatives: vec![RuleAlternative::keep(&DHL_10_DIGIT)],
            provider_override: None,
        },
        CarrierRule {
            carrier: Carrier::LaserShip,
            alternatives: vec![RuleAlternative::keep(&LASERSHIP)],
            provider_override: None,
        },
        CarrierRule {
            carrier: Carrier::RoyalMail,
            alternatives: vec![RuleAlternative::keep(&ROYAL_MAIL)],
            provider_override: None,
        },
        CarrierRule {
            carrier: Carrier::ChinaPost,
            alternatives: vec![RuleAlternative::keep(&CHINA_POST)],
            provider_override: None,
        },
        CarrierRule {
            carrier: Carrier::CanadaPost,
            alternatives: vec![
                RuleAlternative::keep(&CANADA_POST_16),
                RuleAlternative::keep(&CANADA_POST_INTL),
            ],
            provider_override: None,
        },
    ]
});

/// Looks up a single carrier's rule group, e.g. to test it in isolation.
pub fn rule_for(carrier: Carrier) -> &'static CarrierRule {
    RULE_TABLE
        .iter()
        .find(|rule| rule.carrier == carrier)
        .unwrap_or_else(|| unreachable!("every carrier has a rule group"))
}
