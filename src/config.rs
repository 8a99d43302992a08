//! Configuration loaded from `.waybill.toml`.
//!
//! The rule table itself is not configurable; config can only remove whole
//! carrier groups from consideration and toggle the experimental Endicia
//! sub-provider override. Loaded once per process and cached.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

use crate::classify::Classifier;
use crate::core::Carrier;
use crate::errors::WaybillError;

pub const CONFIG_FILE: &str = ".waybill.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaybillConfig {
    #[serde(default)]
    pub classifier: ClassifierConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Carrier codes whose rule groups are skipped entirely.
    #[serde(default)]
    pub disabled_carriers: Vec<String>,

    /// Report provider `endicia` for 420-prefixed IMpb codes. Experimental.
    #[serde(default)]
    pub endicia_override: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub default_format: String,
}

fn default_format() -> String {
    "terminal".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}

impl WaybillConfig {
    pub fn load(path: &Path) -> Result<Self, WaybillError> {
        let content = std::fs::read_to_string(path).map_err(|source| WaybillError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| WaybillError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Builds a classifier honoring the disabled-carrier list and the
    /// Endicia toggle. Unknown codes in `disabled_carriers` are ignored.
    pub fn classifier(&self) -> Classifier {
        let disabled: Vec<Carrier> = self
            .classifier
            .disabled_carriers
            .iter()
            .filter_map(|code| Carrier::from_code(code))
            .collect();

        let mut classifier = Classifier::new().without_carriers(&disabled);
        if self.classifier.endicia_override {
            classifier = classifier.with_endicia_override();
        }
        classifier
    }
}

static CONFIG: OnceLock<WaybillConfig> = OnceLock::new();

/// Process-wide config: `.waybill.toml` from the working directory if it
/// exists and parses, defaults otherwise.
pub fn get_config() -> &'static WaybillConfig {
    CONFIG.get_or_init(|| {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            WaybillConfig::load(path).unwrap_or_else(|err| {
                log::warn!("ignoring invalid {CONFIG_FILE}: {err}");
                WaybillConfig::default()
            })
        } else {
            WaybillConfig::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_uses_full_rule_table() {
        let config = WaybillConfig::default();
        assert!(config.classifier.disabled_carriers.is_empty());
        assert!(!config.classifier.endicia_override);
        assert_eq!(config.output.default_format, "terminal");
    }

    #[test]
    fn parses_partial_config() {
        let config: WaybillConfig = toml::from_str(
            r#"
            [classifier]
            disabled_carriers = ["fedex", "nonsense"]
            "#,
        )
        .unwrap();
        assert_eq!(config.classifier.disabled_carriers, vec!["fedex", "nonsense"]);
        assert!(!config.classifier.endicia_override);

        // Unknown codes are dropped when building the classifier.
        let classifier = config.classifier();
        let result = classifier.classify(&crate::normalize::normalize("123456789012345"));
        assert_eq!(result.carrier, None);
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not [valid toml").unwrap();
        let err = WaybillConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, WaybillError::ConfigParse { .. }));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = WaybillConfig::load(Path::new("/no/such/.waybill.toml")).unwrap_err();
        assert!(matches!(err, WaybillError::ConfigRead { .. }));
    }
}
