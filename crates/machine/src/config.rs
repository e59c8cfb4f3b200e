//! Machine configuration.

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

use crate::coin::CoinPolicy;

/// Manufacturer reported when nothing else is configured.
pub const DEFAULT_MANUFACTURER: &str = "Vending machine LTD";

/// Environment variable overriding the manufacturer name.
pub const MANUFACTURER_ENV: &str = "COINVEND_MANUFACTURER";

/// Static settings of a machine instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    pub manufacturer: String,
    pub coins: CoinPolicy,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            manufacturer: DEFAULT_MANUFACTURER.to_string(),
            coins: CoinPolicy::standard(),
        }
    }
}

impl MachineConfig {
    /// Defaults, with the manufacturer taken from `COINVEND_MANUFACTURER` when set.
    pub fn from_env() -> Self {
        Self::with_manufacturer_override(std::env::var(MANUFACTURER_ENV).ok())
    }

    fn with_manufacturer_override(manufacturer: Option<String>) -> Self {
        match manufacturer {
            Some(name) if !name.trim().is_empty() => Self {
                manufacturer: name,
                ..Self::default()
            },
            Some(_) => {
                tracing::warn!("{MANUFACTURER_ENV} is blank; using default manufacturer");
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// Parses a JSON document; missing fields fall back to the defaults.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("failed to parse machine config JSON")?;
        if config.manufacturer.trim().is_empty() {
            bail!("manufacturer cannot be empty");
        }
        if config.coins.rejects_everything() {
            bail!("coin policy needs at least one major and one minor denomination");
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinvend_core::MonetaryAmount;

    #[test]
    fn default_uses_standard_coins_and_manufacturer() {
        let config = MachineConfig::default();
        assert_eq!(config.manufacturer, "Vending machine LTD");
        assert_eq!(config.coins, CoinPolicy::standard());
    }

    #[test]
    fn manufacturer_override_applies_when_present() {
        let config = MachineConfig::with_manufacturer_override(Some("Snack Co".to_string()));
        assert_eq!(config.manufacturer, "Snack Co");

        let config = MachineConfig::with_manufacturer_override(Some("  ".to_string()));
        assert_eq!(config.manufacturer, DEFAULT_MANUFACTURER);

        let config = MachineConfig::with_manufacturer_override(None);
        assert_eq!(config, MachineConfig::default());
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config = MachineConfig::from_json_str(r#"{ "manufacturer": "Snack Co" }"#).unwrap();
        assert_eq!(config.manufacturer, "Snack Co");
        assert!(config.coins.accepts(&MonetaryAmount::new(2, 50)));
    }

    #[test]
    fn json_can_restrict_coins() {
        let config = MachineConfig::from_json_str(
            r#"{ "coins": { "majors": [0], "minors": [10, 20] } }"#,
        )
        .unwrap();
        assert_eq!(config.manufacturer, DEFAULT_MANUFACTURER);
        assert!(config.coins.accepts(&MonetaryAmount::new(0, 10)));
        assert!(!config.coins.accepts(&MonetaryAmount::new(1, 0)));
    }

    #[test]
    fn json_rejects_blank_manufacturer_empty_coins_and_malformed_input() {
        assert!(MachineConfig::from_json_str(r#"{ "manufacturer": "" }"#).is_err());

        let err =
            MachineConfig::from_json_str(r#"{ "coins": { "majors": [], "minors": [] } }"#)
                .unwrap_err();
        assert!(err.to_string().contains("at least one major and one minor"));
        assert!(
            MachineConfig::from_json_str(r#"{ "coins": { "majors": [1], "minors": [] } }"#)
                .is_err()
        );

        let err = MachineConfig::from_json_str("{ not json").unwrap_err();
        assert!(err.to_string().contains("failed to parse machine config JSON"));
    }
}
