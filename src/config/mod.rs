//! Bay configuration.
//!
//! Sources, later ones override earlier ones:
//!
//! 1. Built-in default prices
//! 2. Optional TOML file
//! 3. `WASHBAY_*` environment variables (amounts in cents)
//!
//! ```toml
//! [pricing]
//! base_fee = 500
//! manual_presoak = 150
//! manual_dry = 100
//! waxing = 120
//! ```

mod error;

pub use error::{ConfigError, ConfigResult};

use crate::bay::WashOptions;
use crate::pricing::{Money, PriceList};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

pub const ENV_BASE_FEE: &str = "WASHBAY_BASE_FEE";
pub const ENV_MANUAL_PRESOAK_FEE: &str = "WASHBAY_MANUAL_PRESOAK_FEE";
pub const ENV_MANUAL_DRY_FEE: &str = "WASHBAY_MANUAL_DRY_FEE";
pub const ENV_WAXING_FEE: &str = "WASHBAY_WAXING_FEE";

/// Configuration of a wash bay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BayConfig {
    pub pricing: PriceList,
}

impl BayConfig {
    /// Load configuration from defaults, an optional file and the environment.
    pub fn load(config_path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path {
            if path.exists() {
                info!(?path, "Loading bay config from file");
                let contents = std::fs::read_to_string(path)?;
                config = Self::from_toml_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<&Path>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load bay config: {}. Using defaults.", e);
            Self::default()
        })
    }

    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.pricing.base_fee.is_zero() {
            return Err(ConfigError::Invalid(
                "pricing.base_fee must be greater than 0".into(),
            ));
        }
        let everything = WashOptions::new(true, true, true);
        if self.pricing.checked_quote(&everything).is_none() {
            return Err(ConfigError::Invalid(
                "pricing: base fee plus all surcharges exceeds the largest amount".into(),
            ));
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply price overrides from `lookup`, keyed by the `ENV_*` names.
    ///
    /// Values that are not whole numbers of cents are skipped.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let pricing = &mut self.pricing;
        let targets = [
            (ENV_BASE_FEE, &mut pricing.base_fee),
            (ENV_MANUAL_PRESOAK_FEE, &mut pricing.manual_presoak),
            (ENV_MANUAL_DRY_FEE, &mut pricing.manual_dry),
            (ENV_WAXING_FEE, &mut pricing.waxing),
        ];

        for (key, slot) in targets {
            let Some(raw) = lookup(key) else {
                continue;
            };
            match raw.trim().parse::<u64>() {
                Ok(cents) => {
                    debug!(key, cents, "Overriding price from environment");
                    *slot = Money::from_cents(cents);
                }
                Err(_) => warn!(key, value = %raw, "Ignoring non-numeric price override"),
            }
        }
    }
}
