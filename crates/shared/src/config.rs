//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Monetary policy thresholds.
    #[serde(default)]
    pub policy: PolicyConfig,
}

/// Monetary policy thresholds for the approval surface.
///
/// The two thresholds are independent risk tiers and must stay separately
/// configurable: the claim threshold flags individual claims at creation
/// time, the escalation threshold flags any aggregated item during review.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Claims above this amount are flagged at creation time.
    #[serde(default = "default_claim_threshold")]
    pub claim_threshold: Decimal,
    /// Aggregated items of any kind above this amount require escalation.
    #[serde(default = "default_escalation_threshold")]
    pub escalation_threshold: Decimal,
}

fn default_claim_threshold() -> Decimal {
    Decimal::new(1000, 0)
}

fn default_escalation_threshold() -> Decimal {
    Decimal::new(5000, 0)
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            claim_threshold: default_claim_threshold(),
            escalation_threshold: default_escalation_threshold(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Layering order: `config/default`, then `config/{RUN_MODE}`, then
    /// `OPSDESK__`-prefixed environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("OPSDESK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
