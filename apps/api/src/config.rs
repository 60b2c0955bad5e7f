//! API server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, then handed to the rest of the app as an owned value.

use knight_core::types::TaxRate;
use std::env;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Port to listen on.
    pub port: u16,

    /// Bind address (default: 0.0.0.0).
    pub bind_addr: String,

    /// Sales tax rate in basis points (650 = 6.5%).
    pub tax_rate_bps: u32,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = ApiConfig {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,

            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string()),

            tax_rate_bps: env::var("TAX_RATE_BPS")
                .unwrap_or_else(|_| "650".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TAX_RATE_BPS".to_string()))?,
        };

        // A rate above 100% is a misconfiguration, not a tax policy
        if config.tax_rate_bps > 10000 {
            return Err(ConfigError::InvalidValue("TAX_RATE_BPS".to_string()));
        }

        Ok(config)
    }

    /// Returns the configured tax rate.
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            port: 3001,
            bind_addr: "0.0.0.0".to_string(),
            tax_rate_bps: 650,
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.port, 3001);
        assert_eq!(config.tax_rate().bps(), 650);
        assert_eq!(config.bind_address(), "0.0.0.0:3001");
    }
}
