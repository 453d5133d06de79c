//! Loading [`EngineConfig`] from TOML.
//!
//! Every key is optional; anything left out keeps its default. Tier tables
//! are replaced wholesale when given:
//!
//! ```toml
//! destination_vat_rate = 0.21
//! registration_fee = 350
//!
//! [[emissions_brackets]]
//! up_to = 120
//! rate_per_gram = 0.5
//!
//! [[emissions_brackets]]
//! rate_per_gram = 10
//!
//! [[auction_fees]]
//! up_to = 800000
//! fee = { fixed = 75000 }
//!
//! [[auction_fees]]
//! fee = { rate = 0.09 }
//! ```

use std::path::{Path, PathBuf};

use landed_core::{ConfigError, EngineConfig};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(#[from] ConfigError),
}

/// Parses and validates a TOML configuration.
pub fn parse_config(text: &str) -> Result<EngineConfig, ConfigLoadError> {
    let config: EngineConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Reads the configuration at `path`, or returns the defaults when no path
/// is given.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig, ConfigLoadError> {
    let Some(path) = path else {
        debug!("No config file given; using default rules");
        return Ok(EngineConfig::default());
    };

    let text = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&text)?;

    debug!(path = %path.display(), "Loaded engine config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = parse_config("").expect("Failed to parse empty config");

        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn scalar_overrides_keep_default_tables() {
        let config = parse_config("destination_vat_rate = 0.21\nregistration_fee = 350\n")
            .expect("Failed to parse config");

        assert_eq!(config.destination_vat_rate, dec!(0.21));
        assert_eq!(config.registration_fee, dec!(350));
        assert_eq!(
            config.emissions_brackets,
            EngineConfig::default().emissions_brackets
        );
    }

    #[test]
    fn out_of_range_rate_is_invalid() {
        let err = parse_config("import_duty_rate = 1.5\n").expect_err("Should reject 1.5");

        assert!(matches!(
            err,
            ConfigLoadError::Invalid(ConfigError::RateOutOfRange {
                name: "import_duty_rate",
                ..
            })
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = parse_config("destination_vat_rate = [").expect_err("Should fail to parse");

        assert!(matches!(err, ConfigLoadError::Parse(_)));
    }

    #[test]
    fn no_path_means_defaults() {
        let config = load_config(None).expect("Defaults should always load");

        assert_eq!(config, EngineConfig::default());
    }
}
