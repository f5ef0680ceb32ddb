//! Configuration APIs for soa-slice
//!
//! The only tunable behavior of the library is how a [`Column`](crate::Column)
//! sizes its new backing storage when it has to reallocate. That policy lives
//! in [`GrowthConfig`].
//!
//! # Configuration Traits
//!
//! The [`Config`] trait provides validation, environment initialization,
//! presets and file persistence for configuration types.
//!
//! ```rust
//! use soa_slice::config::{Config, GrowthConfig};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GrowthConfig::builder()
//!     .growth_factor(1.5)
//!     .large_threshold(1024)
//!     .build()?;
//! assert_eq!(config.next_capacity(4, 5), 6);
//!
//! let preset = GrowthConfig::memory_preset();
//! assert!(preset.validate().is_ok());
//! # Ok(())
//! # }
//! ```
//!
//! # Process-wide policy
//!
//! [`growth_policy`] returns the policy used by `Column::grow`. It is read
//! from `SOA_*` environment variables on first use unless a policy was
//! installed earlier with [`install_growth_policy`].

use crate::error::{Result, SoaError};
use once_cell::sync::OnceCell;
use std::env;
use std::fmt;
use std::path::Path;

pub mod growth;

pub use growth::{GrowthConfig, GrowthConfigBuilder};

/// Environment variable prefix used by [`Config::from_env`].
pub const ENV_PREFIX: &str = "SOA_";

/// Common configuration trait providing validation, environment initialization,
/// and preset management functionality.
pub trait Config: Clone + fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from environment variables with the `SOA_` prefix.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix(ENV_PREFIX)
    }

    /// Initialize configuration from environment variables with a custom prefix.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Preset favoring fewer reallocations over memory footprint.
    fn performance_preset() -> Self;

    /// Preset favoring a small memory footprint.
    fn memory_preset() -> Self;

    /// Balanced preset; the default configuration.
    fn balanced_preset() -> Self
    where
        Self: Default,
    {
        Self::default()
    }

    /// Save configuration to a JSON file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Load and validate configuration from a JSON file.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// Configuration validation error details.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// The invalid value
    pub value: String,
    /// Description of why the value is invalid
    pub reason: String,
    /// Suggested valid values or ranges
    pub suggestion: Option<String>,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(field: &str, value: &str, reason: &str) -> Self {
        Self {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
            suggestion: None,
        }
    }

    /// Add a suggestion for valid values.
    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid configuration for field '{}': value '{}' is invalid ({})",
            self.field, self.value, self.reason
        )?;

        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". Suggested values: {}", suggestion)?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Parse an environment variable, falling back to `default` when it is unset.
///
/// A variable that is set but does not parse is reported as a configuration
/// error rather than silently ignored.
pub fn parse_env_var<T>(var_name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
{
    match env::var(var_name) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            SoaError::configuration(format!("cannot parse {}={:?}", var_name, raw))
        }),
        Err(_) => Ok(default),
    }
}

static GROWTH_POLICY: OnceCell<GrowthConfig> = OnceCell::new();

/// The growth policy used by `Column::grow`.
///
/// Initialized from the environment on first use; an invalid environment
/// falls back to [`GrowthConfig::default`].
pub fn growth_policy() -> &'static GrowthConfig {
    GROWTH_POLICY.get_or_init(|| match GrowthConfig::from_env() {
        Ok(config) => {
            log::debug!("Loaded growth policy: {:?}", config);
            config
        }
        Err(e) => {
            log::warn!("Ignoring growth policy from environment: {}", e);
            GrowthConfig::default()
        }
    })
}

/// Install the process-wide growth policy.
///
/// Fails if the configuration is invalid or a policy is already in effect,
/// either installed earlier or initialized by a previous [`growth_policy`] call.
pub fn install_growth_policy(config: GrowthConfig) -> Result<()> {
    config.validate()?;
    log::debug!("Installing growth policy: {:?}", config);
    GROWTH_POLICY
        .set(config)
        .map_err(|_| SoaError::configuration("growth policy already in effect"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("growth_factor", "9", "too large")
            .with_suggestion("1.25-2.0");
        let display = err.to_string();
        assert!(display.contains("growth_factor"));
        assert!(display.contains("too large"));
        assert!(display.contains("Suggested values: 1.25-2.0"));
    }

    #[test]
    fn test_parse_env_var_default_when_unset() -> Result<()> {
        let value: usize = parse_env_var("SOA_TEST_SURELY_UNSET_VARIABLE", 7)?;
        assert_eq!(value, 7);
        Ok(())
    }

    #[test]
    fn test_parse_env_var_rejects_garbage() {
        // SAFETY: the variable name is unique to this test.
        unsafe { env::set_var("SOA_TEST_PARSE_GARBAGE", "not-a-number") };
        let result: Result<usize> = parse_env_var("SOA_TEST_PARSE_GARBAGE", 1);
        assert!(matches!(result, Err(SoaError::Configuration { .. })));
        unsafe { env::remove_var("SOA_TEST_PARSE_GARBAGE") };
    }

    #[test]
    fn test_growth_policy_is_stable() {
        let first = growth_policy() as *const GrowthConfig;
        let second = growth_policy() as *const GrowthConfig;
        assert_eq!(first, second);
        assert!(growth_policy().validate().is_ok());
        // Already initialized by the calls above.
        assert!(install_growth_policy(GrowthConfig::default()).is_err());
    }
}
