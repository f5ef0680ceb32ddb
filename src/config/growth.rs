//! Capacity growth policy for column reallocation.

use super::{Config, ValidationError, parse_env_var};
use crate::error::{Result, SoaError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How a column sizes its new storage when it must reallocate.
///
/// Small columns grow by `growth_factor`, columns at or above
/// `large_threshold` elements by `large_growth_factor`. The result is never
/// smaller than the capacity actually required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthConfig {
    /// Multiplier applied below `large_threshold`
    pub growth_factor: f64,

    /// Multiplier applied at or above `large_threshold`
    pub large_growth_factor: f64,

    /// Capacity (in elements) from which `large_growth_factor` applies
    pub large_threshold: usize,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            growth_factor: 2.0,
            large_growth_factor: 1.25,
            large_threshold: 256,
        }
    }
}

impl GrowthConfig {
    /// Create a new growth configuration builder.
    pub fn builder() -> GrowthConfigBuilder {
        GrowthConfigBuilder::new()
    }

    /// Capacity to allocate when `cap` must become at least `required`.
    #[inline]
    pub fn next_capacity(&self, cap: usize, required: usize) -> usize {
        if required <= cap {
            return cap;
        }
        let factor = if cap < self.large_threshold {
            self.growth_factor
        } else {
            self.large_growth_factor
        };
        // `as` saturates for out-of-range floats.
        let grown = (cap as f64 * factor).ceil() as usize;
        grown.max(required)
    }
}

fn check_factor(errors: &mut Vec<ValidationError>, field: &str, value: f64) {
    if !(1.0..=4.0).contains(&value) {
        errors.push(
            ValidationError::new(field, &value.to_string(), "growth factor must be between 1.0 and 4.0")
                .with_suggestion("typical values: 1.25-2.0"),
        );
    }
}

impl Config for GrowthConfig {
    fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        check_factor(&mut errors, "growth_factor", self.growth_factor);
        check_factor(&mut errors, "large_growth_factor", self.large_growth_factor);

        if self.large_growth_factor > self.growth_factor {
            errors.push(ValidationError::new(
                "large_growth_factor",
                &self.large_growth_factor.to_string(),
                "large growth factor must not exceed growth factor",
            ));
        }

        if !errors.is_empty() {
            return Err(SoaError::configuration(format!(
                "Growth configuration validation failed: {}",
                errors
                    .into_iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("; ")
            )));
        }

        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();

        config.growth_factor =
            parse_env_var(&format!("{}GROWTH_FACTOR", prefix), config.growth_factor)?;
        config.large_growth_factor = parse_env_var(
            &format!("{}LARGE_GROWTH_FACTOR", prefix),
            config.large_growth_factor,
        )?;
        config.large_threshold =
            parse_env_var(&format!("{}LARGE_THRESHOLD", prefix), config.large_threshold)?;

        config.validate()?;
        Ok(config)
    }

    fn performance_preset() -> Self {
        Self {
            growth_factor: 2.0,
            large_growth_factor: 2.0,
            large_threshold: usize::MAX,
        }
    }

    fn memory_preset() -> Self {
        Self {
            growth_factor: 1.5,
            large_growth_factor: 1.125,
            large_threshold: 64,
        }
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self).map_err(|e| {
            SoaError::configuration(format!("Failed to serialize growth config: {}", e))
        })?;

        std::fs::write(path, serialized)?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = serde_json::from_str(&content).map_err(|e| {
            SoaError::configuration(format!("Failed to parse growth config file: {}", e))
        })?;

        config.validate()?;
        log::debug!("Loaded growth config: {:?}", config);
        Ok(config)
    }
}

/// Builder for [`GrowthConfig`].
#[derive(Debug, Clone, Default)]
pub struct GrowthConfigBuilder {
    config: GrowthConfig,
}

impl GrowthConfigBuilder {
    /// Start from the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the small-column growth factor.
    pub fn growth_factor(mut self, factor: f64) -> Self {
        self.config.growth_factor = factor;
        self
    }

    /// Set the large-column growth factor.
    pub fn large_growth_factor(mut self, factor: f64) -> Self {
        self.config.large_growth_factor = factor;
        self
    }

    /// Set the large-column threshold.
    pub fn large_threshold(mut self, threshold: usize) -> Self {
        self.config.large_threshold = threshold;
        self
    }

    /// Validate and build.
    pub fn build(self) -> Result<GrowthConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
