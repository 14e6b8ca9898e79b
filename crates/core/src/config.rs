//! Generation parameters and their validation.
//!
//! Configs can be built in code or loaded from TOML/JSON. Keys omitted from a
//! file fall back to [`GenerationConfig::default`].

use std::ops::RangeInclusive;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::MapGenError;

/// Fill percentages outside this band are accepted but tend to produce caves
/// that are almost entirely wall or almost entirely open floor.
pub const RECOMMENDED_FILL_PERCENT: RangeInclusive<u32> = 40..=60;

pub const MAX_FILL_PERCENT: u32 = 100;

/// Largest width or height; cell coordinates are stored as `i32`.
pub const MAX_DIMENSION: usize = i32::MAX as usize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    pub width: usize,
    pub height: usize,
    pub smooth_level: u32,
    pub wall_cluster_threshold_size: usize,
    pub room_threshold_size: usize,
    pub random_fill_percent: u32,
    pub seed: String,
    pub use_random_seed: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 48,
            smooth_level: 5,
            wall_cluster_threshold_size: 50,
            room_threshold_size: 50,
            random_fill_percent: 45,
            seed: "cave".to_string(),
            use_random_seed: false,
        }
    }
}

impl GenerationConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, MapGenError> {
        toml::from_str(raw).map_err(|err| MapGenError::Config(err.to_string()))
    }

    pub fn from_json_str(raw: &str) -> Result<Self, MapGenError> {
        serde_json::from_str(raw).map_err(|err| MapGenError::Config(err.to_string()))
    }

    /// Rejects configs that cannot produce a grid at all.
    ///
    /// A fill percent inside `0..=100` but outside [`RECOMMENDED_FILL_PERCENT`]
    /// only logs a warning.
    pub fn validate(&self) -> Result<(), MapGenError> {
        let area = self.width.checked_mul(self.height);
        if self.width == 0
            || self.height == 0
            || self.width > MAX_DIMENSION
            || self.height > MAX_DIMENSION
            || area.is_none()
        {
            return Err(MapGenError::InvalidDimension { width: self.width, height: self.height });
        }
        if self.random_fill_percent > MAX_FILL_PERCENT {
            return Err(MapGenError::InvalidFillPercent(self.random_fill_percent));
        }
        if !self.is_fill_percent_recommended() {
            warn!(
                "random fill percent {} is outside the recommended {}..={} band; expect a degenerate map",
                self.random_fill_percent,
                RECOMMENDED_FILL_PERCENT.start(),
                RECOMMENDED_FILL_PERCENT.end()
            );
        }
        Ok(())
    }

    pub fn is_fill_percent_recommended(&self) -> bool {
        RECOMMENDED_FILL_PERCENT.contains(&self.random_fill_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GenerationConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert!(config.is_fill_percent_recommended());
    }

    #[test]
    fn zero_dimensions_fail_fast() {
        let config = GenerationConfig { width: 0, ..GenerationConfig::default() };
        assert_eq!(
            config.validate(),
            Err(MapGenError::InvalidDimension { width: 0, height: 48 })
        );

        let config = GenerationConfig { height: 0, ..GenerationConfig::default() };
        assert!(matches!(config.validate(), Err(MapGenError::InvalidDimension { .. })));
    }

    #[test]
    fn oversized_dimensions_fail_before_allocation() {
        let overflowing =
            GenerationConfig { width: usize::MAX / 2 + 1, height: 2, ..GenerationConfig::default() };
        assert_eq!(
            overflowing.validate(),
            Err(MapGenError::InvalidDimension { width: usize::MAX / 2 + 1, height: 2 })
        );

        let too_wide =
            GenerationConfig { width: MAX_DIMENSION + 1, height: 1, ..GenerationConfig::default() };
        assert!(matches!(too_wide.validate(), Err(MapGenError::InvalidDimension { .. })));

        let too_tall =
            GenerationConfig { width: 1, height: MAX_DIMENSION + 1, ..GenerationConfig::default() };
        assert!(matches!(too_tall.validate(), Err(MapGenError::InvalidDimension { .. })));
    }

    #[test]
    fn fill_percent_above_hundred_is_rejected() {
        let config = GenerationConfig { random_fill_percent: 101, ..GenerationConfig::default() };
        assert_eq!(config.validate(), Err(MapGenError::InvalidFillPercent(101)));
    }

    #[test]
    fn out_of_band_fill_percent_is_accepted() {
        for fill in [0, 39, 61, 100] {
            let config = GenerationConfig { random_fill_percent: fill, ..GenerationConfig::default() };
            assert_eq!(config.validate(), Ok(()), "fill={fill} should only warn");
            assert!(!config.is_fill_percent_recommended());
        }
    }

    #[test]
    fn toml_fills_missing_keys_from_defaults() {
        let config = GenerationConfig::from_toml_str(
            r#"
            width = 80
            seed = "granite"
            "#,
        )
        .expect("toml should parse");
        assert_eq!(config.width, 80);
        assert_eq!(config.seed, "granite");
        assert_eq!(config.height, GenerationConfig::default().height);
    }

    #[test]
    fn unknown_keys_are_reported() {
        let err = GenerationConfig::from_json_str(r#"{"widht": 10}"#)
            .expect_err("typo should not be silently ignored");
        assert!(matches!(err, MapGenError::Config(message) if message.contains("widht")));
    }

    #[test]
    fn negative_dimension_in_file_is_a_config_error() {
        let err = GenerationConfig::from_toml_str("width = -4").expect_err("negative width");
        assert!(matches!(err, MapGenError::Config(_)));
    }
}
