use serde::{Deserialize, Serialize};

use crate::{ConfigError, SchemeSetting};

/// Tuning for the cursor particle [`Engine`](crate::Engine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SparkleConfig {
    /// Maximum number of particles alive in each pool.
    pub capacity: usize,
    /// Minimum interval between accepted pointer spawns, in milliseconds.
    pub throttle_ms: f64,
    /// Target frame interval; ticks closer together than this are skipped.
    pub frame_ms: f64,
    pub initial_size: f64,
    pub size_floor: f64,
    /// Size lost per reference frame.
    pub size_decay: f64,
    /// Life gained per reference frame.
    pub life_rate: f64,
    pub life_threshold: f64,
    /// Number of colours generated for the engine palette.
    pub palette_size: usize,
}

impl Default for SparkleConfig {
    fn default() -> Self {
        SparkleConfig {
            capacity: 50,
            throttle_ms: 100.0,
            frame_ms: 16.67,
            initial_size: 5.0,
            size_floor: 2.0,
            size_decay: 0.05,
            life_rate: 0.5,
            life_threshold: 100.0,
            palette_size: 10,
        }
    }
}

impl SparkleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }

        if self.palette_size == 0 {
            return Err(ConfigError::EmptyPalette);
        }

        if !(self.frame_ms > 0.0) {
            return Err(ConfigError::FrameInterval(self.frame_ms));
        }

        if self.initial_size < self.size_floor {
            return Err(ConfigError::SizeBelowFloor {
                initial: self.initial_size,
                floor: self.size_floor,
            });
        }

        for (name, value) in [
            ("throttle_ms", self.throttle_ms),
            ("size_decay", self.size_decay),
            ("life_rate", self.life_rate),
            ("life_threshold", self.life_threshold),
        ] {
            if !(value >= 0.0) {
                return Err(ConfigError::Negative(name, value));
            }
        }

        Ok(())
    }
}

/// Site-wide settings for the page effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sparkle: SparkleConfig,
    /// Distance kept between the viewport top and a table-of-contents target.
    pub toc_offset: f64,
    /// Sampling interval for intermediate reading progress updates.
    pub progress_throttle_ms: f64,
    pub scheme: SchemeSetting,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sparkle: SparkleConfig::default(),
            toc_offset: 80.0,
            progress_throttle_ms: 150.0,
            scheme: SchemeSetting::System,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sparkle.validate()?;

        if !(self.progress_throttle_ms >= 0.0) {
            return Err(ConfigError::Negative(
                "progress_throttle_ms",
                self.progress_throttle_ms,
            ));
        }

        if !self.toc_offset.is_finite() {
            return Err(ConfigError::TocOffset(self.toc_offset));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"sparkle": {"capacity": 12}, "scheme": "dark"}"#).unwrap();

        assert_eq!(config.sparkle.capacity, 12);
        assert_eq!(config.sparkle.throttle_ms, 100.0);
        assert_eq!(config.toc_offset, 80.0);
        assert_eq!(config.scheme, SchemeSetting::Dark);
    }

    #[test]
    fn rejects_bad_values() {
        let mut config = Config::default();
        config.sparkle.frame_ms = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FrameInterval(_))
        ));

        let mut config = Config::default();
        config.sparkle.initial_size = 1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SizeBelowFloor { .. })
        ));

        let mut config = Config::default();
        config.sparkle.life_rate = -0.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative("life_rate", _))
        ));

        let mut config = Config::default();
        config.sparkle.capacity = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroCapacity)));
    }
}
