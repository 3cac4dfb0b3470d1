// src/generator/config.rs

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::generator::error::{CaveError, Result};

/// Options for one cave generation run.
///
/// Integer fields are signed so that negative input reaches `validate` and is
/// rejected there instead of failing to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub width: i32,
    pub height: i32,
    pub seed: String,
    pub use_random_seed: bool,
    pub smooth_cycles: i32,
    /// A cell with more wall neighbours than this becomes a wall.
    pub wall_threshold: i32,
    /// A cell with fewer wall neighbours than this becomes floor.
    pub floor_threshold: i32,
    pub border_size: i32,
    /// Wall regions smaller than this are turned into floor.
    pub wall_region_threshold: i32,
    /// Floor regions smaller than this are turned into wall; the rest become rooms.
    pub room_region_threshold: i32,
    pub passage_radius: i32,
    pub random_wall_fill_percent: i32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            width: 64,
            height: 48,
            seed: String::new(),
            use_random_seed: false,
            smooth_cycles: 5,
            wall_threshold: 4,
            floor_threshold: 4,
            border_size: 5,
            wall_region_threshold: 50,
            room_region_threshold: 50,
            passage_radius: 1,
            random_wall_fill_percent: 45,
        }
    }
}

impl GeneratorConfig {
    /// Parses a (possibly partial) JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Same configuration with a different explicit seed.
    pub fn with_seed(&self, seed: impl Into<String>) -> Self {
        GeneratorConfig {
            seed: seed.into(),
            use_random_seed: false,
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 {
            return Err(CaveError::config("width", format!("must be positive, got {}", self.width)));
        }
        if self.height <= 0 {
            return Err(CaveError::config("height", format!("must be positive, got {}", self.height)));
        }
        if !(0..=100).contains(&self.random_wall_fill_percent) {
            return Err(CaveError::config(
                "random_wall_fill_percent",
                format!("must be within 0..=100, got {}", self.random_wall_fill_percent),
            ));
        }
        for (field, value) in [
            ("smooth_cycles", self.smooth_cycles),
            ("wall_threshold", self.wall_threshold),
            ("floor_threshold", self.floor_threshold),
            ("border_size", self.border_size),
            ("wall_region_threshold", self.wall_region_threshold),
            ("room_region_threshold", self.room_region_threshold),
            ("passage_radius", self.passage_radius),
        ] {
            if value < 0 {
                return Err(CaveError::config(field, format!("must not be negative, got {}", value)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let config = GeneratorConfig { width: 0, ..Default::default() };
        match config.validate() {
            Err(CaveError::InvalidConfig { field, .. }) => assert_eq!(field, "width"),
            other => panic!("unexpected result: {:?}", other),
        }

        let config = GeneratorConfig { height: -3, ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(CaveError::InvalidConfig { field: "height", .. })
        ));
    }

    #[test]
    fn test_rejects_fill_out_of_range() {
        for fill in [-1, 101] {
            let config = GeneratorConfig {
                random_wall_fill_percent: fill,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(CaveError::InvalidConfig { field: "random_wall_fill_percent", .. })
            ));
        }
        for fill in [0, 100] {
            let config = GeneratorConfig {
                random_wall_fill_percent: fill,
                ..Default::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_rejects_negative_thresholds() {
        let config = GeneratorConfig { room_region_threshold: -1, ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(CaveError::InvalidConfig { field: "room_region_threshold", .. })
        ));

        let config = GeneratorConfig { passage_radius: -2, ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(CaveError::InvalidConfig { field: "passage_radius", .. })
        ));

        let config = GeneratorConfig { wall_threshold: -1, ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(CaveError::InvalidConfig { field: "wall_threshold", .. })
        ));
    }

    #[test]
    fn test_thresholds_above_neighbour_count_are_allowed() {
        // 9 or more can never be exceeded, so that rule simply never fires.
        let config = GeneratorConfig {
            wall_threshold: 9,
            floor_threshold: 12,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GeneratorConfig::from_json_str(r#"{ "width": 20, "height": 20, "seed": "abc" }"#).unwrap();
        assert_eq!(config.width, 20);
        assert_eq!(config.seed, "abc");
        assert_eq!(config.smooth_cycles, 5);
        assert_eq!(config.border_size, 5);
    }

    #[test]
    fn test_json_validation_error() {
        let result = GeneratorConfig::from_json_str(r#"{ "width": -5 }"#);
        assert!(matches!(result, Err(CaveError::InvalidConfig { field: "width", .. })));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            GeneratorConfig::from_json_str("{ width: "),
            Err(CaveError::Json(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = GeneratorConfig::load("/nonexistent/cave_gen/config.json");
        assert!(matches!(result, Err(CaveError::Io(_))));
    }

    #[test]
    fn test_with_seed_disables_random_seed() {
        let config = GeneratorConfig {
            use_random_seed: true,
            ..Default::default()
        };
        let seeded = config.with_seed("xyz");
        assert_eq!(seeded.seed, "xyz");
        assert!(!seeded.use_random_seed);
        assert_eq!(seeded.width, config.width);
    }
}
