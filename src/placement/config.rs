//! Placement configuration
//!
//! The scene size is passed explicitly into every offset calculation; there
//! is no process-wide reference size.

use super::errors::{PlacementError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Reference scene size (in scene units) the offset divisors were tuned for
pub const DEFAULT_SCENE_SIZE: f64 = 950.0;

/// Configuration for placement calculations
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct PlacementConfig {
    /// Edge length of the square pictograph scene
    pub scene_size: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            scene_size: DEFAULT_SCENE_SIZE,
        }
    }
}

impl PlacementConfig {
    pub fn new(scene_size: f64) -> Result<Self> {
        let config = Self { scene_size };
        config.validate()?;
        Ok(config)
    }

    /// Config for an optional caller-supplied scene size (default when `None`)
    pub fn with_scene_size(scene_size: Option<f64>) -> Result<Self> {
        match scene_size {
            Some(size) => Self::new(size),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.scene_size.is_finite() && self.scene_size > 0.0 {
            Ok(())
        } else {
            Err(PlacementError::InvalidSceneSize(self.scene_size))
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| PlacementError::InvalidInput(format!("YAML config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| PlacementError::InvalidInput(format!("JSON config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PlacementError::InvalidInput(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene_size() {
        assert_eq!(PlacementConfig::default().scene_size, 950.0);
        assert_eq!(PlacementConfig::with_scene_size(None).unwrap().scene_size, 950.0);
    }

    #[test]
    fn test_rejects_bad_scene_size() {
        assert_eq!(PlacementConfig::new(0.0), Err(PlacementError::InvalidSceneSize(0.0)));
        assert_eq!(PlacementConfig::new(-10.0), Err(PlacementError::InvalidSceneSize(-10.0)));
        assert!(PlacementConfig::new(f64::NAN).is_err());
        assert!(PlacementConfig::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_yaml_with_missing_field_uses_default() {
        let config = PlacementConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config.scene_size, DEFAULT_SCENE_SIZE);

        let config = PlacementConfig::from_yaml_str("scene_size: 1900").unwrap();
        assert_eq!(config.scene_size, 1900.0);
    }

    #[test]
    fn test_json_config() {
        let config = PlacementConfig::from_json_str(r#"{"scene_size": 475.0}"#).unwrap();
        assert_eq!(config.scene_size, 475.0);

        assert!(matches!(
            PlacementConfig::from_json_str(r#"{"scene_size": "big"}"#),
            Err(PlacementError::InvalidInput(_))
        ));
        assert!(matches!(
            PlacementConfig::from_json_str(r#"{"scene_size": -1}"#),
            Err(PlacementError::InvalidSceneSize(_))
        ));
    }
}
