//! Configuration system
//!
//! Render settings are plain serde structs loadable from TOML or RON via
//! the [`Config`] trait. Everything is validated before it reaches the
//! frame loop: the projection parameters are checked by
//! [`RenderSettings::projection`] and the remaining fields by
//! [`RenderSettings::validate`], so a bad file fails at startup rather
//! than mid-frame.

pub use serde::{Deserialize, Serialize};

use crate::render::{FieldOfView, Projection, RenderError};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    ///
    /// # Errors
    /// [`ConfigError`] on I/O failure, parse failure, or an extension other
    /// than `.toml` / `.ron`.
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// [`ConfigError`] on serialization or I/O failure, or an unsupported
    /// extension.
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A field failed validation
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Renderer settings supplied by the embedding application
///
/// Defaults mirror the traced viewer configuration: symmetric 45-degree
/// half-angles, near plane 0.1, far plane 10, ten labels per category, and
/// the `tax_` metadata key prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Four-sided field of view for the perspective projection
    pub field_of_view: FieldOfView,
    /// Near clip plane distance; must be strictly positive
    pub near: f32,
    /// Far clip plane distance; must exceed `near`
    pub far: f32,
    /// Default label budget for the tip-label pass
    pub tip_label_budget: usize,
    /// Default label budget for the node-label pass
    pub node_label_budget: usize,
    /// Prefix composed with the selected level into metadata keys
    pub taxonomy_prefix: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            field_of_view: FieldOfView::default(),
            near: 0.1,
            far: 10.0,
            tip_label_budget: 10,
            node_label_budget: 10,
            taxonomy_prefix: "tax_".to_string(),
        }
    }
}

impl Config for RenderSettings {}

impl RenderSettings {
    /// Set the field of view
    pub fn with_field_of_view(mut self, field_of_view: FieldOfView) -> Self {
        self.field_of_view = field_of_view;
        self
    }

    /// Set both label budgets
    pub fn with_label_budgets(mut self, tips: usize, nodes: usize) -> Self {
        self.tip_label_budget = tips;
        self.node_label_budget = nodes;
        self
    }

    /// Set the taxonomy metadata key prefix
    pub fn with_taxonomy_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.taxonomy_prefix = prefix.into();
        self
    }

    /// Build the validated projection from these settings
    ///
    /// # Errors
    /// [`RenderError::InvalidProjection`] when the planes or half-angles
    /// are out of range.
    pub fn projection(&self) -> Result<Projection, RenderError> {
        Projection::new(self.field_of_view, self.near, self.far)
    }

    /// Validate the non-projection fields
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] for a zero label budget or an empty
    /// taxonomy prefix.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tip_label_budget == 0 || self.node_label_budget == 0 {
            return Err(ConfigError::Invalid(
                "label budgets must be at least 1".to_string(),
            ));
        }
        if self.taxonomy_prefix.is_empty() {
            return Err(ConfigError::Invalid(
                "taxonomy prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate_and_build_a_projection() {
        let settings = RenderSettings::default();
        settings.validate().unwrap();
        let projection = settings.projection().unwrap();
        assert_eq!(projection.near(), 0.1);
        assert_eq!(projection.far(), 10.0);
    }

    #[test]
    fn toml_round_trip_preserves_settings() {
        let settings = RenderSettings::default()
            .with_label_budgets(20, 5)
            .with_taxonomy_prefix("rank_");

        let text = toml::to_string_pretty(&settings).unwrap();
        let restored: RenderSettings = toml::from_str(&text).unwrap();
        assert_eq!(restored, settings);
    }

    #[test]
    fn zero_budget_fails_validation() {
        let settings = RenderSettings::default().with_label_budgets(0, 10);
        assert!(matches!(settings.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn bad_planes_fail_projection_construction() {
        let mut settings = RenderSettings::default();
        settings.near = -1.0;
        assert!(settings.projection().is_err());

        let mut settings = RenderSettings::default();
        settings.far = 0.05; // behind the near plane
        assert!(settings.projection().is_err());
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = RenderSettings::default()
            .save_to_file("settings.yaml")
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }
}
