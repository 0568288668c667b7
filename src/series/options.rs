use serde::{Deserialize, Serialize};

use crate::core::coord::CoordinateSystemKind;
use crate::error::{ChartError, ChartResult};
use crate::series::style::Color;

/// Configuration of one custom series.
///
/// Defaults mirror the declared literals: cartesian binding, no clipping,
/// `z = 2`, `zlevel = 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomSeriesOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub coordinate_system: CoordinateSystemKind,
    /// When bound to a cartesian frame, drop produced elements whose anchor
    /// falls outside the viewport.
    pub clip: bool,
    pub z: f64,
    pub zlevel: i32,
    /// Seed color handed to render callbacks through the API style helper.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Default morph hint for elements that do not declare one themselves.
    pub universal_transition: bool,
}

impl Default for CustomSeriesOptions {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            coordinate_system: CoordinateSystemKind::Cartesian2d,
            clip: false,
            z: 2.0,
            zlevel: 0,
            color: None,
            universal_transition: false,
        }
    }
}

impl CustomSeriesOptions {
    pub fn validate(&self) -> ChartResult<()> {
        if let Some(id) = &self.id {
            if id.trim().is_empty() {
                return Err(ChartError::InvalidOption(
                    "series id must not be blank".to_owned(),
                ));
            }
        }
        if !self.z.is_finite() {
            return Err(ChartError::InvalidOption(
                "series z must be finite".to_owned(),
            ));
        }
        if let Some(color) = self.color {
            color.validate()?;
        }
        Ok(())
    }

    /// Overlays declared patch fields onto the stored options.
    pub fn apply(&mut self, patch: &CustomSeriesOptionsPatch) {
        if let Some(name) = &patch.name {
            self.name = Some(name.clone());
        }
        if let Some(coordinate_system) = patch.coordinate_system {
            self.coordinate_system = coordinate_system;
        }
        if let Some(clip) = patch.clip {
            self.clip = clip;
        }
        if let Some(z) = patch.z {
            self.z = z;
        }
        if let Some(zlevel) = patch.zlevel {
            self.zlevel = zlevel;
        }
        if let Some(color) = patch.color {
            self.color = Some(color);
        }
        if let Some(universal_transition) = patch.universal_transition {
            self.universal_transition = universal_transition;
        }
    }
}

/// Partial options merged into a series by `update_series_options`.
///
/// The series id is intentionally absent: identity is fixed at registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CustomSeriesOptionsPatch {
    pub name: Option<String>,
    pub coordinate_system: Option<CoordinateSystemKind>,
    pub clip: Option<bool>,
    pub z: Option<f64>,
    pub zlevel: Option<i32>,
    pub color: Option<Color>,
    pub universal_transition: Option<bool>,
}
