use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidOption(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to the element anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextHAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Declarative element style; unset fields inherit whatever the element
/// already carries (merge semantics on update).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StyleProps {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub line_width: Option<f64>,
    pub opacity: Option<f64>,
}

impl StyleProps {
    pub fn validate(&self) -> ChartResult<()> {
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        if let Some(line_width) = self.line_width {
            if !line_width.is_finite() || line_width < 0.0 {
                return Err(ChartError::InvalidOption(
                    "style line width must be finite and >= 0".to_owned(),
                ));
            }
        }
        if let Some(opacity) = self.opacity {
            if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
                return Err(ChartError::InvalidOption(
                    "style opacity must be finite and in [0, 1]".to_owned(),
                ));
            }
        }
        Ok(())
    }

    /// Overlays declared fields of `newer` onto `self`.
    pub fn merge_from(&mut self, newer: &StyleProps) {
        if newer.fill.is_some() {
            self.fill = newer.fill;
        }
        if newer.stroke.is_some() {
            self.stroke = newer.stroke;
        }
        if newer.line_width.is_some() {
            self.line_width = newer.line_width;
        }
        if newer.opacity.is_some() {
            self.opacity = newer.opacity;
        }
    }
}
