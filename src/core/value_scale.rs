use serde::{Deserialize, Serialize};

use crate::core::scale::{LinearScale, normalize_range};
use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};

/// Tuning controls for fitting the value domain from data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScaleTuning {
    pub top_padding_ratio: f64,
    pub bottom_padding_ratio: f64,
    pub min_span_absolute: f64,
}

impl Default for ValueScaleTuning {
    fn default() -> Self {
        Self {
            top_padding_ratio: 0.10,
            bottom_padding_ratio: 0.10,
            min_span_absolute: 1e-6,
        }
    }
}

impl ValueScaleTuning {
    fn validate(self) -> ChartResult<Self> {
        if !self.top_padding_ratio.is_finite()
            || !self.bottom_padding_ratio.is_finite()
            || self.top_padding_ratio < 0.0
            || self.bottom_padding_ratio < 0.0
        {
            return Err(ChartError::InvalidData(
                "value scale padding ratios must be finite and >= 0".to_owned(),
            ));
        }

        if !self.min_span_absolute.is_finite() || self.min_span_absolute <= 0.0 {
            return Err(ChartError::InvalidData(
                "value scale min span must be finite and > 0".to_owned(),
            ));
        }

        Ok(self)
    }
}

/// Vertical axis model mapped onto an inverted pixel axis: the domain maximum
/// sits at pixel y 0 and the domain minimum at the viewport height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    min: f64,
    max: f64,
}

impl ValueScale {
    pub fn new(value_min: f64, value_max: f64) -> ChartResult<Self> {
        let normalized = normalize_range(value_min, value_max, 1e-9)?;
        if normalized.0 == normalized.1 {
            return Err(ChartError::InvalidData(
                "value scale domain must be non-degenerate".to_owned(),
            ));
        }
        Ok(Self {
            min: normalized.0,
            max: normalized.1,
        })
    }

    /// Fits a padded domain from raw values.
    pub fn from_values(values: &[f64], tuning: ValueScaleTuning) -> ChartResult<Self> {
        let tuning = tuning.validate()?;

        if values.is_empty() {
            return Err(ChartError::InvalidData(
                "value scale cannot be built from empty data".to_owned(),
            ));
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(
                    "values must be finite".to_owned(),
                ));
            }
            min = min.min(*value);
            max = max.max(*value);
        }

        let (base_min, base_max) = normalize_range(min, max, tuning.min_span_absolute)?;
        let span = base_max - base_min;
        Self::new(
            base_min - span * tuning.bottom_padding_ratio,
            base_max + span * tuning.top_padding_ratio,
        )
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.min, self.max)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    pub fn value_to_pixel(self, value: f64, viewport: Viewport) -> ChartResult<f64> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let ratio = self.linear()?.ratio(value)?;
        Ok((1.0 - ratio) * f64::from(viewport.height))
    }

    pub fn pixel_to_value(self, pixel: f64, viewport: Viewport) -> ChartResult<f64> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.linear()?
            .value_at(1.0 - pixel / f64::from(viewport.height))
    }

    fn linear(self) -> ChartResult<LinearScale> {
        LinearScale::new(self.min, self.max)
    }
}
