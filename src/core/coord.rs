use serde::{Deserialize, Serialize};

use crate::core::time_scale::TimeScale;
use crate::core::types::Viewport;
use crate::core::value_scale::ValueScale;
use crate::error::{ChartError, ChartResult};

/// Coordinate-system binding declared by a series.
///
/// Exactly one binding applies per series; `None` leaves the render callback
/// in raw pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateSystemKind {
    #[default]
    Cartesian2d,
    None,
}

/// Cartesian data-to-pixel mapping: time on x, value on inverted y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianFrame {
    pub time_scale: TimeScale,
    pub value_scale: ValueScale,
    pub viewport: Viewport,
}

impl CartesianFrame {
    pub fn new(
        time_scale: TimeScale,
        value_scale: ValueScale,
        viewport: Viewport,
    ) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(Self {
            time_scale,
            value_scale,
            viewport,
        })
    }

    /// Maps a `[time, value, ...]` datum to pixel coordinates.
    pub fn data_to_pixel(&self, data: &[f64]) -> ChartResult<[f64; 2]> {
        let [time, value] = leading_pair(data)?;
        Ok([
            self.time_scale.time_to_pixel(time, self.viewport)?,
            self.value_scale.value_to_pixel(value, self.viewport)?,
        ])
    }

    /// Maps a data-space span to an absolute pixel span.
    pub fn span_to_pixel(&self, span: &[f64; 2]) -> ChartResult<[f64; 2]> {
        if !span[0].is_finite() || !span[1].is_finite() {
            return Err(ChartError::InvalidData("span must be finite".to_owned()));
        }
        let time_span = self.time_scale.visible_span();
        let value_span = self.value_scale.span();
        Ok([
            (span[0] / time_span * f64::from(self.viewport.width)).abs(),
            (span[1] / value_span * f64::from(self.viewport.height)).abs(),
        ])
    }
}

/// Resolved mapping handed to render-item invocations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinateMapping {
    Cartesian(CartesianFrame),
    /// Identity pixel-space mapping.
    None { viewport: Viewport },
}

impl CoordinateMapping {
    #[must_use]
    pub fn kind(&self) -> CoordinateSystemKind {
        match self {
            Self::Cartesian(_) => CoordinateSystemKind::Cartesian2d,
            Self::None { .. } => CoordinateSystemKind::None,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        match self {
            Self::Cartesian(frame) => frame.viewport,
            Self::None { viewport } => *viewport,
        }
    }

    pub fn data_to_pixel(&self, data: &[f64]) -> ChartResult<[f64; 2]> {
        match self {
            Self::Cartesian(frame) => frame.data_to_pixel(data),
            Self::None { .. } => leading_pair(data),
        }
    }

    pub fn span_to_pixel(&self, span: &[f64; 2]) -> ChartResult<[f64; 2]> {
        match self {
            Self::Cartesian(frame) => frame.span_to_pixel(span),
            Self::None { .. } => {
                if !span[0].is_finite() || !span[1].is_finite() {
                    return Err(ChartError::InvalidData("span must be finite".to_owned()));
                }
                Ok([span[0].abs(), span[1].abs()])
            }
        }
    }
}

fn leading_pair(data: &[f64]) -> ChartResult<[f64; 2]> {
    if data.len() < 2 {
        return Err(ChartError::InvalidData(
            "coordinate input needs at least two dimensions".to_owned(),
        ));
    }
    if !data[0].is_finite() || !data[1].is_finite() {
        return Err(ChartError::InvalidData(
            "coordinate input must be finite".to_owned(),
        ));
    }
    Ok([data[0], data[1]])
}
