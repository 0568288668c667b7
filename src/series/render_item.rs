//! Per-invocation view and helpers handed to render callbacks.

use crate::core::coord::{CoordinateMapping, CoordinateSystemKind};
use crate::core::types::Viewport;
use crate::data::SeriesData;
use crate::error::ChartResult;
use crate::series::element::ElementOption;
use crate::series::style::{Color, StyleProps};

/// Fill used by the API style helper when the series declares no color.
pub const DEFAULT_SERIES_COLOR: Color = Color::rgb(0.33, 0.55, 0.85);

/// Read-only view of one render-item invocation.
///
/// Immutable for the duration of the callback; the engine rebuilds it per
/// data index.
#[derive(Debug, Clone, Copy)]
pub struct RenderItemParams<'a> {
    pub series_index: usize,
    pub series_id: Option<&'a str>,
    pub series_name: Option<&'a str>,
    pub data_index: usize,
    pub data_length: usize,
    pub coordinate_system: CoordinateSystemKind,
    /// Action that triggered the pass, when the host dispatched one.
    pub action_type: Option<&'a str>,
}

/// Helper bundle borrowing the coordinate mapping and the series data.
#[derive(Debug, Clone, Copy)]
pub struct RenderItemApi<'a> {
    mapping: CoordinateMapping,
    data: &'a SeriesData,
    series_color: Option<Color>,
}

impl<'a> RenderItemApi<'a> {
    #[must_use]
    pub fn new(
        mapping: CoordinateMapping,
        data: &'a SeriesData,
        series_color: Option<Color>,
    ) -> Self {
        Self {
            mapping,
            data,
            series_color,
        }
    }

    /// Reads one dimension of one datum.
    pub fn value(&self, dim: usize, data_index: usize) -> ChartResult<f64> {
        self.data.value(dim, data_index)
    }

    /// Maps a `[time, value, ...]` datum to pixel coordinates.
    pub fn coord(&self, data: &[f64]) -> ChartResult<[f64; 2]> {
        self.mapping.data_to_pixel(data)
    }

    /// Maps a data-space span to an absolute pixel span.
    pub fn size(&self, span: &[f64; 2]) -> ChartResult<[f64; 2]> {
        self.mapping.span_to_pixel(span)
    }

    /// Style seeded from the series color.
    #[must_use]
    pub fn style(&self) -> StyleProps {
        StyleProps {
            fill: Some(self.series_color.unwrap_or(DEFAULT_SERIES_COLOR)),
            ..StyleProps::default()
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.mapping.viewport()
    }
}

/// User-supplied render callback: one invocation per data index, returning
/// the declarative element tree for that datum (or nothing).
pub type RenderItemFn =
    Box<dyn Fn(&RenderItemParams<'_>, &RenderItemApi<'_>) -> ChartResult<Option<ElementOption>>>;
