mod frame;
mod null_renderer;

pub use frame::{DrawItem, DrawShape, RenderFrame};
pub use null_renderer::NullRenderer;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame`, so
/// drawing code stays isolated from scene reconciliation and series logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
