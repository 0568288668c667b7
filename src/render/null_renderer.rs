use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};
use crate::series::element::ElementKind;

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content, so invalid geometry surfaces before a
/// real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_item_count: usize,
    pub last_path_count: usize,
    pub last_image_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_item_count = frame.items.len();
        self.last_path_count = count_kind(frame, ElementKind::Path);
        self.last_image_count = count_kind(frame, ElementKind::Image);
        self.last_text_count = count_kind(frame, ElementKind::Text);
        Ok(())
    }
}

fn count_kind(frame: &RenderFrame, kind: ElementKind) -> usize {
    frame.items.iter().filter(|item| item.kind == kind).count()
}
