use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::scene::node::ElementId;
use crate::series::element::ElementKind;
use crate::series::style::{StyleProps, TextHAlign};

/// Shape payload of one flattened draw item.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawShape {
    Path {
        d: String,
    },
    Image {
        src: String,
        width: f64,
        height: f64,
    },
    Text {
        text: String,
        font_size_px: f64,
        h_align: TextHAlign,
    },
}

/// One leaf element flattened out of the retained scene.
///
/// `matrix` is the composed absolute transform; `z`/`zlevel` are the resolved
/// ordering keys after series fallbacks.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub element: ElementId,
    pub series_index: usize,
    pub kind: ElementKind,
    pub matrix: [f64; 6],
    pub style: StyleProps,
    pub shape: DrawShape,
    pub z: f64,
    pub zlevel: i32,
}

impl DrawItem {
    pub fn validate(&self) -> ChartResult<()> {
        for value in self.matrix {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(
                    "draw item transform must be finite".to_owned(),
                ));
            }
        }
        if !self.z.is_finite() {
            return Err(ChartError::InvalidData(
                "draw item z must be finite".to_owned(),
            ));
        }
        self.style.validate().map_err(|err| match err {
            ChartError::InvalidOption(message) => ChartError::InvalidData(message),
            other => other,
        })
    }
}

/// Backend-agnostic scene for one chart draw pass, ordered by `(zlevel, z)`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub items: Vec<DrawItem>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            items: Vec::new(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for item in &self.items {
            item.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
