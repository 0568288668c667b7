//! Declarative graphic element options produced by render callbacks.
//!
//! `ElementOption` is the tagged union handed back from a render item: a
//! `path`, `image` or `text` leaf, or a `group` carrying nested children.
//! Options describe what should exist; the retained scene decides how to get
//! there by diffing against what already exists.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ChartError, ChartResult};
use crate::series::style::{StyleProps, TextHAlign};
use crate::series::transition::TransitionHints;

/// Variant discriminator shared between options and retained scene nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Path,
    Image,
    Text,
    Group,
}

impl ElementKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Image => "image",
            Self::Text => "text",
            Self::Group => "group",
        }
    }
}

/// Declarative 2D transform: translate, rotate and scale around an origin.
///
/// Values are absolute pixel-space declarations, not deltas; a re-declared
/// element fully replaces its previous transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformProps {
    pub x: f64,
    pub y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotation: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

impl Default for TransformProps {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }
}

impl TransformProps {
    #[must_use]
    pub fn translated(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (field, value) in [
            ("x", self.x),
            ("y", self.y),
            ("scale_x", self.scale_x),
            ("scale_y", self.scale_y),
            ("rotation", self.rotation),
            ("origin_x", self.origin_x),
            ("origin_y", self.origin_y),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidOption(format!(
                    "transform `{field}` must be finite"
                )));
            }
        }
        Ok(())
    }

    /// Affine matrix `[a, b, c, d, e, f]` mapping local to parent space:
    /// `x' = a*x + c*y + e`, `y' = b*x + d*y + f`.
    #[must_use]
    pub fn to_matrix(&self) -> [f64; 6] {
        let (sin, cos) = self.rotation.sin_cos();
        let a = cos * self.scale_x;
        let b = sin * self.scale_x;
        let c = -sin * self.scale_y;
        let d = cos * self.scale_y;
        let e = self.x + self.origin_x - (a * self.origin_x + c * self.origin_y);
        let f = self.y + self.origin_y - (b * self.origin_x + d * self.origin_y);
        [a, b, c, d, e, f]
    }
}

/// Composes two affine matrices: `parent` applied after `child`.
#[must_use]
pub fn compose_matrices(parent: [f64; 6], child: [f64; 6]) -> [f64; 6] {
    [
        parent[0] * child[0] + parent[2] * child[1],
        parent[1] * child[0] + parent[3] * child[1],
        parent[0] * child[2] + parent[2] * child[3],
        parent[1] * child[2] + parent[3] * child[3],
        parent[0] * child[4] + parent[2] * child[5] + parent[4],
        parent[1] * child[4] + parent[3] * child[5] + parent[5],
    ]
}

/// Fields shared by every element variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ElementCommon {
    /// Diff key: children carrying a name match the retained child of the
    /// same name across render passes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub transform: TransformProps,
    pub style: StyleProps,
    /// Per-element z override; falls back to the series z.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    /// Per-element zlevel override; falls back to the series zlevel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zlevel: Option<i32>,
    pub invisible: bool,
    /// Morph hint; `None` defers to the series universal-transition setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub morph: Option<bool>,
    /// Free-form payload surfaced through per-datum parameter objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<Value>,
    #[serde(flatten)]
    pub transition: TransitionHints,
}

impl ElementCommon {
    pub fn validate(&self) -> ChartResult<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ChartError::InvalidOption(
                    "element name must not be blank".to_owned(),
                ));
            }
        }
        self.transform.validate()?;
        self.style.validate()?;
        if let Some(z) = self.z {
            if !z.is_finite() {
                return Err(ChartError::InvalidOption(
                    "element z must be finite".to_owned(),
                ));
            }
        }
        self.transition.validate()
    }
}

/// SVG-style path outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathShape {
    /// SVG path data (`d` attribute syntax).
    pub d: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathElement {
    #[serde(flatten)]
    pub common: ElementCommon,
    pub shape: PathShape,
}

/// Bitmap reference with intrinsic pixel size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageShape {
    pub src: String,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageElement {
    #[serde(flatten)]
    pub common: ElementCommon,
    pub shape: ImageShape,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextShape {
    pub text: String,
    #[serde(default = "default_font_size")]
    pub font_size_px: f64,
    #[serde(default)]
    pub h_align: TextHAlign,
}

fn default_font_size() -> f64 {
    12.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    #[serde(flatten)]
    pub common: ElementCommon,
    pub shape: TextShape,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GroupElement {
    #[serde(flatten)]
    pub common: ElementCommon,
    #[serde(default)]
    pub children: Vec<ElementOption>,
}

/// Declarative graphic element produced by a render callback.
///
/// `type` discriminates the variant; `group` is the only non-leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementOption {
    Path(PathElement),
    Image(ImageElement),
    Text(TextElement),
    Group(GroupElement),
}

impl ElementOption {
    /// Builds a path element from SVG path data.
    #[must_use]
    pub fn path(d: impl Into<String>) -> Self {
        Self::Path(PathElement {
            common: ElementCommon::default(),
            shape: PathShape { d: d.into() },
        })
    }

    /// Builds an image element from a source reference and intrinsic size.
    #[must_use]
    pub fn image(src: impl Into<String>, width: f64, height: f64) -> Self {
        Self::Image(ImageElement {
            common: ElementCommon::default(),
            shape: ImageShape {
                src: src.into(),
                width,
                height,
            },
        })
    }

    /// Builds a text element with default font size and alignment.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(TextElement {
            common: ElementCommon::default(),
            shape: TextShape {
                text: text.into(),
                font_size_px: default_font_size(),
                h_align: TextHAlign::default(),
            },
        })
    }

    /// Builds a group from nested children.
    #[must_use]
    pub fn group(children: impl IntoIterator<Item = ElementOption>) -> Self {
        Self::Group(GroupElement {
            common: ElementCommon::default(),
            children: children.into_iter().collect(),
        })
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.common_mut().name = Some(name.into());
        self
    }

    #[must_use]
    pub fn translated(mut self, x: f64, y: f64) -> Self {
        let transform = &mut self.common_mut().transform;
        transform.x = x;
        transform.y = y;
        self
    }

    #[must_use]
    pub fn with_transform(mut self, transform: TransformProps) -> Self {
        self.common_mut().transform = transform;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.common_mut().style = style;
        self
    }

    #[must_use]
    pub fn with_z(mut self, z: f64) -> Self {
        self.common_mut().z = Some(z);
        self
    }

    #[must_use]
    pub fn with_zlevel(mut self, zlevel: i32) -> Self {
        self.common_mut().zlevel = Some(zlevel);
        self
    }

    #[must_use]
    pub fn with_info(mut self, info: Value) -> Self {
        self.common_mut().info = Some(info);
        self
    }

    #[must_use]
    pub fn with_transition(mut self, transition: TransitionHints) -> Self {
        self.common_mut().transition = transition;
        self
    }

    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Path(_) => ElementKind::Path,
            Self::Image(_) => ElementKind::Image,
            Self::Text(_) => ElementKind::Text,
            Self::Group(_) => ElementKind::Group,
        }
    }

    #[must_use]
    pub fn common(&self) -> &ElementCommon {
        match self {
            Self::Path(element) => &element.common,
            Self::Image(element) => &element.common,
            Self::Text(element) => &element.common,
            Self::Group(element) => &element.common,
        }
    }

    #[must_use]
    pub fn common_mut(&mut self) -> &mut ElementCommon {
        match self {
            Self::Path(element) => &mut element.common,
            Self::Image(element) => &mut element.common,
            Self::Text(element) => &mut element.common,
            Self::Group(element) => &mut element.common,
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.common().name.as_deref()
    }

    #[must_use]
    pub fn children(&self) -> &[ElementOption] {
        match self {
            Self::Group(group) => &group.children,
            _ => &[],
        }
    }

    /// Validates the whole option tree.
    ///
    /// Beyond per-field checks this rejects duplicate non-blank names among
    /// one group's direct children: the diff key must be unambiguous.
    pub fn validate(&self) -> ChartResult<()> {
        self.common().validate()?;

        match self {
            Self::Path(element) => {
                if element.shape.d.trim().is_empty() {
                    return Err(ChartError::InvalidOption(
                        "path element requires non-empty path data".to_owned(),
                    ));
                }
            }
            Self::Image(element) => {
                if element.shape.src.trim().is_empty() {
                    return Err(ChartError::InvalidOption(
                        "image element requires a source reference".to_owned(),
                    ));
                }
                if !element.shape.width.is_finite()
                    || !element.shape.height.is_finite()
                    || element.shape.width <= 0.0
                    || element.shape.height <= 0.0
                {
                    return Err(ChartError::InvalidOption(
                        "image size must be finite and > 0".to_owned(),
                    ));
                }
            }
            Self::Text(element) => {
                if element.shape.text.is_empty() {
                    return Err(ChartError::InvalidOption(
                        "text element must not be empty".to_owned(),
                    ));
                }
                if !element.shape.font_size_px.is_finite() || element.shape.font_size_px <= 0.0 {
                    return Err(ChartError::InvalidOption(
                        "text font size must be finite and > 0".to_owned(),
                    ));
                }
            }
            Self::Group(group) => {
                let mut seen = HashSet::new();
                for child in &group.children {
                    if let Some(name) = child.name() {
                        if !seen.insert(name) {
                            return Err(ChartError::InvalidOption(format!(
                                "group declares duplicate child name `{name}`"
                            )));
                        }
                    }
                    child.validate()?;
                }
            }
        }

        Ok(())
    }
}
