pub mod element;
pub mod model;
pub mod options;
pub mod render_item;
pub mod style;
pub mod transition;

pub use element::{
    ElementCommon, ElementKind, ElementOption, GroupElement, ImageElement, ImageShape,
    PathElement, PathShape, TextElement, TextShape, TransformProps,
};
pub use model::{CustomSeriesModel, DataParams};
pub use options::{CustomSeriesOptions, CustomSeriesOptionsPatch};
pub use render_item::{RenderItemApi, RenderItemFn, RenderItemParams};
pub use style::{Color, StyleProps, TextHAlign};
pub use transition::{PropSnapshot, TransitionHints, TransitionScope};
