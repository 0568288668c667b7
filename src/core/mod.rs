pub mod convert;
pub mod coord;
pub mod scale;
pub mod time_scale;
pub mod types;
pub mod value_scale;

pub use coord::{CartesianFrame, CoordinateMapping, CoordinateSystemKind};
pub use scale::LinearScale;
pub use time_scale::{TimeScale, TimeScaleTuning};
pub use types::Viewport;
pub use value_scale::{ValueScale, ValueScaleTuning};
