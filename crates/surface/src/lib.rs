mod pen;
mod record;
mod style;
mod surface;

pub use crate::pen::PenError;
pub use crate::record::{line_segments, DisplayItem, RecordingSurface};
pub use crate::style::Style;
pub use crate::surface::{with_style, Surface};
