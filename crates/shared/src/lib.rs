//! 1. Only put small concepts here. Nothing major
//! 2. This crate *must* have no dependencies on other local crates in the project

mod dash;
mod dimensions;
mod error;
mod extent;
mod font;
mod line_width;
mod rgba;
mod shadow;
mod stroke;

pub use dash::DashPattern;
pub use dimensions::{Height, Width};
pub use error::InvalidArgument;
pub use extent::Extent;
pub use font::{Font, TextAlign, TextBaseline};
pub use line_width::LineWidth;
pub use rgba::Rgba;
pub use shadow::Shadow;
pub use stroke::Stroke;
