use thiserror::Error;

/// The only failure mode in this workspace's geometry layer: a caller handed
/// us a value the stepping rules cannot make progress with. Always a
/// programming error, never a runtime condition.
#[derive(Error, Debug, PartialEq)]
pub enum InvalidArgument {
    #[error("dash length must be positive but was {0}")]
    NonPositiveDashLength(f32),
    #[error("gap length must not be negative but was {0}")]
    NegativeGapLength(f32),
    #[error("extent start {0} is past extent end {1}")]
    InvertedExtent(f32, f32),
}
