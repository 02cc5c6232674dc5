use std::fmt;

use crate::coords::Vec2;

/// Degenerate geometry rejected by the checked conversion path.
///
/// The unchecked functions never produce this; they let inf/NaN propagate.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A rectangle used as a divisor has zero (or negative) width or height.
    ZeroSizedRect { what: &'static str, size: Vec2 },
    /// A rectangle has a non-finite origin or size.
    NonFiniteRect { what: &'static str },
    /// Perspective field of view outside (0, 180) degrees.
    DegenerateFov { degrees: f32 },
    /// Aspect ratio that is zero, negative or non-finite.
    DegenerateAspect { aspect: f32 },
    /// Orthographic half-height that is zero, negative or non-finite.
    NonPositiveOrthoSize { size: f32 },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSizedRect { what, size } => {
                write!(f, "{what} has zero size ({} x {})", size.x, size.y)
            }
            Self::NonFiniteRect { what } => write!(f, "{what} is not finite"),
            Self::DegenerateFov { degrees } => {
                write!(f, "field of view {degrees} deg is outside (0, 180)")
            }
            Self::DegenerateAspect { aspect } => write!(f, "aspect ratio {aspect} is not positive"),
            Self::NonPositiveOrthoSize { size } => {
                write!(f, "orthographic size {size} is not positive")
            }
        }
    }
}

impl std::error::Error for GeometryError {}
