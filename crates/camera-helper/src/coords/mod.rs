//! Coordinate and geometry value types.
//!
//! Spaces used across the crate:
//! - Screen: pixels, origin bottom-left, +X right, +Y up
//! - World: scene units, camera looks down +Z
//! - Canvas: UI units; screen-space camera canvases are centred on [0, 0]
//!
//! The types carry no space tag. Callers keep track of which space a value is in.

mod rect;
mod vec2;
mod vec3;

pub use rect::{PivotedRect, Rect};
pub use vec2::Vec2;
pub use vec3::Vec3;
