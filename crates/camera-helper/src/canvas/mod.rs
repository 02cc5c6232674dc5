//! UI canvas conversions.
//!
//! Canvas points are relative to the canvas centre. Canvas geometry is read on
//! every call and never cached.

mod clamp;
mod convert;
mod geometry;

pub use clamp::{clamp_axis, clamp_rect_transform_to_sscc, clamp_wsc_to_sscc, sscc_bounds};
pub use convert::{canvas_to_world, canvas_to_world_point, world_to_canvas, world_to_canvas_point, CanvasPoint};
pub use geometry::{CanvasGeometry, RectTransform};
