use crate::camera::Camera;
use crate::coords::{PivotedRect, Rect, Vec2, Vec3};

use super::{canvas_to_world, world_to_canvas, CanvasGeometry, CanvasPoint, RectTransform};

/// Clamps `value` to `[min, max]`, checking the lower bound first.
///
/// Unlike [`f32::clamp`] this accepts an inverted range without panicking:
/// values below `min` return `min`, everything else above `max` returns `max`.
#[inline]
pub fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Lower and upper canvas-space bounds for an element inside a screen-space
/// camera canvas whose root rect is `rect_sscc`.
///
/// `min = origin + pivot * size` and `max = -(origin + (1 - pivot) * size)`.
/// For a centre-anchored root (`origin == -size_sscc / 2`) this keeps the
/// element's edges inside the canvas. Other origins yield shifted or inverted
/// ranges, which are returned as-is.
pub fn sscc_bounds(element: PivotedRect, rect_sscc: Rect) -> (Vec2, Vec2) {
    let min = rect_sscc.origin + element.extent_below();
    let max = -(rect_sscc.origin + element.extent_above());
    (min, max)
}

/// Keeps a world-space-canvas element inside a screen-space camera canvas.
///
/// `world_point` is converted into canvas space of `sscc`, clamped per axis to
/// [`sscc_bounds`], and converted back to world space on the `z = 0` plane
/// (depth `-camera.position.z`).
pub fn clamp_wsc_to_sscc(camera: &Camera, world_point: Vec3, element: PivotedRect, sscc: &CanvasGeometry) -> Vec3 {
    let CanvasPoint { point, rect } = world_to_canvas(camera, sscc, world_point);
    let (min, max) = sscc_bounds(element, rect);

    let clamped = Vec2::new(
        clamp_axis(point.x, min.x, max.x),
        clamp_axis(point.y, min.y, max.y),
    );

    canvas_to_world(camera, sscc, clamped)
}

/// [`clamp_wsc_to_sscc`] using the element's current world position.
pub fn clamp_rect_transform_to_sscc(camera: &Camera, element: &RectTransform, sscc: &CanvasGeometry) -> Vec3 {
    clamp_wsc_to_sscc(camera, element.position, element.element, sscc)
}
