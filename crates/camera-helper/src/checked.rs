//! Validating wrappers around the conversion functions.
//!
//! Each `try_*` function checks the geometry it is about to divide by, then
//! delegates to the unchecked version. Use these at boundaries where geometry
//! comes from untrusted or freshly resized state and a NaN would be hard to trace.

use anyhow::{Context, Result};

use crate::camera::{frustum_at, mouse_position_in_world_space_2d, Camera};
use crate::canvas::{canvas_to_world, clamp_wsc_to_sscc, world_to_canvas, CanvasGeometry, CanvasPoint};
use crate::coords::{PivotedRect, Vec2, Vec3};

pub fn try_frustum_at(camera: &Camera, distance: f32) -> Result<Vec2> {
    camera.validate().context("invalid camera")?;
    anyhow::ensure!(distance.is_finite(), "frustum distance {distance} is not finite");
    Ok(frustum_at(camera, distance))
}

pub fn try_mouse_position_in_world_space_2d(camera: &Camera, screen: Vec3) -> Result<Vec2> {
    camera.validate().context("invalid camera")?;
    anyhow::ensure!(screen.is_finite(), "pointer sample {screen:?} is not finite");
    Ok(mouse_position_in_world_space_2d(camera, screen))
}

pub fn try_world_to_canvas(camera: &Camera, canvas: &CanvasGeometry, world: Vec3) -> Result<CanvasPoint> {
    camera.validate().context("invalid camera")?;
    canvas.validate().context("invalid canvas")?;
    Ok(world_to_canvas(camera, canvas, world))
}

pub fn try_canvas_to_world(camera: &Camera, canvas: &CanvasGeometry, canvas_point: Vec2) -> Result<Vec3> {
    camera.validate().context("invalid camera")?;
    canvas.validate().context("invalid canvas")?;
    Ok(canvas_to_world(camera, canvas, canvas_point))
}

/// Checked [`clamp_wsc_to_sscc`]. Inverted bound ranges are not an error.
pub fn try_clamp_wsc_to_sscc(
    camera: &Camera,
    world_point: Vec3,
    element: PivotedRect,
    sscc: &CanvasGeometry,
) -> Result<Vec3> {
    camera.validate().context("invalid camera")?;
    sscc.validate().context("invalid screen-space camera canvas")?;
    anyhow::ensure!(element.rect.is_finite(), "element rect {:?} is not finite", element.rect);
    Ok(clamp_wsc_to_sscc(camera, world_point, element, sscc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::error::GeometryError;

    fn canvas() -> CanvasGeometry {
        CanvasGeometry::unscaled(Rect::new(0.0, 0.0, 1920.0, 1080.0))
    }

    #[test]
    fn valid_input_matches_unchecked() {
        let cam = Camera::default();
        let p = Vec3::new(2.0, 3.0, 0.0);
        assert_eq!(try_world_to_canvas(&cam, &canvas(), p).unwrap(), world_to_canvas(&cam, &canvas(), p));
        assert_eq!(try_frustum_at(&cam, 10.0).unwrap(), frustum_at(&cam, 10.0));
    }

    #[test]
    fn zero_fov_is_rejected_with_context() {
        let err = try_frustum_at(&Camera::perspective(0.0), 10.0).unwrap_err();
        assert_eq!(err.to_string(), "invalid camera");
        assert_eq!(
            err.downcast_ref::<GeometryError>(),
            Some(&GeometryError::DegenerateFov { degrees: 0.0 })
        );
    }

    #[test]
    fn zero_sized_canvas_is_rejected() {
        let cam = Camera::default();
        let bad = CanvasGeometry::new(Rect::new(0.0, 0.0, 0.0, 1080.0), Rect::new(0.0, 0.0, 1920.0, 1080.0));
        let err = try_canvas_to_world(&cam, &bad, Vec2::zero()).unwrap_err();
        assert!(format!("{err:#}").contains("canvas pixel rect has zero size"), "{err:#}");
    }

    #[test]
    fn non_finite_distance_is_rejected() {
        assert!(try_frustum_at(&Camera::default(), f32::INFINITY).is_err());
    }

    #[test]
    fn non_finite_pointer_is_rejected() {
        let cam = Camera::default();
        assert!(try_mouse_position_in_world_space_2d(&cam, Vec3::new(f32::NAN, 0.0, 0.0)).is_err());
        assert!(try_mouse_position_in_world_space_2d(&cam, Vec3::new(960.0, 540.0, 0.0)).is_ok());
    }

    #[test]
    fn inverted_clamp_range_is_accepted() {
        let cam = Camera::default().with_pixel_rect(Rect::new(0.0, 0.0, 800.0, 600.0));
        let rect = Rect::new(0.0, 0.0, 800.0, 600.0);
        let sscc = CanvasGeometry::new(rect, rect);
        let element = PivotedRect::centered(Vec2::new(100.0, 100.0));
        assert!(try_clamp_wsc_to_sscc(&cam, Vec3::zero(), element, &sscc).is_ok());
    }
}
