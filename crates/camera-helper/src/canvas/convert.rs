use crate::camera::{screen_to_world_point, world_to_screen_point, Camera};
use crate::coords::{Rect, Vec2, Vec3};

use super::CanvasGeometry;

/// Canvas-space position together with the canvas root rect it was resolved against.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasPoint {
    /// Position relative to the canvas centre, in canvas units.
    pub point: Vec2,
    /// Logical root rect of the canvas, returned so callers need not look it up again.
    pub rect: Rect,
}

/// Projects a world point onto a screen-space camera canvas.
///
/// The screen position is scaled by `canvas_ratio` (canvas units per pixel) and
/// shifted by half of `canvas_size`, so [0, 0] is the centre of the canvas.
/// The pixel-rect origin is not subtracted.
pub fn world_to_canvas_point(camera: &Camera, canvas_ratio: Vec2, canvas_size: Vec2, world: Vec3) -> Vec2 {
    let screen = world_to_screen_point(camera, world).truncate();
    screen * canvas_ratio - canvas_size * 0.5
}

/// [`world_to_canvas_point`] with ratio and size taken from `canvas`.
pub fn world_to_canvas(camera: &Camera, canvas: &CanvasGeometry, world: Vec3) -> CanvasPoint {
    let rect = canvas.root_rect;
    CanvasPoint {
        point: world_to_canvas_point(camera, canvas.ratio(), rect.size, world),
        rect,
    }
}

/// Inverse of [`world_to_canvas_point`].
///
/// The result is placed at depth `-camera.position.z`, i.e. on the `z = 0`
/// plane for a camera with no X/Y rotation.
pub fn canvas_to_world_point(camera: &Camera, canvas_ratio: Vec2, canvas_size: Vec2, canvas_point: Vec2) -> Vec3 {
    let screen = (canvas_point + canvas_size * 0.5) / canvas_ratio;
    screen_to_world_point(camera, screen.extend(-camera.position.z))
}

/// [`canvas_to_world_point`] with ratio and size taken from `canvas`.
pub fn canvas_to_world(camera: &Camera, canvas: &CanvasGeometry, canvas_point: Vec2) -> Vec3 {
    canvas_to_world_point(camera, canvas.ratio(), canvas.size(), canvas_point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::frustum_at;

    fn close2(a: Vec2, b: Vec2, tol: f32) -> bool {
        (a.x - b.x).abs() < tol && (a.y - b.y).abs() < tol
    }

    fn full_hd() -> Rect {
        Rect::new(0.0, 0.0, 1920.0, 1080.0)
    }

    // ── world → canvas ────────────────────────────────────────────────────

    #[test]
    fn screen_center_maps_to_canvas_origin() {
        let cam = Camera::default();
        let canvas = CanvasGeometry::new(full_hd(), full_hd());
        assert_eq!(canvas.ratio(), Vec2::new(1.0, 1.0));

        let p = world_to_canvas_point(&cam, canvas.ratio(), canvas.size(), Vec3::zero());
        assert!(close2(p, Vec2::zero(), 1e-3), "{p:?}");
    }

    #[test]
    fn scaler_shrinks_canvas_coordinates() {
        let cam = Camera::default();
        let canvas = CanvasGeometry::new(full_hd(), Rect::centered(Vec2::new(1280.0, 720.0)));
        let half = frustum_at(&cam, 10.0) * 0.5;

        let top_right = world_to_canvas(&cam, &canvas, half.extend(0.0));
        assert!(close2(top_right.point, Vec2::new(640.0, 360.0), 1e-2), "{top_right:?}");

        let bottom_left = world_to_canvas(&cam, &canvas, (-half).extend(0.0));
        assert!(close2(bottom_left.point, Vec2::new(-640.0, -360.0), 1e-2), "{bottom_left:?}");
    }

    #[test]
    fn overload_returns_resolved_root_rect() {
        let cam = Camera::default();
        let root = Rect::centered(Vec2::new(1280.0, 720.0));
        let canvas = CanvasGeometry::new(full_hd(), root);
        let out = world_to_canvas(&cam, &canvas, Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(out.rect, root);
        assert_eq!(out.point, world_to_canvas_point(&cam, canvas.ratio(), root.size, Vec3::new(1.0, 1.0, 0.0)));
    }

    #[test]
    fn zero_sized_pixel_rect_propagates_non_finite() {
        let cam = Camera::default();
        let canvas = CanvasGeometry::new(Rect::new(0.0, 0.0, 0.0, 0.0), full_hd());
        let p = world_to_canvas(&cam, &canvas, Vec3::new(1.0, 1.0, 0.0)).point;
        assert!(!p.is_finite());
    }

    // ── canvas → world ────────────────────────────────────────────────────

    #[test]
    fn canvas_origin_maps_to_camera_axis_on_z0() {
        let cam = Camera::default().with_position(Vec3::new(3.0, -1.0, -10.0));
        let canvas = CanvasGeometry::unscaled(full_hd());
        let w = canvas_to_world(&cam, &canvas, Vec2::zero());
        assert!((w.x - 3.0).abs() < 1e-4 && (w.y + 1.0).abs() < 1e-4 && w.z.abs() < 1e-4, "{w:?}");
    }

    #[test]
    fn round_trip_world_canvas_world() {
        let cameras = [
            Camera::default(),
            Camera::perspective(35.0).with_position(Vec3::new(5.0, 2.0, -40.0)),
            Camera::orthographic(6.0).with_position(Vec3::new(-1.0, 0.5, -3.0)),
        ];
        let canvases = [
            CanvasGeometry::unscaled(full_hd()),
            CanvasGeometry::new(full_hd(), Rect::centered(Vec2::new(1280.0, 720.0))),
            CanvasGeometry::new(full_hd(), Rect::centered(Vec2::new(800.0, 1200.0))),
        ];
        let points = [Vec2::new(0.0, 0.0), Vec2::new(4.0, -2.5), Vec2::new(-9.0, 3.25)];

        for cam in &cameras {
            for canvas in &canvases {
                for p in points {
                    let world = p.extend(0.0);
                    let c = world_to_canvas_point(cam, canvas.ratio(), canvas.size(), world);
                    let back = canvas_to_world_point(cam, canvas.ratio(), canvas.size(), c);
                    assert!(close2(back.truncate(), p, 1e-4), "{p:?} -> {c:?} -> {back:?}");
                    assert!(back.z.abs() < 1e-4, "{back:?}");
                }
            }
        }
    }
}
