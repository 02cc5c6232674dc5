use crate::coords::{Vec2, Vec3};

use super::{frustum_at, Camera};

/// Projects a world point to screen pixels.
///
/// `z` of the result is the depth of the point in front of the camera, in
/// world units.
pub fn world_to_screen_point(camera: &Camera, world: Vec3) -> Vec3 {
    let view = world - camera.position;
    let half = frustum_at(camera, view.z) * 0.5;
    let ndc = view.truncate() / half;

    let rect = camera.pixel_rect;
    let screen = rect.origin + (ndc + Vec2::splat(1.0)) * 0.5 * rect.size;
    screen.extend(view.z)
}

/// Unprojects a screen point to world space.
///
/// `screen.z` is the depth in front of the camera at which to place the result.
pub fn screen_to_world_point(camera: &Camera, screen: Vec3) -> Vec3 {
    let depth = screen.z;
    let half = frustum_at(camera, depth) * 0.5;

    let rect = camera.pixel_rect;
    let ndc = (screen.truncate() - rect.origin) / rect.size * 2.0 - Vec2::splat(1.0);
    camera.position + (ndc * half).extend(depth)
}

/// Converts a pointer sample to a world-space XY position.
///
/// `screen.z` is the world Z the pointer should land on, not a depth: the
/// camera's own Z is subtracted before unprojecting, so a sample with `z == 0`
/// resolves onto the `z = 0` plane where 2D content lives.
pub fn mouse_position_in_world_space_2d(camera: &Camera, screen: Vec3) -> Vec2 {
    let corrected = Vec3::new(screen.x, screen.y, screen.z - camera.position.z);
    screen_to_world_point(camera, corrected).truncate()
}
