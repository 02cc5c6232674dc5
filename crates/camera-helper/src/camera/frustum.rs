use crate::coords::Vec2;

use super::{Camera, Projection};

/// Width and height of the view frustum cross-section `distance` units in front
/// of the camera.
///
/// Perspective: `height = 2 * distance * tan(fov / 2)`, `width = height * aspect`.
/// Orthographic: `height = 2 * size` at every distance.
///
/// Degenerates to zero at `distance == 0` or `fov == 0`.
pub fn frustum_at(camera: &Camera, distance: f32) -> Vec2 {
    let height = match camera.projection {
        Projection::Perspective { fov_y_degrees } => {
            2.0 * distance * (fov_y_degrees * 0.5).to_radians().tan()
        }
        Projection::Orthographic { size } => 2.0 * size,
    };

    Vec2::new(height * camera.aspect, height)
}

/// Distance at which a perspective frustum is `height` units tall.
///
/// Orthographic cameras have the same height everywhere, so there is no answer.
pub fn distance_for_frustum_height(camera: &Camera, height: f32) -> Option<f32> {
    match camera.projection {
        Projection::Perspective { fov_y_degrees } => {
            Some(height * 0.5 / (fov_y_degrees * 0.5).to_radians().tan())
        }
        Projection::Orthographic { .. } => None,
    }
}
