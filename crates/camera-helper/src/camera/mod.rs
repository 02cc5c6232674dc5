//! Camera parameters and screen/world projection.
//!
//! All functions are pure and take the camera by reference. Nothing here
//! validates its input; see [`crate::checked`] for the validating wrappers.

mod frustum;
mod params;
mod project;

pub use frustum::{distance_for_frustum_height, frustum_at};
pub use params::{Camera, Projection};
pub use project::{mouse_position_in_world_space_2d, screen_to_world_point, world_to_screen_point};
