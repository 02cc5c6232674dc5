//! Camera helper crate.
//!
//! Stateless conversions between screen, world and UI canvas space for a
//! camera looking down +Z. Engine objects are passed in as plain value types
//! ([`camera::Camera`], [`canvas::CanvasGeometry`], [`coords::PivotedRect`]).

pub mod camera;
pub mod canvas;
pub mod checked;
pub mod coords;
pub mod error;
pub mod logging;

pub use error::GeometryError;
