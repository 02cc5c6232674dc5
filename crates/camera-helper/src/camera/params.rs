use crate::coords::{Rect, Vec3};
use crate::error::GeometryError;

/// Camera projection model.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Projection {
    /// Perspective projection with a vertical field of view in degrees.
    Perspective { fov_y_degrees: f32 },
    /// Orthographic projection; `size` is half the visible height in world units.
    Orthographic { size: f32 },
}

impl Default for Projection {
    fn default() -> Self {
        Projection::Perspective { fov_y_degrees: 60.0 }
    }
}

/// Camera intrinsics and placement, supplied by the embedding engine per call.
///
/// The camera is axis-aligned and looks down +Z, which is the usual setup for
/// 2D games rendered with a 3D camera. Rotation is not modelled.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub projection: Projection,

    /// Frustum width over height.
    pub aspect: f32,

    /// World-space position.
    pub position: Vec3,

    /// Screen-space rectangle the camera renders into, in pixels.
    pub pixel_rect: Rect,
}

impl Camera {
    /// Perspective camera with the default placement and 1920x1080 pixel rect.
    pub fn perspective(fov_y_degrees: f32) -> Self {
        Self {
            projection: Projection::Perspective { fov_y_degrees },
            ..Self::default()
        }
    }

    /// Orthographic camera with the default placement and 1920x1080 pixel rect.
    pub fn orthographic(size: f32) -> Self {
        Self {
            projection: Projection::Orthographic { size },
            ..Self::default()
        }
    }

    #[inline]
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Sets the pixel rect and recomputes `aspect` from it.
    ///
    /// Use [`Camera::with_aspect`] afterwards to force a different aspect.
    #[inline]
    pub fn with_pixel_rect(mut self, pixel_rect: Rect) -> Self {
        self.pixel_rect = pixel_rect;
        self.aspect = pixel_rect.aspect();
        self
    }

    #[inline]
    pub fn with_aspect(mut self, aspect: f32) -> Self {
        self.aspect = aspect;
        self
    }

    /// Checks the parameters the projection formulas divide by or take tangents of.
    pub fn validate(&self) -> Result<(), GeometryError> {
        match self.projection {
            Projection::Perspective { fov_y_degrees } => {
                if !(fov_y_degrees > 0.0 && fov_y_degrees < 180.0) {
                    return Err(GeometryError::DegenerateFov { degrees: fov_y_degrees });
                }
            }
            Projection::Orthographic { size } => {
                if !(size > 0.0 && size.is_finite()) {
                    return Err(GeometryError::NonPositiveOrthoSize { size });
                }
            }
        }

        if !(self.aspect > 0.0 && self.aspect.is_finite()) {
            return Err(GeometryError::DegenerateAspect { aspect: self.aspect });
        }

        if !self.pixel_rect.is_finite() {
            return Err(GeometryError::NonFiniteRect { what: "camera pixel rect" });
        }
        if self.pixel_rect.is_empty() {
            return Err(GeometryError::ZeroSizedRect {
                what: "camera pixel rect",
                size: self.pixel_rect.size,
            });
        }

        Ok(())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            projection: Projection::default(),
            aspect: 16.0 / 9.0,
            position: Vec3::new(0.0, 0.0, -10.0),
            pixel_rect: Rect::new(0.0, 0.0, 1920.0, 1080.0),
        }
    }
}
