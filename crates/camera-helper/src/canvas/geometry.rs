use crate::coords::{PivotedRect, Rect, Vec2, Vec3};
use crate::error::GeometryError;

/// Geometry of a UI canvas.
///
/// `pixel_rect` is the area the canvas covers on screen. `root_rect` is the
/// logical rect of the canvas root element, which a canvas scaler may size
/// differently from the pixel rect.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasGeometry {
    pub pixel_rect: Rect,
    pub root_rect: Rect,
}

impl CanvasGeometry {
    #[inline]
    pub const fn new(pixel_rect: Rect, root_rect: Rect) -> Self {
        Self { pixel_rect, root_rect }
    }

    /// Canvas without a scaler: one canvas unit per pixel, root centred on [0, 0].
    #[inline]
    pub fn unscaled(pixel_rect: Rect) -> Self {
        Self { pixel_rect, root_rect: Rect::centered(pixel_rect.size) }
    }

    /// Canvas units per screen pixel on each axis.
    ///
    /// Recomputed on every call; canvases may resize between frames.
    pub fn ratio(&self) -> Vec2 {
        let ratio = self.root_rect.size / self.pixel_rect.size;
        if !ratio.is_finite() {
            log::trace!(
                "canvas ratio is not finite (root {:?}, pixel {:?})",
                self.root_rect.size,
                self.pixel_rect.size
            );
        }
        ratio
    }

    /// Logical size of the canvas root.
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.root_rect.size
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        for (what, rect) in [("canvas pixel rect", self.pixel_rect), ("canvas root rect", self.root_rect)] {
            if !rect.is_finite() {
                return Err(GeometryError::NonFiniteRect { what });
            }
            if rect.is_empty() {
                return Err(GeometryError::ZeroSizedRect { what, size: rect.size });
            }
        }
        Ok(())
    }
}

/// A UI element placed in the world: its pivoted rect plus current world position.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RectTransform {
    pub position: Vec3,
    pub element: PivotedRect,
}

impl RectTransform {
    #[inline]
    pub const fn new(position: Vec3, element: PivotedRect) -> Self {
        Self { position, element }
    }
}
