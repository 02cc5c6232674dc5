use super::Vec2;

/// Axis-aligned rectangle (bottom-left origin, +Y up).
///
/// Describes pixel rects of cameras and canvases as well as logical rects of
/// UI elements. For a centre-pivoted canvas root the origin is typically
/// `-size / 2`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rectangle of `size` centred on the origin.
    #[inline]
    pub fn centered(size: Vec2) -> Self {
        Self { origin: size * -0.5, size }
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    /// Width over height. Zero height yields inf/NaN.
    #[inline]
    pub fn aspect(self) -> f32 {
        self.size.x / self.size.y
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }
}

/// Rectangle with a normalized pivot in `[0, 1]²`.
///
/// The pivot marks where the element's position sits inside its bounds:
/// `(0, 0)` is the bottom-left corner, `(0.5, 0.5)` the centre.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PivotedRect {
    pub rect: Rect,
    pub pivot: Vec2,
}

impl PivotedRect {
    #[inline]
    pub const fn new(rect: Rect, pivot: Vec2) -> Self {
        Self { rect, pivot }
    }

    /// Centre-pivoted element of the given size.
    #[inline]
    pub fn centered(size: Vec2) -> Self {
        Self { rect: Rect::centered(size), pivot: Vec2::splat(0.5) }
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        self.rect.size
    }

    /// Extent from the pivot to the bottom-left edge.
    #[inline]
    pub fn extent_below(self) -> Vec2 {
        self.pivot * self.rect.size
    }

    /// Extent from the pivot to the top-right edge.
    #[inline]
    pub fn extent_above(self) -> Vec2 {
        (Vec2::splat(1.0) - self.pivot) * self.rect.size
    }
}

impl Default for PivotedRect {
    fn default() -> Self {
        Self { rect: Rect::default(), pivot: Vec2::splat(0.5) }
    }
}
