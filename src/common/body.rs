//! Screen-space bodies.
//!
//! The float position is the truth; the pixel rect is derived from it by
//! truncation every time it is needed, never stored.

use bevy::prelude::*;

/// Top-left position (sub-pixel) and pixel size of a moving sprite.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub size: IVec2,
}

impl Body {
    pub fn new(pos: Vec2, size: IVec2) -> Self {
        Self { pos, size }
    }

    /// Pixel rect, truncating the float position toward zero.
    #[inline]
    pub fn rect(&self) -> IRect {
        pixel_rect(self.pos, self.size)
    }
}

#[inline]
pub fn pixel_rect(pos: Vec2, size: IVec2) -> IRect {
    let min = IVec2::new(pos.x as i32, pos.y as i32);
    IRect::from_corners(min, min + size)
}

/// Strict overlap: rects that only share an edge do not collide.
#[inline]
pub fn overlaps(a: IRect, b: IRect) -> bool {
    !a.intersect(b).is_empty()
}

/// Centre of a screen rect expressed in world coordinates (origin at the
/// screen centre, y up).
pub fn screen_to_world(rect: IRect, screen: UVec2) -> Vec2 {
    let cx = (rect.min.x + rect.max.x) as f32 * 0.5;
    let cy = (rect.min.y + rect.max.y) as f32 * 0.5;
    Vec2::new(cx - screen.x as f32 * 0.5, screen.y as f32 * 0.5 - cy)
}
