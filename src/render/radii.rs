//! Radius resolution: nominal corner radii → directional radii.
//!
//! A stroke of thickness `T` drawn along a curve of radius `R` has its outer
//! edge on a circle of radius `R + T/2` and its inner edge on one of radius
//! `max(0, R - T/2)`. Thickness can differ per edge, so every corner gets two
//! values: one for each axis, each adjusted by the edge that shifts that axis.

use crate::types::{CornerRadii, Thickness};

/// Which boundary of the stroke the radii are resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadiusMode {
    /// Outer face of the stroke, resolved against the full rectangle.
    Outer,
    /// Inner face of the stroke, resolved against the thickness-deflated rectangle.
    Inner,
}

/// Extents of one corner's curve along both axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerExtent {
    /// Extent along the horizontal edge (top or bottom).
    ///
    /// Adjusted by the thickness of the vertical edge meeting the corner, since
    /// that edge is what moves the curve horizontally.
    pub x: f64,
    /// Extent along the vertical edge (left or right), adjusted by the top or
    /// bottom thickness.
    pub y: f64,
}

impl CornerExtent {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    const SQUARE: CornerExtent = CornerExtent::new(0.0, 0.0);
}

/// Eight directional radii, two per corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DirectionalRadii {
    pub top_left: CornerExtent,
    pub top_right: CornerExtent,
    pub bottom_right: CornerExtent,
    pub bottom_left: CornerExtent,
}

impl DirectionalRadii {
    /// Resolve nominal radii for one face of a stroke with the given per-edge thickness.
    pub fn resolve(nominal: CornerRadii, thickness: Thickness, mode: RadiusMode) -> Self {
        let h = thickness.halved();

        match mode {
            RadiusMode::Outer => {
                // A square corner stays square: thickness alone never rounds it.
                let grow = |r: f64, hx: f64, hy: f64| {
                    if r == 0.0 {
                        CornerExtent::SQUARE
                    } else {
                        CornerExtent::new(r + hx, r + hy)
                    }
                };
                DirectionalRadii {
                    top_left: grow(nominal.top_left, h.left, h.top),
                    top_right: grow(nominal.top_right, h.right, h.top),
                    bottom_right: grow(nominal.bottom_right, h.right, h.bottom),
                    bottom_left: grow(nominal.bottom_left, h.left, h.bottom),
                }
            }
            RadiusMode::Inner => {
                let shrink = |r: f64, hx: f64, hy: f64| {
                    CornerExtent::new((r - hx).max(0.0), (r - hy).max(0.0))
                };
                DirectionalRadii {
                    top_left: shrink(nominal.top_left, h.left, h.top),
                    top_right: shrink(nominal.top_right, h.right, h.top),
                    bottom_right: shrink(nominal.bottom_right, h.right, h.bottom),
                    bottom_left: shrink(nominal.bottom_left, h.left, h.bottom),
                }
            }
        }
    }

    /// All eight values, clockwise from the top edge's left end.
    pub fn to_array(self) -> [f64; 8] {
        [
            self.top_left.x,
            self.top_right.x,
            self.top_right.y,
            self.bottom_right.y,
            self.bottom_right.x,
            self.bottom_left.x,
            self.bottom_left.y,
            self.top_left.y,
        ]
    }
}

/// Free-function form of [`DirectionalRadii::resolve`].
#[inline]
pub fn resolve(nominal: CornerRadii, thickness: Thickness, mode: RadiusMode) -> DirectionalRadii {
    DirectionalRadii::resolve(nominal, thickness, mode)
}
