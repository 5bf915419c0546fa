//! Border geometry and painting
//!
//! This module is organized into submodules:
//! - `defaults`: Default smoothing and the corner curve coefficients
//! - `radii`: Nominal radii → per-axis directional radii (outer/inner face)
//! - `geometry`: Per-corner anchor/control offsets and overlap correction
//! - `path_builder`: The closed contour itself
//! - `canvas`: Paint contract with the host
//! - `svg`: SVG path data and document output

pub mod canvas;
pub mod defaults;
pub mod geometry;
pub mod path_builder;
pub mod radii;
pub mod svg;

pub use canvas::{Canvas, DrawList, FillCommand};
pub use path_builder::{ClosedPath, PathSegment, generate};
pub use radii::{CornerExtent, DirectionalRadii, RadiusMode, resolve};

use crate::border::SmoothBorder;
use crate::log::debug;
use crate::types::{CornerRadii, Rect, Smoothing, Thickness};

/// Border path for the full rectangle, or `None` unless both dimensions are positive.
pub fn border_path(
    rect: Rect,
    radii: CornerRadii,
    thickness: Thickness,
    smoothing: Smoothing,
) -> Option<ClosedPath> {
    if !rect.has_area() {
        debug!(width = rect.width, height = rect.height, "border rect is degenerate");
        return None;
    }
    let resolved = resolve(radii, thickness, RadiusMode::Outer);
    Some(generate(rect, &resolved, smoothing))
}

/// Background path for the thickness-deflated rectangle, or `None` if it has no area.
pub fn background_path(
    rect: Rect,
    radii: CornerRadii,
    thickness: Thickness,
    smoothing: Smoothing,
) -> Option<ClosedPath> {
    let inner = rect.deflate(thickness);
    if !inner.has_area() {
        debug!(width = inner.width, height = inner.height, "background rect is degenerate");
        return None;
    }
    let resolved = resolve(radii, thickness, RadiusMode::Inner);
    Some(generate(inner, &resolved, smoothing))
}

/// Both paths for `rect`: `(border, background)`. Each is computed independently.
pub fn geometry(
    rect: Rect,
    radii: CornerRadii,
    thickness: Thickness,
    smoothing: Smoothing,
) -> (Option<ClosedPath>, Option<ClosedPath>) {
    (
        border_path(rect, radii, thickness, smoothing),
        background_path(rect, radii, thickness, smoothing),
    )
}

/// Result of one arrange pass. Replaced wholesale on the next pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrangement {
    /// Outer face of the stroke; filled with the border color.
    pub border_path: Option<ClosedPath>,
    /// Inner face of the stroke; filled with the background color on top.
    pub background_path: Option<ClosedPath>,
    /// Slot for a child: inside the border, then inside the padding.
    pub content_box: Rect,
}

impl Arrangement {
    /// Paint back to front: border first, background over it.
    ///
    /// The visible border is the part of the border path the background path
    /// does not cover. A missing path or color skips that fill.
    pub fn paint<C: Canvas + ?Sized>(&self, border: &SmoothBorder, canvas: &mut C) {
        if let (Some(path), Some(color)) = (&self.border_path, border.border()) {
            canvas.fill_path(path, color);
        }
        if let (Some(path), Some(color)) = (&self.background_path, border.background()) {
            canvas.fill_path(path, color);
        }
    }
}
