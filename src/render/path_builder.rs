//! Closed outline generation for a smooth-cornered rectangle.
//!
//! # Layout
//!
//! The contour has 8 anchors (two per corner, sitting on the edges) and 8
//! control points (two per corner, hugging the true corner). Indices run
//! clockwise from the top edge's left end:
//!
//! ```text
//!      c7  a0 ─────────── a1  c0
//!   c6                          c1
//!   a7                          a2
//!   │                            │
//!   a6                          a3
//!   c5                          c2
//!      c4  a5 ─────────── a4  c3
//! ```
//!
//! Straight segments join `a0→a1`, `a2→a3`, `a4→a5`, `a6→a7`. Each corner is one
//! cubic: `a1 -(c0,c1)-> a2`, `a3 -(c2,c3)-> a4`, `a5 -(c4,c5)-> a6`,
//! `a7 -(c6,c7)-> a0`.

use glam::{DVec2, dvec2};
use kurbo::BezPath;

use crate::log::trace;
use crate::types::{Rect, Smoothing};

use super::geometry::{anchor_offset, control_offset, shared_anchor};
use super::radii::DirectionalRadii;

/// One piece of a [`ClosedPath`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    Line { from: DVec2, to: DVec2 },
    Cubic { from: DVec2, ctrl1: DVec2, ctrl2: DVec2, to: DVec2 },
}

impl PathSegment {
    pub fn start_point(&self) -> DVec2 {
        match *self {
            PathSegment::Line { from, .. } | PathSegment::Cubic { from, .. } => from,
        }
    }

    pub fn end_point(&self) -> DVec2 {
        match *self {
            PathSegment::Line { to, .. } | PathSegment::Cubic { to, .. } => to,
        }
    }
}

/// A single closed contour: four straight edges alternating with four cubic corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosedPath {
    anchors: [DVec2; 8],
    controls: [DVec2; 8],
}

impl ClosedPath {
    /// The 8 on-curve points, clockwise from the top edge's left end.
    pub fn anchors(&self) -> &[DVec2; 8] {
        &self.anchors
    }

    /// The 8 Bézier control points; `controls[2i]` and `controls[2i + 1]` shape corner `i`.
    pub fn controls(&self) -> &[DVec2; 8] {
        &self.controls
    }

    /// First point of the contour (and the last segment's end point).
    pub fn start(&self) -> DVec2 {
        self.anchors[0]
    }

    /// Segments in drawing order: line, corner, line, corner, ...
    pub fn segments(&self) -> impl Iterator<Item = PathSegment> + '_ {
        (0..4).flat_map(move |side| {
            let a = &self.anchors;
            let c = &self.controls;
            [
                PathSegment::Line { from: a[2 * side], to: a[2 * side + 1] },
                PathSegment::Cubic {
                    from: a[2 * side + 1],
                    ctrl1: c[2 * side],
                    ctrl2: c[2 * side + 1],
                    to: a[(2 * side + 2) % 8],
                },
            ]
        })
    }

    /// Bounding box of all anchors and control points.
    ///
    /// Every cubic lies inside the convex hull of its points, so this also
    /// bounds the drawn contour.
    pub fn bounds(&self) -> Rect {
        let mut min = DVec2::splat(f64::MAX);
        let mut max = DVec2::splat(f64::MIN);
        for p in self.anchors.iter().chain(self.controls.iter()) {
            min = min.min(*p);
            max = max.max(*p);
        }
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Convert to a kurbo path for linebender-based renderers.
    pub fn to_bez_path(&self) -> BezPath {
        let pt = |p: DVec2| kurbo::Point::new(p.x, p.y);

        let mut path = BezPath::new();
        path.move_to(pt(self.start()));
        for seg in self.segments() {
            match seg {
                PathSegment::Line { to, .. } => path.line_to(pt(to)),
                PathSegment::Cubic { ctrl1, ctrl2, to, .. } => {
                    path.curve_to(pt(ctrl1), pt(ctrl2), pt(to))
                }
            }
        }
        path.close_path();
        path
    }
}

impl From<&ClosedPath> for BezPath {
    fn from(path: &ClosedPath) -> Self {
        path.to_bez_path()
    }
}

/// Generate the closed outline of `rect` with the given directional radii.
///
/// Callers skip rectangles without area (see [`border_path`](super::border_path)).
/// Negative or NaN dimensions are read as zero here, collapsing the anchors
/// onto the origin.
///
/// Anchors are kept inside `rect`. Control points are not: at low smoothing
/// on a small rectangle they can sit past the opposite edge.
pub fn generate(rect: Rect, radii: &DirectionalRadii, smoothing: Smoothing) -> ClosedPath {
    let (w, h) = (rect.width.max(0.0), rect.height.max(0.0));
    let k = |r: f64| anchor_offset(r, smoothing);
    let DirectionalRadii { top_left: tl, top_right: tr, bottom_right: br, bottom_left: bl } = *radii;

    // One control offset for every corner, taken from the top-left horizontal extent.
    let bc = control_offset(tl.x, smoothing);

    let mut a = [
        dvec2(k(tl.x), 0.0),
        dvec2(w - k(tr.x), 0.0),
        dvec2(w, k(tr.y)),
        dvec2(w, h - k(br.y)),
        dvec2(w - k(br.x), h),
        dvec2(k(bl.x), h),
        dvec2(0.0, h - k(bl.y)),
        dvec2(0.0, k(tl.y)),
    ];

    let c = [
        dvec2(w - bc, 0.0),
        dvec2(w, bc),
        dvec2(w, h - bc),
        dvec2(w - bc, h),
        dvec2(bc, h),
        dvec2(0.0, h - bc),
        dvec2(0.0, bc),
        dvec2(bc, 0.0),
    ];

    // Corners that would overlap meet at one shared point instead.
    // Strict comparisons: touching anchors are left alone.
    if a[0].x > a[1].x {
        let x = shared_anchor(tl.x, tr.x, w);
        trace!(x = x, "top edge anchors crossed");
        a[0].x = x;
        a[1].x = x;
    }
    if a[2].y > a[3].y {
        let y = shared_anchor(tr.y, br.y, h);
        trace!(y = y, "right edge anchors crossed");
        a[2].y = y;
        a[3].y = y;
    }
    if a[4].x < a[5].x {
        let x = shared_anchor(bl.x, br.x, w);
        trace!(x = x, "bottom edge anchors crossed");
        a[4].x = x;
        a[5].x = x;
    }
    if a[6].y < a[7].y {
        let y = shared_anchor(tl.y, bl.y, h);
        trace!(y = y, "left edge anchors crossed");
        a[6].y = y;
        a[7].y = y;
    }

    let origin = rect.origin();
    let upper = dvec2(w, h);
    ClosedPath {
        anchors: a.map(|p| p.clamp(DVec2::ZERO, upper) + origin),
        controls: c.map(|p| p + origin),
    }
}
