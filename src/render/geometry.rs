//! Per-corner curve math: anchor and control offsets, overlap correction.
//!
//! Both offsets are functions of `(radius, smoothing)` only, so a single corner
//! can be reasoned about without the rest of the rectangle.

use std::f64::consts::FRAC_PI_2;

use crate::types::Smoothing;

use super::defaults::{BEZIER_ANCHOR_COEF, BEZIER_CONTROL_POINT_COEF};

/// Distance from the true corner to the anchor point on an adjoining edge.
///
/// Grows as smoothing drops, so smoother corners start curving earlier.
#[inline]
pub fn anchor_offset(radius: f64, smoothing: Smoothing) -> f64 {
    radius / smoothing.raw() * FRAC_PI_2 * BEZIER_ANCHOR_COEF
}

/// Distance from the true corner to each Bézier control point.
///
/// Zero at smoothing `1.0` (controls sit on the corner itself).
#[inline]
pub fn control_offset(radius: f64, smoothing: Smoothing) -> f64 {
    radius * (1.0 - smoothing.raw()) * FRAC_PI_2 * BEZIER_CONTROL_POINT_COEF
}

/// Shared position for two anchors on one edge whose corner curves would cross.
///
/// The edge is split in proportion to the two radii measured along it, so the
/// larger corner keeps the larger share.
#[inline]
pub fn shared_anchor(near: f64, far: f64, edge_length: f64) -> f64 {
    near / (near + far) * edge_length
}
