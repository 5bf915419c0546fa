//! Default settings and the fixed coefficients of the corner curve

/// Smoothing used when the host sets nothing: plain rounded corners.
pub const DEFAULT_SMOOTHING: f64 = 1.0;

/// Scales the distance of Bézier control points from the true corner.
pub const BEZIER_CONTROL_POINT_COEF: f64 = 1.10;

/// Scales the distance of anchor points from the true corner along each edge.
pub const BEZIER_ANCHOR_COEF: f64 = 0.95;
