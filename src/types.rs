//! Value types for border geometry.
//!
//! Everything here is a plain `Copy` value in device-independent units, top-left
//! origin, +X right, +Y down. User-provided numbers go through the `try_*`
//! constructors so non-finite or negative values never reach the path generator.

use std::fmt;
use std::str::FromStr;

use glam::{DVec2, dvec2};

use crate::render::defaults;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
    /// Value is finite and positive but above the accepted maximum
    OutOfRange,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
            NumericError::OutOfRange => write!(f, "value is out of range"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Validate a length that may be zero but never negative or non-finite.
#[inline]
pub fn try_non_negative(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

// ============================================================================
// Smoothing
// ============================================================================

/// Corner smoothing factor in `(0, 1]`, shared by all four corners.
///
/// `1.0` is the least smoothing: control points collapse onto the true corner
/// and the curve reads as a plain rounded corner. Lower values pull the anchors
/// further along the edges and the control points in from the corner, giving
/// the continuous "squircle" look.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Smoothing(f64);

impl Smoothing {
    /// The default, least-smoothed setting.
    pub const NONE: Smoothing = Smoothing(defaults::DEFAULT_SMOOTHING);

    /// Create a Smoothing with validation (rejects NaN, infinite, zero, negative, > 1)
    pub fn try_new(val: f64) -> Result<Self, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else if val == 0.0 {
            Err(NumericError::Zero)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else if val > 1.0 {
            Err(NumericError::OutOfRange)
        } else {
            Ok(Smoothing(val))
        }
    }

    /// Get the raw value
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl Default for Smoothing {
    fn default() -> Self {
        Self::NONE
    }
}

impl TryFrom<f64> for Smoothing {
    type Error = NumericError;

    fn try_from(val: f64) -> Result<Self, Self::Error> {
        Self::try_new(val)
    }
}

impl fmt::Display for Smoothing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Rect / Thickness / CornerRadii
// ============================================================================

/// Axis-aligned rectangle (top-left origin).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect { x, y, width, height }
    }

    /// Rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Rect::new(0.0, 0.0, width, height)
    }

    #[inline]
    pub fn origin(self) -> DVec2 {
        dvec2(self.x, self.y)
    }

    /// Bottom-right corner.
    #[inline]
    pub fn max(self) -> DVec2 {
        dvec2(self.x + self.width, self.y + self.height)
    }

    /// True when either dimension is zero, negative, or NaN.
    #[inline]
    pub fn is_empty(self) -> bool {
        !self.has_area()
    }

    /// True when both dimensions are strictly positive.
    #[inline]
    pub fn has_area(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Shrink by `thick` on each side. Dimensions clamp at zero; the origin
    /// always moves by left/top.
    #[must_use]
    pub fn deflate(self, thick: Thickness) -> Rect {
        Rect {
            x: self.x + thick.left,
            y: self.y + thick.top,
            width: (self.width - thick.left - thick.right).max(0.0),
            height: (self.height - thick.top - thick.bottom).max(0.0),
        }
    }

    /// Closed containment with a small tolerance for accumulated rounding.
    pub fn contains_point(self, p: DVec2, eps: f64) -> bool {
        let max = self.max();
        p.x >= self.x - eps && p.y >= self.y - eps && p.x <= max.x + eps && p.y <= max.y + eps
    }
}

/// Per-edge thickness (border stroke widths or padding).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Thickness {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Thickness {
    pub const ZERO: Thickness = Thickness::uniform(0.0);

    #[inline]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Thickness { left, top, right, bottom }
    }

    #[inline]
    pub const fn uniform(v: f64) -> Self {
        Thickness::new(v, v, v, v)
    }

    /// Create with validation; reports the first offending edge.
    pub fn try_new(
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    ) -> Result<Self, (Edge, NumericError)> {
        let checked = |edge: Edge, v: f64| try_non_negative(v).map_err(|e| (edge, e));
        Ok(Thickness {
            left: checked(Edge::Left, left)?,
            top: checked(Edge::Top, top)?,
            right: checked(Edge::Right, right)?,
            bottom: checked(Edge::Bottom, bottom)?,
        })
    }

    /// Half of each edge: the stroke's extent on either side of its centerline.
    #[inline]
    pub fn halved(self) -> Thickness {
        Thickness::new(self.left * 0.5, self.top * 0.5, self.right * 0.5, self.bottom * 0.5)
    }

    pub fn get(self, edge: Edge) -> f64 {
        match edge {
            Edge::Left => self.left,
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
        }
    }
}

/// Nominal corner radii, clockwise from top-left.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl CornerRadii {
    pub const ZERO: CornerRadii = CornerRadii::uniform(0.0);

    #[inline]
    pub const fn new(top_left: f64, top_right: f64, bottom_right: f64, bottom_left: f64) -> Self {
        CornerRadii { top_left, top_right, bottom_right, bottom_left }
    }

    #[inline]
    pub const fn uniform(r: f64) -> Self {
        CornerRadii::new(r, r, r, r)
    }

    /// Create with validation; reports the first offending corner.
    pub fn try_new(
        top_left: f64,
        top_right: f64,
        bottom_right: f64,
        bottom_left: f64,
    ) -> Result<Self, (Corner, NumericError)> {
        let checked = |corner: Corner, v: f64| try_non_negative(v).map_err(|e| (corner, e));
        Ok(CornerRadii {
            top_left: checked(Corner::TopLeft, top_left)?,
            top_right: checked(Corner::TopRight, top_right)?,
            bottom_right: checked(Corner::BottomRight, bottom_right)?,
            bottom_left: checked(Corner::BottomLeft, bottom_left)?,
        })
    }

    pub fn get(self, corner: Corner) -> f64 {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomRight => self.bottom_right,
            Corner::BottomLeft => self.bottom_left,
        }
    }
}

impl From<f64> for CornerRadii {
    fn from(r: f64) -> Self {
        CornerRadii::uniform(r)
    }
}

/// Rectangle edge, used for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Edge::Left => "left",
            Edge::Top => "top",
            Edge::Right => "right",
            Edge::Bottom => "bottom",
        })
    }
}

/// Rectangle corner, used for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomRight => "bottom-right",
            Corner::BottomLeft => "bottom-left",
        })
    }
}

// ============================================================================
// Color
// ============================================================================

/// Fill color handed to the host canvas.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, u8),
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(s) => write!(f, "{}", s),
            Color::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({},{},{},{})", r, g, b, a),
        }
    }
}

/// Error returned when a color string cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseColorError(pub String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color: {:?}", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts `#rrggbb`, `#rrggbbaa`, or a bare alphabetic name (`steelblue`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ParseColorError(s.to_string());

        if let Some(hex) = s.strip_prefix('#') {
            if !hex.is_ascii() {
                return Err(err());
            }
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
            return match hex.len() {
                6 => Ok(Color::Rgb(byte(0)?, byte(2)?, byte(4)?)),
                8 => Ok(Color::Rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
                _ => Err(err()),
            };
        }

        if !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Color::Named(s.to_ascii_lowercase()))
        } else {
            Err(err())
        }
    }
}
