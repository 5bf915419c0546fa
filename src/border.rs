//! The bordered element: configuration plus the arrange step.

use crate::errors::ConfigError;
use crate::log::debug;
use crate::render::{Arrangement, background_path, border_path};
use crate::types::{Color, CornerRadii, Rect, Smoothing, Thickness};

/// A rectangle with a stroked border, smoothable rounded corners, a background,
/// and padding around an optional child.
///
/// Builder setters take already-checked values; the `try_*` setters validate
/// raw numbers coming from user input.
///
/// # Example
///
/// ```
/// use smooth_border::{Color, CornerRadii, SmoothBorder, Thickness};
///
/// let border = SmoothBorder::new()
///     .corner_radius(CornerRadii::uniform(12.0))
///     .border_thickness(Thickness::uniform(2.0))
///     .try_smoothing(0.6)?
///     .border_color(Color::Rgb(40, 40, 40))
///     .background_color(Color::Named("white".into()));
///
/// let arranged = border.arrange(120.0, 80.0);
/// assert!(arranged.border_path.is_some());
/// assert!(arranged.background_path.is_some());
/// # Ok::<(), smooth_border::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SmoothBorder {
    corner_radius: CornerRadii,
    border_thickness: Thickness,
    padding: Thickness,
    smoothing: Smoothing,
    border_color: Option<Color>,
    background: Option<Color>,
}

impl SmoothBorder {
    pub fn new() -> Self {
        Self::default()
    }

    // ── builder ──────────────────────────────────────────────────────────

    pub fn corner_radius(mut self, radii: impl Into<CornerRadii>) -> Self {
        let radii = radii.into();
        debug_assert!(
            CornerRadii::try_new(radii.top_left, radii.top_right, radii.bottom_right, radii.bottom_left).is_ok(),
            "corner radii must be finite and non-negative: {radii:?}"
        );
        self.corner_radius = radii;
        self
    }

    pub fn border_thickness(mut self, thickness: Thickness) -> Self {
        debug_assert!(
            Thickness::try_new(thickness.left, thickness.top, thickness.right, thickness.bottom).is_ok(),
            "border thickness must be finite and non-negative: {thickness:?}"
        );
        self.border_thickness = thickness;
        self
    }

    pub fn padding(mut self, padding: Thickness) -> Self {
        debug_assert!(
            Thickness::try_new(padding.left, padding.top, padding.right, padding.bottom).is_ok(),
            "padding must be finite and non-negative: {padding:?}"
        );
        self.padding = padding;
        self
    }

    pub fn smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    // ── validating setters ───────────────────────────────────────────────

    pub fn try_corner_radius(
        self,
        top_left: f64,
        top_right: f64,
        bottom_right: f64,
        bottom_left: f64,
    ) -> Result<Self, ConfigError> {
        let radii = CornerRadii::try_new(top_left, top_right, bottom_right, bottom_left).map_err(
            |(corner, reason)| ConfigError::InvalidRadius {
                corner,
                value: CornerRadii::new(top_left, top_right, bottom_right, bottom_left).get(corner),
                reason,
            },
        )?;
        Ok(self.corner_radius(radii))
    }

    pub fn try_border_thickness(
        self,
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    ) -> Result<Self, ConfigError> {
        let thickness = Thickness::try_new(left, top, right, bottom).map_err(|(edge, reason)| {
            ConfigError::InvalidThickness {
                edge,
                value: Thickness::new(left, top, right, bottom).get(edge),
                reason,
            }
        })?;
        Ok(self.border_thickness(thickness))
    }

    pub fn try_padding(self, left: f64, top: f64, right: f64, bottom: f64) -> Result<Self, ConfigError> {
        let padding = Thickness::try_new(left, top, right, bottom).map_err(|(edge, reason)| {
            ConfigError::InvalidPadding {
                edge,
                value: Thickness::new(left, top, right, bottom).get(edge),
                reason,
            }
        })?;
        Ok(self.padding(padding))
    }

    pub fn try_smoothing(self, value: f64) -> Result<Self, ConfigError> {
        let smoothing = Smoothing::try_new(value)
            .map_err(|reason| ConfigError::InvalidSmoothing { value, reason })?;
        Ok(self.smoothing(smoothing))
    }

    pub fn try_border_color(self, color: &str) -> Result<Self, ConfigError> {
        Ok(self.border_color(color.parse()?))
    }

    pub fn try_background_color(self, color: &str) -> Result<Self, ConfigError> {
        Ok(self.background_color(color.parse()?))
    }

    // ── accessors ────────────────────────────────────────────────────────

    pub fn corner_radii(&self) -> CornerRadii {
        self.corner_radius
    }

    pub fn thickness(&self) -> Thickness {
        self.border_thickness
    }

    pub fn padding_thickness(&self) -> Thickness {
        self.padding
    }

    pub fn smoothing_factor(&self) -> Smoothing {
        self.smoothing
    }

    pub fn border(&self) -> Option<&Color> {
        self.border_color.as_ref()
    }

    pub fn background(&self) -> Option<&Color> {
        self.background.as_ref()
    }

    // ── arrange ──────────────────────────────────────────────────────────

    /// Compute the geometry for a final size handed down by the host layout.
    ///
    /// Negative sizes are treated as zero.
    pub fn arrange(&self, width: f64, height: f64) -> Arrangement {
        let outer = Rect::from_size(width.max(0.0), height.max(0.0));
        let inner = outer.deflate(self.border_thickness);

        let arrangement = Arrangement {
            border_path: border_path(outer, self.corner_radius, self.border_thickness, self.smoothing),
            background_path: background_path(
                outer,
                self.corner_radius,
                self.border_thickness,
                self.smoothing,
            ),
            content_box: inner.deflate(self.padding),
        };

        debug!(
            width = width,
            height = height,
            border = arrangement.border_path.is_some(),
            background = arrangement.background_path.is_some(),
            "arranged smooth border"
        );
        arrangement
    }
}
