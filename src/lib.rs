//! Outline geometry for rectangles with smoothable rounded corners.
//!
//! A [`SmoothBorder`] produces two closed contours per arrange pass: the
//! *border path* (outer face of the stroke) and the *background path* (inner
//! face). Filling the border path with the border color and then the
//! background path with the background color leaves exactly the stroke
//! visible.
//!
//! ```
//! use smooth_border::{CornerRadii, SmoothBorder, Thickness, render_svg};
//!
//! let border = SmoothBorder::new()
//!     .corner_radius(CornerRadii::uniform(10.0))
//!     .border_thickness(Thickness::uniform(2.0))
//!     .try_border_color("#333333")?
//!     .try_background_color("white")?;
//!
//! let svg = render_svg(&border, 100.0, 100.0);
//! assert_eq!(svg.matches("<path").count(), 2);
//! # Ok::<(), smooth_border::ConfigError>(())
//! ```

pub mod border;
pub mod errors;
mod log;
pub mod render;
pub mod types;

pub use border::SmoothBorder;
pub use errors::ConfigError;
pub use render::svg::{SvgCanvas, render_svg};
pub use render::{
    Arrangement, Canvas, ClosedPath, CornerExtent, DirectionalRadii, DrawList, FillCommand,
    PathSegment, RadiusMode, background_path, border_path, generate, geometry, resolve,
};
pub use types::{Color, Corner, CornerRadii, Edge, NumericError, Rect, Smoothing, Thickness};
