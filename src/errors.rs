//! Configuration errors with diagnostics using miette
//!
//! The geometry itself never fails; every check happens when a value enters
//! a [`SmoothBorder`](crate::SmoothBorder).

use miette::Diagnostic;
use thiserror::Error;

use crate::types::{Corner, Edge, NumericError, ParseColorError};

/// Errors raised while configuring a border
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid smoothing {value}: {reason}")]
    #[diagnostic(
        code(smooth_border::config::invalid_smoothing),
        help("smoothing must be in (0, 1]; 1.0 gives plain rounded corners")
    )]
    InvalidSmoothing { value: f64, reason: NumericError },

    #[error("invalid {corner} radius {value}: {reason}")]
    #[diagnostic(
        code(smooth_border::config::invalid_radius),
        help("corner radii must be finite and non-negative")
    )]
    InvalidRadius { corner: Corner, value: f64, reason: NumericError },

    #[error("invalid {edge} border thickness {value}: {reason}")]
    #[diagnostic(
        code(smooth_border::config::invalid_thickness),
        help("border thickness must be finite and non-negative")
    )]
    InvalidThickness { edge: Edge, value: f64, reason: NumericError },

    #[error("invalid {edge} padding {value}: {reason}")]
    #[diagnostic(
        code(smooth_border::config::invalid_padding),
        help("padding must be finite and non-negative")
    )]
    InvalidPadding { edge: Edge, value: f64, reason: NumericError },

    #[error(transparent)]
    #[diagnostic(
        code(smooth_border::config::invalid_color),
        help("use #rrggbb, #rrggbbaa, or a color name")
    )]
    InvalidColor(#[from] ParseColorError),
}
