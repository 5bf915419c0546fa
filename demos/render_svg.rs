//! Print an SVG of a smooth border.
//!
//! Usage: `render_svg [width] [height] [radius] [thickness] [smoothing]`
//! Set `RUST_LOG=smooth_border=trace` to watch the overlap corrections.

use smooth_border::{CornerRadii, SmoothBorder, Thickness, render_svg};

fn arg(n: usize, default: f64) -> f64 {
    std::env::args()
        .nth(n)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let width = arg(1, 160.0);
    let height = arg(2, 100.0);
    let radius = arg(3, 24.0);
    let thickness = arg(4, 3.0);

    let border = SmoothBorder::new()
        .try_corner_radius(radius, radius, radius, radius)?
        .try_border_thickness(thickness, thickness, thickness, thickness)?
        .try_smoothing(arg(5, 0.6))?
        .try_border_color("#2f3640")?
        .try_background_color("#f5f6fa")?
        .padding(Thickness::uniform(8.0));

    let arranged = border.arrange(width, height);
    eprintln!("content box: {:?}", arranged.content_box);

    // Same shape with square corners, for comparison.
    let square = border.clone().corner_radius(CornerRadii::ZERO);

    println!("{}", render_svg(&border, width, height));
    println!("{}", render_svg(&square, width, height));
    Ok(())
}
