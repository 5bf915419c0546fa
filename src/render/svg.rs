//! SVG generation

use crate::border::SmoothBorder;
use crate::types::Color;

use super::canvas::Canvas;
use super::path_builder::ClosedPath;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

impl ClosedPath {
    /// SVG path data (`d` attribute) for this contour.
    pub fn to_svg_path(&self) -> String {
        self.to_bez_path().to_svg()
    }
}

/// Canvas that collects fills into a standalone SVG document.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    width: f64,
    height: f64,
    body: String,
}

impl SvgCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, body: String::new() }
    }

    /// Close the document and return it.
    pub fn finish(self) -> String {
        let (w, h) = (self.width, self.height);
        format!(
            "<svg xmlns=\"{SVG_NS}\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{}</svg>\n",
            self.body
        )
    }
}

impl Canvas for SvgCanvas {
    fn fill_path(&mut self, path: &ClosedPath, color: &Color) {
        self.body
            .push_str(&format!("<path d=\"{}\" fill=\"{}\"/>\n", path.to_svg_path(), color));
    }
}

/// Arrange `border` at `width` × `height` and paint it into an SVG document.
pub fn render_svg(border: &SmoothBorder, width: f64, height: f64) -> String {
    let mut canvas = SvgCanvas::new(width, height);
    border.arrange(width, height).paint(border, &mut canvas);
    canvas.finish()
}
