//! Paint contract between an [`Arrangement`](super::Arrangement) and the host.

use crate::types::Color;

use super::path_builder::ClosedPath;

/// Host drawing surface. The only operation the border needs is a solid fill.
pub trait Canvas {
    fn fill_path(&mut self, path: &ClosedPath, color: &Color);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn fill_path(&mut self, path: &ClosedPath, color: &Color) {
        (**self).fill_path(path, color)
    }
}

/// A recorded fill, in call order.
#[derive(Debug, Clone, PartialEq)]
pub struct FillCommand {
    pub path: ClosedPath,
    pub color: Color,
}

/// Canvas that just records what it was asked to draw.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    pub commands: Vec<FillCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for DrawList {
    fn fill_path(&mut self, path: &ClosedPath, color: &Color) {
        self.commands.push(FillCommand { path: *path, color: color.clone() });
    }
}
