//! The drawing canvas: an append-only shape list plus persistence.
//!
//! Vector output is our own SVG. Raster output re-parses that SVG with
//! usvg and paints it with resvg, so both files always agree.

use std::fs;
use std::path::Path;

use tiny_skia::{Pixmap, Transform};
use tracing::info;

use crate::error::RenderError;
use crate::geometry::Vector2;
use crate::shape::{Shape, ShapeKind, ShapeSink};
use crate::svg::{Frame, shapes_to_svg};

/// A device-unit drawing with a physical render size.
#[derive(Debug, Clone)]
pub struct Canvas {
    frame: Frame,
    shapes: Vec<Shape>,
    raster_scale: f64,
}

impl Canvas {
    /// `origin` is the device coordinate of the top-left corner.
    pub fn new(width: f64, height: f64, origin: Vector2, render_size_cm: (f64, f64)) -> Self {
        Self {
            frame: Frame { width, height, origin, render_size_cm },
            shapes: Vec::new(),
            raster_scale: 1.0,
        }
    }

    /// Raster pixels per device unit (default 1).
    pub fn with_raster_scale(mut self, scale: f64) -> Self {
        self.raster_scale = scale;
        self
    }

    pub fn width(&self) -> f64 {
        self.frame.width
    }

    pub fn height(&self) -> f64 {
        self.frame.height
    }

    pub fn origin(&self) -> Vector2 {
        self.frame.origin
    }

    pub fn render_size_cm(&self) -> (f64, f64) {
        self.frame.render_size_cm
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn count(&self, kind: ShapeKind) -> usize {
        self.shapes.iter().filter(|s| s.kind() == kind).count()
    }

    pub fn to_svg(&self) -> Result<String, RenderError> {
        shapes_to_svg(&self.frame, &self.shapes)
    }

    pub fn save_vector(&self, path: &Path) -> Result<(), RenderError> {
        let svg = self.to_svg()?;
        fs::write(path, svg).map_err(|source| RenderError::Io { path: path.to_path_buf(), source })?;
        info!(path = %path.display(), shapes = self.shapes.len(), "wrote SVG");
        Ok(())
    }

    /// Rasterize at `device size x raster scale` pixels.
    pub fn rasterize(&self) -> Result<Pixmap, RenderError> {
        let svg = self.to_svg()?;

        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();
        let tree = usvg::Tree::from_str(&svg, &options)?;

        let width = (self.frame.width * self.raster_scale).round().max(1.0) as u32;
        let height = (self.frame.height * self.raster_scale).round().max(1.0) as u32;
        let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::Pixmap { width, height })?;

        // usvg sizes the tree from the cm attributes; stretch it to our pixels.
        let size = tree.size();
        let transform = Transform::from_scale(
            width as f32 / size.width(),
            height as f32 / size.height(),
        );
        resvg::render(&tree, transform, &mut pixmap.as_mut());
        Ok(pixmap)
    }

    pub fn save_raster(&self, path: &Path) -> Result<(), RenderError> {
        let pixmap = self.rasterize()?;
        pixmap.save_png(path).map_err(|e| RenderError::Png {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        info!(path = %path.display(), width = pixmap.width(), height = pixmap.height(), "wrote PNG");
        Ok(())
    }
}

impl ShapeSink for Canvas {
    fn append(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }
}
