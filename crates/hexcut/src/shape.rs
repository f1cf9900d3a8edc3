//! Shape descriptors and the sink they are appended to.
//!
//! Generators never draw. They build [`Shape`] values and hand them to a
//! [`ShapeSink`], which only ever appends.

use std::fmt;
use std::str::FromStr;

use crate::geometry::Vector2;

/// An opaque RGB color, written as `rgb(r,g,b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    // Laser color codes. The cutter driver keys operations on these exact
    // values, do not adjust them.
    pub const ENGRAVE: Color = Color::rgb(0, 0, 0);
    pub const SCORE: Color = Color::rgb(255, 0, 0);
    pub const CUT_1: Color = Color::rgb(0, 0, 255);
    pub const CUT_2: Color = Color::rgb(51, 102, 153);

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Light wood, `#BF9B7A`.
    pub const WOOD: Color = Color::rgb(0xBF, 0x9B, 0x7A);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = svgtypes::Error;

    /// Parse any SVG color: `#BF9B7A`, `rgb(0,0,255)`, `white`, ...
    /// Alpha is dropped; opacity is a style property here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let c = svgtypes::Color::from_str(s.trim())?;
        Ok(Color::rgb(c.red, c.green, c.blue))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    pub cap: Option<LineCap>,
    pub join: Option<LineJoin>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    None,
    Solid(Color),
}

/// Paint attributes shared by every geometric shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub fill: Fill,
    pub fill_opacity: f64,
    pub stroke: Option<Stroke>,
}

impl Style {
    /// Outline only.
    pub fn stroked(color: Color, width: f64) -> Self {
        Self {
            fill: Fill::None,
            fill_opacity: 1.0,
            stroke: Some(Stroke { color, width, cap: None, join: None }),
        }
    }

    /// Solid fill without outline.
    pub fn filled(color: Color) -> Self {
        Self { fill: Fill::Solid(color), fill_opacity: 1.0, stroke: None }
    }

    pub fn with_fill(mut self, fill: Fill, opacity: f64) -> Self {
        self.fill = fill;
        self.fill_opacity = opacity;
        self
    }

    pub fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke = Some(Stroke { color, width, cap: None, join: None });
        self
    }

    pub fn with_cap(mut self, cap: LineCap) -> Self {
        if let Some(stroke) = self.stroke.as_mut() {
            stroke.cap = Some(cap);
        }
        self
    }

    pub fn with_join(mut self, join: LineJoin) -> Self {
        if let Some(stroke) = self.stroke.as_mut() {
            stroke.join = Some(join);
        }
        self
    }

    pub fn stroke_color(&self) -> Option<Color> {
        self.stroke.map(|s| s.color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
    pub opacity: f64,
}

/// Radial gradient in device coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vector2,
    pub radius: f64,
    pub stops: Vec<GradientStop>,
}

/// Everything a generator can emit.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle {
        corner: Vector2,
        width: f64,
        height: f64,
        style: Style,
    },
    Polyline {
        points: Vec<Vector2>,
        closed: bool,
        style: Style,
    },
    Line {
        from: Vector2,
        to: Vector2,
        style: Style,
    },
    Circle {
        center: Vector2,
        radius: f64,
        style: Style,
    },
    /// Label centered on `position`.
    Text {
        text: String,
        position: Vector2,
        font_size: f64,
        font_family: String,
        fill: Color,
    },
    /// Closed polygon painted with a radial gradient.
    GradientPolygon {
        points: Vec<Vector2>,
        gradient: RadialGradient,
        style: Style,
    },
}

/// Discriminant of [`Shape`], handy for counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Polyline,
    Line,
    Circle,
    Text,
    GradientPolygon,
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
            Shape::Polyline { .. } => ShapeKind::Polyline,
            Shape::Line { .. } => ShapeKind::Line,
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Text { .. } => ShapeKind::Text,
            Shape::GradientPolygon { .. } => ShapeKind::GradientPolygon,
        }
    }

    /// Closed outline from an open vertex ring.
    pub fn polygon(points: Vec<Vector2>, style: Style) -> Self {
        Shape::Polyline { points, closed: true, style }
    }

    pub fn style(&self) -> Option<&Style> {
        match self {
            Shape::Rectangle { style, .. }
            | Shape::Polyline { style, .. }
            | Shape::Line { style, .. }
            | Shape::Circle { style, .. }
            | Shape::GradientPolygon { style, .. } => Some(style),
            Shape::Text { .. } => None,
        }
    }
}

/// Append-only destination for shapes.
///
/// On a concrete `Vec<Shape>` the inherent `Vec::append` wins method
/// resolution, so call `ShapeSink::append(&mut shapes, shape)` there or go
/// through a generic `impl ShapeSink`.
pub trait ShapeSink {
    fn append(&mut self, shape: Shape);

    fn extend_shapes<I: IntoIterator<Item = Shape>>(&mut self, shapes: I)
    where
        Self: Sized,
    {
        for shape in shapes {
            self.append(shape);
        }
    }
}

impl ShapeSink for Vec<Shape> {
    fn append(&mut self, shape: Shape) {
        self.push(shape);
    }
}
