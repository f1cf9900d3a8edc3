//! Seeded texture marks inside a cell.
//!
//! Every texture is the same loop: pick a chord across the cell, pick an
//! offset along it, keep a short slice of the chord around that offset.
//! The styles only differ in how the chord and the offset are chosen.

use rand_distr::Beta;
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geometry::Vector2;
use crate::rng::SeedStream;

/// Range of a mark's length, as a fraction of its chord.
pub const MARK_WIDTH: (f64, f64) = (0.02, 0.05);

/// Consecutive rejected samples tolerated before giving up on a mark.
pub const MAX_REJECTIONS: usize = 10_000;

/// Named texture presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextureStyle {
    /// Any two edges, flat offset.
    #[default]
    Uniform,
    /// Opposite edges, offsets pushed toward the chord ends.
    Concentrated,
    /// Edge to center, offsets crowding the edge.
    Gradient,
}

impl TextureStyle {
    pub const ALL: [TextureStyle; 3] = [
        TextureStyle::Uniform,
        TextureStyle::Concentrated,
        TextureStyle::Gradient,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TextureStyle::Uniform => "uniform",
            TextureStyle::Concentrated => "concentrated",
            TextureStyle::Gradient => "gradient",
        }
    }

    pub fn rule(self) -> (EdgeRule, OffsetDistribution) {
        match self {
            TextureStyle::Uniform => (EdgeRule::AnyDistinct, OffsetDistribution::Uniform),
            TextureStyle::Concentrated => (
                EdgeRule::Opposite,
                OffsetDistribution::Beta { alpha: 0.5, beta: 0.5 },
            ),
            TextureStyle::Gradient => (
                EdgeRule::ToCenter,
                OffsetDistribution::Beta { alpha: 1.0, beta: 3.0 },
            ),
        }
    }
}

/// How the two ends of a chord are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeRule {
    /// A point on edge `i` and one on edge `i + n/2`.
    Opposite,
    /// Points on two different edges.
    AnyDistinct,
    /// A point on one edge, then the cell center.
    ToCenter,
}

/// Where along the chord a mark is centered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OffsetDistribution {
    Uniform,
    Beta { alpha: f64, beta: f64 },
}

#[derive(Debug, Clone)]
enum Offset {
    Uniform,
    Beta(Beta<f64>),
}

/// One texture stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mark {
    pub from: Vector2,
    pub to: Vector2,
}

/// Draws marks with a fixed chord rule and offset distribution.
#[derive(Debug, Clone)]
pub struct TextureSampler {
    edge_rule: EdgeRule,
    offset: Offset,
    mask_radius: f64,
    max_rejections: usize,
}

impl TextureSampler {
    pub fn new(edge_rule: EdgeRule, offset: OffsetDistribution) -> Result<Self, GeometryError> {
        let offset = match offset {
            OffsetDistribution::Uniform => Offset::Uniform,
            OffsetDistribution::Beta { alpha, beta } => Offset::Beta(
                Beta::new(alpha, beta).map_err(|e| {
                    GeometryError::InvalidDecorator(format!("beta({alpha}, {beta}): {e}"))
                })?,
            ),
        };
        Ok(Self {
            edge_rule,
            offset,
            mask_radius: 0.0,
            max_rejections: MAX_REJECTIONS,
        })
    }

    pub fn preset(style: TextureStyle) -> Result<Self, GeometryError> {
        let (rule, offset) = style.rule();
        Self::new(rule, offset)
    }

    /// Keep marks out of the disc of this radius around the cell center.
    pub fn with_mask_radius(mut self, radius: f64) -> Self {
        self.mask_radius = radius;
        self
    }

    pub fn with_max_rejections(mut self, max: usize) -> Self {
        self.max_rejections = max;
        self
    }

    pub fn edge_rule(&self) -> EdgeRule {
        self.edge_rule
    }

    pub fn mask_radius(&self) -> f64 {
        self.mask_radius
    }

    /// Draw `count` marks inside the polygon `vertices` around `center`.
    ///
    /// Fails up front when the mask cannot fit inside the polygon, and
    /// after [`MAX_REJECTIONS`] consecutive masked-out samples.
    pub fn sample(
        &self,
        center: Vector2,
        vertices: &[Vector2],
        count: usize,
        stream: &mut SeedStream,
    ) -> Result<Vec<Mark>, GeometryError> {
        let n = vertices.len();
        if n < 3 {
            return Err(GeometryError::InvalidDecorator(format!(
                "texture needs a polygon, got {n} vertices"
            )));
        }
        if self.edge_rule == EdgeRule::Opposite && n % 2 != 0 {
            return Err(GeometryError::InvalidDecorator(format!(
                "opposite edges need an even vertex count, got {n}"
            )));
        }
        if !(self.mask_radius >= 0.0 && self.mask_radius.is_finite()) {
            return Err(GeometryError::InvalidDecorator(format!(
                "mask radius {}",
                self.mask_radius
            )));
        }
        let inradius = inradius(center, vertices);
        if self.mask_radius > 0.0 && self.mask_radius >= inradius {
            return Err(GeometryError::MaskTooLarge { radius: self.mask_radius, inradius });
        }

        let mut marks = Vec::with_capacity(count);
        while marks.len() < count {
            let mut rejections = 0;
            loop {
                let mark = self.draw_mark(center, vertices, stream);
                if self.outside_mask(center, &mark) {
                    marks.push(mark);
                    break;
                }
                rejections += 1;
                if rejections >= self.max_rejections {
                    return Err(GeometryError::SamplingExhausted { attempts: rejections });
                }
            }
        }
        Ok(marks)
    }

    fn draw_mark(&self, center: Vector2, vertices: &[Vector2], stream: &mut SeedStream) -> Mark {
        let (start, end) = self.chord(center, vertices, stream);

        let t = match &self.offset {
            Offset::Uniform => stream.next_f64(),
            Offset::Beta(beta) => stream.sample(beta),
        };
        let width = stream.next_range(MARK_WIDTH.0, MARK_WIDTH.1);
        let a = (t - width / 2.0).clamp(0.0, 1.0);
        let b = (t + width / 2.0).clamp(0.0, 1.0);

        Mark { from: start.lerp(end, a), to: start.lerp(end, b) }
    }

    /// Both ends of one chord, chosen by the edge rule.
    pub(crate) fn chord(
        &self,
        center: Vector2,
        vertices: &[Vector2],
        stream: &mut SeedStream,
    ) -> (Vector2, Vector2) {
        let n = vertices.len();
        match self.edge_rule {
            EdgeRule::Opposite => {
                let i = stream.next_index(n);
                let a = edge_point(vertices, i, stream);
                let b = edge_point(vertices, (i + n / 2) % n, stream);
                (a, b)
            }
            EdgeRule::AnyDistinct => {
                let (i, j) = stream.next_distinct_pair(n);
                let a = edge_point(vertices, i, stream);
                let b = edge_point(vertices, j, stream);
                (a, b)
            }
            EdgeRule::ToCenter => {
                let i = stream.next_index(n);
                (edge_point(vertices, i, stream), center)
            }
        }
    }

    fn outside_mask(&self, center: Vector2, mark: &Mark) -> bool {
        self.mask_radius <= 0.0
            || (mark.from.distance(center) >= self.mask_radius
                && mark.to.distance(center) >= self.mask_radius)
    }
}

/// Uniform point on the edge from vertex `i` to vertex `i + 1`.
fn edge_point(vertices: &[Vector2], i: usize, stream: &mut SeedStream) -> Vector2 {
    let next = vertices[(i + 1) % vertices.len()];
    vertices[i].lerp(next, stream.next_f64())
}

/// Distance from `center` to the nearest edge line.
pub fn inradius(center: Vector2, vertices: &[Vector2]) -> f64 {
    let n = vertices.len();
    (0..n)
        .map(|i| {
            let a = vertices[i];
            let edge = vertices[(i + 1) % n] - a;
            let rel = center - a;
            (edge.x * rel.y - edge.y * rel.x).abs() / edge.norm()
        })
        .fold(f64::INFINITY, f64::min)
}
