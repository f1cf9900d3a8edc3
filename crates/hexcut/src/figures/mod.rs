//! Figure generators.
//!
//! Pure functions of a center, a few lengths and, for textures, an
//! explicitly passed [`SeedStream`](crate::rng::SeedStream). They return
//! point lists or [`Shape`](crate::shape::Shape)s and never touch a canvas.

mod glyph;
mod outline;
mod texture;

pub use glyph::{WISE_SAMPLES, face_color, glyph_color, piece_glyph};
pub use outline::{
    ROSETTE_SCALE, ROSETTE_SIDES, concentric_rings, concentric_scales, hexagon_outline, rosette,
};
pub use texture::{
    EdgeRule, MARK_WIDTH, MAX_REJECTIONS, Mark, OffsetDistribution, TextureSampler, TextureStyle,
    inradius,
};
