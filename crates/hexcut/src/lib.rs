//! # hexcut
//!
//! Vector artwork and laser templates for a hexagonal board game: the
//! board, the piece faces and the cut/engrave sheets that go with them.
//!
//! Lengths are designed in centimeters and drawn in device units; see
//! [`scale`] and [`profile`]. The grid lives in [`grid`], decorations in
//! [`figures`], and [`compose`] ties them into whole drawings.
//!
//! ## Rust Lesson #9: Facade Modules
//!
//! `figures` declares its submodules with plain `mod` and re-exports the
//! functions callers need with `pub use`. Callers write
//! `hexcut::figures::rosette`, never `figures::outline::rosette`, so the
//! files inside can be split or merged without touching them.

pub mod canvas;
pub mod compose;
pub mod error;
pub mod figures;
pub mod geometry;
pub mod grid;
pub mod mode;
pub mod piece;
pub mod profile;
pub mod rng;
pub mod scale;
pub mod shape;
pub mod svg;

// Re-export common types at crate root for convenience.
pub use canvas::Canvas;
pub use compose::{
    LabelMode, Ornament, OutputTarget, RenderMode, RenderOptions, RenderedFiles, board_canvas,
    pieces_canvas, render_board, render_pieces,
};
pub use error::{ConfigError, Error, GeometryError, RenderError, Result};
pub use figures::TextureStyle;
pub use geometry::Vector2;
pub use grid::{Grid, GridLayout, HexCell, Side};
pub use piece::{PieceColor, PieceKind, PieceSpec, PlacementTable};
pub use profile::{BoardProfile, HexGeometry, PieceSheetProfile, SizeProfile};
pub use rng::SeedStream;
pub use scale::ScalingModel;
pub use shape::{Color, Shape, ShapeSink, Style};
