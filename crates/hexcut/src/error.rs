//! Error types for hexcut.
//!
//! Every failure aborts the current output run. Nothing is retried: the
//! pipeline is deterministic and has no transient dependencies.

use std::path::PathBuf;

use thiserror::Error;

/// Degenerate or inconsistent geometry, detected at construction time.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("invalid operand: {0}")]
    InvalidOperand(String),

    #[error("length `{name}` must be finite and positive, got {value}")]
    NonPositiveLength { name: String, value: f64 },

    #[error("no length named `{0}` in scaling model")]
    UnknownLength(String),

    #[error("scaling model `{0}` has no total width")]
    MissingTotalWidth(String),

    #[error("duplicate cell name `{0}`")]
    DuplicateCellName(String),

    #[error("duplicate axial coordinate ({u}, {v}) for cell `{name}`")]
    DuplicateAxial { name: String, u: i32, v: i32 },

    #[error("malformed cell name `{0}` (expected a row letter and a column digit)")]
    MalformedCellName(String),

    #[error("unknown cell `{0}`")]
    UnknownCell(String),

    #[error("inset scale must lie in (0, 1], got {0}")]
    InvalidInset(f64),

    #[error("invalid decorator parameters: {0}")]
    InvalidDecorator(String),

    #[error("masking radius {radius} does not fit inside the inradius {inradius}")]
    MaskTooLarge { radius: f64, inradius: f64 },

    #[error("gave up after {attempts} rejected texture samples")]
    SamplingExhausted { attempts: usize },

    #[error("invalid placement table: {0}")]
    InvalidPlacement(String),
}

/// Contradictory or malformed options, detected before any geometry is built.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("the tiny and large size profiles are mutually exclusive")]
    ConflictingProfiles,

    #[error("scale factor must be finite and positive, got {0}")]
    InvalidScale(f64),

    #[error("invalid color `{value}` for {field}")]
    InvalidColor { field: &'static str, value: String },

    #[error("mask ratio must lie in [0, 1), got {0}")]
    InvalidMask(f64),

    #[error("mark count must be positive")]
    NoMarks,

    #[error("ring ornament needs count >= 1 and 0 < min <= max <= 1, got count {count}, min {min}, max {max}")]
    InvalidRings { count: usize, min: f64, max: f64 },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Failures while serialising or persisting a canvas.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write SVG markup: {0}")]
    Markup(String),

    #[error("failed to parse generated SVG: {0}")]
    Parse(#[from] usvg::Error),

    #[error("cannot allocate a {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },

    #[error("failed to encode PNG {path}: {message}")]
    Png { path: PathBuf, message: String },

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level error for a generation run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, Error>;
