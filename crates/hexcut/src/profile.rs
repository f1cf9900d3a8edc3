//! Physical profiles of the board and the piece sheet.
//!
//! A profile takes a handful of designer lengths in centimeters, derives
//! the rest, and converts everything to device units through its own
//! [`ScalingModel`]. Profiles are plain values: building another one never
//! touches an existing one.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GeometryError;
use crate::geometry::{UNIT_X, UNIT_Y, Vector2};
use crate::piece::PlacementTable;
use crate::scale::{DEVICE_WIDTH, ScalingModel, check_positive};
use crate::shape::Color;

/// Stroke width of every cut path, in device units.
pub const CUT_LINE_WIDTH: f64 = 2.0;

/// Physical line width of engraved outlines.
const LINE_WIDTH_CM: f64 = 0.1 / 4.0;
/// Margin left around any cut so the kerf does not eat the part.
const CUT_MARGIN_CM: f64 = 0.1 / 10.0;

/// Overall size of the printed set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeProfile {
    #[default]
    Standard,
    Tiny,
    Large,
}

impl SizeProfile {
    /// Side of one cube, before the scale factor.
    pub fn cube_side_cm(self) -> f64 {
        match self {
            SizeProfile::Standard => 1.6,
            SizeProfile::Tiny => 1.2,
            SizeProfile::Large => 2.0,
        }
    }
}

// ============================================================================
// PIECE SHEET
// ============================================================================

/// Geometry of the support sheet holding every cube of a placement table.
#[derive(Debug, Clone, PartialEq)]
pub struct PieceSheetProfile {
    pub scaling: ScalingModel,

    pub cube_side_cm: f64,
    pub support_width_cm: f64,
    pub support_height_cm: f64,

    pub support_width: f64,
    pub support_height: f64,
    pub support_cut_margin: f64,
    pub support_color: Color,

    pub cube_side: f64,
    pub cube_cut_margin: f64,
    pub cube_shift: f64,
    pub cube_line_width: f64,

    pub decoration_line_width: f64,
    pub decoration_side: f64,

    pub row_count: usize,
    pub col_count: usize,
}

impl PieceSheetProfile {
    /// Derive the sheet for a given cube side.
    pub fn new(cube_side_cm: f64, table: &PlacementTable) -> Result<Self, GeometryError> {
        let row_count = table.row_count();
        let col_count = table.col_count();

        let cube_shift_cm = cube_side_cm;
        let pitch_cm = cube_shift_cm + CUT_MARGIN_CM + cube_side_cm;
        let support_width_cm =
            CUT_MARGIN_CM + col_count as f64 * pitch_cm + cube_shift_cm + CUT_MARGIN_CM;
        let support_height_cm =
            CUT_MARGIN_CM + row_count as f64 * pitch_cm + cube_shift_cm + CUT_MARGIN_CM;

        let scaling = ScalingModel::builder("piece-sheet", DEVICE_WIDTH)
            .total_width(support_width_cm)
            .extent("support_height", support_height_cm)
            .extent("support_cut_margin", CUT_MARGIN_CM)
            .extent("cube_side", cube_side_cm)
            .extent("cube_cut_margin", CUT_MARGIN_CM)
            .extent("cube_shift", cube_shift_cm)
            .stroke("cube_line_width", LINE_WIDTH_CM)
            .stroke("decoration_line_width", 0.15)
            .extent("decoration_side", 0.5 * cube_side_cm)
            .build()?;

        debug!(
            cube_side_cm,
            support_width_cm, support_height_cm, row_count, col_count, "piece sheet profile"
        );

        Ok(Self {
            cube_side_cm,
            support_width_cm,
            support_height_cm,
            support_width: scaling.device_width(),
            support_height: scaling.device("support_height")?,
            support_cut_margin: scaling.device("support_cut_margin")?,
            support_color: Color::WOOD,
            cube_side: scaling.device("cube_side")?,
            cube_cut_margin: scaling.device("cube_cut_margin")?,
            cube_shift: scaling.device("cube_shift")?,
            cube_line_width: scaling.device("cube_line_width")?,
            decoration_line_width: scaling.device("decoration_line_width")?,
            decoration_side: scaling.device("decoration_side")?,
            row_count,
            col_count,
            scaling,
        })
    }

    /// Top-left corner of the cube at (row, col).
    pub fn cube_origin(&self, row: usize, col: usize) -> Vector2 {
        let pitch = self.cube_cut_margin + self.cube_side + self.cube_shift;
        Vector2::new(
            self.cube_shift + col as f64 * pitch,
            self.cube_shift + row as f64 * pitch,
        )
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// Hexagons that fit across and down the board envelope.
const MAX_HORIZONTAL_HEXAGONS: usize = 7;
const MAX_VERTICAL_HEXAGONS: usize = 7;

/// Geometry of the hexagonal board.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardProfile {
    pub scaling: ScalingModel,

    pub board_width_cm: f64,
    pub board_height_cm: f64,

    pub board_width: f64,
    pub board_height: f64,
    pub board_cut_margin: f64,
    pub board_color: Color,

    pub hexagon: HexGeometry,
    pub hexagon_height: f64,
    pub hexagon_padding: f64,
    pub hexagon_line_width: f64,
    pub hexagon_line_color: Color,
    pub hexagon_opacity: f64,

    pub label_color: Color,
    pub label_font_family: &'static str,
    pub label_font_size: u32,
    pub label_vertical_shift: Vector2,
    pub label_horizontal_shift: Vector2,
}

/// The part of the board profile the grid needs: hexagon size and the
/// oblique u-v frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexGeometry {
    /// Distance between the centers of two neighbours.
    pub width: f64,
    /// Circumradius, equal to the side length.
    pub side: f64,
    pub origin: Vector2,
    pub unit_u: Vector2,
    pub unit_v: Vector2,
}

impl HexGeometry {
    pub const VERTEX_COUNT: usize = 6;
    pub const SIDE_ANGLE: f64 = TAU / 6.0;

    /// Frame for hexagons of the given width, flat sides left and right.
    pub fn new(width: f64, origin: Vector2) -> Result<Self, GeometryError> {
        check_positive("hexagon_width", width)?;
        let unit_u = UNIT_X;
        let unit_v = Self::SIDE_ANGLE.cos() * UNIT_X + Self::SIDE_ANGLE.sin() * UNIT_Y;
        Ok(Self { width, side: width / 3f64.sqrt(), origin, unit_u, unit_v })
    }

    /// Rejects frames whose public fields were set to unusable lengths.
    pub fn validate(&self) -> Result<(), GeometryError> {
        check_positive("hexagon_width", self.width)?;
        check_positive("hexagon_side", self.side)
    }

    /// Center of the cell at axial (u, v).
    #[inline]
    pub fn project(&self, u: i32, v: i32) -> Vector2 {
        self.origin + self.width * (u as f64 * self.unit_u + v as f64 * self.unit_v)
    }
}

impl BoardProfile {
    pub fn new(cube_side_cm: f64) -> Result<Self, GeometryError> {
        // A cube spans half a hexagon so two stacked cubes stay inside it.
        let hexagon_width_cm = 2.0 * cube_side_cm;
        let hexagon_side_cm = hexagon_width_cm / 3f64.sqrt();
        let hexagon_height_cm = 2.0 * hexagon_side_cm;
        let hexagon_padding_cm = 0.3 * cube_side_cm / SizeProfile::Standard.cube_side_cm();

        let side_margin_cm = hexagon_width_cm / 2.0;
        let top_margin_cm = hexagon_side_cm;

        let half_rows = MAX_VERTICAL_HEXAGONS / 2;
        let board_width_cm = 2.0 * CUT_MARGIN_CM
            + 2.0 * side_margin_cm
            + MAX_HORIZONTAL_HEXAGONS as f64 * hexagon_width_cm;
        let board_height_cm = 2.0 * CUT_MARGIN_CM
            + 2.0 * top_margin_cm
            + half_rows as f64 * hexagon_side_cm
            + (MAX_VERTICAL_HEXAGONS - half_rows) as f64 * hexagon_height_cm;

        let scaling = ScalingModel::builder("board", DEVICE_WIDTH)
            .total_width(board_width_cm)
            .extent("board_height", board_height_cm)
            .extent("board_cut_margin", CUT_MARGIN_CM)
            .extent("hexagon_width", hexagon_width_cm)
            .extent("hexagon_height", hexagon_height_cm)
            .extent("hexagon_padding", hexagon_padding_cm)
            .stroke("hexagon_line_width", LINE_WIDTH_CM)
            .build()?;

        debug!(
            board_width_cm,
            board_height_cm, hexagon_width_cm, hexagon_side_cm, "board profile"
        );

        let hexagon = HexGeometry::new(scaling.device("hexagon_width")?, Vector2::ZERO)?;

        Ok(Self {
            board_width_cm,
            board_height_cm,
            board_width: scaling.device_width(),
            board_height: scaling.device("board_height")?,
            board_cut_margin: scaling.device("board_cut_margin")?,
            board_color: Color::WOOD,
            hexagon_height: scaling.device("hexagon_height")?,
            hexagon_padding: scaling.device("hexagon_padding")?,
            hexagon_line_width: scaling.device("hexagon_line_width")?,
            hexagon_line_color: Color::ENGRAVE,
            hexagon_opacity: 0.45,
            label_color: Color::ENGRAVE,
            label_font_family: "Helvetica",
            label_font_size: (hexagon.width * 0.20) as u32,
            label_vertical_shift: -0.60 * hexagon.side * UNIT_Y,
            label_horizontal_shift: 1.20 * hexagon.side * UNIT_X,
            hexagon,
            scaling,
        })
    }

    /// Inset applied to every cell outline so neighbours do not touch.
    pub fn hexagon_inset(&self) -> f64 {
        1.0 - self.hexagon_padding / self.hexagon.width
    }
}
