//! Hexagonal grid model.
//!
//! Cells are addressed by a two-character name (`a1`..`g6`) and by axial
//! coordinates (u, v) in the oblique frame of [`HexGeometry`]. A [`Grid`] is
//! built once from a [`GridLayout`] and never changes afterwards; a board
//! of another size is simply another `Grid` value.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::GeometryError;
use crate::geometry::{UNIT_X, UNIT_Y, Vector2};
use crate::profile::HexGeometry;
use crate::scale::check_positive;

/// Axial steps to the six neighbours, index-matched.
pub const DELTA_U: [i32; 6] = [1, 1, 0, -1, -1, 0];
pub const DELTA_V: [i32; 6] = [0, -1, -1, 0, 1, 1];

/// Board edge a cell sits on, used to place sparse labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    West,
    East,
}

/// One row of the layout table: a cell name, its axial pair, its ring and
/// its edge side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEntry {
    pub name: String,
    pub u: i32,
    pub v: i32,
    pub ring: u8,
    pub side: Option<Side>,
}

impl CellEntry {
    pub fn new(name: &str, (u, v): (i32, i32), ring: u8, side: Option<Side>) -> Self {
        Self { name: name.to_string(), u, v, ring, side }
    }
}

/// Which cells a grid instantiates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    entries: Vec<CellEntry>,
}

// (name, u, v, ring); the first and last cell of every row are edge cells.
const STANDARD_ROWS: [&[(&str, i32, i32, u8)]; 7] = [
    &[("a1", -1, -3, 0), ("a2", 0, -3, 0), ("a3", 1, -3, 0), ("a4", 2, -3, 0), ("a5", 3, -3, 0), ("a6", 4, -3, 0)],
    &[("b1", -2, -2, 0), ("b2", -1, -2, 1), ("b3", 0, -2, 1), ("b4", 1, -2, 1), ("b5", 2, -2, 1), ("b6", 3, -2, 1), ("b7", 4, -2, 0)],
    &[("c1", -2, -1, 0), ("c2", -1, -1, 1), ("c3", 0, -1, 2), ("c4", 1, -1, 2), ("c5", 2, -1, 1), ("c6", 3, -1, 0)],
    &[("d1", -3, 0, 0), ("d2", -2, 0, 1), ("d3", -1, 0, 2), ("d4", 0, 0, 3), ("d5", 1, 0, 2), ("d6", 2, 0, 1), ("d7", 3, 0, 0)],
    &[("e1", -3, 1, 0), ("e2", -2, 1, 1), ("e3", -1, 1, 2), ("e4", 0, 1, 2), ("e5", 1, 1, 1), ("e6", 2, 1, 0)],
    &[("f1", -4, 2, 0), ("f2", -3, 2, 1), ("f3", -2, 2, 1), ("f4", -1, 2, 1), ("f5", 0, 2, 1), ("f6", 1, 2, 1), ("f7", 2, 2, 0)],
    &[("g1", -4, 3, 0), ("g2", -3, 3, 0), ("g3", -2, 3, 0), ("g4", -1, 3, 0), ("g5", 0, 3, 0), ("g6", 1, 3, 0)],
];

impl GridLayout {
    pub fn new(entries: Vec<CellEntry>) -> Self {
        Self { entries }
    }

    /// The 45-cell board: rows a..g of 6, 7, 6, 7, 6, 7, 6 cells.
    pub fn standard() -> Self {
        let mut entries = Vec::with_capacity(45);
        for row in STANDARD_ROWS {
            let last = row.len() - 1;
            for (i, &(name, u, v, ring)) in row.iter().enumerate() {
                let side = match i {
                    0 => Some(Side::West),
                    i if i == last => Some(Side::East),
                    _ => None,
                };
                entries.push(CellEntry::new(name, (u, v), ring, side));
            }
        }
        Self { entries }
    }

    /// Keep only the named cells of this layout. Geometry is unchanged.
    pub fn subset(&self, names: &[&str]) -> Result<Self, GeometryError> {
        let known: HashSet<&str> = self.entries.iter().map(|e| e.name.as_str()).collect();
        if let Some(missing) = names.iter().find(|n| !known.contains(**n)) {
            return Err(GeometryError::UnknownCell(missing.to_string()));
        }
        let wanted: HashSet<&str> = names.iter().copied().collect();
        Ok(Self {
            entries: self
                .entries
                .iter()
                .filter(|e| wanted.contains(e.name.as_str()))
                .cloned()
                .collect(),
        })
    }

    pub fn entries(&self) -> &[CellEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A cell of a built grid.
#[derive(Debug, Clone, PartialEq)]
pub struct HexCell {
    pub name: String,
    pub u: i32,
    pub v: i32,
    pub ring: u8,
    pub side: Option<Side>,
    /// Position in the name-sorted sequence.
    pub index: usize,
    pub center: Vector2,
}

impl HexCell {
    /// Row letter, `a` at the bottom of the board.
    pub fn row(&self) -> char {
        self.name.as_bytes()[0] as char
    }

    pub fn column(&self) -> u8 {
        self.name.as_bytes()[1] - b'0'
    }
}

/// The frozen cell set of one board configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    geometry: HexGeometry,
    cells: Vec<HexCell>,
    by_name: HashMap<String, usize>,
    by_axial: HashMap<(i32, i32), usize>,
}

impl Grid {
    /// Instantiate every cell of `layout` with centers in `geometry`.
    pub fn build(layout: &GridLayout, geometry: HexGeometry) -> Result<Self, GeometryError> {
        geometry.validate()?;
        let mut sorted: BTreeMap<&str, &CellEntry> = BTreeMap::new();
        let mut axials = HashSet::new();

        for entry in layout.entries() {
            validate_name(&entry.name)?;
            if sorted.insert(entry.name.as_str(), entry).is_some() {
                return Err(GeometryError::DuplicateCellName(entry.name.clone()));
            }
            if !axials.insert((entry.u, entry.v)) {
                return Err(GeometryError::DuplicateAxial {
                    name: entry.name.clone(),
                    u: entry.u,
                    v: entry.v,
                });
            }
        }

        let cells: Vec<HexCell> = sorted
            .into_values()
            .enumerate()
            .map(|(index, e)| HexCell {
                name: e.name.clone(),
                u: e.u,
                v: e.v,
                ring: e.ring,
                side: e.side,
                index,
                center: geometry.project(e.u, e.v),
            })
            .collect();

        let by_name = cells.iter().map(|c| (c.name.clone(), c.index)).collect();
        let by_axial = cells.iter().map(|c| ((c.u, c.v), c.index)).collect();

        Ok(Self { geometry, cells, by_name, by_axial })
    }

    pub fn geometry(&self) -> &HexGeometry {
        &self.geometry
    }

    /// All cells, sorted by name; `cells()[i].index == i`.
    pub fn cells(&self) -> &[HexCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, name: &str) -> Option<&HexCell> {
        self.by_name.get(name).map(|&i| &self.cells[i])
    }

    pub fn cell_at(&self, u: i32, v: i32) -> Option<&HexCell> {
        self.by_axial.get(&(u, v)).map(|&i| &self.cells[i])
    }

    /// Existing neighbours of a cell, in [`DELTA_U`] order.
    pub fn neighbors(&self, cell: &HexCell) -> Vec<&HexCell> {
        DELTA_U
            .iter()
            .zip(DELTA_V.iter())
            .filter_map(|(du, dv)| self.cell_at(cell.u + du, cell.v + dv))
            .collect()
    }

    /// Display rows from the top of the board (`g`) to the bottom (`a`).
    pub fn rows(&self) -> Vec<Vec<&HexCell>> {
        let mut rows: BTreeMap<char, Vec<&HexCell>> = BTreeMap::new();
        for cell in &self.cells {
            rows.entry(cell.row()).or_default().push(cell);
        }
        rows.into_values().rev().collect()
    }

    /// Outline of a cell, inset by `inset` in (0, 1].
    pub fn vertices(&self, cell: &HexCell, inset: f64) -> Result<[Vector2; 6], GeometryError> {
        hexagon_vertices(cell.center, self.geometry.side, inset)
    }
}

/// Steps between two cells under hex adjacency.
pub fn distance(a: &HexCell, b: &HexCell) -> i32 {
    let du = a.u - b.u;
    let dv = a.v - b.v;
    (du.abs() + dv.abs() + (du + dv).abs()) / 2
}

/// The six vertices of a regular hexagon with flat left and right sides.
///
/// Vertex `i` sits at angle `(i + 1/2) * 2PI/6`; there is no closing
/// duplicate.
pub fn hexagon_vertices(center: Vector2, side: f64, inset: f64) -> Result<[Vector2; 6], GeometryError> {
    check_positive("hexagon_side", side)?;
    if !(inset > 0.0 && inset <= 1.0) {
        return Err(GeometryError::InvalidInset(inset));
    }
    let radius = inset * side;
    Ok(std::array::from_fn(|i| {
        let angle = (i as f64 + 0.5) * HexGeometry::SIDE_ANGLE;
        center + radius * angle.cos() * UNIT_X + radius * angle.sin() * UNIT_Y
    }))
}

fn validate_name(name: &str) -> Result<(), GeometryError> {
    let bytes = name.as_bytes();
    let ok = bytes.len() == 2 && bytes[0].is_ascii_lowercase() && bytes[1].is_ascii_digit();
    if ok {
        Ok(())
    } else {
        Err(GeometryError::MalformedCellName(name.to_string()))
    }
}
