//! Pieces ("cubes") and the placement table of the piece sheet.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Piece category. The four kinds form a cyclic dominance relation in the
/// game; only the glyph drawn on the face depends on it here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Rock,
    Paper,
    Scissors,
    Wise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceSpec {
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl PieceSpec {
    pub const fn new(kind: PieceKind, color: PieceColor) -> Self {
        Self { kind, color }
    }
}

/// Which piece sits at each (row, column) slot of the sheet.
///
/// Rows and columns are dense from zero; slots without a piece are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementTable {
    slots: BTreeMap<(usize, usize), Option<PieceSpec>>,
    row_count: usize,
    col_count: usize,
}

impl PlacementTable {
    /// Build from the occupied slots. Missing slots inside the bounding
    /// rows/columns become empty.
    pub fn new(
        pieces: impl IntoIterator<Item = ((usize, usize), PieceSpec)>,
    ) -> Result<Self, GeometryError> {
        let mut occupied = BTreeMap::new();
        for (slot, piece) in pieces {
            if occupied.insert(slot, piece).is_some() {
                return Err(GeometryError::InvalidPlacement(format!(
                    "slot ({}, {}) assigned twice",
                    slot.0, slot.1
                )));
            }
        }
        if occupied.is_empty() {
            return Err(GeometryError::InvalidPlacement("no pieces".into()));
        }

        let rows: Vec<usize> = dense_indices(occupied.keys().map(|(r, _)| *r));
        let cols: Vec<usize> = dense_indices(occupied.keys().map(|(_, c)| *c));
        check_dense("row", &rows)?;
        check_dense("column", &cols)?;

        let (row_count, col_count) = (rows.len(), cols.len());
        let mut slots = BTreeMap::new();
        for row in 0..row_count {
            for col in 0..col_count {
                slots.insert((row, col), occupied.get(&(row, col)).copied());
            }
        }

        Ok(Self { slots, row_count, col_count })
    }

    /// The two-player starting set: four rocks, papers and scissors plus two
    /// wise pieces per color, dark on the top three rows.
    pub fn standard() -> Self {
        use PieceColor::*;
        use PieceKind::*;

        let mut pieces = Vec::new();
        let rows = [
            (Rock, Black),
            (Paper, Black),
            (Scissors, Black),
            (Scissors, White),
            (Paper, White),
            (Rock, White),
        ];
        for (row, (kind, color)) in rows.into_iter().enumerate() {
            for col in 0..4 {
                pieces.push(((row, col), PieceSpec::new(kind, color)));
            }
        }
        for col in 4..6 {
            pieces.push(((0, col), PieceSpec::new(Wise, Black)));
            pieces.push(((5, col), PieceSpec::new(Wise, White)));
        }

        // Rows 0..6 and columns 0..6 are both dense by construction.
        Self::new(pieces).unwrap_or_else(|_| unreachable!("standard table is dense"))
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn col_count(&self) -> usize {
        self.col_count
    }

    pub fn get(&self, row: usize, col: usize) -> Option<PieceSpec> {
        self.slots.get(&(row, col)).copied().flatten()
    }

    /// Occupied slots in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = ((usize, usize), PieceSpec)> + '_ {
        self.slots
            .iter()
            .filter_map(|(slot, piece)| piece.map(|p| (*slot, p)))
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }
}

fn dense_indices(indices: impl Iterator<Item = usize>) -> Vec<usize> {
    let mut v: Vec<usize> = indices.collect();
    v.sort_unstable();
    v.dedup();
    v
}

fn check_dense(axis: &str, sorted: &[usize]) -> Result<(), GeometryError> {
    let dense = sorted.iter().enumerate().all(|(i, &value)| i == value);
    if dense {
        Ok(())
    } else {
        Err(GeometryError::InvalidPlacement(format!(
            "{axis} indices {sorted:?} are not dense from zero"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table() {
        let table = PlacementTable::standard();
        assert_eq!(table.row_count(), 6);
        assert_eq!(table.col_count(), 6);
        assert_eq!(table.piece_count(), 28);
        assert_eq!(
            table.get(0, 4),
            Some(PieceSpec::new(PieceKind::Wise, PieceColor::Black))
        );
        assert_eq!(table.get(2, 5), None);
        assert_eq!(
            table.get(3, 0),
            Some(PieceSpec::new(PieceKind::Scissors, PieceColor::White))
        );
    }

    #[test]
    fn sparse_indices_rejected() {
        let piece = PieceSpec::new(PieceKind::Rock, PieceColor::White);
        let err = PlacementTable::new([((0, 0), piece), ((2, 0), piece)]).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidPlacement(_)));
    }

    #[test]
    fn duplicate_slot_rejected() {
        let piece = PieceSpec::new(PieceKind::Rock, PieceColor::White);
        assert!(PlacementTable::new([((0, 0), piece), ((0, 0), piece)]).is_err());
    }

    #[test]
    fn opposite_color() {
        assert_eq!(PieceColor::White.opposite(), PieceColor::Black);
        assert_eq!(PieceColor::Black.opposite(), PieceColor::White);
    }
}
