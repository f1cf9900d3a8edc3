//! Polygon outlines: cell hexagons, concentric rings and the rosette.

use std::f64::consts::TAU;

use crate::error::GeometryError;
use crate::geometry::{Vector2, regular_polygon};
use crate::grid::hexagon_vertices;

/// Sides of the rosette's carrier polygon.
pub const ROSETTE_SIDES: usize = 12;
/// Carrier polygon radius as a fraction of the hexagon side.
pub const ROSETTE_SCALE: f64 = 0.70;

/// Closed outline of a hexagon inset by `inset` in (0, 1].
pub fn hexagon_outline(center: Vector2, side: f64, inset: f64) -> Result<Vec<Vector2>, GeometryError> {
    Ok(hexagon_vertices(center, side, inset)?.to_vec())
}

/// Inset scales of `count + 1` nested rings, outermost first.
///
/// Ring `i` uses `s = i / count` and `s² · min + (1 − s²) · max`, so the
/// rings crowd toward the outside.
pub fn concentric_scales(count: usize, min: f64, max: f64) -> Result<Vec<f64>, GeometryError> {
    if count == 0 {
        return Err(GeometryError::InvalidDecorator("ring count must be at least 1".into()));
    }
    if !(min > 0.0 && min <= max && max <= 1.0) {
        return Err(GeometryError::InvalidDecorator(format!(
            "ring scales need 0 < min <= max <= 1, got min={min} max={max}"
        )));
    }
    Ok((0..=count)
        .map(|i| {
            let s = i as f64 / count as f64;
            let s2 = s * s;
            s2 * min + (1.0 - s2) * max
        })
        .collect())
}

/// `count + 1` nested hexagon outlines around `center`, outermost first.
pub fn concentric_rings(
    center: Vector2,
    side: f64,
    count: usize,
    min: f64,
    max: f64,
) -> Result<Vec<Vec<Vector2>>, GeometryError> {
    concentric_scales(count, min, max)?
        .into_iter()
        .map(|scale| hexagon_outline(center, side, scale))
        .collect()
}

/// The twelve-sided rosette.
///
/// Returns the carrier 12-gon first, then one hexagon per carrier edge. Each
/// hexagon starts on the edge and turns clockwise by a sixth of a turn at
/// every vertex.
pub fn rosette(center: Vector2, side: f64) -> Vec<Vec<Vector2>> {
    let carrier = regular_polygon(center, ROSETTE_SCALE * side, ROSETTE_SIDES, 0.0);

    let mut polygons = Vec::with_capacity(ROSETTE_SIDES + 1);
    for (i, &start) in carrier.iter().enumerate() {
        let end = carrier[(i + 1) % ROSETTE_SIDES];
        polygons.push(edge_hexagon(start, end));
    }
    polygons.insert(0, carrier);
    polygons
}

fn edge_hexagon(start: Vector2, end: Vector2) -> Vec<Vector2> {
    let mut step = end - start;
    let mut vertex = start;
    let mut hexagon = Vec::with_capacity(6);
    for _ in 0..6 {
        hexagon.push(vertex);
        vertex = vertex + step;
        step = step.rotate(-TAU / 6.0);
    }
    hexagon
}
