//! Base-4 grid walk with stacking on revisits.

use glam::{DVec3, IVec2};
use std::collections::HashMap;

/// Grid steps for digits `0..4`: `+X`, `-X`, `+Y`, `-Y`.
const STEPS: [IVec2; 4] = [IVec2::X, IVec2::NEG_X, IVec2::Y, IVec2::NEG_Y];

/// Walks a base-4 stream on the integer XY grid.
///
/// Each digit (reduced mod 4) moves one cell. The z coordinate of a point is
/// the number of earlier visits to the same cell, so loops stack upward.
/// Returns one point per digit, or just the origin for an empty stream.
pub fn walk_base4(digits: &[u8]) -> Vec<DVec3> {
    if digits.is_empty() {
        return vec![DVec3::ZERO];
    }

    let mut cell = IVec2::ZERO;
    let mut visits: HashMap<IVec2, u32> = HashMap::new();
    let mut path = Vec::with_capacity(digits.len());

    for &digit in digits {
        cell += STEPS[(digit % 4) as usize];
        let count = visits.entry(cell).or_insert(0);
        *count += 1;
        path.push(DVec3::new(cell.x as f64, cell.y as f64, (*count - 1) as f64));
    }

    path
}
