//! Caller-side pipeline: fixed-stride subsampling and the finished walk record.

use crate::interpreter::{TurtleWalk, WalkConfig};
use crate::mapping::Mapping;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Default cap on the number of digits fed to a walk.
pub const DEFAULT_MAX_POINTS: usize = 5000;

/// Keeps every `stride`-th element of `seq`, starting with the first, where
/// `stride = max(1, len / max_points)`.
///
/// A `max_points` of zero is treated as one.
pub fn subsample<T: Copy>(seq: &[T], max_points: usize) -> Vec<T> {
    let stride = stride_for(seq.len(), max_points);
    seq.iter().step_by(stride).copied().collect()
}

/// The stride [`subsample`] uses for a sequence of length `len`.
pub fn stride_for(len: usize, max_points: usize) -> usize {
    (len / max_points.max(1)).max(1)
}

/// A finished walk, ready for downstream serialization.
///
/// This structure pairs the path with the full digit stream it was drawn
/// from, so a viewer can replay or annotate the walk.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WalkRecord {
    /// Path points, beginning with the origin.
    pub points: Vec<DVec3>,

    /// The complete digit stream, before subsampling.
    pub base12: Vec<u8>,

    /// Stride used to subsample `base12` before walking.
    pub stride: usize,
}

impl WalkRecord {
    /// Number of digits that actually drove the walk.
    pub fn steps(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Axis-aligned bounds of the path as `(min, max)`, or `None` when the
    /// record holds no points.
    pub fn bounds(&self) -> Option<(DVec3, DVec3)> {
        let (&first, rest) = self.points.split_first()?;
        Some(
            rest.iter()
                .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p))),
        )
    }
}

/// Subsamples `digits` to at most about `max_points` entries and walks them.
pub fn compute_walk(digits: &[u8], mapping: &Mapping, max_points: usize) -> WalkRecord {
    compute_walk_with(digits, mapping, max_points, WalkConfig::default())
}

/// Like [`compute_walk`], with an explicit walk configuration.
pub fn compute_walk_with(
    digits: &[u8],
    mapping: &Mapping,
    max_points: usize,
    config: WalkConfig,
) -> WalkRecord {
    let stride = stride_for(digits.len(), max_points);
    let sampled = subsample(digits, max_points);

    let mut turtle = TurtleWalk::with_config(config);
    turtle.run(sampled.iter().copied(), mapping);

    tracing::debug!(
        digits = digits.len(),
        stride,
        points = turtle.path().len(),
        "computed walk"
    );

    WalkRecord {
        points: turtle.into_path(),
        base12: digits.to_vec(),
        stride,
    }
}
