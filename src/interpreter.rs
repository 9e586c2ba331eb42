//! The turtle-walk engine that folds a base-12 digit stream into a 3D path.
//!
//! The entry point is [`TurtleWalk`]. Create one per walk, feed it digits via
//! [`TurtleWalk::step`] or [`TurtleWalk::run`] together with a [`Mapping`],
//! then take the path with [`TurtleWalk::into_path`]. The walk is a pure
//! function of its inputs: two fresh walks over the same digits and mapping
//! produce identical paths.

use crate::mapping::{BASE, Mapping};
use crate::turtle::{TurnFrame, WalkTurtleState};
use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Configuration for walk interpretation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Angle (in degrees) of a single turn command. Default: 15.
    pub turn_degrees: f64,
    /// Frame in which turn axes are interpreted.
    pub frame: TurnFrame,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            turn_degrees: 15.0,
            frame: TurnFrame::Local,
        }
    }
}

/// A single walk over a digit stream.
///
/// The path always starts with the origin and gains exactly one point per
/// consumed digit. Turn commands record the unchanged position, so they
/// produce a repeated point.
#[derive(Clone, Debug)]
pub struct TurtleWalk {
    config: WalkConfig,
    turtle: WalkTurtleState,
    path: Vec<DVec3>,
    consumed: Vec<u8>,
}

impl Default for TurtleWalk {
    fn default() -> Self {
        Self::new()
    }
}

impl TurtleWalk {
    /// Creates a walk at the origin with identity orientation.
    pub fn new() -> Self {
        Self::with_config(WalkConfig::default())
    }

    pub fn with_config(config: WalkConfig) -> Self {
        let turtle = WalkTurtleState::default();
        Self {
            config,
            turtle,
            path: vec![turtle.position],
            consumed: Vec::new(),
        }
    }

    /// Consumes one digit. Any integer is accepted; it is reduced mod 12.
    pub fn step(&mut self, digit: i64, mapping: &Mapping) {
        self.turtle = self.turtle.advance(digit, mapping, &self.config);
        self.path.push(self.turtle.position);
        self.consumed.push(digit.rem_euclid(BASE as i64) as u8);
    }

    /// Consumes every digit in order and returns the accumulated path.
    pub fn run<I>(&mut self, digits: I, mapping: &Mapping) -> &[DVec3]
    where
        I: IntoIterator,
        I::Item: Into<i64>,
    {
        let iter = digits.into_iter();
        let (lower, _) = iter.size_hint();
        self.path.reserve(lower);
        self.consumed.reserve(lower);

        for digit in iter {
            self.step(digit.into(), mapping);
        }

        tracing::debug!(
            steps = self.consumed.len(),
            end = ?self.turtle.position,
            "walk finished"
        );
        &self.path
    }

    /// Points visited so far, starting with the origin.
    pub fn path(&self) -> &[DVec3] {
        &self.path
    }

    pub fn into_path(self) -> Vec<DVec3> {
        self.path
    }

    /// Digits consumed so far, reduced to `0..12`.
    pub fn consumed(&self) -> &[u8] {
        &self.consumed
    }

    pub fn position(&self) -> DVec3 {
        self.turtle.position
    }

    pub fn rotation(&self) -> DQuat {
        self.turtle.rotation
    }

    pub fn state(&self) -> &WalkTurtleState {
        &self.turtle
    }

    pub fn config(&self) -> &WalkConfig {
        &self.config
    }
}

/// Walks `digits` from a fresh turtle with the default configuration.
pub fn walk<I>(digits: I, mapping: &Mapping) -> Vec<DVec3>
where
    I: IntoIterator,
    I::Item: Into<i64>,
{
    let mut turtle = TurtleWalk::new();
    turtle.run(digits, mapping);
    turtle.into_path()
}
