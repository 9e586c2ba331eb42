//! Turtle state and the single-digit fold step.

use crate::interpreter::WalkConfig;
use crate::mapping::{Command, Direction, Mapping};
use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Frame in which turn axes are interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnFrame {
    /// Turn about the turtle's own axis: the local axis is carried into world
    /// space by the current orientation, and the world-space turn about that
    /// image is left-multiplied onto the orientation.
    #[default]
    Local,
    /// Turn about the fixed world axis, left-multiplied onto the orientation.
    /// Matches walks produced by the legacy data scripts.
    World,
}

/// The state of the walking turtle.
///
/// Tracks the world-space position and the orientation of the local frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WalkTurtleState {
    /// Current world-space position of the "cursor".
    pub position: DVec3,

    /// Current orientation of the local frame relative to the world frame.
    pub rotation: DQuat,
}

impl Default for WalkTurtleState {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
        }
    }
}

impl WalkTurtleState {
    /// Returns the turtle's local right direction (X-axis) in world space.
    pub fn right(&self) -> DVec3 {
        self.rotation * DVec3::X
    }

    /// Returns the turtle's local up direction (Y-axis) in world space.
    pub fn up(&self) -> DVec3 {
        self.rotation * DVec3::Y
    }

    /// Returns the turtle's local forward direction (Z-axis) in world space.
    pub fn forward(&self) -> DVec3 {
        self.rotation * DVec3::Z
    }

    /// Moves one unit along `dir`, measured in the local frame.
    pub fn translate_local(&mut self, dir: Direction) {
        self.position += self.rotation * dir.vector();
    }

    /// Turns by `angle` radians about the signed axis `dir`.
    pub fn rotate(&mut self, dir: Direction, angle: f64, frame: TurnFrame) {
        let axis = match frame {
            TurnFrame::Local => (self.rotation * dir.vector()).normalize(),
            TurnFrame::World => dir.vector(),
        };
        let rot = DQuat::from_axis_angle(axis, angle);
        // Renormalise so drift never leaves the rotation group.
        self.rotation = (rot * self.rotation).normalize();
    }

    /// Applies the command selected by `digit` and returns the new state.
    pub fn advance(mut self, digit: i64, mapping: &Mapping, config: &WalkConfig) -> Self {
        match mapping.command(digit) {
            Command::Translate(dir) => self.translate_local(dir),
            Command::Rotate(dir) => {
                self.rotate(dir, config.turn_degrees.to_radians(), config.frame);
                tracing::trace!(axis = ?dir, rotation = ?self.rotation, "turn");
            }
        }
        self
    }
}
