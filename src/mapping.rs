//! Digit-to-command permutations.
//!
//! A [`Mapping`] relabels the twelve base-12 digits onto the twelve canonical
//! [`Command`]s. Construction validates the permutation, so every `&Mapping`
//! the walk receives is already a bijection.

use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Number of symbols in the digit alphabet and in the command vocabulary.
pub const BASE: usize = 12;

/// One of the six signed local axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl Direction {
    /// All axes in canonical command order.
    pub const ALL: [Direction; 6] = [
        Direction::PosX,
        Direction::NegX,
        Direction::PosY,
        Direction::NegY,
        Direction::PosZ,
        Direction::NegZ,
    ];

    /// Position of this axis within [`Direction::ALL`].
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Unit vector of this axis in the turtle's local frame.
    pub fn vector(self) -> DVec3 {
        match self {
            Direction::PosX => DVec3::X,
            Direction::NegX => DVec3::NEG_X,
            Direction::PosY => DVec3::Y,
            Direction::NegY => DVec3::NEG_Y,
            Direction::PosZ => DVec3::Z,
            Direction::NegZ => DVec3::NEG_Z,
        }
    }
}

/// A canonical walk command.
///
/// Indices `0..6` are translations along [`Direction::ALL`], indices `6..12`
/// are turns about the same axes in the same order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Move one unit along a local axis.
    Translate(Direction),
    /// Turn by the configured angle about a signed local axis.
    Rotate(Direction),
}

impl Command {
    /// Decodes a canonical command index. Values are reduced mod 12.
    pub fn from_index(index: u8) -> Self {
        let index = index as usize % BASE;
        if index < 6 {
            Command::Translate(Direction::ALL[index])
        } else {
            Command::Rotate(Direction::ALL[index - 6])
        }
    }

    /// The canonical index `0..12` of this command.
    pub fn index(self) -> u8 {
        match self {
            Command::Translate(d) => d.index(),
            Command::Rotate(d) => 6 + d.index(),
        }
    }

    pub fn is_rotation(self) -> bool {
        matches!(self, Command::Rotate(_))
    }
}

/// Errors raised when a candidate permutation is not a bijection on `0..12`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("mapping must have exactly 12 entries, got {0}")]
    WrongLength(usize),
    #[error("mapping value {value} at slot {slot} is outside 0..12")]
    OutOfRange { slot: usize, value: u8 },
    #[error("mapping value {value} appears more than once")]
    Duplicate { value: u8 },
}

/// A validated permutation of the digits `0..12` onto canonical command indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Mapping([u8; BASE]);

impl Mapping {
    /// `[0, 1, .., 11]`: every digit is its own command.
    pub const IDENTITY: Mapping = Mapping([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);

    /// Translations first, with the `+Y` and `+Z` turn slots swapped.
    pub const OPTIMAL: Mapping = Mapping([0, 1, 2, 3, 4, 5, 6, 7, 10, 9, 8, 11]);

    /// Even commands on the low digits, odd commands on the high digits.
    pub const SPIRAL: Mapping = Mapping([0, 2, 4, 6, 8, 10, 1, 3, 5, 7, 9, 11]);

    /// Permutation tuned for price-delta streams.
    pub const STOCK_OPT: Mapping = Mapping([1, 0, 2, 4, 10, 5, 6, 9, 8, 7, 3, 11]);

    /// Names accepted by [`Mapping::named`], paired with their permutations.
    pub const BUILTIN: [(&'static str, Mapping); 4] = [
        ("Identity", Mapping::IDENTITY),
        ("Optimal", Mapping::OPTIMAL),
        ("Spiral", Mapping::SPIRAL),
        ("Stock-opt", Mapping::STOCK_OPT),
    ];

    /// Validates `table` as a bijection on `0..12`.
    pub fn new(table: [u8; BASE]) -> Result<Self, MappingError> {
        let mut seen = [false; BASE];
        for (slot, &value) in table.iter().enumerate() {
            let idx = value as usize;
            if idx >= BASE {
                return Err(MappingError::OutOfRange { slot, value });
            }
            if seen[idx] {
                return Err(MappingError::Duplicate { value });
            }
            seen[idx] = true;
        }
        Ok(Self(table))
    }

    /// Looks up one of the [built-in](Mapping::BUILTIN) permutations by name.
    pub fn named(name: &str) -> Option<Self> {
        Self::BUILTIN
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, m)| m)
    }

    /// Command index for `digit`, which is first reduced mod 12 (negatives wrap).
    pub fn command_index(&self, digit: i64) -> u8 {
        self.0[digit.rem_euclid(BASE as i64) as usize]
    }

    /// Decoded command for `digit`.
    pub fn command(&self, digit: i64) -> Command {
        Command::from_index(self.command_index(digit))
    }

    pub fn as_array(&self) -> &[u8; BASE] {
        &self.0
    }
}

impl Default for Mapping {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TryFrom<&[u8]> for Mapping {
    type Error = MappingError;

    fn try_from(values: &[u8]) -> Result<Self, Self::Error> {
        let table: [u8; BASE] = values
            .try_into()
            .map_err(|_| MappingError::WrongLength(values.len()))?;
        Self::new(table)
    }
}

impl TryFrom<Vec<u8>> for Mapping {
    type Error = MappingError;

    fn try_from(values: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(values.as_slice())
    }
}

impl From<Mapping> for Vec<u8> {
    fn from(mapping: Mapping) -> Self {
        mapping.0.to_vec()
    }
}

/// A registry of named mappings, typically loaded from a sources manifest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MappingSet {
    mappings: HashMap<String, Mapping>,
}

impl Default for MappingSet {
    /// Contains the four built-in permutations.
    fn default() -> Self {
        Self {
            mappings: Mapping::BUILTIN
                .iter()
                .map(|&(name, m)| (name.to_string(), m))
                .collect(),
        }
    }
}

impl MappingSet {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            mappings: HashMap::new(),
        }
    }

    /// Adds or replaces a named mapping.
    pub fn insert(&mut self, name: impl Into<String>, mapping: Mapping) {
        self.mappings.insert(name.into(), mapping);
    }

    pub fn get(&self, name: &str) -> Option<&Mapping> {
        self.mappings.get(name)
    }

    /// Returns the named mapping, or [`Mapping::IDENTITY`] when the name is unknown.
    pub fn resolve(&self, name: &str) -> Mapping {
        match self.mappings.get(name) {
            Some(m) => *m,
            None => {
                tracing::warn!(mapping = name, "unknown mapping, falling back to Identity");
                Mapping::IDENTITY
            }
        }
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}
