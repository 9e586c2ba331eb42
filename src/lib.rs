//! # base12-walk
//!
//! A deterministic turtle-walk engine that turns base-12 digit streams into 3D polylines.
//!
//! Upstream encoders reduce DNA, audio, scores or mathematical sequences to digits `0..12`.
//! A [`Mapping`] relabels each digit onto one of twelve canonical commands (six unit moves,
//! six 15° turns about the turtle's local axes), and a [`TurtleWalk`] folds the stream into a
//! path that downstream writers serialize for display.
//!
//! Turns default to [`TurnFrame::Local`]. Walks produced by the earlier data scripts turned
//! about the fixed world axes; use [`TurnFrame::World`] in [`WalkConfig`] to reproduce them.

pub mod interpreter;
pub mod mapping;
pub mod planar;
pub mod record;
pub mod symbols;
pub mod turtle;

pub use interpreter::*;
pub use mapping::*;
pub use planar::*;
pub use record::*;
pub use symbols::*;
pub use turtle::*;
