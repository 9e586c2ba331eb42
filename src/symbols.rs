//! Translates [`symbios`] L-System output into base-12 digit streams.
//!
//! Register symbol-to-operation mappings via [`SymbolDigits::set_op`] or
//! [`SymbolDigits::populate_standard_symbols`], then call
//! [`SymbolDigits::encode`] with a derived [`symbios::SymbiosState`] and feed
//! the digits to a [`TurtleWalk`](crate::TurtleWalk).

use symbios::{SymbiosState, SymbolTable};

/// Degrees covered by one turn digit.
const TURN_STEP_DEGREES: f64 = 15.0;

/// Turn digits in a full revolution.
const FULL_TURN_STEPS: f64 = 24.0;

/// Digit emitted for a forward move (`+X` under the identity mapping).
pub const FORWARD_DIGIT: u8 = 0;
/// Digit emitted per turn step for `+` (`+Z` turn under the identity mapping).
pub const TURN_LEFT_DIGIT: u8 = 10;
/// Digit emitted per turn step for `-` (`-Z` turn under the identity mapping).
pub const TURN_RIGHT_DIGIT: u8 = 11;

/// What a symbol contributes to the digit stream.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SymbolOp {
    /// Emit one forward digit.
    Forward,
    /// Emit turn digits for `+`. Optional parameter: angle in degrees;
    /// a negative angle turns the other way.
    TurnLeft,
    /// Emit turn digits for `-`. Optional parameter: angle in degrees;
    /// a negative angle turns the other way.
    TurnRight,
    /// Emit a fixed digit (reduced mod 12).
    Digit(u8),
    /// No-op: symbol has no registered meaning.
    Ignore,
}

/// Maps L-System symbols to base-12 digits.
#[derive(Clone, Debug)]
pub struct SymbolDigits {
    op_map: Vec<SymbolOp>,
    default_angle: f64,
}

impl Default for SymbolDigits {
    fn default() -> Self {
        Self::new(90.0)
    }
}

impl SymbolDigits {
    /// Creates an empty symbol map. `default_angle` (degrees) is used for
    /// turn symbols that carry no parameter.
    pub fn new(default_angle: f64) -> Self {
        Self {
            op_map: Vec::new(),
            default_angle,
        }
    }

    /// Assigns a [`SymbolOp`] to a symbol ID, growing the map as needed.
    pub fn set_op(&mut self, sym_id: u16, op: SymbolOp) {
        let idx = sym_id as usize;
        if idx >= self.op_map.len() {
            self.op_map.resize(idx + 1, SymbolOp::Ignore);
        }
        self.op_map[idx] = op;
    }

    /// Registers the curve-drawing conventions for the classic fractal
    /// grammars: `F G A B` move forward, `+` and `-` turn.
    ///
    /// Symbols absent from `interner` are skipped.
    pub fn populate_standard_symbols(&mut self, interner: &SymbolTable) {
        let mappings = [
            ("F", SymbolOp::Forward),
            ("G", SymbolOp::Forward),
            ("A", SymbolOp::Forward),
            ("B", SymbolOp::Forward),
            ("+", SymbolOp::TurnLeft),
            ("-", SymbolOp::TurnRight),
        ];

        for (sym, op) in mappings {
            if let Some(id) = interner.resolve_id(sym) {
                self.set_op(id, op);
            }
        }
    }

    /// Turn angle for a symbol parameter, falling back to the default angle
    /// when the parameter is missing, NaN or infinite.
    pub fn turn_angle(&self, param: Option<f64>) -> f64 {
        param
            .filter(|a| a.is_finite())
            .unwrap_or(self.default_angle)
    }

    /// Number of turn digits for a turn of `degrees`, ignoring its sign.
    ///
    /// Angles under one step still emit one digit. Whole revolutions are
    /// dropped, so the result is at most 23. Non-finite angles yield zero.
    pub fn turn_steps(degrees: f64) -> usize {
        if !degrees.is_finite() {
            return 0;
        }
        let steps = (degrees.abs() / TURN_STEP_DEGREES).floor();
        if steps < 1.0 {
            1
        } else {
            (steps % FULL_TURN_STEPS) as usize
        }
    }

    /// Appends the digits for a turn, flipping direction for negative angles.
    fn push_turn(digits: &mut Vec<u8>, left: bool, degrees: f64) {
        let digit = if left == (degrees >= 0.0) {
            TURN_LEFT_DIGIT
        } else {
            TURN_RIGHT_DIGIT
        };
        digits.extend(std::iter::repeat_n(digit, Self::turn_steps(degrees)));
    }

    /// Emits the digit stream for every symbol in `state`, in order.
    pub fn encode(&self, state: &SymbiosState) -> Vec<u8> {
        let mut digits = Vec::with_capacity(state.len());

        for i in 0..state.len() {
            let view = match state.get_view(i) {
                Some(v) => v,
                None => break,
            };

            let op = self
                .op_map
                .get(view.sym as usize)
                .unwrap_or(&SymbolOp::Ignore);
            let angle = self.turn_angle(view.params.first().map(|&x| f64::from(x)));

            match *op {
                SymbolOp::Forward => digits.push(FORWARD_DIGIT),
                SymbolOp::TurnLeft => Self::push_turn(&mut digits, true, angle),
                SymbolOp::TurnRight => Self::push_turn(&mut digits, false, angle),
                SymbolOp::Digit(d) => digits.push(d % 12),
                SymbolOp::Ignore => {}
            }
        }

        tracing::debug!(symbols = state.len(), digits = digits.len(), "encoded symbols");
        digits
    }
}
