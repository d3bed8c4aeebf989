//! Dice mechanics for the Perilous generator.
//!
//! Provides polyhedral dice, additive dice formulas (`2d6+3`), the
//! `Roll` value used wherever a number may be fixed or rolled, and the
//! `RollSource` abstraction that lets callers inject randomness.

pub mod dice;
pub mod error;

pub use dice::{DiceFormula, Die, FixedRolls, Roll, RollSource};
pub use error::{DiceError, DiceResult};
