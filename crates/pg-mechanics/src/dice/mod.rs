//! Dice types, formulas, and roll sources.
//!
//! Supports the standard polyhedral dice (d2 through d100) and custom
//! dice. Dice are stateless: every roll draws from a caller-provided
//! [`RollSource`].

pub mod formula;
pub mod roll;
pub mod source;

pub use formula::DiceFormula;
pub use roll::Roll;
pub use source::{FixedRolls, RollSource};

use crate::error::{DiceError, DiceResult};

/// Largest face count a die may have; rolls must fit an `i32`.
pub const MAX_FACES: u32 = i32::MAX as u32;

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Die {
    /// Two-sided die (a coin).
    D2,
    /// Three-sided die.
    D3,
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
    /// A die with a custom number of sides.
    Custom(u32),
}

impl Die {
    /// Build a die from a face count, mapping common sizes to named variants.
    pub fn with_faces(faces: u32) -> DiceResult<Self> {
        match faces {
            0 | 1 => Err(DiceError::TooFewFaces(faces)),
            n if n > MAX_FACES => Err(DiceError::TooManyFaces(n)),
            2 => Ok(Self::D2),
            3 => Ok(Self::D3),
            4 => Ok(Self::D4),
            6 => Ok(Self::D6),
            8 => Ok(Self::D8),
            10 => Ok(Self::D10),
            12 => Ok(Self::D12),
            20 => Ok(Self::D20),
            100 => Ok(Self::D100),
            n => Ok(Self::Custom(n)),
        }
    }

    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// Roll this die once.
    pub fn roll(self, source: &mut dyn RollSource) -> u32 {
        source.roll_die(self.sides())
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}
