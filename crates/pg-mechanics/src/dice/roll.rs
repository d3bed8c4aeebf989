//! Numbers that are either fixed or rolled.

use serde::{Deserialize, Serialize};

use super::{DiceFormula, Die, RollSource};

/// A value that is either used as-is or produced by rolling a formula.
///
/// Used for repeat counts ("roll this table 1d4 times") and for roll
/// overrides on table references.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Roll {
    /// A constant.
    Fixed(i32),
    /// A formula rolled each time the value is needed.
    Dice(DiceFormula),
}

impl Roll {
    /// Produce a concrete value, rolling if needed.
    pub fn resolve(&self, source: &mut dyn RollSource) -> i32 {
        match self {
            Self::Fixed(n) => *n,
            Self::Dice(formula) => formula.roll(source),
        }
    }

    /// The lowest value this can produce.
    pub fn min(&self) -> i32 {
        match self {
            Self::Fixed(n) => *n,
            Self::Dice(formula) => formula.min(),
        }
    }

    /// The highest value this can produce.
    pub fn max(&self) -> i32 {
        match self {
            Self::Fixed(n) => *n,
            Self::Dice(formula) => formula.max(),
        }
    }
}

impl Default for Roll {
    fn default() -> Self {
        Self::Fixed(1)
    }
}

impl From<i32> for Roll {
    fn from(n: i32) -> Self {
        Self::Fixed(n)
    }
}

impl From<DiceFormula> for Roll {
    fn from(formula: DiceFormula) -> Self {
        Self::Dice(formula)
    }
}

impl From<Die> for Roll {
    fn from(die: Die) -> Self {
        Self::Dice(die.into())
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(n) => write!(f, "{n}"),
            Self::Dice(formula) => write!(f, "{formula}"),
        }
    }
}
