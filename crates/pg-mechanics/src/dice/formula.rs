//! Additive dice formulas such as `d12`, `2d6+3` or `1d8+1d4-1`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Die, RollSource};
use crate::error::{DiceError, DiceResult};

/// Upper bound on dice in a single parsed term.
const MAX_DICE_PER_TERM: u32 = 1000;

/// A sum of dice plus a constant bonus.
///
/// A die listed several times is rolled once per listing, so `2d6` is
/// stored as `[d6, d6]`. Formulas are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct DiceFormula {
    dice: Vec<Die>,
    bonus: i32,
}

impl DiceFormula {
    /// Create a formula from a list of dice and a bonus.
    pub fn new(dice: impl IntoIterator<Item = Die>, bonus: i32) -> Self {
        Self {
            dice: dice.into_iter().collect(),
            bonus,
        }
    }

    /// `count` dice of one type.
    pub fn of(count: u32, die: Die) -> Self {
        Self::new(std::iter::repeat_n(die, count as usize), 0)
    }

    /// A formula with no dice that always yields `value`.
    pub fn constant(value: i32) -> Self {
        Self::new([], value)
    }

    /// Add a constant to the formula, saturating at the `i32` bounds.
    pub fn plus(mut self, bonus: i32) -> Self {
        self.bonus = self.bonus.saturating_add(bonus);
        self
    }

    /// Add `count` more dice of one type.
    pub fn and(mut self, count: u32, die: Die) -> Self {
        self.dice.extend(std::iter::repeat_n(die, count as usize));
        self
    }

    /// The lowest achievable result.
    ///
    /// Like [`DiceFormula::max`] and [`DiceFormula::roll`], this saturates
    /// at the `i32` bounds. Parsed formulas never reach them.
    pub fn min(&self) -> i32 {
        saturate(self.wide_min())
    }

    /// The highest achievable result.
    pub fn max(&self) -> i32 {
        saturate(self.wide_max())
    }

    /// Roll every die once and add the bonus.
    pub fn roll(&self, source: &mut dyn RollSource) -> i32 {
        let sum: i64 = self
            .dice
            .iter()
            .map(|d| i64::from(d.roll(source)))
            .sum();
        saturate(sum + i64::from(self.bonus))
    }

    fn wide_min(&self) -> i64 {
        self.dice.len() as i64 + i64::from(self.bonus)
    }

    fn wide_max(&self) -> i64 {
        let faces: i64 = self.dice.iter().map(|d| i64::from(d.sides())).sum();
        faces + i64::from(self.bonus)
    }

    /// Dice grouped by type in order of first appearance.
    fn grouped(&self) -> Vec<(Die, u32)> {
        let mut groups: Vec<(Die, u32)> = Vec::new();
        for die in &self.dice {
            match groups.iter_mut().find(|(d, _)| d == die) {
                Some((_, count)) => *count += 1,
                None => groups.push((*die, 1)),
            }
        }
        groups
    }
}

fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

impl From<Die> for DiceFormula {
    fn from(die: Die) -> Self {
        Self::new([die], 0)
    }
}

impl fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups = self.grouped();
        if groups.is_empty() {
            return write!(f, "{}", self.bonus);
        }
        for (i, (die, count)) in groups.iter().enumerate() {
            if i > 0 {
                write!(f, "+")?;
            }
            if *count == 1 {
                write!(f, "{die}")?;
            } else {
                write!(f, "{count}{die}")?;
            }
        }
        match self.bonus {
            0 => Ok(()),
            b if b > 0 => write!(f, "+{b}"),
            b => write!(f, "{b}"),
        }
    }
}

impl FromStr for DiceFormula {
    type Err = DiceError;

    fn from_str(s: &str) -> DiceResult<Self> {
        let invalid = |reason: &str| DiceError::InvalidFormula {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        if compact.is_empty() {
            return Err(invalid("empty formula"));
        }

        // Split into signed terms.
        let mut terms: Vec<(bool, &str)> = Vec::new();
        let mut negative = false;
        let mut start = 0;
        for (i, c) in compact.char_indices() {
            if c == '+' || c == '-' {
                if i > start {
                    terms.push((negative, &compact[start..i]));
                } else if i != 0 {
                    return Err(invalid("empty term"));
                }
                negative = c == '-';
                start = i + 1;
            }
        }
        if start >= compact.len() {
            return Err(invalid("trailing operator"));
        }
        terms.push((negative, &compact[start..]));

        let mut formula = Self::constant(0);
        for (negative, term) in terms {
            match term.split_once('d') {
                Some((count, faces)) => {
                    if negative {
                        return Err(invalid("dice cannot be subtracted"));
                    }
                    let count = if count.is_empty() {
                        1
                    } else {
                        count.parse::<u32>().map_err(|_| invalid("bad dice count"))?
                    };
                    if count == 0 || count > MAX_DICE_PER_TERM {
                        return Err(invalid("dice count out of range"));
                    }
                    let faces = faces
                        .parse::<u32>()
                        .map_err(|_| invalid("bad face count"))?;
                    let die = Die::with_faces(faces).map_err(|e| invalid(&e.to_string()))?;
                    formula = formula.and(count, die);
                }
                None => {
                    let value = term.parse::<i32>().map_err(|_| invalid("bad number"))?;
                    let value = if negative { -value } else { value };
                    formula.bonus = formula
                        .bonus
                        .checked_add(value)
                        .ok_or_else(|| invalid("bonus out of range"))?;
                }
            }
        }
        let range = [formula.wide_min(), formula.wide_max()];
        if range.iter().any(|v| i32::try_from(*v).is_err()) {
            return Err(invalid("results out of range"));
        }
        Ok(formula)
    }
}

impl From<DiceFormula> for String {
    fn from(formula: DiceFormula) -> Self {
        formula.to_string()
    }
}

impl TryFrom<String> for DiceFormula {
    type Error = DiceError;

    fn try_from(value: String) -> DiceResult<Self> {
        value.parse()
    }
}
