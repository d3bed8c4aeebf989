use pg_mechanics::DiceFormula;
use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::outcome::Outcome;

/// A ranged row of a table.
///
/// An entry covers every roll from `min_result` up to (excluding) the next
/// entry's `min_result`; the last entry of a table is open-ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// The lowest roll selecting this entry.
    pub min_result: i32,
    /// What the entry produces, in order.
    pub outcomes: Vec<Outcome>,
}

impl Entry {
    /// Create an entry starting at `min_result`.
    pub fn new<I, O>(min_result: i32, outcomes: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<Outcome>,
    {
        Self {
            min_result,
            outcomes: outcomes.into_iter().map(Into::into).collect(),
        }
    }
}

/// A named random table.
///
/// Rolling `formula` selects one entry. Associated items are generated
/// every time, whatever the roll. A table without entries is a container
/// that only produces its associated items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    name: String,
    formula: DiceFormula,
    entries: Vec<Entry>,
    associated: Vec<Outcome>,
}

impl Table {
    /// Create an empty table rolled with `formula`.
    pub fn new(name: impl Into<String>, formula: impl Into<DiceFormula>) -> Self {
        Self {
            name: name.into(),
            formula: formula.into(),
            entries: Vec::new(),
            associated: Vec::new(),
        }
    }

    /// Append an entry starting at `min_result`.
    ///
    /// Entries must be added in ascending order; registry validation
    /// rejects tables that break this.
    pub fn entry<I, O>(mut self, min_result: i32, outcomes: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<Outcome>,
    {
        self.entries.push(Entry::new(min_result, outcomes));
        self
    }

    /// Append items generated every time the table is.
    pub fn associated<I, O>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<Outcome>,
    {
        self.associated.extend(items.into_iter().map(Into::into));
        self
    }

    /// The table's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The default roll formula.
    pub fn formula(&self) -> &DiceFormula {
        &self.formula
    }

    /// The ranged entries, in ascending order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Items generated regardless of the roll.
    pub fn associated_items(&self) -> &[Outcome] {
        &self.associated
    }

    /// The inclusive roll range of the entry at `index`; `None` as the
    /// upper bound means open-ended.
    pub fn entry_range(&self, index: usize) -> Option<(i32, Option<i32>)> {
        let entry = self.entries.get(index)?;
        let upper = self.entries.get(index + 1).map(|next| next.min_result - 1);
        Some((entry.min_result, upper))
    }

    /// Outcomes for `roll`: those of the last entry whose `min_result`
    /// does not exceed it.
    ///
    /// A table without entries yields nothing. A roll below the first
    /// entry is a configuration fault.
    pub fn select_outcomes(&self, roll: i32) -> CoreResult<&[Outcome]> {
        let Some(first) = self.entries.first() else {
            return Ok(&[]);
        };
        if roll < first.min_result {
            return Err(CoreError::Configuration {
                table: self.name.clone(),
                reason: format!(
                    "roll {roll} is below the first entry ({})",
                    first.min_result
                ),
            });
        }
        let index = self.entries.partition_point(|e| e.min_result <= roll);
        Ok(&self.entries[index - 1].outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pg_mechanics::Die;
    use proptest::prelude::*;

    fn coin() -> Table {
        Table::new("coin", Die::D2)
            .entry(1, [Outcome::text("heads")])
            .entry(2, [Outcome::text("tails")])
    }

    fn element() -> Table {
        Table::new("element", Die::D12)
            .entry(1, ["air"])
            .entry(3, ["earth"])
            .entry(5, ["fire"])
            .entry(7, ["water"])
            .entry(9, ["life"])
            .entry(11, ["death"])
    }

    #[test]
    fn selects_by_range() {
        let t = element();
        assert_eq!(t.select_outcomes(1).unwrap(), &[Outcome::table("air")]);
        assert_eq!(t.select_outcomes(2).unwrap(), &[Outcome::table("air")]);
        assert_eq!(t.select_outcomes(3).unwrap(), &[Outcome::table("earth")]);
        assert_eq!(t.select_outcomes(10).unwrap(), &[Outcome::table("life")]);
        assert_eq!(t.select_outcomes(12).unwrap(), &[Outcome::table("death")]);
    }

    #[test]
    fn last_entry_is_open_ended() {
        let t = element();
        assert_eq!(t.select_outcomes(99).unwrap(), &[Outcome::table("death")]);
    }

    #[test]
    fn roll_below_first_entry_is_configuration_error() {
        let t = Table::new("late", Die::D6).entry(3, ["x"]);
        let err = t.select_outcomes(1).unwrap_err();
        assert!(matches!(err, CoreError::Configuration { ref table, .. } if table == "late"));
    }

    #[test]
    fn empty_table_selects_nothing() {
        let t = Table::new("container", Die::D12).associated(["size"]);
        assert!(t.select_outcomes(5).unwrap().is_empty());
        assert_eq!(t.associated_items(), &[Outcome::table("size")]);
    }

    #[test]
    fn entry_ranges() {
        let t = coin();
        assert_eq!(t.entry_range(0), Some((1, Some(1))));
        assert_eq!(t.entry_range(1), Some((2, None)));
        assert_eq!(t.entry_range(2), None);
    }

    #[test]
    fn serializes_with_notation() {
        let json = serde_json::to_value(coin()).unwrap();
        assert_eq!(json["name"], "coin");
        assert_eq!(json["formula"], "d2");
        assert_eq!(json["entries"][1]["min_result"], 2);
        assert_eq!(json["entries"][1]["outcomes"][0]["text"], "tails");
    }

    proptest! {
        #[test]
        fn every_roll_matches_exactly_one_entry(roll in 1i32..=12) {
            let t = element();
            let matching = t
                .entries()
                .iter()
                .enumerate()
                .filter(|(i, _)| {
                    let (lo, hi) = t.entry_range(*i).unwrap();
                    roll >= lo && hi.is_none_or(|hi| roll <= hi)
                })
                .count();
            prop_assert_eq!(matching, 1);
            prop_assert!(t.select_outcomes(roll).is_ok());
        }
    }
}
