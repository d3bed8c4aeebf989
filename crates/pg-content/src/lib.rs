//! Built-in tables for the perilous generator.
//!
//! Every table rolls a single d12. Sections register in a fixed order so
//! that `ls` lists discoveries first and the shared detail tables last.

pub mod creature;
pub mod danger;
pub mod detail;
pub mod discovery;
pub mod dungeon;
pub mod npc;

use pg_core::{CoreResult, Registry, RegistryBuilder, Table};
use pg_mechanics::{DiceFormula, Die};

/// A d12 table with no entries yet.
pub(crate) fn table(name: &str) -> Table {
    Table::new(name, Die::D12)
}

/// One die plus a flat bonus, e.g. `d8+4`.
pub(crate) fn plus(die: Die, bonus: i32) -> DiceFormula {
    DiceFormula::from(die).plus(bonus)
}

/// Every built-in table, in registration order.
pub fn tables() -> Vec<Table> {
    let mut all = discovery::tables();
    all.extend(dungeon::tables());
    all.extend(danger::tables());
    all.extend(creature::tables());
    all.extend(npc::tables());
    all.extend(detail::tables());
    all
}

/// Register and validate every built-in table.
pub fn registry() -> CoreResult<Registry> {
    let mut builder = RegistryBuilder::new();
    builder.extend(tables());
    tracing::debug!(tables = builder.len(), "registered built-in tables");
    builder.seal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pg_core::{Outcome, validate_registry};
    use pg_engine::{DEFAULT_TABLE, Generator, GeneratorConfig};
    use proptest::prelude::*;

    #[test]
    fn registry_seals_cleanly() {
        let registry = registry().unwrap();
        assert_eq!(registry.len(), 97);
        assert!(validate_registry(&registry).is_empty());
    }

    #[test]
    fn names_are_unique() {
        let all = tables();
        let registry = registry().unwrap();
        assert_eq!(all.len(), registry.len());
    }

    #[test]
    fn session_start_table_exists() {
        let registry = registry().unwrap();
        assert!(registry.contains(DEFAULT_TABLE));
        assert_eq!(registry.names().next(), Some(DEFAULT_TABLE));
    }

    #[test]
    fn every_table_is_a_d12_starting_at_one() {
        for table in tables() {
            assert_eq!(table.formula().to_string(), "d12", "{}", table.name());
            if let Some(first) = table.entries().first() {
                assert_eq!(first.min_result, 1, "{}", table.name());
            }
        }
    }

    #[test]
    fn dungeon_sizes_only_have_associated_items() {
        let registry = registry().unwrap();
        let small = registry.require("dungeon small").unwrap();
        assert!(small.entries().is_empty());
        assert_eq!(small.associated_items().len(), 6);
    }

    #[test]
    fn directives_name_registered_tables() {
        let registry = registry().unwrap();
        for table in registry.tables() {
            let outcomes = table
                .entries()
                .iter()
                .flat_map(|e| &e.outcomes)
                .chain(table.associated_items());
            for outcome in outcomes {
                if let Outcome::Directive(d) = outcome {
                    assert!(registry.contains(&d.table), "{} -> {}", table.name(), d.table);
                }
            }
        }
    }

    #[test]
    fn every_table_generates() {
        let registry = registry().unwrap();
        let generator = Generator::new(&registry);
        let mut rng = GeneratorConfig::default().with_seed(2024).rng();
        for name in registry.names() {
            let story = generator.generate_named(name, &mut rng).unwrap();
            assert_eq!(story.label(), name);
        }
    }

    proptest! {
        #[test]
        fn any_d12_roll_selects_outcomes(roll in 1i32..=12) {
            for table in tables().iter().filter(|t| !t.entries().is_empty()) {
                let outcomes = table.select_outcomes(roll).unwrap();
                prop_assert!(!outcomes.is_empty(), "{} on {}", table.name(), roll);
            }
        }

        #[test]
        fn discovery_is_reproducible(seed in any::<u64>()) {
            let registry = registry().unwrap();
            let generator = Generator::new(&registry);
            let config = GeneratorConfig::default().with_seed(seed);
            let a = generator.generate_named(DEFAULT_TABLE, &mut config.rng()).unwrap();
            let b = generator.generate_named(DEFAULT_TABLE, &mut config.rng()).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
