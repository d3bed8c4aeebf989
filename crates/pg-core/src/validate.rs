//! Integrity checks over a registry.
//!
//! Errors describe tables whose rolls can fall outside their entries.
//! Warnings describe content that generates, but probably not as intended:
//! unreachable entries, directives naming unregistered tables, and
//! repeat counts that can never exceed one.

use pg_mechanics::Roll;

use crate::outcome::{Directive, Outcome};
use crate::registry::Registry;
use crate::table::Table;

/// A warning or error found during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// The table where the issue was found.
    pub table: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.table, self.message)
    }
}

/// Validate every table in a registry.
pub fn validate_registry(registry: &Registry) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for table in registry.tables() {
        validate_entries(table, &mut issues);
        let outcomes = table
            .entries()
            .iter()
            .flat_map(|e| e.outcomes.iter())
            .chain(table.associated_items());
        for outcome in outcomes {
            if let Outcome::Directive(directive) = outcome {
                validate_directive(table, directive, registry, &mut issues);
            }
        }
    }
    issues
}

fn validate_entries(table: &Table, issues: &mut Vec<ValidationIssue>) {
    let entries = table.entries();
    let Some(first) = entries.first() else {
        return;
    };
    let formula = table.formula();

    if first.min_result > formula.min() {
        issues.push(error(
            table,
            format!(
                "first entry starts at {} but {formula} can roll {}",
                first.min_result,
                formula.min()
            ),
        ));
    }

    for pair in entries.windows(2) {
        if pair[1].min_result <= pair[0].min_result {
            issues.push(error(
                table,
                format!(
                    "entries out of order: {} follows {}",
                    pair[1].min_result, pair[0].min_result
                ),
            ));
        }
    }

    for entry in entries.iter().filter(|e| e.min_result > formula.max()) {
        issues.push(warning(
            table,
            format!(
                "entry {} is unreachable with {formula} (max {})",
                entry.min_result,
                formula.max()
            ),
        ));
    }
}

fn validate_directive(
    table: &Table,
    directive: &Directive,
    registry: &Registry,
    issues: &mut Vec<ValidationIssue>,
) {
    match registry.get(&directive.table) {
        None => issues.push(warning(
            table,
            format!("directive references unknown table '{}'", directive.table),
        )),
        Some(target) => {
            let below = directive
                .formula
                .as_ref()
                .zip(target.entries().first())
                .filter(|(formula, first)| formula.min() < first.min_result);
            if let Some((formula, first)) = below {
                issues.push(error(
                    table,
                    format!(
                        "override {formula} can roll {} below the first entry of '{}' ({})",
                        formula.min(),
                        target.name(),
                        first.min_result
                    ),
                ));
            }
        }
    }

    if let Roll::Fixed(n @ ..=0) = directive.repeat {
        issues.push(warning(
            table,
            format!(
                "repeat of {n} for '{}' still generates it once",
                directive.table
            ),
        ));
    }
}

fn error(table: &Table, message: String) -> ValidationIssue {
    ValidationIssue {
        table: table.name().to_string(),
        message,
        is_error: true,
    }
}

fn warning(table: &Table, message: String) -> ValidationIssue {
    ValidationIssue {
        table: table.name().to_string(),
        message,
        is_error: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegistryBuilder;
    use pg_mechanics::{DiceFormula, Die};

    fn registry(tables: impl IntoIterator<Item = Table>) -> Registry {
        let mut builder = RegistryBuilder::new();
        builder.extend(tables);
        builder.build()
    }

    #[test]
    fn well_formed_registry_has_no_issues() {
        let reg = registry([
            Table::new("coin", Die::D2).entry(1, ["heads"]).entry(2, ["tails"]),
            Table::new("pair", DiceFormula::constant(1))
                .entry(1, [Directive::new("coin").repeat(2)]),
        ]);
        assert!(validate_registry(&reg).is_empty());
    }

    #[test]
    fn out_of_order_entries_are_errors() {
        let reg = registry([Table::new("bad", Die::D6)
            .entry(1, ["a"])
            .entry(4, ["b"])
            .entry(4, ["c"])]);
        let issues = validate_registry(&reg);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error);
        assert!(issues[0].message.contains("out of order"));
    }

    #[test]
    fn unreachable_entries_are_warnings() {
        let reg = registry([Table::new("short", Die::D4).entry(1, ["a"]).entry(7, ["b"])]);
        let issues = validate_registry(&reg);
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error);
        assert_eq!(
            issues[0].to_string(),
            "warning: short: entry 7 is unreachable with d4 (max 4)"
        );
    }

    #[test]
    fn unknown_directive_target_is_warning() {
        let reg = registry([Table::new("t", Die::D6)
            .entry(1, ["a"])
            .associated([Directive::new("missing")])]);
        let issues = validate_registry(&reg);
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error);
        assert!(issues[0].message.contains("'missing'"));
    }

    #[test]
    fn bare_references_to_unknown_tables_are_fine() {
        let reg = registry([Table::new("t", Die::D6).entry(1, ["not a table"])]);
        assert!(validate_registry(&reg).is_empty());
    }

    #[test]
    fn override_below_target_range_is_error() {
        let reg = registry([
            Table::new("target", Die::D12).entry(5, ["x"]),
            Table::new("t", Die::D6)
                .entry(1, [Directive::new("target").with_formula(Die::D4)]),
        ]);
        let issues = validate_registry(&reg);
        assert!(issues.iter().any(|i| i.is_error && i.table == "t"));
    }

    #[test]
    fn non_positive_repeat_is_warning() {
        let reg = registry([
            Table::new("coin", Die::D2).entry(1, ["heads"]),
            Table::new("t", Die::D6).entry(1, [Directive::new("coin").repeat(0)]),
        ]);
        let issues = validate_registry(&reg);
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error);
    }
}
