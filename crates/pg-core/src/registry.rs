use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::table::Table;
use crate::validate::validate_registry;

/// Collects tables during startup.
///
/// Registering a name twice replaces the earlier table in place. Call
/// [`RegistryBuilder::seal`] to validate and freeze the collection.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    tables: Vec<Table>,
    by_name: HashMap<String, usize>,
}

impl RegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table, returning the one it replaced, if any.
    pub fn register(&mut self, table: Table) -> Option<Table> {
        match self.by_name.get(table.name()) {
            Some(&index) => {
                tracing::debug!(table = table.name(), "table re-registered, replacing");
                Some(std::mem::replace(&mut self.tables[index], table))
            }
            None => {
                self.by_name
                    .insert(table.name().to_string(), self.tables.len());
                self.tables.push(table);
                None
            }
        }
    }

    /// Number of tables registered so far.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Freeze the tables without checking them.
    pub fn build(self) -> Registry {
        Registry {
            tables: self.tables,
            by_name: self.by_name,
        }
    }

    /// Validate and freeze the tables.
    ///
    /// Warnings are logged; the first error-level issue aborts sealing
    /// with a [`CoreError::Configuration`].
    pub fn seal(self) -> CoreResult<Registry> {
        let registry = self.build();
        let issues = validate_registry(&registry);
        for issue in issues.iter().filter(|i| !i.is_error) {
            tracing::warn!(table = %issue.table, "{}", issue.message);
        }
        if let Some(issue) = issues.into_iter().find(|i| i.is_error) {
            return Err(CoreError::Configuration {
                table: issue.table,
                reason: issue.message,
            });
        }
        tracing::debug!(tables = registry.len(), "registry sealed");
        Ok(registry)
    }
}

impl Extend<Table> for RegistryBuilder {
    fn extend<I: IntoIterator<Item = Table>>(&mut self, iter: I) {
        for table in iter {
            self.register(table);
        }
    }
}

/// The immutable name-to-table directory read during generation.
///
/// Only a [`RegistryBuilder`] can produce one, so nothing can be
/// registered once generation starts. Tables keep their registration order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    tables: Vec<Table>,
    by_name: HashMap<String, usize>,
}

impl Registry {
    /// Look up a table by exact name.
    pub fn get(&self, name: &str) -> Option<&Table> {
        self.by_name.get(name).map(|&index| &self.tables[index])
    }

    /// Look up a table that must exist.
    pub fn require(&self, name: &str) -> CoreResult<&Table> {
        self.get(name)
            .ok_or_else(|| CoreError::UnknownTable(name.to_string()))
    }

    /// Returns true if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All tables in registration order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }

    /// All table names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(Table::name)
    }

    /// Number of registered tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if no tables are registered.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Outcome;
    use pg_mechanics::Die;

    fn table(name: &str, text: &str) -> Table {
        Table::new(name, Die::D2).entry(1, [Outcome::text(text)])
    }

    #[test]
    fn register_and_lookup() {
        let mut builder = RegistryBuilder::new();
        assert!(builder.register(table("coin", "heads")).is_none());
        assert!(builder.register(table("die", "one")).is_none());
        let registry = builder.seal().unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("coin"));
        assert_eq!(registry.get("die").unwrap().name(), "die");
        assert!(registry.get("Coin").is_none());
    }

    #[test]
    fn require_unknown_table() {
        let registry = RegistryBuilder::new().build();
        assert_eq!(
            registry.require("nope").unwrap_err(),
            CoreError::UnknownTable("nope".into())
        );
    }

    #[test]
    fn collision_overwrites_in_place() {
        let mut builder = RegistryBuilder::new();
        builder.register(table("coin", "heads"));
        builder.register(table("die", "one"));
        let replaced = builder.register(table("coin", "edge")).unwrap();
        assert_eq!(replaced.entries()[0].outcomes, vec![Outcome::text("heads")]);

        let registry = builder.build();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["coin", "die"]);
        assert_eq!(
            registry.get("coin").unwrap().entries()[0].outcomes,
            vec![Outcome::text("edge")]
        );
    }

    #[test]
    fn extend_registers_all() {
        let mut builder = RegistryBuilder::new();
        builder.extend([table("a", "x"), table("b", "y")]);
        assert_eq!(builder.len(), 2);
        assert!(!builder.is_empty());
    }

    #[test]
    fn seal_rejects_unreachable_first_entry() {
        let mut builder = RegistryBuilder::new();
        builder.register(Table::new("late", Die::D6).entry(3, ["x"]));
        let err = builder.seal().unwrap_err();
        assert!(matches!(err, CoreError::Configuration { ref table, .. } if table == "late"));
    }

    #[test]
    fn registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
    }
}
