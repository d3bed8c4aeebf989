use std::fmt;

use pg_mechanics::Roll;
use serde::Serialize;

/// One item in an entry's outcome list or a table's associated list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Literal text, never expanded.
    Text(String),
    /// A bare reference to another table.
    ///
    /// Expanded with the table's own formula when the name is registered;
    /// otherwise kept verbatim as literal text.
    Table(String),
    /// A reference that always generates the named table, with overrides.
    Directive(Directive),
}

impl Outcome {
    /// A literal text outcome.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// A bare table reference (falls back to text when unregistered).
    pub fn table(name: impl Into<String>) -> Self {
        Self::Table(name.into())
    }

    /// The text or table name this outcome carries.
    pub fn label(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Table(name) => name,
            Self::Directive(directive) => &directive.table,
        }
    }
}

impl From<&str> for Outcome {
    fn from(name: &str) -> Self {
        Self::table(name)
    }
}

impl From<String> for Outcome {
    fn from(name: String) -> Self {
        Self::Table(name)
    }
}

impl From<Directive> for Outcome {
    fn from(directive: Directive) -> Self {
        Self::Directive(directive)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "\"{text}\""),
            Self::Table(name) => write!(f, "{name}"),
            Self::Directive(directive) => write!(f, "{directive}"),
        }
    }
}

/// An explicit instruction to generate a table.
///
/// Unlike a bare [`Outcome::Table`], a directive never degrades to text:
/// resolving one for an unregistered table is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Directive {
    /// Name of the table to generate.
    pub table: String,
    /// Roll used instead of the table's own formula.
    pub formula: Option<Roll>,
    /// How many independent results to generate.
    pub repeat: Roll,
    /// Whether the generated table's associated items are included.
    pub include_associated: bool,
}

impl Directive {
    /// Generate `table` once, with its own formula and associated items.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            formula: None,
            repeat: Roll::Fixed(1),
            include_associated: true,
        }
    }

    /// Roll the table with `formula` instead of its default.
    pub fn with_formula(mut self, formula: impl Into<Roll>) -> Self {
        self.formula = Some(formula.into());
        self
    }

    /// Generate the table `repeat` times.
    pub fn repeat(mut self, repeat: impl Into<Roll>) -> Self {
        self.repeat = repeat.into();
        self
    }

    /// Leave out the table's associated items.
    pub fn without_associated(mut self) -> Self {
        self.include_associated = false;
        self
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table)?;
        if let Some(formula) = &self.formula {
            write!(f, " [{formula}]")?;
        }
        if self.repeat != Roll::Fixed(1) {
            write!(f, " x{}", self.repeat)?;
        }
        if !self.include_associated {
            write!(f, " (no associated)")?;
        }
        Ok(())
    }
}
