//! Recursive table resolution.
//!
//! Generating a table rolls its formula, selects an entry, and resolves
//! every outcome of that entry followed by every associated item:
//!
//! - text becomes a leaf;
//! - a bare table reference is generated with the table's defaults when
//!   the name is registered, and kept as text otherwise;
//! - a directive always generates its table (an unknown name is an
//!   error), possibly several times, with an optional roll override.
//!
//! There is no cycle detection. Tables that refer to themselves stop when
//! the dice stop choosing the recursive entry; [`Limits`] bounds the
//! runs where they don't.

use pg_core::{Directive, Outcome, Registry, Table};
use pg_mechanics::{Roll, RollSource};

use crate::config::Limits;
use crate::error::{EngineError, EngineResult};
use crate::story::StoryNode;

/// Generates story trees from the tables of a sealed registry.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'r> {
    registry: &'r Registry,
    limits: Limits,
}

impl<'r> Generator<'r> {
    /// A generator over `registry` with default limits.
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            limits: Limits::default(),
        }
    }

    /// Replace the recursion limits.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// The registry tables are resolved against.
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Generate a registered table by name with its defaults.
    pub fn generate_named(
        &self,
        name: &str,
        source: &mut dyn RollSource,
    ) -> EngineResult<StoryNode> {
        let table = self.registry.require(name)?;
        self.generate(table, None, true, source)
    }

    /// Generate `table`, rolling `formula` instead of the table's own when
    /// given, and including associated items when `include_associated`.
    pub fn generate(
        &self,
        table: &Table,
        formula: Option<&Roll>,
        include_associated: bool,
        source: &mut dyn RollSource,
    ) -> EngineResult<StoryNode> {
        let mut run = Resolution {
            registry: self.registry,
            limits: self.limits,
            source,
            nodes: 0,
        };
        run.generate(table, formula, include_associated, 0)
    }
}

/// State of one generation: the roll source and the node budget.
struct Resolution<'r, 's> {
    registry: &'r Registry,
    limits: Limits,
    source: &'s mut dyn RollSource,
    nodes: usize,
}

impl Resolution<'_, '_> {
    fn generate(
        &mut self,
        table: &Table,
        formula: Option<&Roll>,
        include_associated: bool,
        depth: usize,
    ) -> EngineResult<StoryNode> {
        if depth > self.limits.max_depth {
            return Err(EngineError::DepthLimit {
                table: table.name().to_string(),
                limit: self.limits.max_depth,
            });
        }
        self.count_node(table.name())?;

        let mut children = Vec::new();
        if !table.entries().is_empty() {
            let roll = match formula {
                Some(formula) => formula.resolve(&mut *self.source),
                None => table.formula().roll(&mut *self.source),
            };
            tracing::trace!(table = table.name(), roll, depth, "rolled table");
            for outcome in table.select_outcomes(roll)? {
                self.resolve(outcome, depth, &mut children)?;
            }
        }

        if include_associated {
            for item in table.associated_items() {
                self.resolve(item, depth, &mut children)?;
            }
        }

        Ok(StoryNode::branch(table.name(), children))
    }

    /// Resolve one outcome of a table at `depth`, appending to `children`.
    fn resolve(
        &mut self,
        outcome: &Outcome,
        depth: usize,
        children: &mut Vec<StoryNode>,
    ) -> EngineResult<()> {
        match outcome {
            Outcome::Text(text) => children.push(self.leaf(text)?),
            Outcome::Table(name) => match self.registry.get(name) {
                Some(table) => children.push(self.generate(table, None, true, depth + 1)?),
                None => children.push(self.leaf(name)?),
            },
            Outcome::Directive(directive) => self.resolve_directive(directive, depth, children)?,
        }
        Ok(())
    }

    fn resolve_directive(
        &mut self,
        directive: &Directive,
        depth: usize,
        children: &mut Vec<StoryNode>,
    ) -> EngineResult<()> {
        let registry = self.registry;
        let table = registry.require(&directive.table)?;
        let repeat = directive.repeat.resolve(&mut *self.source).max(1);
        for _ in 0..repeat {
            children.push(self.generate(
                table,
                directive.formula.as_ref(),
                directive.include_associated,
                depth + 1,
            )?);
        }
        Ok(())
    }

    fn leaf(&mut self, text: &str) -> EngineResult<StoryNode> {
        self.count_node(text)?;
        Ok(StoryNode::leaf(text))
    }

    fn count_node(&mut self, label: &str) -> EngineResult<()> {
        self.nodes += 1;
        if self.nodes > self.limits.max_nodes {
            return Err(EngineError::NodeLimit {
                label: label.to_string(),
                limit: self.limits.max_nodes,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pg_core::{CoreError, RegistryBuilder};
    use pg_mechanics::{DiceFormula, Die, FixedRolls};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn coin() -> Table {
        Table::new("coin", Die::D2)
            .entry(1, [Outcome::text("heads")])
            .entry(2, [Outcome::text("tails")])
    }

    fn registry(tables: impl IntoIterator<Item = Table>) -> Registry {
        let mut builder = RegistryBuilder::new();
        builder.extend(tables);
        builder.build()
    }

    fn leaves(node: &StoryNode) -> Vec<&str> {
        node.children().iter().map(StoryNode::label).collect()
    }

    #[test]
    fn empty_table_has_no_children() {
        let reg = registry([Table::new("void", Die::D12)]);
        let mut rolls = FixedRolls::new([]);
        let node = Generator::new(&reg).generate_named("void", &mut rolls).unwrap();
        assert_eq!(node, StoryNode::branch("void", vec![]));
    }

    #[test]
    fn container_with_literal_associated_is_not_rolled() {
        let reg = registry([Table::new("box", Die::D12).associated([Outcome::text("lid")])]);
        let mut rolls = FixedRolls::new([7]);
        let node = Generator::new(&reg).generate_named("box", &mut rolls).unwrap();
        assert_eq!(node, StoryNode::branch("box", vec![StoryNode::leaf("lid")]));
        assert_eq!(rolls.remaining(), 1);
    }

    #[test]
    fn coin_yields_exactly_one_face() {
        let reg = registry([coin()]);
        let generator = Generator::new(&reg);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let node = generator.generate_named("coin", &mut rng).unwrap();
            assert_eq!(node.label(), "coin");
            assert_eq!(node.children().len(), 1);
            let face = node.children()[0].label();
            assert!(face == "heads" || face == "tails");
        }
    }

    #[test]
    fn coin_follows_the_roll() {
        let reg = registry([coin()]);
        let mut rolls = FixedRolls::new([2]);
        let node = Generator::new(&reg).generate_named("coin", &mut rolls).unwrap();
        assert_eq!(leaves(&node), vec!["tails"]);
    }

    #[test]
    fn directive_repeat_produces_siblings() {
        let reg = registry([
            coin(),
            Table::new("pair", DiceFormula::constant(1))
                .entry(1, [Directive::new("coin").repeat(2)]),
        ]);
        let mut rolls = FixedRolls::new([1, 2]);
        let node = Generator::new(&reg).generate_named("pair", &mut rolls).unwrap();
        assert_eq!(
            node,
            StoryNode::branch(
                "pair",
                vec![
                    StoryNode::branch("coin", vec![StoryNode::leaf("heads")]),
                    StoryNode::branch("coin", vec![StoryNode::leaf("tails")]),
                ]
            )
        );
    }

    #[test]
    fn directive_repeat_three() {
        let reg = registry([
            coin(),
            Table::new("triple", DiceFormula::constant(1))
                .entry(1, [Directive::new("coin").repeat(3)]),
        ]);
        let mut rng = StdRng::seed_from_u64(3);
        let node = Generator::new(&reg).generate_named("triple", &mut rng).unwrap();
        assert_eq!(node.children().len(), 3);
        assert_eq!(node.children_labeled("coin").count(), 3);
    }

    #[test]
    fn rolled_repeat_uses_the_roll() {
        let reg = registry([
            coin(),
            Table::new("handful", Die::D6).associated([Directive::new("coin").repeat(Die::D4)]),
        ]);
        // d4 repeat = 3, then three coin flips.
        let mut rolls = FixedRolls::new([3, 1, 1, 2]);
        let node = Generator::new(&reg).generate_named("handful", &mut rolls).unwrap();
        assert_eq!(node.children().len(), 3);
        assert_eq!(rolls.remaining(), 0);
    }

    #[test]
    fn non_positive_repeat_generates_once() {
        let reg = registry([
            coin(),
            Table::new("once", Die::D6).associated([Directive::new("coin").repeat(0)]),
        ]);
        let mut rolls = FixedRolls::new([1]);
        let node = Generator::new(&reg).generate_named("once", &mut rolls).unwrap();
        assert_eq!(node.children().len(), 1);
    }

    #[test]
    fn directive_formula_override() {
        let reg = registry([
            Table::new("age", Die::D12)
                .entry(1, ["young"])
                .entry(5, ["middle-aged"])
                .entry(10, ["ancient"]),
            Table::new("ruin", Die::D6)
                .associated([Directive::new("age").with_formula(DiceFormula::from(Die::D8).plus(4))]),
        ]);
        // d8 rolls 7 -> 11 -> ancient.
        let mut rolls = FixedRolls::new([7]);
        let node = Generator::new(&reg).generate_named("ruin", &mut rolls).unwrap();
        assert_eq!(leaves(&node.children()[0]), vec!["ancient"]);
    }

    #[test]
    fn fixed_formula_override() {
        let reg = registry([coin()]);
        let mut rolls = FixedRolls::new([1]);
        let node = Generator::new(&reg)
            .generate(reg.get("coin").unwrap(), Some(&Roll::Fixed(2)), true, &mut rolls)
            .unwrap();
        assert_eq!(leaves(&node), vec!["tails"]);
        assert_eq!(rolls.remaining(), 1);
    }

    #[test]
    fn bare_reference_expands_registered_table() {
        let reg = registry([
            coin(),
            Table::new("toss", Die::D6).entry(1, ["coin", "then walk away"]),
        ]);
        let mut rolls = FixedRolls::new([4, 1]);
        let node = Generator::new(&reg).generate_named("toss", &mut rolls).unwrap();
        assert_eq!(
            node,
            StoryNode::branch(
                "toss",
                vec![
                    StoryNode::branch("coin", vec![StoryNode::leaf("heads")]),
                    StoryNode::leaf("then walk away"),
                ]
            )
        );
    }

    #[test]
    fn bare_reference_includes_associated() {
        let reg = registry([
            Table::new("beast", Die::D2).entry(1, ["wolf"]).associated(["size"]),
            Table::new("size", Die::D2).entry(1, ["Small"]).entry(2, ["Large"]),
            Table::new("encounter", DiceFormula::constant(1)).entry(1, ["beast"]),
        ]);
        let mut rolls = FixedRolls::new([1, 2]);
        let node = Generator::new(&reg).generate_named("encounter", &mut rolls).unwrap();
        let beast = &node.children()[0];
        assert_eq!(leaves(beast), vec!["wolf", "size"]);
        assert_eq!(leaves(&beast.children()[1]), vec!["Large"]);
    }

    #[test]
    fn directive_can_suppress_associated() {
        let reg = registry([
            Table::new("beast", Die::D2).entry(1, ["wolf"]).associated(["size"]),
            Table::new("size", Die::D2).entry(1, ["Small"]),
            Table::new("remains", DiceFormula::constant(1))
                .entry(1, [Directive::new("beast").without_associated()]),
        ]);
        let mut rolls = FixedRolls::new([1]);
        let node = Generator::new(&reg).generate_named("remains", &mut rolls).unwrap();
        assert_eq!(leaves(&node.children()[0]), vec!["wolf"]);
    }

    #[test]
    fn top_level_can_skip_associated() {
        let reg = registry([Table::new("beast", Die::D2).entry(1, ["wolf"]).associated(["size"])]);
        let mut rolls = FixedRolls::new([1]);
        let node = Generator::new(&reg)
            .generate(reg.get("beast").unwrap(), None, false, &mut rolls)
            .unwrap();
        assert_eq!(leaves(&node), vec!["wolf"]);
    }

    #[test]
    fn associated_items_follow_entry_outcomes() {
        let reg = registry([Table::new("lair", Die::D2)
            .entry(1, ["burrow"])
            .associated([Outcome::text("visibility"), Outcome::text("creature")])]);
        let mut rolls = FixedRolls::new([1]);
        let node = Generator::new(&reg).generate_named("lair", &mut rolls).unwrap();
        assert_eq!(leaves(&node), vec!["burrow", "visibility", "creature"]);
    }

    #[test]
    fn unknown_directive_target_is_an_error() {
        let reg = registry([Table::new("t", Die::D2).entry(1, [Directive::new("ghost")])]);
        let mut rolls = FixedRolls::new([1]);
        let err = Generator::new(&reg).generate_named("t", &mut rolls).unwrap_err();
        assert_eq!(err.unknown_table(), Some("ghost"));
    }

    #[test]
    fn unknown_root_is_an_error() {
        let reg = registry([]);
        let mut rolls = FixedRolls::new([]);
        let err = Generator::new(&reg).generate_named("nope", &mut rolls).unwrap_err();
        assert!(matches!(err, EngineError::Core(CoreError::UnknownTable(ref n)) if n == "nope"));
    }

    #[test]
    fn roll_below_range_is_a_configuration_error() {
        let reg = registry([Table::new("late", Die::D6).entry(3, ["x"])]);
        let mut rolls = FixedRolls::new([1]);
        let err = Generator::new(&reg).generate_named("late", &mut rolls).unwrap_err();
        assert!(matches!(err, EngineError::Core(CoreError::Configuration { .. })));
    }

    fn oddity() -> Table {
        Table::new("oddity", Die::D12)
            .entry(1, [Outcome::text("weird color")])
            .entry(2, [Outcome::text("geometric")])
            .entry(12, ["oddity", "oddity"])
    }

    #[test]
    fn self_reference_follows_the_rolls() {
        let reg = registry([oddity()]);
        // 12 -> two oddities: the first rolls 12 again (1, 2), the second rolls 1.
        let mut rolls = FixedRolls::new([12, 12, 1, 2, 1]);
        let node = Generator::new(&reg).generate_named("oddity", &mut rolls).unwrap();

        let expected = StoryNode::branch(
            "oddity",
            vec![
                StoryNode::branch(
                    "oddity",
                    vec![
                        StoryNode::branch("oddity", vec![StoryNode::leaf("weird color")]),
                        StoryNode::branch("oddity", vec![StoryNode::leaf("geometric")]),
                    ],
                ),
                StoryNode::branch("oddity", vec![StoryNode::leaf("weird color")]),
            ],
        );
        assert_eq!(node, expected);
        assert_eq!(rolls.remaining(), 0);
    }

    #[test]
    fn endless_self_reference_hits_depth_limit() {
        let reg = registry([Table::new("loop", DiceFormula::constant(1)).entry(1, ["loop"])]);
        let mut rolls = FixedRolls::new([]);
        let err = Generator::new(&reg)
            .with_limits(Limits { max_depth: 10, max_nodes: usize::MAX })
            .generate_named("loop", &mut rolls)
            .unwrap_err();
        assert!(matches!(err, EngineError::DepthLimit { limit: 10, .. }));
        assert!(err.is_recursion_limit());
    }

    #[test]
    fn wide_repeat_hits_node_limit() {
        let reg = registry([
            coin(),
            Table::new("flood", Die::D2).associated([Directive::new("coin").repeat(500)]),
        ]);
        let mut rng = StdRng::seed_from_u64(5);
        let err = Generator::new(&reg)
            .with_limits(Limits { max_depth: 64, max_nodes: 100 })
            .generate_named("flood", &mut rng)
            .unwrap_err();
        assert!(matches!(err, EngineError::NodeLimit { limit: 100, .. }));
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let reg = registry([oddity(), coin()]);
        let generator = Generator::new(&reg);
        let a = generator
            .generate_named("oddity", &mut StdRng::seed_from_u64(11))
            .unwrap();
        let b = generator
            .generate_named("oddity", &mut StdRng::seed_from_u64(11))
            .unwrap();
        assert_eq!(a, b);
    }
}
