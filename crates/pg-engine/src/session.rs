//! Line-at-a-time interactive generation.
//!
//! `Session` interprets one line of user input at a time: a table name
//! generates that table, `ls` lists every table, and an empty line repeats
//! the previous table.

use rand::rngs::StdRng;

use pg_core::Registry;

use crate::config::GeneratorConfig;
use crate::error::EngineResult;
use crate::generator::Generator;
use crate::story::StoryNode;

/// The table a session repeats before anything else was generated.
pub const DEFAULT_TABLE: &str = "discovery";

/// What a line of input produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Every registered table name, in registration order.
    Names(Vec<String>),
    /// A generated story.
    Story(StoryNode),
    /// The input named no registered table.
    NotFound(String),
}

/// An interactive generation session over a sealed registry.
pub struct Session<'r> {
    generator: Generator<'r>,
    rng: StdRng,
    previous: String,
}

impl<'r> Session<'r> {
    /// Start a session whose empty-line default is `start`.
    ///
    /// Fails if `start` is not a registered table.
    pub fn new(registry: &'r Registry, config: &GeneratorConfig, start: &str) -> EngineResult<Self> {
        registry.require(start)?;
        Ok(Self {
            generator: Generator::new(registry).with_limits(config.limits),
            rng: config.rng(),
            previous: start.to_string(),
        })
    }

    /// The table an empty line generates.
    pub fn previous(&self) -> &str {
        &self.previous
    }

    /// Process a line of user input. Surrounding whitespace is ignored.
    pub fn process(&mut self, input: &str) -> EngineResult<Reply> {
        let name = input.trim();
        if name == "ls" {
            let names = self.generator.registry().names().map(String::from).collect();
            return Ok(Reply::Names(names));
        }

        let name = if name.is_empty() {
            self.previous.clone()
        } else {
            name.to_string()
        };
        if !self.generator.registry().contains(&name) {
            return Ok(Reply::NotFound(name));
        }

        let story = self.generator.generate_named(&name, &mut self.rng)?;
        self.previous = name;
        Ok(Reply::Story(story))
    }
}
