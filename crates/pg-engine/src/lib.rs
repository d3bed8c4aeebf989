//! Resolution engine for the Perilous generator.
//!
//! Rolls a table, expands every outcome that names another table, and
//! assembles the results into a [`StoryNode`] tree that [`render`] turns
//! into an indented outline. A [`Session`] wraps the engine for
//! line-at-a-time interactive use.

pub mod config;
pub mod error;
pub mod generator;
pub mod render;
pub mod session;
pub mod story;

pub use config::{GeneratorConfig, Limits};
pub use error::{EngineError, EngineResult};
pub use generator::Generator;
pub use render::{render, render_lines};
pub use session::{DEFAULT_TABLE, Reply, Session};
pub use story::StoryNode;
