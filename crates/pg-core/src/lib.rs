//! Core types for the Perilous generator: tables, outcomes, and the registry.
//!
//! A [`Table`] maps dice rolls to lists of [`Outcome`]s through ranged
//! [`Entry`]s. Tables are collected in a [`RegistryBuilder`] during startup
//! and then sealed into an immutable [`Registry`] that the resolution
//! engine reads from.

/// Error types used throughout the crate.
pub mod error;
/// Outcomes: literal text, table references, and directives.
pub mod outcome;
/// The write-once table registry.
pub mod registry;
/// Tables and their ranged entries.
pub mod table;
/// Integrity checks over a registry.
pub mod validate;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export outcome types.
pub use outcome::{Directive, Outcome};
/// Re-export registry types.
pub use registry::{Registry, RegistryBuilder};
/// Re-export table types.
pub use table::{Entry, Table};
/// Re-export validation types.
pub use validate::{ValidationIssue, validate_registry};
