pub mod check;
pub mod list;
pub mod repl;
pub mod roll;
pub mod show;

use pg_core::Registry;
use pg_engine::EngineError;

/// Load the built-in tables, refusing to run if any fail validation.
fn load_registry() -> Result<Registry, String> {
    pg_content::registry().map_err(|e| format!("built-in tables are invalid: {e}"))
}

/// Message shown for a failed generation. Unknown tables read the same way
/// the prompt reports a mistyped name.
fn describe(err: &EngineError) -> String {
    match err.unknown_table() {
        Some(name) => format!("{name}: not found"),
        None => err.to_string(),
    }
}
