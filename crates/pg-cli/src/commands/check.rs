use colored::Colorize;

use pg_core::{RegistryBuilder, validate_registry};

pub fn run() -> Result<(), String> {
    let mut builder = RegistryBuilder::new();
    builder.extend(pg_content::tables());
    let registry = builder.build();

    let issues = validate_registry(&registry);
    for issue in &issues {
        let line = issue.to_string();
        if issue.is_error {
            eprintln!("  {}", line.red());
        } else {
            eprintln!("  {}", line.yellow());
        }
    }

    let errors = issues.iter().filter(|i| i.is_error).count();
    let warnings = issues.len() - errors;
    if errors > 0 {
        return Err(format!(
            "{errors} error{}, {warnings} warning{}",
            if errors == 1 { "" } else { "s" },
            if warnings == 1 { "" } else { "s" },
        ));
    }

    println!("  All checks passed.");
    println!(
        "  {} tables, {warnings} warning{}",
        registry.len(),
        if warnings == 1 { "" } else { "s" },
    );

    Ok(())
}
