use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use pg_core::Outcome;

pub fn run(name: &str) -> Result<(), String> {
    let registry = super::load_registry()?;
    let table = registry
        .get(name)
        .ok_or_else(|| format!("{name}: not found"))?;

    println!("  {} [{}]", table.name().bold(), table.formula().to_string().dimmed());
    println!();

    if table.entries().is_empty() {
        println!("  No entries.");
    } else {
        let mut rows = Table::new();
        rows.set_content_arrangement(ContentArrangement::Dynamic);
        rows.set_header(vec!["Roll", "Outcomes"]);
        for (i, entry) in table.entries().iter().enumerate() {
            let range = match table.entry_range(i) {
                Some((low, Some(high))) if low == high => low.to_string(),
                Some((low, Some(high))) => format!("{low}-{high}"),
                Some((low, None)) => format!("{low}+"),
                None => continue,
            };
            rows.add_row(vec![range, join(&entry.outcomes)]);
        }
        println!("{rows}");
    }

    if !table.associated_items().is_empty() {
        println!();
        println!("  associated: {}", join(table.associated_items()));
    }

    Ok(())
}

fn join(outcomes: &[Outcome]) -> String {
    outcomes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
