use comfy_table::{ContentArrangement, Table};

pub fn run() -> Result<(), String> {
    let registry = super::load_registry()?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Dice", "Entries", "Associated"]);

    for t in registry.tables() {
        let associated = match t.associated_items().len() {
            0 => "—".to_string(),
            n => n.to_string(),
        };
        table.add_row(vec![
            t.name().to_string(),
            t.formula().to_string(),
            t.entries().len().to_string(),
            associated,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} tables", registry.len());

    Ok(())
}
