use pg_engine::{GeneratorConfig, Generator, render};
use pg_mechanics::{DiceFormula, Roll};

pub fn run(
    config: &GeneratorConfig,
    name: &str,
    count: u32,
    dice: Option<&str>,
    include_associated: bool,
    json: bool,
) -> Result<(), String> {
    let registry = super::load_registry()?;
    let table = registry
        .get(name)
        .ok_or_else(|| format!("{name}: not found"))?;

    let formula = match dice {
        Some(notation) => {
            let formula: DiceFormula = notation.parse().map_err(|e| format!("--dice: {e}"))?;
            Some(Roll::from(formula))
        }
        None => None,
    };

    let generator = Generator::new(&registry).with_limits(config.limits);
    let mut rng = config.rng();
    let mut stories = Vec::new();
    for _ in 0..count.max(1) {
        let story = generator
            .generate(table, formula.as_ref(), include_associated, &mut rng)
            .map_err(|e| super::describe(&e))?;
        stories.push(story);
    }

    if json {
        let out = serde_json::to_string_pretty(&stories).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        for story in &stories {
            print!("{}", render(story));
        }
    }

    Ok(())
}
