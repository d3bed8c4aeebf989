//! Discoveries: features, evidence, structures and steadings.

use pg_core::{Directive, Outcome, Table};
use pg_mechanics::Die;

use crate::{plus, table};

/// Tables in this section, in registration order.
pub fn tables() -> Vec<Table> {
    vec![
        table("discovery")
            .entry(
                1,
                [
                    Outcome::table("unnatural feature"),
                    Outcome::text("How does it affect its surroundings ?"),
                ],
            )
            .entry(
                2,
                [
                    Outcome::table("natural feature"),
                    Outcome::text("Describe how they notice it and what sets it appart ?"),
                ],
            )
            .entry(
                5,
                [
                    Outcome::table("evidence"),
                    Outcome::text("Consider the implications and be ready for them to take the bait."),
                ],
            )
            .entry(
                7,
                [
                    Outcome::table("creature"),
                    Outcome::text("Not an immediate threat but might become one."),
                ],
            )
            .entry(
                9,
                [
                    Outcome::table("structure"),
                    Outcome::text("Who built it ? Is it connected to anything else they made nearby ?"),
                ],
            ),
        table("unnatural feature")
            .entry(1, ["unnatural feature arcane"])
            .entry(10, ["unnatural feature planar"])
            .entry(12, ["unnatural feature divine"]),
        table("unnatural feature arcane")
            .entry(1, ["residue"])
            .entry(3, ["blight"])
            .entry(6, ["alteration/mutation"])
            .entry(8, ["enchantment"])
            .entry(11, ["source/repository"])
            .associated(["alignement", "magic type"]),
        table("unnatural feature planar")
            .entry(1, ["distortion/warp"])
            .entry(5, ["portal/gate"])
            .entry(9, ["rift/tear"])
            .entry(11, ["outpost"])
            .associated(["alignement", "element"]),
        table("unnatural feature divine")
            .entry(1, ["mark/sign"])
            .entry(4, ["cursed place"])
            .entry(7, ["hallowed place"])
            .entry(10, ["watched place"])
            .entry(12, ["presence"])
            .associated(["alignement", "aspect"]),
        table("natural feature")
            .entry(1, ["lair"])
            .entry(3, ["obstacle"])
            .entry(5, ["terrain change"])
            .entry(8, ["water feature"])
            .entry(10, ["landmark"])
            .entry(12, ["resource"]),
        table("lair")
            .entry(1, ["burrow"])
            .entry(4, ["cave/tunnels"])
            .entry(8, ["nest/aerie"])
            .entry(10, ["hive"])
            .entry(11, ["structure ruin"])
            .associated(["visibility", "creature responsible", "creature"]),
        table("obstacle")
            .entry(1, ["difficult ground (specific to terrain)"])
            .entry(6, ["cliff/crevasse/chasm"])
            .entry(9, ["ravine/gorge"])
            .entry(11, ["oddity"]),
        table("terrain change")
            .entry(1, ["limited area of another terrain type", "terrain"])
            .entry(5, ["crevice/hole/pit/cave"])
            .entry(7, ["altitude change"])
            .entry(9, ["canyon/valley"])
            .entry(11, ["rise/peak in distance"]),
        table("water feature")
            .entry(1, ["spring/hotspring"])
            .entry(2, ["waterfall/geyser"])
            .entry(3, ["creek/stream/brook"])
            .entry(7, ["pond/lake"])
            .entry(9, ["river"])
            .entry(11, ["sea/ocean"]),
        table("landmark")
            .entry(1, ["water-based (waterfall, geyser, ...)"])
            .entry(4, ["plant-based (ancient tree, giant flowers, ...)"])
            .entry(7, ["earth-based (peak, formation, crater, ...)"])
            .entry(11, ["oddity"]),
        table("resource")
            .entry(1, ["game/fruit/vegetable"])
            .entry(5, ["herb/spice/dye source"])
            .entry(7, ["timber/stone"])
            .entry(10, ["ore (copper, iron, ...)"])
            .entry(12, ["precious metal/gems"])
            .associated(["size", "visibility"]),
        table("evidence")
            .entry(1, ["tracks/spoor"])
            .entry(7, ["remains/debris", "age", "visibility"])
            .entry(11, ["stash/cache"]),
        table("tracks/spoor")
            .entry(1, ["faint/unclear"])
            .entry(4, ["definite/clear"])
            .entry(7, ["multiple"])
            .entry(9, ["signs of violence"])
            .entry(11, ["trail of blood/other"])
            .associated(["age", "creature responsible", "creature"]),
        table("remains/debris")
            .entry(1, ["bones"])
            .entry(5, ["corpse/carcass"])
            .entry(8, ["site of violence"])
            .entry(10, ["junk/refuse"])
            .entry(11, ["lost supplies/cargo"])
            .entry(12, ["tools/weapons/armor"]),
        table("stash/cache")
            .entry(1, ["trinkets/coins"])
            .entry(4, ["tools/weapons/armor"])
            .entry(6, ["map"])
            .entry(8, ["food/supplies"])
            .entry(10, ["treasure"]),
        table("structure")
            .entry(1, ["structure enigmatic"])
            .entry(2, ["structure infrastructure"])
            .entry(4, ["structure dwelling"])
            .entry(5, ["structure burial/religious"])
            .entry(7, ["steading"])
            .entry(9, ["structure ruin"]),
        table("structure enigmatic")
            .entry(1, ["earthworks"])
            .entry(5, ["megalith"])
            .entry(9, ["statue/idol/totem"])
            .entry(12, ["oddity"])
            .associated([
                Outcome::from(Directive::new("age").with_formula(plus(Die::D8, 4))),
                Outcome::from(Directive::new("size").with_formula(plus(Die::D8, 4))),
                Outcome::from("visibility"),
            ]),
        table("structure infrastructure")
            .entry(1, ["track/path"])
            .entry(5, ["road"])
            .entry(9, ["bridge/ford"])
            .entry(11, ["mine/quarry"])
            .entry(12, ["aqueduct/canal/portal"])
            .associated([
                Outcome::from("creature responsible"),
                Outcome::from(Directive::new("creature").with_formula(plus(Die::D4, 4))),
            ]),
        table("structure dwelling")
            .entry(1, ["campsite"])
            .entry(4, ["hovel/hut"])
            .entry(7, ["farm"])
            .entry(9, ["inn/roadhouse"])
            .entry(11, ["tower/keep/estate"])
            .associated([
                Outcome::from("creature responsible"),
                Outcome::from(Directive::new("creature").with_formula(plus(Die::D4, 4))),
            ]),
        table("structure burial/religious")
            .entry(1, ["grave marker/barrow"])
            .entry(3, ["graveyard/necropolis"])
            .entry(5, ["tomb/crypt"])
            .entry(7, ["shrine"])
            .entry(10, ["temple/retreat"])
            .entry(12, ["great temple"])
            .associated([
                Outcome::from("alignement"),
                Outcome::from("aspect"),
                Outcome::from("creature responsible"),
                Outcome::from(Directive::new("creature").with_formula(plus(Die::D4, 4))),
            ]),
        table("structure ruin")
            .entry(
                1,
                [
                    Outcome::from(Directive::new("structure infrastructure").with_formula(plus(Die::D6, 6)).without_associated()),
                ],
            )
            .entry(
                3,
                [
                    Outcome::from(Directive::new("structure dwelling").with_formula(plus(Die::D8, 4)).without_associated()),
                ],
            )
            .entry(
                5,
                [
                    Outcome::from(Directive::new("structure burial/religious").with_formula(plus(Die::D8, 4)).without_associated()),
                ],
            )
            .entry(
                7,
                [
                    Outcome::from(Directive::new("steading").with_formula(plus(Die::D10, 2)).without_associated()),
                ],
            )
            .entry(9, ["dungeon"])
            .associated([
                Outcome::from(Directive::new("age").with_formula(plus(Die::D8, 4))),
                Outcome::from("ruination"),
                Outcome::from("visibility"),
            ]),
        table("steading")
            .entry(1, ["village"])
            .entry(6, ["town"])
            .entry(9, ["keep"])
            .entry(12, ["city"]),
    ]
}
