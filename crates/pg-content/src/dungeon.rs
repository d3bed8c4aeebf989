//! Dungeon sizes, themes and builders.

use pg_core::{Directive, Outcome, Table};
use pg_mechanics::Die;

use crate::{plus, table};

/// Tables in this section, in registration order.
pub fn tables() -> Vec<Table> {
    vec![
        table("dungeon")
            .entry(1, ["dungeon small"])
            .entry(4, ["dungeon medium"])
            .entry(10, ["dungeon large"])
            .entry(12, ["dungeon huge"]),
        table("dungeon small")
            .associated([
                Outcome::from("dungeon function"),
                Outcome::from("dungeon themes"),
                Outcome::from(Directive::new("dungeon theme").repeat(Die::D4)),
                Outcome::from("areas (1d6+2)"),
                Outcome::from("dungeon builder"),
                Outcome::from("dungeon ruination"),
            ]),
        table("dungeon medium")
            .associated([
                Outcome::from("dungeon function"),
                Outcome::from("dungeon themes"),
                Outcome::from(Directive::new("dungeon theme").repeat(Die::D6)),
                Outcome::from("areas (2d6+4)"),
                Outcome::from("dungeon builder"),
                Outcome::from("dungeon ruination"),
            ]),
        table("dungeon large")
            .associated([
                Outcome::from("dungeon function"),
                Outcome::from("dungeon themes"),
                Outcome::from(Directive::new("dungeon theme").repeat(plus(Die::D6, 1))),
                Outcome::from("areas (3d6+6)"),
                Outcome::from("dungeon builder"),
                Outcome::from("dungeon ruination"),
            ]),
        table("dungeon huge")
            .associated([
                Outcome::from("dungeon function"),
                Outcome::from("dungeon themes"),
                Outcome::from(Directive::new("dungeon theme").repeat(plus(Die::D6, 2))),
                Outcome::from("areas (4d6+10)"),
                Outcome::from("dungeon builder"),
                Outcome::from("dungeon ruination"),
            ]),
        table("dungeon function")
            .entry(1, ["source/portal"])
            .entry(2, ["mine"])
            .entry(3, ["tomb/crypt"])
            .entry(5, ["prison"])
            .entry(6, ["lair/den/hideout"])
            .entry(8, ["stronghold/sanctuary"])
            .entry(10, ["shrine/temple/oracle"])
            .entry(11, ["archive/library"])
            .entry(12, ["unknown/mystery"]),
        table("dungeon theme")
            .entry(1, ["dungeon theme mundane"])
            .entry(6, ["dungeon theme unusual"])
            .entry(10, ["dungeon theme extroardinary"]),
        table("dungeon theme mundane")
            .entry(1, ["rot/decay"])
            .entry(2, ["torture/agony"])
            .entry(3, ["madness"])
            .entry(4, ["all is lost"])
            .entry(5, ["noble sacrifice"])
            .entry(6, ["savage fury"])
            .entry(7, ["survival"])
            .entry(8, ["criminal activity"])
            .entry(9, ["secrets/treachery"])
            .entry(10, ["tricks and traps"])
            .entry(11, ["invasion/infestation"])
            .entry(12, ["factions at war"]),
        table("dungeon theme unusual")
            .entry(1, ["creation/invention"])
            .entry(2, ["element"])
            .entry(3, ["knowledge/learning"])
            .entry(4, ["growth/expansion"])
            .entry(5, ["deepening mystery"])
            .entry(6, ["transformation/change"])
            .entry(7, ["chaos and destruction"])
            .entry(8, ["shadowy forces"])
            .entry(9, ["forbidden knowledge"])
            .entry(10, ["poison/disease"])
            .entry(11, ["corruption/blight"])
            .entry(12, ["impending disaster"]),
        table("dungeon theme extroardinary")
            .entry(1, ["scheming evil"])
            .entry(2, ["divination/scrying"])
            .entry(3, ["blasphemy"])
            .entry(4, ["arcane research"])
            .entry(5, ["occult forces"])
            .entry(6, ["an ancient curse"])
            .entry(7, ["mutation"])
            .entry(8, ["the unquiet dead"])
            .entry(9, ["bottomless hunger"])
            .entry(10, ["incredible power"])
            .entry(11, ["unspeakable horrors"])
            .entry(12, ["holy war"]),
        table("dungeon ruination")
            .entry(1, ["arcane disaster"])
            .entry(2, ["damnation/curse"])
            .entry(3, ["earthquake/fire/flood"])
            .entry(5, ["plague/famine/drought"])
            .entry(7, ["overrun by monsters"])
            .entry(9, ["war/invasion"])
            .entry(11, ["depleted resources"])
            .entry(12, ["better prospects elsewhere"]),
        table("dungeon builder")
            .entry(1, ["aliens/precursors"])
            .entry(2, ["demigod/demon"])
            .entry(3, ["natural (caves, etc.)"])
            .entry(5, ["religious order/cult"])
            .entry(6, ["humanoid"])
            .entry(8, ["dwarves/gnomes"])
            .entry(10, ["elves"])
            .entry(11, ["wizard/madman"])
            .entry(12, ["monarch/warlord"]),
        table("dungeon exploration")
            .entry(1, ["unthemed area, common, empty"])
            .entry(2, ["unthemed area, common", "dungeon danger"])
            .entry(3, ["unthemed area, common", "dungeon discovery", "dungeon danger"])
            .entry(5, ["unthemed area, common", "dungeon discovery"])
            .entry(7, ["themed area, common", "dungeon danger"])
            .entry(8, ["themed area, common", "dungeon discovery", "dungeon danger"])
            .entry(9, ["themed area, common", "dungeon discovery"])
            .entry(10, ["themed area, unique", "dungeon danger"])
            .entry(11, ["themed area, unique", "dungeon discovery", "dungeon danger"])
            .entry(12, ["themed area, unique", "dungeon discovery"]),
        table("dungeon discovery")
            .entry(1, ["dungeon discovery dressing"])
            .entry(4, ["dungeon discovery feature"])
            .entry(10, ["dungeon discovery find"]),
        table("dungeon discovery dressing")
            .entry(1, ["junk/debris"])
            .entry(2, ["tracks/marks"])
            .entry(3, ["signs of battle"])
            .entry(4, ["writing/carving"])
            .entry(5, ["warning"])
            .entry(6, ["dead creature", "creature"])
            .entry(7, ["bones/remains"])
            .entry(8, ["book/scroll/map"])
            .entry(9, ["broken door/wall"])
            .entry(10, ["breeze/wind/smell"])
            .entry(11, ["lichen/moss/fungus"])
            .entry(12, ["oddity"]),
        table("dungeon discovery feature")
            .entry(1, ["cave-in/collapse"])
            .entry(2, ["pit/shaft/chasm"])
            .entry(3, ["pillars/columns"])
            .entry(4, ["locked door/gate"])
            .entry(5, ["alcoves/niches"])
            .entry(6, ["bridge/stairs/ramp"])
            .entry(7, ["fountain/well/pool"])
            .entry(8, ["puzzle"])
            .entry(9, ["altar/dais/platform"])
            .entry(10, ["statue/idol"])
            .entry(11, ["magic pool/statue/idol"])
            .entry(12, ["connection to another dungeon"]),
        table("dungeon discovery find")
            .entry(1, ["trinkets"])
            .entry(2, ["tools"])
            .entry(3, ["weapons/armor"])
            .entry(4, ["supplies/trade goods"])
            .entry(5, ["coins/gems/jewelry"])
            .entry(6, ["poisons/potions"])
            .entry(7, ["adventurer/captive"])
            .entry(8, ["magic item"])
            .entry(9, ["scroll/book"])
            .entry(10, ["magic weapon/armor"])
            .entry(11, ["artifact"])
            .entry(12, ["dungeon discovery find", "dungeon discovery find"]),
        table("dungeon danger")
            .entry(1, ["dungeon danger trap"])
            .entry(5, ["dungeon danger creature"])
            .entry(12, ["dungeon danger entity"]),
        table("dungeon danger trap")
            .entry(1, ["alarm"])
            .entry(2, ["ensnaring/paralyzing"])
            .entry(3, ["pit"])
            .entry(4, ["crushing"])
            .entry(5, ["piercing/puncturing"])
            .entry(6, ["chopping/slashing"])
            .entry(7, ["confusing (maze, etc.)"])
            .entry(8, ["gaz (poison, etc.)"])
            .entry(9, ["element"])
            .entry(10, ["ambush"])
            .entry(11, ["magical"])
            .entry(12, ["dungeon danger trap", "dungeon danger trap"]),
        table("dungeon danger creature")
            .entry(1, ["waiting in ambush"])
            .entry(2, ["fighting/squabbling"])
            .entry(3, ["prowling/on patrol"])
            .entry(4, ["looking for food"])
            .entry(5, ["eating/resting"])
            .entry(6, ["guarding"])
            .entry(7, ["on the move"])
            .entry(8, ["searching/scavenging"])
            .entry(9, ["returning to den"])
            .entry(10, ["making plans"])
            .entry(11, ["sleeping"])
            .entry(12, ["dying"])
            .associated(["creature"]),
        table("dungeon danger entity")
            .entry(1, ["alien interloper"])
            .entry(2, ["vermin lord"])
            .entry(3, ["criminal mastermind"])
            .entry(4, ["warlord"])
            .entry(5, ["high priest"])
            .entry(6, ["oracle"])
            .entry(7, ["wizard/witch/alchemist"])
            .entry(8, ["monster lord", "monster"])
            .entry(9, ["evil spirit/ghost"])
            .entry(10, ["undead lord (lich, etc.)"])
            .entry(11, ["demon"])
            .entry(12, ["dark god"]),
    ]
}
