//! Creatures by habitat, plus their traits.

use pg_core::Table;

use crate::table;

/// Tables in this section, in registration order.
pub fn tables() -> Vec<Table> {
    vec![
        table("creature")
            .entry(1, ["beast"])
            .entry(
                5,
                [
                    "human",
                    "npc occupation",
                    "npc trait",
                    "activity",
                    "alignement",
                    "disposition",
                    "group number",
                ],
            )
            .entry(7, ["humanoid"])
            .entry(9, ["monster"]),
        table("beast")
            .entry(1, ["beast earthbound"])
            .entry(8, ["beast airborne"])
            .entry(11, ["beast water-going"])
            .associated(["activity", "disposition", "group number", "size"]),
        table("beast earthbound")
            .entry(1, ["termite/tick/louse"])
            .entry(2, ["snail/slug/worm"])
            .entry(3, ["ant/centipede/scorpion"])
            .entry(4, ["snake/lizard"])
            .entry(5, ["vole/rat/weasel"])
            .entry(6, ["boar/pig"])
            .entry(7, ["dog/fox/wolf"])
            .entry(8, ["cat/lion/panther"])
            .entry(9, ["deer/horse/camel"])
            .entry(10, ["ox/rhino"])
            .entry(11, ["bear/ape/gorilla"])
            .entry(12, ["mammoth/dinosaur"]),
        table("beast airborne")
            .entry(1, ["mosquito/firefly"])
            .entry(2, ["locust/dragonfly/moth"])
            .entry(3, ["bee/wasp"])
            .entry(4, ["chicken/duck/goose"])
            .entry(5, ["songbird/parrot"])
            .entry(6, ["gull/waterbird"])
            .entry(7, ["heron/crane/stork"])
            .entry(8, ["crow/raven"])
            .entry(9, ["hawk/falcon"])
            .entry(10, ["eagle/owl"])
            .entry(11, ["condor"])
            .entry(12, ["pteranodon"]),
        table("beast water-going")
            .entry(1, ["insect"])
            .entry(2, ["jelly/anemone"])
            .entry(3, ["clam/oyster/snail"])
            .entry(4, ["eel/snake"])
            .entry(5, ["frog/toad"])
            .entry(6, ["fish"])
            .entry(7, ["crab/lobster"])
            .entry(8, ["turtle"])
            .entry(9, ["alligator/crocodile"])
            .entry(10, ["dolphin/shark"])
            .entry(11, ["squid/octopus"])
            .entry(12, ["whale"]),
        table("humanoid")
            .entry(1, ["humanoid common"])
            .entry(8, ["humanoid uncommon"])
            .entry(11, ["humanoid hybrid"])
            .associated([
                "npc occupation",
                "npc trait",
                "activity",
                "disposition",
                "group number",
                "alignement",
            ]),
        table("humanoid common")
            .entry(1, ["halfling (Small)"])
            .entry(4, ["goblin/kobold (Small)"])
            .entry(6, ["dwarf/gnome (Small)"])
            .entry(8, ["orc/hobgobelin/gnoll"])
            .entry(10, ["half-elf/half-orc/etc..."])
            .entry(12, ["elf"]),
        table("humanoid uncommon")
            .entry(1, ["fey (Tiny)"])
            .entry(2, ["catfolk/dogfolk"])
            .entry(4, ["lizardfolk/merfolk"])
            .entry(7, ["birdfolk"])
            .entry(8, ["ogre/troll (Large)"])
            .entry(11, ["cyclops/giant (Large)"]),
        table("humanoid hybrid")
            .entry(1, ["centaur"])
            .entry(3, ["werewolf/werebear"])
            .entry(6, ["werecreature: human + beast", "beast"])
            .entry(7, ["human + beast", "beast"])
            .entry(11, ["human + 2 beasts", "beast", "beast"]),
        table("monster")
            .entry(1, ["monster unusual"])
            .entry(8, ["monster rare"])
            .entry(11, ["monster legendary"])
            .associated([
                "activity",
                "disposition",
                "size",
                "alignement",
                "group number",
                "OPTIONAL",
                "ability",
                "adjective",
                "age",
                "aspect",
                "condition",
                "feature",
                "monster tag",
            ]),
        table("monster unusual")
            .entry(1, ["plant/fungus"])
            .entry(4, ["Undead Human"])
            .entry(6, ["Undead humanoid", "humanoid"])
            .entry(7, ["beast + beast", "beast", "beast"])
            .entry(9, ["beast + ability", "beast", "ability"])
            .entry(11, ["beast + feature", "beast", "feature"]),
        table("monster rare")
            .entry(1, ["slime/ooze (Amorphous)"])
            .entry(4, ["creation (Construct)"])
            .entry(7, ["beast + oddity", "beast", "oddity"])
            .entry(10, ["unnatural entity"]),
        table("monster legendary")
            .entry(1, ["dragon/colossus (Huge)"])
            .entry(4, ["monster unusual + Huge", "monster unusual"])
            .entry(7, ["monster rare + Huge", "monster rare"])
            .entry(10, ["beast + dragon", "beast"])
            .entry(11, ["monster unusual + dragon", "monster unusual"])
            .entry(12, ["monster rare + dragon", "monster rare"]),
    ]
}
