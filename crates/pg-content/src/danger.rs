//! Dangers: hazards, unnatural entities and traps.

use pg_core::Table;

use crate::table;

/// Tables in this section, in registration order.
pub fn tables() -> Vec<Table> {
    vec![
        table("danger")
            .entry(
                1,
                [
                    "unnatural entity (describt it, creepy, twisted, awe-inspinring)",
                    "unnatural entity",
                ],
            )
            .entry(2, ["hazard (threaten them and their stuff)", "hazard"])
            .entry(7, ["creature"]),
        table("unnatural entity")
            .entry(1, ["unnatural entity undead"])
            .entry(9, ["unnatural entity planar"])
            .entry(12, ["unnatural entity divine"]),
        table("unnatural entity undead")
            .entry(1, ["haunt/wisp"])
            .entry(5, ["ghost/spectre"])
            .entry(9, ["banshee"])
            .entry(10, ["wraith/wight"])
            .entry(12, ["spirit lord/master"])
            .associated(["ability", "activity", "alignement", "disposition"]),
        table("unnatural entity planar")
            .entry(1, ["imp (Small)"])
            .entry(4, ["lesser elemental"])
            .entry(7, ["lesser demon/horror"])
            .entry(10, ["greater elemental"])
            .entry(11, ["greater demon/horror"])
            .entry(12, ["devil/elemental lord"])
            .associated([
                "ability",
                "activity",
                "alignement",
                "disposition",
                "element",
                "feature",
                "monster tag",
            ]),
        table("unnatural entity divine")
            .entry(1, ["agent"])
            .entry(6, ["champion"])
            .entry(10, ["army (Horde)"])
            .entry(12, ["avatar"])
            .associated([
                "ability",
                "activity",
                "alignement",
                "disposition",
                "element",
                "feature",
                "monster tag",
            ]),
        table("hazard")
            .entry(1, ["hazard unnatural"])
            .entry(3, ["hazard natural"])
            .entry(11, ["hazard trap"]),
        table("hazard unnatural")
            .entry(1, ["taint/blight/curse"])
            .entry(4, ["arcane trap/effect"])
            .entry(9, ["planar trap/effect"])
            .entry(12, ["divine"])
            .associated(["aspect", "visibility"]),
        table("hazard natural")
            .entry(1, ["blinding mist/fog"])
            .entry(3, ["bog/mire/quicksand"])
            .entry(5, ["pitfall/sinkhole/chasm"])
            .entry(8, ["poison/disease"])
            .entry(10, ["flood/fire/tornado"])
            .entry(12, ["oddity"]),
        table("hazard trap")
            .entry(1, ["alarm"])
            .entry(3, ["ensnaring/paralysing"])
            .entry(6, ["injurious (pit, etc...)"])
            .entry(9, ["gas/fire/poison"])
            .entry(10, ["ambush"])
            .associated(["aspect", "visibility", "creature responsible", "creature"]),
    ]
}
