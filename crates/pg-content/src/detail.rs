//! Shared detail tables: age, size, alignment, aspects and the like.

use pg_core::Table;

use crate::table;

/// Tables in this section, in registration order.
pub fn tables() -> Vec<Table> {
    vec![
        table("ability")
            .entry(1, ["bless/curse"])
            .entry(2, ["entangle/trap/snare"])
            .entry(3, ["poison/disease"])
            .entry(4, ["paralyze/petrify"])
            .entry(5, ["mimic/camouflage"])
            .entry(6, ["seduce/hypnotize"])
            .entry(7, ["dissolve/disintegrate"])
            .entry(8, ["magic type"])
            .entry(9, ["drain life/magic"])
            .entry(10, ["immunity:", "element"])
            .entry(11, ["read/control minds"])
            .entry(12, ["ability", "ability"]),
        table("activity")
            .entry(1, ["laying trap/ambush"])
            .entry(2, ["fighting/at war"])
            .entry(3, ["prowling/on patrol"])
            .entry(4, ["hunting/foraging"])
            .entry(5, ["eating/resting"])
            .entry(6, ["crafting/praying"])
            .entry(7, ["traveling/relocating"])
            .entry(8, ["exploring/lost"])
            .entry(9, ["returning home"])
            .entry(10, ["building/excavating"])
            .entry(11, ["sleeping"])
            .entry(12, ["dying"]),
        table("adjective")
            .entry(1, ["slick/slimy"])
            .entry(2, ["rough/hard/sharp"])
            .entry(3, ["smooth/soft/dull"])
            .entry(4, ["corroded/rusty"])
            .entry(5, ["rotten/decaying"])
            .entry(6, ["broken/brittle"])
            .entry(7, ["stinking/smelly"])
            .entry(8, ["weak/thin/drained"])
            .entry(9, ["strong/fat/full"])
            .entry(10, ["pale/poor/shallow"])
            .entry(11, ["dark/rich/deep"])
            .entry(12, ["colorful"]),
        table("age")
            .entry(1, ["being born/built"])
            .entry(2, ["young/recent"])
            .entry(5, ["middle-aged"])
            .entry(8, ["old"])
            .entry(10, ["ancient"])
            .entry(12, ["pre-historic"]),
        table("alignement")
            .entry(1, ["Chaotic"])
            .entry(3, ["Evil"])
            .entry(5, ["Neutral"])
            .entry(9, ["Good"])
            .entry(11, ["Lawful"]),
        table("aspect")
            .entry(1, ["power/strength"])
            .entry(2, ["trickery/dexterity"])
            .entry(3, ["time/constitution"])
            .entry(4, ["knowledge/intelligence"])
            .entry(5, ["nature/wisdom"])
            .entry(6, ["culture/charisma"])
            .entry(7, ["war/lies/discord"])
            .entry(8, ["peace/truth/balance"])
            .entry(9, ["hate/envy"])
            .entry(10, ["love/admiration"])
            .entry(11, ["element"])
            .entry(12, ["aspect", "aspect"]),
        table("condition")
            .entry(1, ["being built/born"])
            .entry(2, ["intact/healthy/stable"])
            .entry(5, ["occupied/active/alert"])
            .entry(8, ["worn/tired/weak"])
            .entry(10, ["vacant/lost"])
            .entry(11, ["ruined/defiled/dying"])
            .entry(12, ["disappeared/dead"]),
        table("disposition")
            .entry(1, ["attacking"])
            .entry(2, ["hostile/aggressive"])
            .entry(5, ["cautious/doubtful"])
            .entry(7, ["fearful/fleeing"])
            .entry(8, ["neutral"])
            .entry(11, ["curious/hopeful"])
            .entry(12, ["friendly"]),
        table("element")
            .entry(1, ["air"])
            .entry(3, ["earth"])
            .entry(5, ["fire"])
            .entry(7, ["water"])
            .entry(9, ["life"])
            .entry(11, ["death"]),
        table("feature")
            .entry(1, ["heavily armored"])
            .entry(2, ["winged/flying"])
            .entry(4, ["multiple heads/headless"])
            .entry(5, ["many eyes/one eye"])
            .entry(6, ["many limbs/tails"])
            .entry(7, ["tentacles/tendrils"])
            .entry(8, ["aspect"])
            .entry(9, ["element"])
            .entry(10, ["magic type"])
            .entry(11, ["oddity"])
            .entry(12, ["feature", "feature"]),
        table("magic type")
            .entry(1, ["divination"])
            .entry(3, ["enchantment"])
            .entry(5, ["evocation"])
            .entry(7, ["illusion"])
            .entry(9, ["necromancy"])
            .entry(11, ["summoning"]),
        table("group number")
            .entry(1, ["Solitary (1)"])
            .entry(5, ["group number (1d6 + 2)"])
            .entry(10, ["Horde (4d6 per wave)"]),
        table("oddity")
            .entry(1, ["weird color/smell/sound"])
            .entry(2, ["geometric"])
            .entry(3, ["web/network/system"])
            .entry(4, ["crystalline/glass-like"])
            .entry(5, ["fungal"])
            .entry(6, ["gaseous/smokey"])
            .entry(7, ["mirage/illusion"])
            .entry(8, ["volcanic/explosive"])
            .entry(9, ["magnetic/repellant"])
            .entry(10, ["devoid of life"])
            .entry(11, ["unexpectedly alive"])
            .entry(12, ["oddity", "oddity"]),
        table("orientation")
            .entry(1, ["down/earthward"])
            .entry(3, ["north"])
            .entry(4, ["northeast"])
            .entry(5, ["east"])
            .entry(6, ["southeast"])
            .entry(7, ["south"])
            .entry(8, ["southwest"])
            .entry(9, ["west"])
            .entry(10, ["northwest"])
            .entry(11, ["up/skyward"]),
        table("ruination")
            .entry(1, ["arcane disaster"])
            .entry(2, ["damnation/curse"])
            .entry(3, ["earthquake/fire/flood"])
            .entry(5, ["plague/famine/drought"])
            .entry(7, ["overrun by monsters"])
            .entry(9, ["war/invasion"])
            .entry(11, ["depleted resources"])
            .entry(12, ["better prospects elsewhere"]),
        table("size")
            .entry(1, ["Tiny"])
            .entry(2, ["Small"])
            .entry(4, ["medium-sized"])
            .entry(10, ["Large"])
            .entry(12, ["Huge"]),
        table("monster tag")
            .entry(1, ["Amorphous"])
            .entry(2, ["Cautious"])
            .entry(3, ["Construct"])
            .entry(4, ["Devious"])
            .entry(5, ["Intelligent"])
            .entry(6, ["Magical"])
            .entry(7, ["Organized"])
            .entry(9, ["Planar"])
            .entry(10, ["Stealthy"])
            .entry(11, ["Terrifying"])
            .entry(12, ["monster tag", "monster tag"]),
        table("terrain")
            .entry(1, ["wasteland/desert"])
            .entry(2, ["flatland/plain"])
            .entry(4, ["wetland/marsh/swamp"])
            .entry(5, ["woodland/forest/jungle"])
            .entry(8, ["highland/hills"])
            .entry(10, ["mountains"])
            .entry(12, ["oddity"]),
        table("visibility")
            .entry(1, ["buried/camouflaged/nigh invisible"])
            .entry(3, ["partly covered/over-grown/hidden"])
            .entry(7, ["obvious/in plain sight"])
            .entry(10, ["visible at near distance"])
            .entry(12, ["visible at great distance/focal point"]),
        table("binding")
            .entry(1, ["mask"])
            .entry(2, ["bones"])
            .entry(3, ["chains/rope/ribbon"])
            .entry(4, ["words/names/runes"])
            .entry(5, ["ring"])
            .entry(6, ["halo/light/shadow"])
            .entry(7, ["scar/tatoo"])
            .entry(8, ["gem/jewelry"])
            .entry(9, ["shared blood/flesh"])
            .entry(10, ["key"])
            .entry(11, ["silver/gold/mithril"])
            .entry(12, ["weapon"]),
    ]
}
