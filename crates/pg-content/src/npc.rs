//! Non-player characters, followers and their traits.

use pg_core::Table;

use crate::table;

/// Tables in this section, in registration order.
pub fn tables() -> Vec<Table> {
    vec![
        table("npc occupation")
            .entry(1, ["criminal"])
            .entry(2, ["commoner"])
            .entry(7, ["tradesperson"])
            .entry(9, ["merchant"])
            .entry(11, ["specialist"])
            .entry(12, ["official"]),
        table("criminal")
            .entry(1, ["bandit/brigand/thug"])
            .entry(3, ["thief"])
            .entry(5, ["bodyguard/tough"])
            .entry(7, ["burglar"])
            .entry(9, ["dealer/fence"])
            .entry(10, ["racketeer"])
            .entry(11, ["lieutenant"])
            .entry(12, ["boss"]),
        table("commoner")
            .entry(1, ["housewife/husband"])
            .entry(2, ["hunter/gatherer"])
            .entry(4, ["farmer/herder"])
            .entry(7, ["laborer/servant"])
            .entry(9, ["driver/porter/guide"])
            .entry(10, ["sailor/soldier/guard"])
            .entry(11, ["clergy/monk"])
            .entry(12, ["apprentice/adventurer"]),
        table("tradesperson")
            .entry(1, ["cobbler/furrier/tailor"])
            .entry(2, ["weaver/basketmaker"])
            .entry(3, ["potter/carpenter"])
            .entry(4, ["mason/baker/chandler"])
            .entry(5, ["cooper/wheelwright"])
            .entry(6, ["tanner/ropemaker"])
            .entry(7, ["smith/tinker"])
            .entry(8, ["stablekeeper/herbalist"])
            .entry(9, ["vintner/jeweler"])
            .entry(10, ["inkeeper/tavernkeeper"])
            .entry(11, ["artist/actor/minstrel"])
            .entry(12, ["armorer/weaponsmith"]),
        table("merchant")
            .entry(1, ["general goods/outfitter"])
            .entry(4, ["raw materials"])
            .entry(5, ["grain/livestock"])
            .entry(6, ["ale/wine/spirits"])
            .entry(7, ["clothing/jewelry"])
            .entry(8, ["weapons/armor"])
            .entry(9, ["spices/tobacco"])
            .entry(10, ["labor/slaves"])
            .entry(11, ["books/scrolls"])
            .entry(12, ["magic supplies/items"]),
        table("specialist")
            .entry(1, ["undertaker"])
            .entry(2, ["sage/scholar/wizard"])
            .entry(3, ["writer/illuminator"])
            .entry(4, ["perfumer"])
            .entry(5, ["architect/engineer"])
            .entry(6, ["locksmith/clockmaker"])
            .entry(7, ["physician/apothecary"])
            .entry(8, ["navigator/guide"])
            .entry(9, ["alchemist/astrologer"])
            .entry(10, ["spy/diplomat"])
            .entry(11, ["cartographer"])
            .entry(12, ["inventor"]),
        table("official")
            .entry(1, ["town crier"])
            .entry(2, ["tax collector"])
            .entry(3, ["armiger/gentry"])
            .entry(5, ["reeve/sheriff/constable"])
            .entry(6, ["mayor/magistrate"])
            .entry(7, ["priest/bishop/abbot"])
            .entry(8, ["guildmaster"])
            .entry(9, ["knight/templar"])
            .entry(10, ["elder/high priest"])
            .entry(11, ["noble (baron, etc.)"])
            .entry(12, ["lord/lady/king/queen"]),
        table("npc trait")
            .entry(1, ["npc trait physical appearance"])
            .entry(7, ["npc trait personality"])
            .entry(10, ["npc trait quirk"]),
        table("npc trait physical appearance")
            .entry(1, ["disfigured (missing teeth, eye, etc.)"])
            .entry(2, ["lasting injury (bad leg, arm, etc.)"])
            .entry(3, ["tattooed/pockmarked/scarred"])
            .entry(4, ["unkempt/shabby/grubby"])
            .entry(5, ["big/thick/brawny"])
            .entry(6, ["small/scrawny/emaciated"])
            .entry(7, ["notable hair (wild, long, none, etc.)"])
            .entry(8, ["notable nose (big, hooked, etc.)"])
            .entry(9, ["notable eyes (blue, bloodshot, etc.)"])
            .entry(10, ["clean/well-dressed/well-groomed"])
            .entry(11, ["attractive/handsome/stunning"])
            .entry(
                12,
                [
                    "they are [roll again] despite [a contradictory detail of your choice]",
                    "npc trait physical appearance",
                    "npc trait physical appearance",
                ],
            ),
        table("npc trait personality")
            .entry(1, ["loner/alienated/antisocial"])
            .entry(2, ["cruel/belligerent/bully"])
            .entry(3, ["anxious/fearful/cowardly"])
            .entry(4, ["envious/covetous/greedy"])
            .entry(5, ["aloof/haughty/arrogant"])
            .entry(6, ["awkward/shy/self-loathing"])
            .entry(7, ["orderly/compulsive/controlling"])
            .entry(8, ["confident/impulsive/reckless"])
            .entry(9, ["kind/generous/compassionate"])
            .entry(10, ["easygoing/relaxed/peaceful"])
            .entry(11, ["cheerful/happy/optimistic"])
            .entry(
                12,
                [
                    "they are [roll again] despite [a contradictory detail of your choice]",
                    "npc trait personality",
                    "npc trait personality",
                ],
            ),
        table("npc trait quirk")
            .entry(1, ["insecure/racist/xenophobic"])
            .entry(2, ["addict (sweets, drugs, sex, etc.)"])
            .entry(3, ["phobia (spiders, fire, darkness, etc.)"])
            .entry(4, ["allergic/asthmatic/chronically ill"])
            .entry(5, ["skeptic/paranoid"])
            .entry(6, ["superstitious/devout/fanatical"])
            .entry(7, ["miser/pack-rat"])
            .entry(8, ["spendthrift/wastrel"])
            .entry(9, ["smart aleck/know-it-all"])
            .entry(10, ["artistic/dreamer/delusional"])
            .entry(11, ["naive/idealistic"])
            .entry(
                12,
                [
                    "they are [roll again] despite [a contradictory detail of your choice]",
                    "npc trait quirk",
                    "npc trait quirk",
                ],
            ),
    ]
}
