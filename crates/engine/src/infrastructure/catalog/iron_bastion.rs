use storyloom_domain::{Choice, Difficulty, Node, Quest, Scenario, Theme};

use super::IRON_BASTION;

pub(super) fn scenario() -> Scenario {
    Scenario::new(
        IRON_BASTION,
        "Siege of the Iron Bastion",
        Theme::Warhammer,
        Difficulty::Extreme,
    )
    .with_description(
        "The hive-fortress of Karthos has held for a thousand years. It has one night left.",
    )
    .with_node(
        Node::new("start", "The Outer Wall")
            .with_description(
                "The void shields flicker. Below, a tide of traitor guns rolls toward the breach.",
            )
            .with_atmosphere("artillery, litanies over vox", "burning promethium, red sky")
            .with_choice(Choice::new(
                "attack_breach",
                "Lead a counter-charge into the breach",
                "breach",
            ))
            .with_choice(Choice::new(
                "rally_troops",
                "Rally the wavering troops on the rampart",
                "rampart",
            )),
    )
    .with_node(
        Node::new("breach", "The Breach")
            .with_description("Rubble, smoke and the roar of chainswords.")
            .with_choice(Choice::new(
                "fight_through",
                "Fight through to the inner sanctum",
                "sanctum",
            ))
            .with_choice(Choice::new(
                "retreat_to_lines",
                "Fall back to the second line",
                "escape_combat",
            )),
    )
    .with_node(
        Node::new("rampart", "The Rampart")
            .with_description("Guardsmen cling to their lasguns and watch you for orders.")
            .with_choice(
                Choice::new("use_tactics", "Redeploy the heavy weapons teams", "breach")
                    .with_effect("tactics_used", 1)
                    .with_effect("combat_skill", 1),
            )
            .with_choice(Choice::new(
                "speak_commissar",
                "Speak with the commissar",
                "sanctum",
            )),
    )
    .with_node(
        Node::new("sanctum", "The Inner Sanctum")
            .with_description("The fortress heart. A traitor sorcerer chants before the reactor.")
            .with_choice(Choice::new(
                "purge_heretics",
                "Purge the heretics",
                "end",
            ))
            .with_choice(Choice::new(
                "cast_litany",
                "Recite the litany of shielding",
                "end",
            )),
    )
    .with_node(
        Node::new("end", "Dawn Over Karthos")
            .with_description("The shields hold. For now."),
    )
    .with_quest(
        Quest::new("hold_the_line", "Hold the Line")
            .with_description("Survive the night and keep the walls manned.")
            .requiring("combat_won", 2)
            .requiring("tactics_used", 1)
            .rewarding("xp", 200)
            .rewarding_title("Bastion Guard"),
    )
}
