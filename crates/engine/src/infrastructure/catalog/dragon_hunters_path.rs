use storyloom_domain::{Choice, Difficulty, Node, Scenario, Theme};

use super::DRAGON_HUNTERS_PATH;

pub(super) fn scenario() -> Scenario {
    Scenario::new(
        DRAGON_HUNTERS_PATH,
        "Dragon Hunter's Path",
        Theme::Fantasy,
        Difficulty::Medium,
    )
    .with_description(
        "A red dragon has burned three farms outside Emberfall. The village council is \
         offering a hoard of gold to whoever ends the threat, by blade or by word.",
    )
    .with_node(
        Node::new("start", "The Village of Emberfall")
            .with_description(
                "Smoke still hangs over the fields. Villagers gather in the square, \
                 whispering about the shadow that circles the northern peaks.",
            )
            .with_atmosphere("church bells, murmuring crowd", "ash drifting over thatched roofs")
            .with_choice(Choice::new(
                "gather_info",
                "Ask the villagers what they saw",
                "villager_info",
            ))
            .with_choice(Choice::new(
                "explore_outskirts",
                "Head straight for the scorched farms",
                "forest_edge",
            ))
            .with_choice(Choice::new(
                "visit_healer",
                "Visit the healer before setting out",
                "healing",
            )),
    )
    .with_node(
        Node::new("villager_info", "Frightened Witnesses")
            .with_description(
                "A shepherd swears the dragon limps on its left wing. A miller's daughter \
                 saw it drink from the lake beneath the old watchtower.",
            )
            .with_choice(Choice::new(
                "talk_elder",
                "Seek out the village elder",
                "elder_hut",
            ))
            .with_choice(Choice::new(
                "explore_outskirts",
                "Follow the shepherd's directions",
                "forest_edge",
            )),
    )
    .with_node(
        Node::new("elder_hut", "The Elder's Hut")
            .with_description(
                "Elder Maren unrolls a map older than the village itself. 'The beast is \
                 not the first,' she says. 'The last hunter came back with a pact, not a head.'",
            )
            .with_choice(Choice::new(
                "accept_quest",
                "Swear to end the threat",
                "forest_edge",
            ))
            .with_choice(Choice::new(
                "ask_for_help",
                "Ask the village for supplies",
                "village",
            )),
    )
    .with_node(
        Node::new("forest_edge", "The Scorched Forest")
            .with_description(
                "Blackened trunks lean over a trail of claw marks. Something heavy was \
                 dragged north toward the mountain.",
            )
            .with_atmosphere("crackling embers, distant roar", "charred trees, glowing tracks")
            .with_choice(Choice::new(
                "search_tracks",
                "Follow the claw marks",
                "dragon_lair_entrance",
            ))
            .with_choice(Choice::new(
                "gather_herbs",
                "Gather fire-moss for burn salves",
                "healing",
            ))
            .with_choice(Choice::new(
                "return_village",
                "Return to the village",
                "village",
            )),
    )
    .with_node(
        Node::new("dragon_lair_entrance", "The Lair")
            .with_description(
                "Heat rolls out of a cave mouth wide enough for a ship. Inside, the dragon \
                 shifts, and one golden eye opens.",
            )
            .with_choice(Choice::new(
                "attack_dragon",
                "Charge with your blade drawn",
                "dragon_battle",
            ))
            .with_choice(Choice::new(
                "negotiate_dragon",
                "Lower your weapon and speak",
                "dragon_negotiation",
            ))
            .with_choice(Choice::new(
                "cast_ward",
                "Cast a ward against flame",
                "dragon_battle",
            )),
    )
    .with_node(
        Node::new("dragon_battle", "Fire and Steel")
            .with_description(
                "The dragon's breath splits the cavern. Its wounded wing drags, leaving an opening.",
            )
            .with_choice(Choice::new(
                "fight_on",
                "Strike at the wounded wing",
                "treasure_hoard",
            ))
            .with_choice(Choice::new(
                "flee_battle",
                "Retreat before the flames close in",
                "escape_combat",
            )),
    )
    .with_node(
        Node::new("dragon_negotiation", "A Dragon's Bargain")
            .with_description(
                "'Hunters,' the dragon rumbles. 'The farmers poisoned my lake. I only \
                 returned the favour.'",
            )
            .with_choice(Choice::new(
                "speak_truth",
                "Promise to bring the truth to the council",
                "treasure_hoard",
            ))
            .with_choice(Choice::new(
                "offer_help",
                "Offer to cleanse the lake yourself",
                "end",
            )),
    )
    .with_node(
        Node::new("treasure_hoard", "The Hoard")
            .with_description(
                "Gold, bones and a single speckled egg, warm to the touch.",
            )
            .with_choice(Choice::new(
                "collect_treasure",
                "Fill your packs and go home",
                "end",
            ))
            .with_choice(
                Choice::new("take_dragon_egg", "Wrap the egg in your cloak", "content_node_1")
                    .with_effect("items_collected", 1)
                    .with_effect("xp", 50),
            ),
    )
    .with_node(
        Node::new("end", "The Legend Is Written")
            .with_description(
                "Emberfall will tell this story for generations, whichever version of it you chose.",
            ),
    )
}
