//! Shared recovery nodes for well-known ids that many scenarios reference.

use std::collections::BTreeMap;

use storyloom_domain::{Choice, Node, NodeId};

pub(super) fn nodes() -> BTreeMap<NodeId, Node> {
    [
        Node::new("village", "Village")
            .with_description(
                "A quiet village square. Merchants call out their wares and the inn door stands open.",
            )
            .with_atmosphere("chatter, a blacksmith's hammer", "thatched roofs, market stalls")
            .with_choice(Choice::new(
                "explore_market",
                "Browse the market",
                "village_market",
            ))
            .with_choice(Choice::new(
                "rest_at_inn",
                "Rest at the inn",
                "inn_rest",
            ))
            .with_choice(Choice::new(
                "continue_journey",
                "Continue your journey",
                "end",
            )),
        Node::new("village_market", "Village Market")
            .with_description("Stalls overflow with rope, lamp oil, dried meat and rumours.")
            .with_choice(Choice::new(
                "collect_supplies",
                "Stock up on supplies",
                "village",
            ))
            .with_choice(Choice::new(
                "talk_merchant",
                "Chat with a merchant",
                "village",
            )),
        Node::new("inn_rest", "The Inn")
            .with_description("A fire, a bowl of stew and a bed that doesn't move.")
            .with_choice(Choice::new(
                "talk_innkeeper",
                "Talk to the innkeeper",
                "village",
            ))
            .with_choice(Choice::new(
                "continue_journey",
                "Set out again at dawn",
                "end",
            )),
        Node::new("healing", "The Healer's Tent")
            .with_description("Herbs hang from the ceiling. The healer looks you over and reaches for a salve.")
            .with_choice(Choice::new(
                "accept_healing",
                "Accept the healer's care",
                "village",
            ))
            .with_choice(Choice::new(
                "continue_journey",
                "Thank the healer and move on",
                "end",
            )),
        Node::new("escape_combat", "A Narrow Escape")
            .with_description("You break away from the fight, lungs burning, and find cover.")
            .with_choice(Choice::new(
                "flee_to_village",
                "Make for the nearest village",
                "village",
            ))
            .with_choice(Choice::new(
                "search_hideout",
                "Search for a place to hide",
                "forest_path",
            )),
        Node::new("forest_path", "Forest Path")
            .with_description("A narrow trail winds between old trees.")
            .with_choice(Choice::new(
                "explore_forest",
                "Follow the trail deeper",
                "end",
            ))
            .with_choice(Choice::new(
                "return_village",
                "Head back to the village",
                "village",
            )),
    ]
    .into_iter()
    .map(|node| (node.id.clone(), node))
    .collect()
}
