use storyloom_domain::{Choice, Difficulty, Node, Quest, Scenario, Theme};

use super::WHISPERING_MANOR;

pub(super) fn scenario() -> Scenario {
    Scenario::new(
        WHISPERING_MANOR,
        "The Whispering Manor",
        Theme::Horror,
        Difficulty::Hard,
    )
    .with_description(
        "Blackwood Manor has stood empty for forty years. Tonight every window is lit.",
    )
    .with_node(
        Node::new("start", "The Gates")
            .with_description(
                "The iron gates stand open. Somewhere inside, a piano plays the same three notes.",
            )
            .with_atmosphere("creaking iron, distant piano", "fog, candlelit windows")
            .with_choice(Choice::new("enter_manor", "Push open the front door", "foyer"))
            .with_choice(Choice::new(
                "search_grounds",
                "Search the overgrown grounds",
                "garden",
            )),
    )
    .with_node(
        Node::new("foyer", "The Foyer")
            .with_description(
                "Portraits line the staircase. Every face has been scratched out except one.",
            )
            .with_choice(Choice::new(
                "investigate_portraits",
                "Investigate the untouched portrait",
                "library",
            ))
            .with_choice(Choice::new(
                "speak_ghost",
                "Speak to the cold presence on the stairs",
                "ghost_parlor",
            ))
            .with_choice(Choice::new("flee_manor", "Flee while you still can", "end")),
    )
    .with_node(
        Node::new("garden", "The Dead Garden")
            .with_description(
                "Roses grow black here. A path of broken flagstones leads to the family crypt.",
            )
            .with_choice(Choice::new(
                "gather_herbs",
                "Gather wolfsbane from the beds",
                "foyer",
            ))
            .with_choice(Choice::new("explore_crypt", "Descend into the crypt", "crypt")),
    )
    .with_node(
        Node::new("library", "The Library")
            .with_description(
                "Books lie open at the same page in a dozen languages: a name, repeated.",
            )
            .with_choice(Choice::new(
                "search_shelves",
                "Search the shelves for a hidden latch",
                "hidden_study",
            ))
            .with_choice(Choice::new(
                "cast_banishing",
                "Cast the banishing rite from the open book",
                "ghost_parlor",
            )),
    )
    .with_node(
        Node::new("ghost_parlor", "The Parlor")
            .with_description(
                "A woman in a wedding dress sits at the piano. She stops playing when you enter.",
            )
            .with_choice(Choice::new(
                "talk_spirit",
                "Ask her what she is waiting for",
                "hidden_study",
            ))
            .with_choice(
                Choice::new("banish_spirit", "Finish the rite and banish her", "end")
                    .with_effect("intelligence_skill", 3)
                    .with_effect("clues_found", 1),
            ),
    )
    .with_node(
        Node::new("crypt", "The Crypt")
            .with_description(
                "A coffin lid grinds aside. The thing inside still wears its burial ring.",
            )
            .with_choice(Choice::new(
                "fight_revenant",
                "Fight the revenant",
                "hidden_study",
            ))
            .with_choice(Choice::new(
                "flee_crypt",
                "Run back up the stairs",
                "escape_combat",
            )),
    )
    .with_node(
        Node::new("hidden_study", "The Hidden Study")
            .with_description(
                "A desk, a journal and a ring-shaped indentation in the dust.",
            )
            .with_choice(
                Choice::new("read_journal", "Read the journal", "end")
                    .with_effect("clues_found", 2)
                    .with_effect("intelligence_skill", 2),
            )
            .with_choice(Choice::new(
                "collect_relic",
                "Take the silver ring",
                "content_node_13",
            )),
    )
    .with_node(
        Node::new("end", "Dawn").with_description(
            "The lights go out one by one. Whatever lived here is quieter now.",
        ),
    )
    .with_quest(
        Quest::new("manor_sleuth", "Manor Sleuth")
            .with_description("Piece together what happened at Blackwood Manor.")
            .requiring("clues_found", 3)
            .requiring("search_actions", 2)
            .rewarding("xp", 150)
            .rewarding_title("Sleuth"),
    )
    .with_quest(
        Quest::new("spirit_whisperer", "Spirit Whisperer")
            .with_description("Earn the trust of the manor's restless dead.")
            .requiring("conversations", 2)
            .requiring("charisma_skill", 4)
            .rewarding("xp", 120)
            .rewarding("relationship_built", 1)
            .rewarding_title("Medium"),
    )
}
