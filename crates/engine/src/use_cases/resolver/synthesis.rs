//! Generated nodes for ids a scenario may reach but not define.

use std::collections::BTreeMap;

use storyloom_domain::{Choice, Node, NodeId, END_NODE, START_NODE};

/// Prefix of AI-generated continuation node ids.
pub const CONTENT_NODE_PREFIX: &str = "content_node_";

pub const END_REVOLUTION_VICTORY: &str = "end_revolution_victory";
pub const END_CORPORATE_POWER: &str = "end_corporate_power";
pub const END_AI_SINGULARITY: &str = "end_ai_singularity";

/// The three canonical cyberpunk endings.
pub const CYBERPUNK_ENDINGS: [&str; 3] =
    [END_REVOLUTION_VICTORY, END_CORPORATE_POWER, END_AI_SINGULARITY];

struct Beat {
    id: &'static str,
    description: &'static str,
    choices: [(&'static str, &'static str, &'static str); 3],
}

// Every beat either reaches an ending directly or moves one step closer; the
// first choice of each beat never leads back toward `start`.
const CYBERPUNK_BEATS: &[Beat] = &[
    Beat {
        id: "ai_alliance_formation",
        description: "VESPER's avatar flickers into being beside you. Together you could \
                      bring the whole grid to its knees.",
        choices: [
            ("spark_revolution", "Broadcast VESPER's manifesto to the city", "ai_revolution_beginning"),
            ("sell_out_ai", "Sell VESPER's location to the corporation", END_CORPORATE_POWER),
            ("merge_with_ai", "Let VESPER into your implants", END_AI_SINGULARITY),
        ],
    },
    Beat {
        id: "ai_revolution_beginning",
        description: "Every billboard in the city shows the same face. The streets answer.",
        choices: [
            ("lead_uprising", "Lead the crowds to Tower 9", END_REVOLUTION_VICTORY),
            ("broker_truce", "Broker a truce with the board", END_CORPORATE_POWER),
            ("release_vesper", "Release VESPER into the global net", END_AI_SINGULARITY),
        ],
    },
    Beat {
        id: "corporate_infiltration",
        description: "Cold corridors, colder security. The boardroom is forty floors up.",
        choices: [
            ("ride_express_lift", "Take the executive lift to the boardroom", "boardroom_showdown"),
            ("accept_contract", "Accept the corporation's job offer", END_CORPORATE_POWER),
            ("leak_schematics", "Leak the tower schematics to the rebels", "underground_uprising"),
        ],
    },
    Beat {
        id: "boardroom_showdown",
        description: "The board sits behind mirrored glass. The CEO smiles as if expecting you.",
        choices: [
            ("take_the_seat", "Take the empty seat at the table", END_CORPORATE_POWER),
            ("expose_board", "Stream the board's secrets to the city", END_REVOLUTION_VICTORY),
            ("upload_core", "Upload VESPER into the corporate core", END_AI_SINGULARITY),
        ],
    },
    Beat {
        id: "underground_uprising",
        description: "The rebels meet in a flooded metro station, arming with stolen rifles.",
        choices: [
            ("storm_the_streets", "Take the fight to the streets", "street_war"),
            ("recruit_vesper", "Ask the AI to join the cause", "ai_alliance_formation"),
            ("betray_rebels", "Hand the rebel roster to corporate security", END_CORPORATE_POWER),
        ],
    },
    Beat {
        id: "street_war",
        description: "Drones burn over the rooftops. The city is choosing a side tonight.",
        choices: [
            ("push_to_tower", "Push through to the tower gates", END_REVOLUTION_VICTORY),
            ("call_ceasefire", "Call a ceasefire on corporate terms", END_CORPORATE_POWER),
            ("hand_over_grid", "Hand control of the drones to VESPER", END_AI_SINGULARITY),
        ],
    },
    Beat {
        id: "data_heist_aftermath",
        description: "The stolen data is still warm. It names a lab, a board and a rebel cell.",
        choices: [
            ("trace_lab", "Trace the lab address", "mind_upload_lab"),
            ("blackmail_board", "Use the data to get inside the tower", "corporate_infiltration"),
            ("share_with_rebels", "Share the data with the rebels", "underground_uprising"),
        ],
    },
    Beat {
        id: "mind_upload_lab",
        description: "Rows of empty bodies wait in glass tanks. One is labelled with your name.",
        choices: [
            ("enter_the_tank", "Climb into the tank", END_AI_SINGULARITY),
            ("free_the_ai", "Free the AI imprisoned here", "ai_alliance_formation"),
            ("destroy_lab", "Destroy the lab and its records", END_CORPORATE_POWER),
        ],
    },
];

const CYBERPUNK_ENDING_TEXT: [(&str, &str, &str); 3] = [
    (
        END_REVOLUTION_VICTORY,
        "Revolution Victory",
        "The towers go dark one by one. For the first time in decades the city belongs to its people.",
    ),
    (
        END_CORPORATE_POWER,
        "Corporate Power",
        "The corporation's grip tightens. The rain keeps falling and nobody asks questions anymore.",
    ),
    (
        END_AI_SINGULARITY,
        "AI Singularity",
        "Something vast wakes up in the net. The city doesn't end; it simply stops being only human.",
    ),
];

/// Cyberpunk beats and endings keyed by id.
pub(super) fn cyberpunk_nodes() -> BTreeMap<NodeId, Node> {
    let beats = CYBERPUNK_BEATS.iter().map(|beat| {
        let node = Node::new(beat.id, title_case(beat.id)).with_description(beat.description);
        beat.choices
            .iter()
            .fold(node, |node, (id, text, target)| {
                node.with_choice(Choice::new(*id, *text, *target))
            })
    });

    let endings = CYBERPUNK_ENDING_TEXT.iter().map(|(id, title, description)| {
        Node::new(*id, *title)
            .with_description(*description)
            .with_choice(Choice::new("read_epilogue", "Read the epilogue", END_NODE))
            .with_choice(Choice::new("start_new_run", "Start a new run", START_NODE))
    });

    beats
        .chain(endings)
        .map(|node| (node.id.clone(), node))
        .collect()
}

pub fn is_content_node(id: &str) -> bool {
    id.starts_with(CONTENT_NODE_PREFIX)
}

/// Two-choice continuation: finish the adventure or go back to the beginning.
pub(super) fn content_node(id: &NodeId) -> Node {
    Node::new(id.clone(), title_case(id.as_str()))
        .with_description("The story continues beyond the written page.")
        .with_choice(Choice::new(
            "continue_to_end",
            "See where this leads",
            END_NODE,
        ))
        .with_choice(Choice::new(
            "return_to_start",
            "Return to the beginning",
            START_NODE,
        ))
}

/// Used only when a scenario has no `end` node of its own.
pub(super) fn adventure_complete() -> Node {
    Node::new("adventure_complete", "Adventure Complete")
        .with_description("Your adventure has come to an end.")
        .with_choice(Choice::new("play_again", "Play again", START_NODE))
}

/// `ai_alliance_formation` -> `Ai Alliance Formation`.
pub fn title_case(id: &str) -> String {
    id.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("ai_alliance_formation"), "Ai Alliance Formation");
        assert_eq!(title_case("content_node_7"), "Content Node 7");
        assert_eq!(title_case("__odd__id"), "Odd Id");
    }

    #[test]
    fn beats_have_three_distinct_choices() {
        for node in cyberpunk_nodes().values() {
            let expected = if CYBERPUNK_ENDINGS.contains(&node.id.as_str()) { 2 } else { 3 };
            assert_eq!(node.choices.len(), expected, "{}", node.id);
            let mut ids: Vec<&str> = node.choices.iter().map(|c| c.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), expected, "{}", node.id);
        }
    }

    #[test]
    fn beat_targets_stay_inside_the_table() {
        let nodes = cyberpunk_nodes();
        for node in nodes.values() {
            for choice in &node.choices {
                let target = choice.next_node.as_str();
                assert!(
                    nodes.contains_key(target) || target == END_NODE || target == START_NODE,
                    "{} -> {}",
                    node.id,
                    target
                );
            }
        }
    }

    #[test]
    fn content_node_prefix_detection() {
        assert!(is_content_node("content_node_7"));
        assert!(!is_content_node("content"));
    }
}
