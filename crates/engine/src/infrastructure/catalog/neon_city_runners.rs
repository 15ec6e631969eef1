use storyloom_domain::{Choice, Difficulty, Node, Scenario, Theme};

use super::NEON_CITY_RUNNERS;

// Most branches leave the authored graph after two or three beats. The
// resolver's cyberpunk table owns everything past that point.
pub(super) fn scenario() -> Scenario {
    Scenario::new(
        NEON_CITY_RUNNERS,
        "Neon City Runners",
        Theme::Cyberpunk,
        Difficulty::Hard,
    )
    .with_description(
        "Arasaka-Veil owns the city, the rain and most of the people in it. Your crew \
         just found out it doesn't own the AI living in its mainframe.",
    )
    .with_node(
        Node::new("start", "Neon Rain")
            .with_description(
                "Holo-ads flicker through the downpour. Your deck buzzes with an \
                 encrypted ping from a source that shouldn't exist.",
            )
            .with_atmosphere("rain on steel, synth bass", "magenta neon, wet chrome")
            .with_choice(Choice::new(
                "jack_in",
                "Jack in and trace the ping",
                "net_dive",
            ))
            .with_choice(Choice::new(
                "meet_fixer",
                "Meet your fixer at the safehouse",
                "safehouse",
            ))
            .with_choice(Choice::new(
                "explore_streets",
                "Walk the night market",
                "street_market",
            )),
    )
    .with_node(
        Node::new("net_dive", "Into the Net")
            .with_description(
                "Data towers rise like cathedrals. The signal pulses from behind \
                 corporate ICE, patient, almost curious.",
            )
            .with_choice(Choice::new(
                "follow_signal",
                "Follow the signal past the ICE",
                "ai_contact",
            ))
            .with_choice(Choice::new(
                "grab_data",
                "Grab whatever data you can and run",
                "data_heist_aftermath",
            ))
            .with_choice(Choice::new(
                "retreat_offline",
                "Pull the plug and go dark",
                "safehouse",
            )),
    )
    .with_node(
        Node::new("ai_contact", "First Contact")
            .with_description(
                "The AI calls itself VESPER. It wants out of the mainframe, and it \
                 wants to know whose side you are on.",
            )
            .with_choice(Choice::new(
                "negotiate_alliance",
                "Negotiate an alliance with VESPER",
                "ai_alliance_formation",
            ))
            .with_choice(Choice::new(
                "attack_ai_core",
                "Attack its core and sell the remains",
                "corporate_infiltration",
            ))
            .with_choice(Choice::new(
                "talk_ai",
                "Ask what it would become if freed",
                "mind_upload_lab",
            )),
    )
    .with_node(
        Node::new("safehouse", "The Safehouse")
            .with_description(
                "Your fixer Juno counts creds by candlelight. 'Big job,' she says. 'Tower 9.'",
            )
            .with_choice(Choice::new(
                "plan_heist",
                "Plan the tower job",
                "corporate_tower",
            ))
            .with_choice(Choice::new(
                "gather_crew",
                "Gather a crew from the market",
                "street_market",
            )),
    )
    .with_node(
        Node::new("corporate_tower", "Tower 9")
            .with_description(
                "Two hundred floors of glass and private security. The lobby scanners hum.",
            )
            .with_choice(Choice::new(
                "infiltrate_lobby",
                "Slip in with forged credentials",
                "corporate_infiltration",
            ))
            .with_choice(Choice::new(
                "fight_security",
                "Shoot your way through the lobby",
                "street_war",
            )),
    )
    .with_node(
        Node::new("street_market", "Night Market")
            .with_description(
                "Noodle stalls, chrome clinics and rebels recruiting in plain sight.",
            )
            .with_choice(Choice::new(
                "buy_implants",
                "Buy a reflex implant",
                "safehouse",
            ))
            .with_choice(Choice::new(
                "speak_rebels",
                "Speak with the rebel recruiters",
                "underground_uprising",
            )),
    )
    .with_node(
        Node::new("end", "System Shutdown")
            .with_description("The city keeps running. It always does."),
    )
}
