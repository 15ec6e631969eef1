//! E2E tests for literal story flows through the built-in catalog.
//!
//! Tests verify:
//! - A fresh player's first choice grants exactly the classified deltas
//! - Default quests complete on the choice that satisfies them, once
//! - Missing cyberpunk and `content_node_*` targets are synthesized
//! - Unknown scenarios fail without touching the profile

use storyloom_domain::{QuestId, ScenarioId, StatProfile};

use super::{diff_of, stat_diff, E2ETestContext};
use crate::infrastructure::catalog::{DRAGON_HUNTERS_PATH, NEON_CITY_RUNNERS};
use crate::use_cases::{ChoiceError, ResolutionKind};

const FIRST_STEPS_NOTIFICATION: &str = "Quest Completed: İlk Adımlar";

#[tokio::test]
async fn cold_player_gathers_information() {
    let ctx = E2ETestContext::setup();

    let outcome = ctx
        .choose("u1", DRAGON_HUNTERS_PATH, "start", "gather_info")
        .await
        .expect("choice should succeed");

    assert_eq!(outcome.resolution, ResolutionKind::FromScenario);
    let (node, notifications) = outcome.into_view();
    assert_eq!(node.id, "villager_info");
    assert_eq!(node.choices.len(), 2);
    assert!(notifications.is_empty());

    let profile = ctx.profile("u1").await;
    assert_eq!(
        stat_diff(&StatProfile::new(), &profile),
        diff_of(&[
            ("exploration_skill", 1),
            ("items_collected", 1),
            ("total_actions", 1),
            ("time_spent", 5),
        ])
    );
}

#[tokio::test]
async fn repeated_exploration_completes_first_steps_once() {
    let ctx = E2ETestContext::setup();

    for call in 1..=2 {
        let outcome = ctx
            .choose("u2", DRAGON_HUNTERS_PATH, "start", "explore_outskirts")
            .await
            .expect("choice should succeed");
        assert!(outcome.notifications.is_empty(), "call {call} completed early");
    }

    let third = ctx
        .choose("u2", DRAGON_HUNTERS_PATH, "start", "explore_outskirts")
        .await
        .expect("choice should succeed");
    assert_eq!(third.notifications, vec![FIRST_STEPS_NOTIFICATION.to_string()]);
    assert_eq!(third.completed_quests.len(), 1);

    let profile = ctx.profile("u2").await;
    assert_eq!(profile.get("exploration_skill"), 6);
    assert_eq!(profile.get("time_spent"), 15);
    assert_eq!(profile.get("quests_completed"), 1);
    assert_eq!(profile.get("xp"), 100);
    assert!(profile.titles().contains("Adventurer"));
    assert!(profile.is_quest_completed(&QuestId::new("first_steps")));

    let fourth = ctx
        .choose("u2", DRAGON_HUNTERS_PATH, "start", "explore_outskirts")
        .await
        .expect("choice should succeed");
    assert!(!fourth
        .notifications
        .iter()
        .any(|n| n == FIRST_STEPS_NOTIFICATION));

    let profile = ctx.profile("u2").await;
    assert_eq!(profile.get("quests_completed"), 1);
    assert_eq!(profile.get("xp"), 100);
}

#[tokio::test]
async fn alliance_node_is_synthesized_for_neon_city() {
    let ctx = E2ETestContext::setup();

    let outcome = ctx
        .choose("u4", NEON_CITY_RUNNERS, "ai_contact", "negotiate_alliance")
        .await
        .expect("choice should succeed");

    assert_eq!(outcome.resolution, ResolutionKind::Synthesized);
    assert_eq!(outcome.node.id, "ai_alliance_formation");
    assert_eq!(outcome.node.title, "Ai Alliance Formation");
    let targets: Vec<&str> = outcome
        .node
        .choices
        .iter()
        .map(|c| c.next_node.as_str())
        .collect();
    assert_eq!(
        targets,
        vec!["ai_revolution_beginning", "end_corporate_power", "end_ai_singularity"]
    );
}

#[tokio::test]
async fn content_nodes_offer_end_and_restart() {
    let ctx = E2ETestContext::setup();
    let scenario = ctx
        .app
        .use_cases
        .scenario
        .get
        .execute(&ScenarioId::new(DRAGON_HUNTERS_PATH))
        .await
        .expect("catalog scenario");

    let resolution = crate::use_cases::NodeResolver::new().lookup(&scenario, "content_node_7");
    assert_eq!(resolution.kind(), ResolutionKind::Synthesized);
    let targets: Vec<&str> = resolution
        .node()
        .choices
        .iter()
        .map(|c| c.next_node.as_str())
        .collect();
    assert_eq!(targets, vec!["end", "start"]);

    // The hoard's egg choice leads into a content node that can be continued.
    let egg = ctx
        .choose("u5", DRAGON_HUNTERS_PATH, "treasure_hoard", "take_dragon_egg")
        .await
        .expect("choice should succeed");
    assert_eq!(egg.node.id, "content_node_1");
    assert_eq!(ctx.profile("u5").await.get("xp"), 50);

    let onward = ctx
        .choose("u5", DRAGON_HUNTERS_PATH, "content_node_1", "continue_to_end")
        .await
        .expect("choice should succeed");
    assert_eq!(onward.node.id, "end");
    assert!(onward.node.is_terminal());
}

#[tokio::test]
async fn completed_quest_is_not_reported_again() {
    let ctx = E2ETestContext::setup();
    let mut seeded = StatProfile::new();
    seeded.mark_quest_completed(QuestId::new("first_steps"));
    seeded.add("exploration_skill", 10);
    seeded.add("time_spent", 30);
    ctx.seed("u3", seeded).await;

    let outcome = ctx
        .choose("u3", DRAGON_HUNTERS_PATH, "start", "explore_outskirts")
        .await
        .expect("choice should succeed");

    assert!(!outcome.notifications.iter().any(|n| n.contains("İlk Adımlar")));
    let profile = ctx.profile("u3").await;
    assert_eq!(profile.get("quests_completed"), 0);
    assert_eq!(profile.get("xp"), 0);
}

#[tokio::test]
async fn unknown_scenario_leaves_profile_untouched() {
    let ctx = E2ETestContext::setup();

    let err = ctx
        .choose("u6", "zzz", "start", "explore")
        .await
        .expect_err("unknown scenario");

    assert!(matches!(err, ChoiceError::ScenarioNotFound(ref id) if id == "zzz"));
    assert_eq!(err.to_string(), "Scenario not found: zzz");
    assert!(ctx.stored_profile("u6").await.is_none());
}

#[tokio::test]
async fn scenario_quests_replace_the_defaults() {
    let ctx = E2ETestContext::setup();
    let mut seeded = StatProfile::new();
    seeded.add("clues_found", 1);
    seeded.add("search_actions", 2);
    ctx.seed("u7", seeded).await;

    let outcome = ctx
        .choose("u7", "whispering_manor", "hidden_study", "read_journal")
        .await
        .expect("choice should succeed");

    assert_eq!(outcome.notifications, vec!["Quest Completed: Manor Sleuth".to_string()]);
    let profile = ctx.profile("u7").await;
    assert_eq!(profile.get("clues_found"), 3);
    assert_eq!(profile.get("xp"), 150);
    assert!(profile.titles().contains("Sleuth"));
    assert_eq!(outcome.node.id, "end");
}
