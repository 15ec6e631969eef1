//! E2E tests for runtime properties over the whole built-in catalog.

use std::collections::{BTreeSet, VecDeque};

use storyloom_domain::{NodeId, ScenarioId, StatProfile, UserId, START_NODE};

use super::{assert_monotone, diff_of, stat_diff, E2ETestContext};
use crate::infrastructure::catalog::{builtin_scenarios, DRAGON_HUNTERS_PATH, NEON_CITY_RUNNERS};
use crate::use_cases::resolver::CYBERPUNK_ENDINGS;
use crate::use_cases::{NodeResolver, ResolutionKind};

/// Every reachable (node, choice) pair resolves, and no authored target
/// falls through to the terminal node.
#[test]
fn every_reachable_choice_resolves() {
    let resolver = NodeResolver::new();

    for scenario in builtin_scenarios() {
        let mut seen: BTreeSet<NodeId> = BTreeSet::new();
        let mut queue: VecDeque<NodeId> = VecDeque::from([NodeId::new(START_NODE)]);

        while let Some(node_id) = queue.pop_front() {
            if !seen.insert(node_id.clone()) {
                continue;
            }
            let current = resolver.lookup(&scenario, node_id.as_str());
            assert_ne!(
                current.kind(),
                ResolutionKind::Terminal,
                "{}: {} is unreachable content",
                scenario.id,
                node_id
            );

            for choice in &current.node().choices {
                let next = resolver.follow(&scenario, current.node(), choice.id.as_str());
                let node = next.node();
                assert!(
                    !node.choices.is_empty() || node.id == "end",
                    "{}: {} -> {} is a dead end",
                    scenario.id,
                    node_id,
                    node.id
                );
                assert_ne!(
                    next.kind(),
                    ResolutionKind::Terminal,
                    "{}: {}/{} fell through to the terminal node",
                    scenario.id,
                    node_id,
                    choice.id
                );
                queue.push_back(node.id.clone());
            }
        }

        assert!(seen.contains("end"), "{}: end is unreachable", scenario.id);
    }
}

#[tokio::test]
async fn numeric_stats_never_decrease() {
    let ctx = E2ETestContext::setup();
    let mut before = StatProfile::new();

    // Rotate through choice indices so every category and several quests fire.
    for scenario in builtin_scenarios() {
        let mut node = scenario.start_node().cloned().expect("start node");
        for step in 0..30 {
            if node.choices.is_empty() {
                node = scenario.start_node().cloned().expect("start node");
            }
            let choice = &node.choices[step % node.choices.len()];
            let outcome = ctx
                .choose("walker", scenario.id.as_str(), node.id.as_str(), choice.id.as_str())
                .await
                .expect("choice should succeed");

            let after = ctx.profile("walker").await;
            assert_monotone(&before, &after, &format!("{}/{}", scenario.id, choice.id));
            before = after;
            node = outcome.node;
        }
    }

    assert!(before.get("quests_completed") > 0, "walk should complete quests");
}

#[tokio::test]
async fn second_evaluation_changes_nothing() {
    let ctx = E2ETestContext::setup();
    for _ in 0..3 {
        ctx.choose("u8", DRAGON_HUNTERS_PATH, "start", "explore_outskirts")
            .await
            .expect("choice should succeed");
    }
    let settled = ctx.profile("u8").await;
    assert!(settled.get("quests_completed") > 0);

    let evaluate = &ctx.app.use_cases.quest.evaluate;
    for _ in 0..2 {
        let completed = evaluate
            .execute(&UserId::new("u8"), &ScenarioId::new(DRAGON_HUNTERS_PATH))
            .await
            .expect("evaluate");
        assert!(completed.is_empty());
        assert_eq!(ctx.profile("u8").await, settled);
    }
}

#[tokio::test]
async fn each_category_changes_exactly_its_stats() {
    let cases: &[(&str, &str, &[(&str, i64)])] = &[
        (
            "dragon_lair_entrance",
            "attack_dragon",
            &[("combat_skill", 3), ("damage_dealt", 45), ("combat_won", 1)],
        ),
        (
            "villager_info",
            "talk_elder",
            &[("charisma_skill", 2), ("conversations", 1), ("npc_interactions", 1)],
        ),
        (
            "start",
            "explore_outskirts",
            &[("exploration_skill", 2), ("search_actions", 1), ("locations_visited", 1)],
        ),
        (
            "dragon_lair_entrance",
            "cast_ward",
            &[("intelligence_skill", 3), ("puzzle_attempts", 1)],
        ),
        (
            "start",
            "gather_info",
            &[("exploration_skill", 1), ("items_collected", 1)],
        ),
        (
            "elder_hut",
            "ask_for_help",
            &[("charisma_skill", 2), ("npc_interactions", 1)],
        ),
        ("start", "visit_healer", &[("exploration_skill", 1)]),
    ];

    let ctx = E2ETestContext::setup();
    for (node, choice, expected) in cases {
        let user = format!("category_{choice}");
        ctx.choose(&user, DRAGON_HUNTERS_PATH, node, choice)
            .await
            .expect("choice should succeed");

        let mut expected = diff_of(expected);
        expected.insert("total_actions".to_string(), 1);
        expected.insert("time_spent".to_string(), 5);
        assert_eq!(
            stat_diff(&StatProfile::new(), &ctx.profile(&user).await),
            expected,
            "{choice}"
        );
    }
}

#[tokio::test]
async fn quest_completes_on_the_choice_that_satisfies_it() {
    let ctx = E2ETestContext::setup();

    // One talk short of Social Butterfly.
    let mut almost = StatProfile::new();
    almost.add("conversations", 7);
    almost.add("charisma_skill", 14);
    ctx.seed("talker", almost).await;

    let outcome = ctx
        .choose("talker", DRAGON_HUNTERS_PATH, "villager_info", "talk_elder")
        .await
        .expect("choice should succeed");
    assert_eq!(outcome.notifications, vec!["Quest Completed: Sosyal Kelebek".to_string()]);
    // 14 + 2 from the talk, + 5 reward.
    assert_eq!(ctx.profile("talker").await.get("charisma_skill"), 21);

    // Already satisfied before the choice: completes on the next call of any kind.
    let mut veteran = StatProfile::new();
    veteran.add("combat_won", 5);
    veteran.add("combat_skill", 15);
    ctx.seed("veteran", veteran).await;

    let outcome = ctx
        .choose("veteran", DRAGON_HUNTERS_PATH, "start", "visit_healer")
        .await
        .expect("choice should succeed");
    assert_eq!(outcome.notifications, vec!["Quest Completed: Savaş Ustası".to_string()]);
    assert!(ctx.profile("veteran").await.titles().contains("Warrior"));
}

#[tokio::test]
async fn first_choice_path_through_neon_city_reaches_an_ending() {
    let ctx = E2ETestContext::setup();
    let resolver = NodeResolver::new();
    let scenario = ctx
        .app
        .use_cases
        .scenario
        .get
        .execute(&ScenarioId::new(NEON_CITY_RUNNERS))
        .await
        .expect("catalog scenario");
    let mut current = NodeId::new(START_NODE);
    let mut reached = None;

    for step in 0..40 {
        let node = resolver.lookup(&scenario, current.as_str()).into_node();
        let choice = node.choices.first().expect("every node on the path has a choice");

        let outcome = ctx
            .choose("runner", NEON_CITY_RUNNERS, current.as_str(), choice.id.as_str())
            .await
            .expect("choice should succeed");
        assert_ne!(outcome.node.id, START_NODE, "path returned to start at step {step}");

        if CYBERPUNK_ENDINGS.contains(&outcome.node.id.as_str()) {
            reached = Some(outcome.node.id);
            break;
        }
        current = outcome.node.id;
    }

    assert_eq!(reached.as_ref().map(|id| id.as_str()), Some("end_revolution_victory"));
}
