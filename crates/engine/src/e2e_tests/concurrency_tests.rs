//! E2E tests for concurrent choices by the same player.

use std::sync::Arc;

use storyloom_domain::{ChoiceId, NodeId, ScenarioId, UserId};

use super::E2ETestContext;
use crate::infrastructure::catalog::DRAGON_HUNTERS_PATH;

const PARALLEL_CHOICES: i64 = 50;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_choices_for_one_player_lose_no_writes() {
    let ctx = E2ETestContext::setup();
    let make_choice = Arc::clone(&ctx.app.use_cases.choice.make_choice);

    let handles: Vec<_> = (0..PARALLEL_CHOICES)
        .map(|_| {
            let make_choice = Arc::clone(&make_choice);
            tokio::spawn(async move {
                make_choice
                    .execute(
                        &UserId::new("racer"),
                        &ScenarioId::new(DRAGON_HUNTERS_PATH),
                        &NodeId::new("start"),
                        &ChoiceId::new("gather_info"),
                    )
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle
            .await
            .expect("task should not panic")
            .expect("choice should succeed");
    }

    let profile = ctx.profile("racer").await;
    assert_eq!(profile.get("total_actions"), PARALLEL_CHOICES);
    assert_eq!(profile.get("time_spent"), 5 * PARALLEL_CHOICES);
    assert_eq!(profile.get("items_collected"), PARALLEL_CHOICES);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_players_progress_independently() {
    let ctx = E2ETestContext::setup();
    let make_choice = Arc::clone(&ctx.app.use_cases.choice.make_choice);

    let handles: Vec<_> = (0..8)
        .flat_map(|player| (0..3).map(move |_| player))
        .map(|player| {
            let make_choice = Arc::clone(&make_choice);
            tokio::spawn(async move {
                make_choice
                    .execute(
                        &UserId::new(format!("player_{player}")),
                        &ScenarioId::new(DRAGON_HUNTERS_PATH),
                        &NodeId::new("start"),
                        &ChoiceId::new("explore_outskirts"),
                    )
                    .await
            })
        })
        .collect();

    let mut first_steps = 0;
    for handle in handles {
        let outcome = handle
            .await
            .expect("task should not panic")
            .expect("choice should succeed");
        first_steps += outcome.completed_quests.len();
    }

    // Three explorations each complete First Steps exactly once per player.
    assert_eq!(first_steps, 8);
    for player in 0..8 {
        let profile = ctx.profile(&format!("player_{player}")).await;
        assert_eq!(profile.get("total_actions"), 3);
        assert_eq!(profile.get("quests_completed"), 1);
    }
}
