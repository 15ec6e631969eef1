//! Storyloom Engine - Main entry point.
//!
//! ```text
//! storyloom-engine [play] [user] [scenario] [max_steps]   scripted run, first choice each step
//! storyloom-engine list                                   list scenarios
//! storyloom-engine stats <user>                           print a stat profile
//! storyloom-engine import <scenario.json>                 store a scenario document
//! ```

use anyhow::{bail, Context};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storyloom_domain::{NodeId, Scenario, ScenarioId, UserId, START_NODE};
use storyloom_engine::infrastructure::catalog::DRAGON_HUNTERS_PATH;
use storyloom_engine::infrastructure::config::AppConfig;
use storyloom_engine::infrastructure::persistence::FileScenarioRepo;
use storyloom_engine::App;

const DEFAULT_USER: &str = "player";
const DEFAULT_MAX_STEPS: usize = 20;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storyloom_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        data_dir = %config.data_dir.display(),
        minutes_per_action = config.minutes_per_action,
        "Starting Storyloom Engine"
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["list"] => list(&App::from_config(&config)).await,
        ["stats", user] => stats(&App::from_config(&config), user).await,
        ["import", path] => import(&config, path).await,
        ["play", rest @ ..] => play(&App::from_config(&config), rest).await,
        rest => play(&App::from_config(&config), rest).await,
    }
}

async fn list(app: &App) -> anyhow::Result<()> {
    for summary in app.use_cases.scenario.list.execute().await? {
        println!(
            "{:<24} {:<10} {:<8} {}",
            summary.id.to_string(),
            summary.theme.to_string(),
            summary.difficulty.to_string(),
            summary.title
        );
    }
    Ok(())
}

async fn stats(app: &App, user: &str) -> anyhow::Result<()> {
    let view = app.use_cases.stats.get.execute(&UserId::new(user)).await?;
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

async fn import(config: &AppConfig, path: &str) -> anyhow::Result<()> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {path}"))?;
    let scenario: Scenario =
        serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))?;
    scenario
        .validate()
        .with_context(|| format!("validating {path}"))?;

    let repo = FileScenarioRepo::new(config.scenario_dir.clone());
    repo.save(&scenario).await?;
    tracing::info!(
        scenario_id = %scenario.id,
        dir = %repo.dir().display(),
        "Scenario imported"
    );
    Ok(())
}

/// Walk a scenario taking the first offered choice at every node.
async fn play(app: &App, args: &[&str]) -> anyhow::Result<()> {
    let user = UserId::new(args.first().copied().unwrap_or(DEFAULT_USER));
    let scenario_id = ScenarioId::new(args.get(1).copied().unwrap_or(DRAGON_HUNTERS_PATH));
    let max_steps = match args.get(2) {
        Some(raw) => raw
            .parse::<usize>()
            .with_context(|| format!("max_steps must be a number, got {raw}"))?,
        None => DEFAULT_MAX_STEPS,
    };
    if args.len() > 3 {
        bail!("unexpected arguments: {:?}", &args[3..]);
    }

    let scenario = app.use_cases.scenario.get.execute(&scenario_id).await?;
    let mut node = scenario
        .start_node()
        .cloned()
        .with_context(|| format!("scenario {scenario_id} has no start node"))?;
    println!("== {} ==", scenario.title);
    println!("[{}] {}", node.id, node.title);

    let mut current = NodeId::new(START_NODE);
    for _ in 0..max_steps {
        let Some(choice) = node.choices.first().cloned() else {
            break;
        };
        println!("  > {}", choice.text);

        let outcome = app
            .use_cases
            .choice
            .make_choice
            .execute(&user, &scenario_id, &current, &choice.id)
            .await?;
        let (next, notifications) = outcome.into_view();
        for notification in &notifications {
            println!("  * {notification}");
        }

        node = next;
        println!("[{}] {}", node.id, node.title);
        if node.is_terminal() {
            break;
        }
        current = node.id.clone();
    }

    let view = app.use_cases.stats.get.execute(&user).await?;
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
