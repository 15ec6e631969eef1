//! Built-in scenario catalog shipped with the engine.
//!
//! Scenarios are authored in code so the catalog is immutable after startup.
//! Several choices deliberately target ids that the scenario does not define;
//! the node resolver supplies those nodes.

mod dragon_hunters_path;
mod iron_bastion;
mod neon_city_runners;
mod whispering_manor;

use storyloom_domain::Scenario;

pub const DRAGON_HUNTERS_PATH: &str = "dragon_hunters_path";
pub const NEON_CITY_RUNNERS: &str = "neon_city_runners";
pub const WHISPERING_MANOR: &str = "whispering_manor";
pub const IRON_BASTION: &str = "iron_bastion";

/// Every built-in scenario, in catalog order.
pub fn builtin_scenarios() -> Vec<Scenario> {
    vec![
        dragon_hunters_path::scenario(),
        neon_city_runners::scenario(),
        whispering_manor::scenario(),
        iron_bastion::scenario(),
    ]
}
