//! Storage adapters for the scenario and stats ports.

mod builtin_scenarios;
mod file_names;
mod file_scenarios;
mod file_stats;
mod layered_scenarios;
mod memory_stats;

pub use builtin_scenarios::BuiltinScenarioRepo;
pub use file_scenarios::FileScenarioRepo;
pub use file_stats::FileStatsRepo;
pub use layered_scenarios::LayeredScenarioRepo;
pub use memory_stats::InMemoryStatsRepo;
