//! Entity modules - Domain capability encapsulation.
//!
//! Each module wraps operations for a domain entity type.
//! They depend on repository ports and provide the building blocks for use cases.

pub mod player_stats;
pub mod scenario;

pub use player_stats::PlayerStats;
pub use scenario::Scenarios;
