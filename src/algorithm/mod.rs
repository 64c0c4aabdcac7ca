/// Foraging agent state machine
pub mod ant;
/// Caching system for color selection tables
pub mod cache;
/// Colony driver and tick loop
pub mod executor;
/// Forward-biased candidate ranking
pub mod movement;
/// Shuffle hook for movement decisions
pub mod selection;
