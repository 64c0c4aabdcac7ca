/// Color similarity and intensity scaling
pub mod color;
/// Pheromone reinforcement, decay and trail intensity
pub mod pheromone;
