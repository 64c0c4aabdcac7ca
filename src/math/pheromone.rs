//! Scalar pheromone arithmetic
//!
//! Trail strengths live in `[0, max]`. A visit adds a fixed gain, every tick
//! multiplies by `1 - decay_rate`, and the displayed brightness of a trail is
//! driven by the food channel alone.

/// Add `gain` to `level`, clamped to `[0, max]`
pub fn reinforce(level: f32, gain: f32, max: f32) -> f32 {
    (level + gain).clamp(0.0, max)
}

/// Apply one tick of exponential decay
pub fn decay(level: f32, decay_rate: f32) -> f32 {
    (level * (1.0 - decay_rate)).max(0.0)
}

/// Trail brightness factor `min(1, food / max_food * amplifier)`
pub fn intensity(food_pheromone: f32, max_food_pheromone: f32, amplifier: f32) -> f32 {
    if max_food_pheromone <= 0.0 {
        return 0.0;
    }
    (food_pheromone / max_food_pheromone * amplifier).clamp(0.0, 1.0)
}

/// Number of decay ticks after which `initial` falls strictly below `threshold`
///
/// Returns 0 when `initial` is already below the threshold and `None` when it
/// never gets there (non-positive decay rate).
pub fn ticks_until_below(initial: f32, decay_rate: f32, threshold: f32) -> Option<u32> {
    if initial < threshold {
        return Some(0);
    }
    if decay_rate <= 0.0 || threshold <= 0.0 {
        return None;
    }
    if decay_rate >= 1.0 {
        return Some(1);
    }

    let mut level = initial;
    (1..=u32::MAX).find(|_| {
        level = decay(level, decay_rate);
        level < threshold
    })
}
