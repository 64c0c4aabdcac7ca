use crate::analysis::markov::ColorMarkovChain;
use crate::math::color::Color;
use rand::Rng;

/// Random walk through a color model
///
/// The first draw picks any known color; each later draw picks a neighbor of
/// the previous one. A model with no answer keeps the previous color.
#[derive(Clone, Debug)]
pub struct PaletteWalker {
    chain: ColorMarkovChain,
    current: Option<Color>,
}

impl PaletteWalker {
    /// Start a walk with no color drawn yet
    pub const fn new(chain: ColorMarkovChain) -> Self {
        Self {
            chain,
            current: None,
        }
    }

    /// Advance the walk and return the new color
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Color> {
        let drawn = match self.current {
            None => self.chain.random_color(rng),
            Some(previous) => self.chain.random_neighbor(previous, rng).or(Some(previous)),
        };
        if drawn.is_some() {
            self.current = drawn;
        }
        drawn
    }

    /// Most recent color, if any
    pub const fn current(&self) -> Option<Color> {
        self.current
    }

    /// Underlying model
    pub const fn chain(&self) -> &ColorMarkovChain {
        &self.chain
    }
}
