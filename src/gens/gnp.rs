use std::ops::RangeInclusive;

use itertools::Itertools;
use rand_distr::{Bernoulli, Distribution, Uniform};

use super::*;

/// Weighted `G(n,p)` generator: every unordered pair `{u, v}` with `u < v < n` becomes an edge
/// independently with probability `p`. Weights are drawn uniformly from an inclusive range
/// (all weights are `1` if no range is set). Never produces self-loops or parallel edges.
#[derive(Debug, Clone, Default)]
pub struct WeightedGnp {
    n: NumNodes,
    coin: Option<Bernoulli>,
    weights: Option<Uniform<Weight>>,
}

impl WeightedGnp {
    /// Creates a new empty generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the edge probability.
    ///
    /// # Panics
    /// Panics if `prob` is not in `[0, 1]`.
    pub fn prob(mut self, prob: f64) -> Self {
        match Bernoulli::new(prob) {
            Ok(coin) => self.coin = Some(coin),
            Err(_) => panic!("{prob} is not a valid probability!"),
        }
        self
    }

    /// Sets the range weights are drawn from.
    ///
    /// # Panics
    /// Panics if the range is empty.
    pub fn weights(mut self, weights: RangeInclusive<Weight>) -> Self {
        let (lo, hi) = weights.into_inner();
        match Uniform::new_inclusive(lo, hi) {
            Ok(distr) => self.weights = Some(distr),
            Err(_) => panic!("Weight range {lo}..={hi} is empty!"),
        }
        self
    }
}

impl NumNodesGen for WeightedGnp {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for WeightedGnp {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        let Some(coin) = self.coin else {
            panic!("Probability of WeightedGnp was not set!");
        };
        let weights = self.weights.clone();

        (0..self.n as Node)
            .tuple_combinations()
            .filter_map(move |(u, v)| {
                if !coin.sample(rng) {
                    return None;
                }

                let weight = match &weights {
                    Some(distr) => distr.sample(rng),
                    None => 1,
                };
                Some(Edge::new(u, v, weight))
            })
    }
}
