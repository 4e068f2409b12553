/*!
# Graph Generators

Builders for random weighted multigraphs and helpers to add deterministic substructures
(paths, cycles, cliques) to an existing graph. These are mostly used to create fixtures for the
contraction and spanning-tree algorithms.

The usage workflow mirrors all configurable structs in this crate:

1. Create a generator instance (e.g., `WeightedGnp::new()`).
2. Set parameters using builder methods (e.g., `.nodes(n).prob(p).weights(1..=9)`).
3. Generate edges via `generate()` or `stream()`, or build a whole graph via [`RandomGraph`].
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of vertices
pub trait NumNodesGen {
    /// Sets the number of vertices; generated vertex ids are `0..n`
    fn nodes(self, n: NumNodes) -> Self;
}

/// General trait for a configurable random edge generator.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator over generated edges
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Trait for building full graph instances from random models
pub trait RandomGraph: Sized {
    /// Creates a weighted `G(n,p)` graph on vertices `0..n` without self-loops.
    /// Weights are drawn uniformly from `weights`. Isolated vertices are kept.
    fn weighted_gnp<R>(
        rng: &mut R,
        n: NumNodes,
        p: f64,
        weights: std::ops::RangeInclusive<Weight>,
    ) -> Self
    where
        R: Rng;
}

impl RandomGraph for MultiGraph {
    fn weighted_gnp<R>(
        rng: &mut R,
        n: NumNodes,
        p: f64,
        weights: std::ops::RangeInclusive<Weight>,
    ) -> Self
    where
        R: Rng,
    {
        let mut graph = MultiGraph::new();
        for u in 0..n as Node {
            graph.add_node(u);
        }

        for e in WeightedGnp::new()
            .nodes(n)
            .prob(p)
            .weights(weights)
            .stream(rng)
        {
            // all endpoints exist already, so this cannot fail under any policy
            let _ = graph.add_edge(e.from, e.to, e.weight);
        }

        graph
    }
}
