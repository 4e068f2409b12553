use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use tracing::{debug, trace};

use super::*;

/// Karger's random contraction
pub trait RandomContraction: EdgeContraction + GraphNodeOrder + GraphEdgeOrder {
    /// Contracts uniformly random edges of the current edge sequence until two vertices remain
    /// and returns the number of remaining edges (parallel edges counted individually).
    ///
    /// Self-loops present before the first contraction are dropped as they never cross a cut.
    /// If the graph runs out of edges while more than two vertices remain, it is disconnected and
    /// `0` is returned.
    ///
    /// A single run only yields an upper bound on the minimum cut; see [`KargerMinCut`] for
    /// repeated trials. The graph is consumed in the process (it ends up with at most two
    /// vertices), so run it on a clone if the original is needed.
    fn contraction_algorithm<R>(&mut self, rng: &mut R) -> Result<NumEdges>
    where
        R: Rng;
}

impl<G> RandomContraction for G
where
    G: EdgeContraction + GraphNodeOrder + GraphEdgeOrder,
{
    fn contraction_algorithm<R>(&mut self, rng: &mut R) -> Result<NumEdges>
    where
        R: Rng,
    {
        debug!(
            nodes = self.number_of_nodes(),
            edges = self.number_of_edges(),
            "starting random contraction"
        );

        let loops = self.remove_self_loops();
        if loops > 0 {
            debug!(loops, "dropped self-loops before contracting");
        }

        while self.number_of_nodes() > 2 {
            let m = self.number_of_edges();
            if m == 0 {
                debug!(
                    nodes = self.number_of_nodes(),
                    "no edges left, graph is disconnected"
                );
                return Ok(0);
            }

            let id = self.edge_ids()[rng.random_range(0..m)];
            self.contract_edge(id)?;
        }

        let cut = self.number_of_edges();
        debug!(cut, "random contraction finished");
        Ok(cut)
    }
}

/// Outcome of repeated [`RandomContraction`] trials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinCutEstimate {
    /// Smallest number of crossing edges observed
    pub cut: NumEdges,
    /// Edges crossing the best cut, with endpoints named by the surviving super-vertices
    pub cut_edges: Vec<Edge>,
    /// Number of trials run
    pub trials: usize,
    /// Seed of the trial that produced the best cut; feeding it into a `Pcg64Mcg` reproduces it
    pub seed: u64,
}

impl MinCutEstimate {
    /// Total weight of the edges crossing the best cut
    pub fn cut_weight(&self) -> Weight {
        self.cut_edges.iter().map(|e| e.weight).sum()
    }
}

/// Repeats [`RandomContraction`] on independent copies of a graph and keeps the best result.
///
/// Every trial gets its own `Pcg64Mcg` seeded from the caller's generator.
/// By default, [`KargerMinCut::recommended_trials`] many trials are run.
///
/// # Example
/// ```
/// use mgraphs::{prelude::*, algo::*, gens::*};
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64Mcg;
///
/// let mut graph = MultiGraph::new();
/// graph.connect_clique(0..4, 1).unwrap();
///
/// let estimate = KargerMinCut::new()
///     .trials(100)
///     .run(&graph, &mut Pcg64Mcg::seed_from_u64(7))
///     .unwrap();
/// assert_eq!(estimate.cut, 3);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct KargerMinCut {
    trials: Option<usize>,
}

impl KargerMinCut {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of trials.
    ///
    /// # Panics
    /// Panics if `trials == 0`.
    pub fn set_trials(&mut self, trials: usize) {
        assert!(trials > 0, "At least one trial must be run!");
        self.trials = Some(trials);
    }

    /// Sets the number of trials.
    ///
    /// # Panics
    /// Panics if `trials == 0`.
    pub fn trials(mut self, trials: usize) -> Self {
        self.set_trials(trials);
        self
    }

    /// `⌈n² ln n⌉` trials find a minimum cut with probability at least `1 - 1/n`
    pub fn recommended_trials(n: NumNodes) -> usize {
        if n < 3 {
            return 1;
        }

        let n = n as f64;
        (n * n * n.ln()).ceil() as usize
    }

    /// Runs all trials on clones of `graph`; `graph` itself is not modified
    pub fn run<G, R>(&self, graph: &G, rng: &mut R) -> Result<MinCutEstimate>
    where
        G: RandomContraction + Clone,
        R: Rng,
    {
        let trials = self
            .trials
            .unwrap_or_else(|| Self::recommended_trials(graph.number_of_nodes()));

        let mut best: Option<MinCutEstimate> = None;
        for trial in 0..trials {
            let seed = rng.random::<u64>();
            let mut working = graph.clone();
            let cut = working.contraction_algorithm(&mut Pcg64Mcg::seed_from_u64(seed))?;
            trace!(trial, seed, cut, "trial finished");

            if best.as_ref().is_none_or(|b| cut < b.cut) {
                best = Some(MinCutEstimate {
                    cut,
                    cut_edges: working.edges().copied().collect(),
                    trials,
                    seed,
                });
            }
        }

        // trials > 0 is guaranteed by the setter and by `recommended_trials`
        let estimate = best.unwrap_or(MinCutEstimate {
            cut: 0,
            cut_edges: Vec::new(),
            trials,
            seed: 0,
        });
        debug!(
            cut = estimate.cut,
            trials,
            seed = estimate.seed,
            "repeated random contraction finished"
        );
        Ok(estimate)
    }
}
