use fxhash::FxHashSet;
use rand::Rng;
use tracing::{debug, trace};

use super::*;

/// Result of growing a spanning tree from a single start vertex
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanningTree {
    /// Every vertex was reached; contains `n - 1` edges
    Spanning(Vec<Edge>),
    /// The start vertex cannot reach all vertices. Contains a minimum spanning tree of the
    /// start's component, which has `reached` vertices.
    Partial { edges: Vec<Edge>, reached: NumNodes },
}

impl SpanningTree {
    /// Returns *true* if all vertices of the graph were reached
    pub fn is_spanning(&self) -> bool {
        matches!(self, SpanningTree::Spanning(_))
    }

    /// Returns the tree edges in the order they were chosen
    pub fn edges(&self) -> &[Edge] {
        match self {
            SpanningTree::Spanning(edges) | SpanningTree::Partial { edges, .. } => edges,
        }
    }

    pub fn into_edges(self) -> Vec<Edge> {
        match self {
            SpanningTree::Spanning(edges) | SpanningTree::Partial { edges, .. } => edges,
        }
    }

    /// Returns the sum of all tree edge weights
    pub fn total_weight(&self) -> Weight {
        self.edges().iter().map(|e| e.weight).sum()
    }
}

/// Prim-style spanning tree construction without a priority queue.
///
/// Each round rescans all edges incident to the explored set and takes the cheapest one that
/// leaves it, giving `O(n * m)` time overall. Ties are broken by the smaller edge id.
pub trait FrontierMst: AdjacencyList {
    /// Grows a minimum spanning tree from a vertex chosen uniformly at random.
    /// An empty graph yields an empty spanning tree.
    fn find_mst<R>(&self, rng: &mut R) -> SpanningTree
    where
        R: Rng;

    /// Grows a minimum spanning tree from `start`, or returns `None` if `start` does not exist
    fn find_mst_from(&self, start: Node) -> Option<SpanningTree>;
}

impl<G> FrontierMst for G
where
    G: AdjacencyList,
{
    fn find_mst<R>(&self, rng: &mut R) -> SpanningTree
    where
        R: Rng,
    {
        let n = self.number_of_nodes();
        if n == 0 {
            return SpanningTree::Spanning(Vec::new());
        }

        // sort first, so the choice only depends on the generator and not on hashing order
        let start = self.ordered_vertices()[rng.random_range(0..n)];
        FrontierGrowth::new(self, start).compute()
    }

    fn find_mst_from(&self, start: Node) -> Option<SpanningTree> {
        self.has_node(start)
            .then(|| FrontierGrowth::new(self, start).compute())
    }
}

struct FrontierGrowth<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    explored: FxHashSet<Node>,
    tree: Vec<Edge>,
}

impl<'a, G> FrontierGrowth<'a, G>
where
    G: AdjacencyList,
{
    fn new(graph: &'a G, start: Node) -> Self {
        let mut explored = FxHashSet::default();
        explored.insert(start);

        Self {
            graph,
            explored,
            tree: Vec::with_capacity(graph.number_of_nodes().saturating_sub(1)),
        }
    }

    fn compute(mut self) -> SpanningTree {
        let n = self.graph.number_of_nodes();
        debug!(nodes = n, "growing spanning tree");

        // the loop only advances if a crossing edge was found
        while self.explored.len() < n {
            let Some(edge) = self.cheapest_crossing_edge() else {
                debug!(
                    reached = self.explored.len(),
                    nodes = n,
                    "no crossing edge left, graph is disconnected"
                );
                return SpanningTree::Partial {
                    reached: self.explored.len(),
                    edges: self.tree,
                };
            };

            trace!(%edge, "adding tree edge");
            self.explored.insert(edge.from);
            self.explored.insert(edge.to);
            self.tree.push(edge);
        }

        SpanningTree::Spanning(self.tree)
    }

    /// Returns the minimum weight edge with exactly one endpoint in the explored set
    fn cheapest_crossing_edge(&self) -> Option<Edge> {
        self.explored
            .iter()
            .flat_map(|&u| {
                self.graph
                    .incident_edges_of(u)
                    .filter(move |(_, e)| {
                        e.other(u).is_some_and(|v| !self.explored.contains(&v))
                    })
            })
            .min_by_key(|(id, e)| (e.weight, *id))
            .map(|(_, e)| *e)
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::*, testing::*};

    #[test]
    fn five_vertex_fixture() {
        let mut graph = MultiGraph::new();
        graph
            .add_edges([
                (1, 2, 2),
                (1, 4, 6),
                (2, 3, 3),
                (2, 4, 8),
                (2, 5, 5),
                (3, 5, 7),
                (4, 5, 9),
            ])
            .unwrap();

        for seed in 0..10 {
            let rng = &mut Pcg64Mcg::seed_from_u64(seed);
            let tree = graph.find_mst(rng);

            assert!(tree.is_spanning());
            assert_eq!(tree.edges().len(), 4);
            assert_eq!(tree.total_weight(), 16);
            assert_eq!(kruskal_weight(&graph), Some(16));
        }
    }

    #[test]
    fn matches_kruskal_on_random_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [2, 5, 10, 25] {
            for _ in 0..20 {
                let mut graph = MultiGraph::weighted_gnp(rng, n, 0.5, -5..=20);
                // make sure the graph is connected; the path may add parallel edges
                graph.connect_path(0..n as Node, 25).unwrap();

                let tree = graph.find_mst(rng);
                assert!(tree.is_spanning());
                assert_eq!(tree.edges().len(), n - 1);
                assert_eq!(Some(tree.total_weight()), kruskal_weight(&graph));
            }
        }
    }

    #[test]
    fn tree_edges_connect_all_vertices() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);
        let mut graph = MultiGraph::weighted_gnp(rng, 15, 0.4, 1..=9);
        graph.connect_cycle(0..15, 10).unwrap();

        let tree = graph.find_mst_from(7).unwrap();
        let touched = tree
            .edges()
            .iter()
            .flat_map(|e| [e.from, e.to])
            .unique()
            .count();
        assert_eq!(touched, 15);
        assert!(tree.edges().iter().all(|e| !e.is_loop()));
    }

    #[test]
    fn parallel_edges_use_the_cheapest() {
        let mut graph = MultiGraph::new();
        graph
            .add_edges([(1, 2, 5), (2, 1, 1), (1, 2, 3), (2, 2, -10)])
            .unwrap();

        let tree = graph.find_mst_from(1).unwrap();
        assert_eq!(tree, SpanningTree::Spanning(vec![Edge::new(2, 1, 1)]));
    }

    #[test]
    fn disconnected_graph_is_partial() {
        let mut graph = cycle(4, 1);
        graph.connect_path([10, 11, 12], 2).unwrap();

        match graph.find_mst_from(0) {
            Some(SpanningTree::Partial { edges, reached }) => {
                assert_eq!(reached, 4);
                assert_eq!(edges.len(), 3);
            }
            other => panic!("expected a partial tree, got {other:?}"),
        }

        match graph.find_mst_from(11) {
            Some(SpanningTree::Partial { edges, reached }) => {
                assert_eq!(reached, 3);
                assert_eq!(edges.iter().map(|e| e.weight).sum::<Weight>(), 4);
            }
            other => panic!("expected a partial tree, got {other:?}"),
        }

        for seed in 0..10 {
            let tree = graph.find_mst(&mut Pcg64Mcg::seed_from_u64(seed));
            assert!(!tree.is_spanning());
            assert!(tree.edges().len() < graph.number_of_nodes() - 1);
        }
    }

    #[test]
    fn isolated_start_vertex() {
        let mut graph = MultiGraph::new();
        graph.add_node(3);
        assert_eq!(
            graph.find_mst_from(3),
            Some(SpanningTree::Spanning(Vec::new()))
        );

        graph.add_edge(4, 5, 1).unwrap();
        assert_eq!(
            graph.find_mst_from(3),
            Some(SpanningTree::Partial {
                edges: Vec::new(),
                reached: 1
            })
        );
        assert_eq!(graph.find_mst_from(42), None);
    }

    #[test]
    fn empty_graph() {
        let graph = MultiGraph::new();
        let tree = graph.find_mst(&mut Pcg64Mcg::seed_from_u64(0));
        assert!(tree.is_spanning());
        assert!(tree.into_edges().is_empty());
    }
}
