//! Fixtures and reference implementations shared by the unit tests

use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;

use crate::{gens::GeneratorSubstructures, prelude::*};

/// Cycle on vertices `0..n` with uniform weights
pub(crate) fn cycle(n: NumNodes, weight: Weight) -> MultiGraph {
    let mut graph = MultiGraph::new();
    graph
        .connect_cycle(0..n as Node, weight)
        .expect("auto-create graphs accept any vertex");
    graph
}

/// Complete graph on vertices `0..n` with uniform weights
pub(crate) fn complete(n: NumNodes, weight: Weight) -> MultiGraph {
    let mut graph = MultiGraph::new();
    graph
        .connect_clique(0..n as Node, weight)
        .expect("auto-create graphs accept any vertex");
    graph
}

/// Asserts that vertex incident lists and the global edge sequence agree:
/// every live edge is listed exactly once by each endpoint (twice for a self-loop at the vertex)
/// and every listed id names a live edge.
pub(crate) fn assert_consistent(graph: &MultiGraph) {
    let ids = graph.edge_ids();
    assert!(ids.iter().all_unique(), "duplicate ids in edge sequence");

    let live: FxHashSet<EdgeId> = ids.iter().copied().collect();
    let mut entries = 0;

    for (&u, vertex) in graph.nodes() {
        assert_eq!(u, vertex.id());
        entries += vertex.degree();

        for (&id, count) in vertex.incident().iter().counts() {
            assert!(live.contains(&id), "vertex {u} lists dead edge #{id}");

            let edge = graph.edge(id).expect("live edges are stored");
            let expected = (edge.from == u) as usize + (edge.to == u) as usize;
            assert_eq!(count, expected, "vertex {u} lists {edge} {count} times");
        }
    }

    for &id in ids {
        let edge = graph.edge(id).expect("sequence only holds live edges");
        assert!(graph.has_node(edge.from), "{edge} has dangling endpoint");
        assert!(graph.has_node(edge.to), "{edge} has dangling endpoint");
    }

    assert_eq!(entries, 2 * ids.len());
}

/// Union-find over `0..n`
struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Returns *false* if both were in the same set already
    fn union(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }

        if self.rank[left] < self.rank[right] {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if self.rank[left] == self.rank[right] {
            self.rank[left] = self.rank[left].saturating_add(1);
        }
        true
    }
}

/// Weight of a minimum spanning tree computed with Kruskal's algorithm,
/// or `None` if the graph is disconnected
pub(crate) fn kruskal_weight(graph: &MultiGraph) -> Option<Weight> {
    let index: FxHashMap<Node, usize> = graph
        .ordered_vertices()
        .into_iter()
        .enumerate()
        .map(|(i, u)| (u, i))
        .collect();

    let mut components = DisjointSet::new(index.len());
    let mut joined = 0;
    let mut weight = 0;

    for e in graph.edges().sorted_by_key(|e| e.weight) {
        if components.union(index[&e.from], index[&e.to]) {
            joined += 1;
            weight += e.weight;
        }
    }

    (joined + 1 >= index.len()).then_some(weight)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fixtures() {
        let graph = cycle(5, 2);
        assert_eq!(graph.number_of_edges(), 5);
        assert_eq!(kruskal_weight(&graph), Some(8));
        assert_consistent(&graph);

        let graph = complete(5, 1);
        assert_eq!(graph.number_of_edges(), 10);
        assert_eq!(kruskal_weight(&graph), Some(4));
    }

    #[test]
    fn kruskal_detects_disconnected_graphs() {
        let mut graph = cycle(3, 1);
        graph.add_node(7);
        assert_eq!(kruskal_weight(&graph), None);
        assert_eq!(kruskal_weight(&MultiGraph::new()), Some(0));
    }
}
