/*!
# Substructure Generators

Adds common motifs to an existing graph:

- **Paths**
- **Cycles**
- **Cliques**

All edges receive the same weight. As the graph is a multigraph, calling any of these twice on
the same vertices creates parallel edges.

# Example

```rust
use mgraphs::{prelude::*, gens::*};

let mut g = MultiGraph::new();
g.connect_path([0, 1, 2], 1).unwrap();
g.connect_cycle([2, 3, 4], 2).unwrap();

assert_eq!(g.number_of_nodes(), 5);
assert_eq!(g.number_of_edges(), 5);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
pub trait GeneratorSubstructures {
    /// Connects the given vertices in order with a **simple path**.
    fn connect_path<P>(&mut self, nodes_on_path: P, weight: Weight) -> Result<Vec<EdgeId>>
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given vertices with a **cycle**: a path plus an edge from the last vertex
    /// back to the first. With fewer than three vertices only the path is created, so no
    /// self-loops or doubled edges appear.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, weight: Weight) -> Result<Vec<EdgeId>>
    where
        C: IntoIterator<Item = Node>;

    /// Connects every pair of the given vertices by exactly one edge.
    /// Vertices listed twice are only considered once.
    fn connect_clique<C>(&mut self, nodes: C, weight: Weight) -> Result<Vec<EdgeId>>
    where
        C: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P, weight: Weight) -> Result<Vec<EdgeId>>
    where
        P: IntoIterator<Item = Node>,
    {
        nodes_on_path
            .into_iter()
            .tuple_windows()
            .map(|(u, v)| self.add_edge(u, v, weight))
            .collect()
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, weight: Weight) -> Result<Vec<EdgeId>>
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes_in_cycle.into_iter().collect_vec();
        let mut ids = self.connect_path(nodes.iter().copied(), weight)?;

        if nodes.len() > 2 {
            ids.push(self.add_edge(nodes[nodes.len() - 1], nodes[0], weight)?);
        }

        Ok(ids)
    }

    fn connect_clique<C>(&mut self, nodes: C, weight: Weight) -> Result<Vec<EdgeId>>
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().unique().collect_vec();
        nodes
            .into_iter()
            .tuple_combinations()
            .map(|(u, v)| self.add_edge(u, v, weight))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_connect_path() {
        let mut g = MultiGraph::new();
        assert!(g.connect_path([], 1).unwrap().is_empty());
        assert!(g.connect_path([1], 1).unwrap().is_empty());

        let ids = g.connect_path([0, 3, 1, 4], 2).unwrap();
        assert_eq!(
            ids.iter().map(|&id| *g.edge(id).unwrap()).collect_vec(),
            vec![Edge::new(0, 3, 2), Edge::new(3, 1, 2), Edge::new(1, 4, 2)]
        );
    }

    #[test]
    fn test_connect_cycle() {
        let mut g = MultiGraph::new();
        assert!(g.connect_cycle([], 1).unwrap().is_empty());
        assert_eq!(g.connect_cycle([5, 6], 1).unwrap().len(), 1);
        assert!(!g.has_self_loops());

        let mut g = MultiGraph::new();
        g.connect_cycle([0, 3, 1, 4], 1).unwrap();
        assert_eq!(g.number_of_edges(), 4);
        assert_eq!(g.multiplicity(4, 0), 1);
        assert!(g.vertices().all(|u| g.degree_of(u) == Some(2)));
    }

    #[test]
    fn test_connect_clique() {
        let mut g = MultiGraph::new();
        assert!(g.connect_clique([1], 1).unwrap().is_empty());

        let mut g = MultiGraph::new();
        g.connect_clique([1, 2, 4, 2, 7], 1).unwrap();
        assert_eq!(g.number_of_nodes(), 4);
        assert_eq!(g.number_of_edges(), 6);
        assert!(g.vertices().all(|u| g.degree_of(u) == Some(3)));
    }

    #[test]
    fn strict_graphs_reject_unknown_vertices() {
        let mut g = MultiGraph::with_policy(VertexPolicy::Strict);
        g.add_node(0);
        assert_eq!(
            g.connect_path([0, 1], 1),
            Err(GraphError::MissingNode(1))
        );
    }
}
