use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the vertex-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of vertices of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns an iterator over all vertex ids. No particular order is guaranteed.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns all vertex ids in ascending order
    fn ordered_vertices(&self) -> Vec<Node> {
        self.vertices().sorted_unstable().collect_vec()
    }

    /// Returns *true* if `u` is a vertex of the graph
    fn has_node(&self, u: Node) -> bool;

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_nodes() == 0
    }
}

/// Provides getters pertaining to the edge-sequence of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph (parallel edges counted individually)
    fn number_of_edges(&self) -> NumEdges;

    /// Returns the ids of all edges in the order of the global edge sequence
    fn edge_ids(&self) -> &[EdgeId];

    /// Returns the edge with the given id, or `None` if no such edge is alive
    fn edge(&self, id: EdgeId) -> Option<&Edge>;

    /// Returns an iterator over all edges in the order of the global edge sequence
    fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edge_ids().iter().filter_map(|&id| self.edge(id))
    }

    /// Returns the sum of all edge weights
    fn total_weight(&self) -> Weight {
        self.edges().map(|e| e.weight).sum()
    }

    /// Returns *true* if any edge of the graph is a self-loop
    fn has_self_loops(&self) -> bool {
        self.edges().any(|e| e.is_loop())
    }

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for incident edges & neighborhoods
pub trait AdjacencyList: GraphNodeOrder + GraphEdgeOrder {
    /// Returns the ids of all edges incident to `u` in insertion order, or `None` if `u` does
    /// not exist.
    fn incident_ids_of(&self, u: Node) -> Option<&[EdgeId]>;

    /// Returns an iterator over all edges incident to `u`.
    /// Yields nothing if `u` does not exist.
    fn incident_edges_of(&self, u: Node) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.incident_ids_of(u)
            .unwrap_or_default()
            .iter()
            .filter_map(|&id| self.edge(id).map(|e| (id, e)))
    }

    /// Returns the number of incident edge entries of `u`, or `None` if `u` does not exist
    fn degree_of(&self, u: Node) -> Option<usize> {
        self.incident_ids_of(u).map(|ids| ids.len())
    }

    /// Returns an iterator over the neighbors of `u`, with one entry per parallel edge
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.incident_edges_of(u)
            .filter_map(move |(_, e)| e.other(u))
    }

    /// Returns the number of parallel edges between `u` and `v`
    fn multiplicity(&self, u: Node, v: Node) -> usize {
        self.incident_edges_of(u)
            .filter(|(_, e)| e.normalized() == (u.min(v), u.max(v)))
            .count()
    }
}

/// Provides functions to insert/delete vertices and edges
pub trait GraphEdgeEditing {
    /// Adds an isolated vertex.
    /// Returns *true* exactly if the vertex was not present previously.
    fn add_node(&mut self, u: Node) -> bool;

    /// Adds a new edge `(u, v)` with the given weight, even if a parallel edge already exists.
    /// `u == v` creates a self-loop.
    ///
    /// # Errors
    /// Fails with [`GraphError::MissingNode`] if an endpoint does not exist and the graph does not
    /// create vertices on demand.
    fn add_edge(&mut self, u: Node, v: Node, weight: Weight) -> Result<EdgeId>;

    /// Adds all edges in the collection.
    /// Stops at (and returns) the first error; edges added before that remain.
    fn add_edges<I>(&mut self, edges: I) -> Result<Vec<EdgeId>>
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        edges
            .into_iter()
            .map(|e| {
                let e: Edge = e.into();
                self.add_edge(e.from, e.to, e.weight)
            })
            .collect()
    }

    /// Makes sure `u` exists and connects it to every listed neighbor by a new unit-weight edge.
    /// A neighbor listed twice (or issued again in a later call) yields parallel edges.
    ///
    /// # Errors
    /// Fails with [`GraphError::MissingNode`] if any named vertex does not exist and the graph
    /// does not create vertices on demand. Nothing is inserted in that case.
    fn insert_node_adjacency<I>(&mut self, u: Node, neighbors: I) -> Result<Vec<EdgeId>>
    where
        I: IntoIterator<Item = Node>;

    /// Removes a single edge and returns it, or `None` if `edge` does not name a live edge
    fn remove_edge(&mut self, edge: EdgeId) -> Option<Edge>;

    /// Removes every self-loop and returns the number of removed edges
    fn remove_self_loops(&mut self) -> NumEdges;

    /// Removes `u` together with every edge incident to it.
    /// Returns *false* (and does nothing) if `u` does not exist.
    fn remove_node(&mut self, u: Node) -> bool;

    /// Removes all vertices in the collection and returns the number actually removed
    fn remove_nodes<I>(&mut self, nodes: I) -> NumNodes
    where
        I: IntoIterator<Item = Node>,
    {
        nodes.into_iter().filter(|&u| self.remove_node(u)).count()
    }
}

/// Merging the endpoints of an edge into a single vertex
pub trait EdgeContraction: GraphEdgeEditing {
    /// Contracts the edge with id `edge = (from, to)` by merging `to` into `from`.
    ///
    /// All edges incident to `to` are redirected to `from`, every self-loop this produces
    /// (including `edge` itself) is destroyed, and `to` is removed. Parallel edges survive.
    /// Returns the number of destroyed self-loops (always at least 1).
    ///
    /// # Errors
    /// The edge must be taken from the current edge sequence; otherwise fails with
    /// [`GraphError::StaleEdge`] or [`GraphError::SelfLoop`] and leaves the graph untouched.
    fn contract_edge(&mut self, edge: EdgeId) -> Result<NumEdges>;
}
