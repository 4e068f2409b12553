/*!
# Graph Representation

[`MultiGraph`] is an arena-style store for weighted undirected multigraphs:

- vertices live in a hash map keyed by their (arbitrary) id,
- edges live in a second hash map keyed by a stable [`EdgeId`] and only store the ids of their
  endpoints,
- a flat vector of edge ids forms the *global edge sequence* which is used for uniform random
  edge selection.

Since edges never point to vertices directly, merging two vertices is a matter of rewriting ids
in the affected edge records (see [`EdgeContraction`]).

After every public operation the following holds:
- every id in a vertex's incident list names a live edge incident to that vertex, and every live
  edge is listed by both of its endpoints,
- the global edge sequence contains exactly the live edges,
- contraction never leaves self-loops behind.

Parallel edges are allowed everywhere and are never merged.
*/

use std::fmt::{Debug, Display};

use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;

use crate::{ops::*, *};

mod contraction;

/// Decides what happens if an edge names a vertex that does not exist yet
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum VertexPolicy {
    /// Missing endpoints are created silently
    #[default]
    AutoCreate,
    /// Missing endpoints are rejected with [`GraphError::MissingNode`]; vertices must be created
    /// with [`GraphEdgeEditing::add_node`] first
    Strict,
}

/// A weighted undirected multigraph over `u64` vertex ids
#[derive(Clone, Default)]
pub struct MultiGraph {
    policy: VertexPolicy,
    vertices: FxHashMap<Node, Vertex>,
    edges: FxHashMap<EdgeId, Edge>,
    /// Global edge sequence
    order: Vec<EdgeId>,
    next_edge: EdgeId,
}

impl MultiGraph {
    /// Creates an empty graph that creates missing vertices on demand
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with the given [`VertexPolicy`]
    pub fn with_policy(policy: VertexPolicy) -> Self {
        Self::new().policy(policy)
    }

    /// Sets the [`VertexPolicy`]
    pub fn set_policy(&mut self, policy: VertexPolicy) {
        self.policy = policy;
    }

    /// Sets the [`VertexPolicy`]
    pub fn policy(mut self, policy: VertexPolicy) -> Self {
        self.set_policy(policy);
        self
    }

    /// Returns the current [`VertexPolicy`]
    pub fn vertex_policy(&self) -> VertexPolicy {
        self.policy
    }

    /// Returns the vertex with id `u`, or `None` if it does not exist
    pub fn get_node(&self, u: Node) -> Option<&Vertex> {
        self.vertices.get(&u)
    }

    /// Read view of all vertices. Callers must not rely on the iteration order.
    pub fn nodes(&self) -> &FxHashMap<Node, Vertex> {
        &self.vertices
    }

    /// Under [`VertexPolicy::Strict`], fails on the first vertex in `nodes` that does not exist
    fn check_endpoints<I>(&self, nodes: I) -> Result<()>
    where
        I: IntoIterator<Item = Node>,
    {
        if self.policy == VertexPolicy::AutoCreate {
            return Ok(());
        }

        match nodes.into_iter().find(|u| !self.vertices.contains_key(u)) {
            Some(u) => Err(GraphError::MissingNode(u)),
            None => Ok(()),
        }
    }

    fn vertex_mut(&mut self, u: Node) -> &mut Vertex {
        self.vertices.entry(u).or_insert_with(|| Vertex::new(u))
    }

    /// Stores a new edge and registers it with both endpoints, creating them if necessary
    fn push_edge(&mut self, from: Node, to: Node, weight: Weight) -> EdgeId {
        let id = self.next_edge;
        self.next_edge += 1;

        self.edges.insert(id, Edge::new(from, to, weight));
        self.order.push(id);
        self.vertex_mut(from).push_incident(id);
        self.vertex_mut(to).push_incident(id);

        id
    }

    fn self_loops(&self) -> FxHashSet<EdgeId> {
        self.order
            .iter()
            .copied()
            .filter(|e| self.edges.get(e).is_some_and(Edge::is_loop))
            .collect()
    }

    /// Destroys all edges in `doomed`: they are dropped from the arena, the global edge sequence
    /// and the incident lists of their endpoints.
    fn purge_edges(&mut self, doomed: &FxHashSet<EdgeId>) {
        if doomed.is_empty() {
            return;
        }

        let mut touched = FxHashSet::default();
        for id in doomed {
            if let Some(e) = self.edges.remove(id) {
                touched.insert(e.from);
                touched.insert(e.to);
            }
        }

        for u in touched {
            if let Some(vertex) = self.vertices.get_mut(&u) {
                vertex.retain_incident(|e| !doomed.contains(&e));
            }
        }

        self.order.retain(|e| !doomed.contains(e));
    }
}

impl GraphNodeOrder for MultiGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.vertices.len()
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices.keys().copied()
    }

    fn has_node(&self, u: Node) -> bool {
        self.vertices.contains_key(&u)
    }
}

impl GraphEdgeOrder for MultiGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.order.len()
    }

    fn edge_ids(&self) -> &[EdgeId] {
        &self.order
    }

    fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }
}

impl AdjacencyList for MultiGraph {
    fn incident_ids_of(&self, u: Node) -> Option<&[EdgeId]> {
        self.vertices.get(&u).map(|v| v.incident())
    }
}

impl GraphEdgeEditing for MultiGraph {
    fn add_node(&mut self, u: Node) -> bool {
        if self.vertices.contains_key(&u) {
            false
        } else {
            self.vertices.insert(u, Vertex::new(u));
            true
        }
    }

    fn add_edge(&mut self, u: Node, v: Node, weight: Weight) -> Result<EdgeId> {
        self.check_endpoints([u, v])?;
        Ok(self.push_edge(u, v, weight))
    }

    fn insert_node_adjacency<I>(&mut self, u: Node, neighbors: I) -> Result<Vec<EdgeId>>
    where
        I: IntoIterator<Item = Node>,
    {
        let neighbors = neighbors.into_iter().collect_vec();
        self.check_endpoints(std::iter::once(u).chain(neighbors.iter().copied()))?;

        self.vertex_mut(u);
        Ok(neighbors
            .into_iter()
            .map(|v| self.push_edge(u, v, 1))
            .collect())
    }

    fn remove_edge(&mut self, edge: EdgeId) -> Option<Edge> {
        let removed = self.edges.get(&edge).copied()?;
        self.purge_edges(&FxHashSet::from_iter([edge]));
        Some(removed)
    }

    fn remove_self_loops(&mut self) -> NumEdges {
        let loops = self.self_loops();
        self.purge_edges(&loops);
        loops.len()
    }

    fn remove_node(&mut self, u: Node) -> bool {
        let Some(mut vertex) = self.vertices.remove(&u) else {
            return false;
        };

        let doomed: FxHashSet<EdgeId> = vertex.take_incident().into_iter().collect();
        self.purge_edges(&doomed);
        true
    }
}

impl Display for MultiGraph {
    /// One line per vertex (ascending id) listing its incident edges
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for u in self.ordered_vertices() {
            writeln!(
                f,
                "{u}: [{}]",
                self.incident_edges_of(u).map(|(_, e)| e).join(", ")
            )?;
        }
        Ok(())
    }
}

impl Debug for MultiGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiGraph")
            .field("policy", &self.policy)
            .field("nodes", &self.number_of_nodes())
            .field("edges", &self.edges().collect_vec())
            .finish()
    }
}
