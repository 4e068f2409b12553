/*!
# Vertex Representation

Vertices are identified by arbitrary `u64` values: ids need not be contiguous or small.
A [`Vertex`] owns nothing but its id and the ids of its incident edges; the edges themselves
live in the graph's edge arena (see [`MultiGraph`](crate::repr::MultiGraph)).
*/

use std::fmt::{Debug, Display};

use itertools::Itertools;
use smallvec::SmallVec;

use crate::edge::EdgeId;

/// Vertex identifier
pub type Node = u64;

/// Number of vertices in a graph
pub type NumNodes = usize;

/// Incident-edge list of a vertex. Most vertices in the graphs we contract have a handful of
/// incident edges, so the first few are stored inline.
pub type IncidentEdges = SmallVec<[EdgeId; 8]>;

/// A vertex together with the ordered list of its incident edges.
///
/// Parallel edges appear once each; a self-loop `(u, u)` added via
/// [`add_edge`](crate::ops::GraphEdgeEditing::add_edge) appears twice (once per endpoint).
#[derive(Clone, PartialEq, Eq)]
pub struct Vertex {
    id: Node,
    incident: IncidentEdges,
}

impl Vertex {
    /// Creates an isolated vertex
    pub fn new(id: Node) -> Self {
        Self {
            id,
            incident: IncidentEdges::new(),
        }
    }

    /// Returns the id of the vertex
    pub fn id(&self) -> Node {
        self.id
    }

    /// Returns the ids of all incident edges in insertion order
    pub fn incident(&self) -> &[EdgeId] {
        &self.incident
    }

    /// Returns the number of incident edge entries (parallel edges counted individually)
    pub fn degree(&self) -> usize {
        self.incident.len()
    }

    /// Returns *true* if no edge is incident to the vertex
    pub fn is_isolated(&self) -> bool {
        self.incident.is_empty()
    }

    pub(crate) fn push_incident(&mut self, edge: EdgeId) {
        self.incident.push(edge);
    }

    pub(crate) fn extend_incident<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = EdgeId>,
    {
        self.incident.extend(edges);
    }

    /// Keeps only incident edges matching `predicate` and returns the number of removed entries
    pub(crate) fn retain_incident<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(EdgeId) -> bool,
    {
        let before = self.incident.len();
        self.incident.retain(|e| predicate(*e));
        before - self.incident.len()
    }

    pub(crate) fn take_incident(&mut self) -> IncidentEdges {
        std::mem::take(&mut self.incident)
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: [{}]",
            self.id,
            self.incident.iter().map(|e| format!("#{e}")).join(", ")
        )
    }
}

impl Debug for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}
