use std::fmt::{Debug, Display};

use crate::Node;

/// Stable identifier of an edge inside a graph's edge arena. Ids are never reused, so an id that
/// referred to an edge destroyed by a contraction stays invalid forever.
pub type EdgeId = u64;

/// Number of edges in a graph
pub type NumEdges = usize;

/// Edge weights are signed integers
pub type Weight = i64;

/// A weighted, logically undirected edge.
///
/// The order of `from` and `to` only reflects insertion order. It matters for contraction,
/// which merges `to` into `from`, but not for any adjacency query.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: Node,
    pub to: Node,
    pub weight: Weight,
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.from, self.to, self.weight)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    pub fn new(from: Node, to: Node, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// Returns the endpoints with the smaller id first
    pub fn normalized(&self) -> (Node, Node) {
        (self.from.min(self.to), self.from.max(self.to))
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }

    /// Returns true if `u` is one of the endpoints
    pub fn is_incident_to(&self, u: Node) -> bool {
        self.from == u || self.to == u
    }

    /// Returns the endpoint opposite of `u`, or `None` if `u` is not an endpoint.
    /// For a self-loop at `u` this is `u` itself.
    pub fn other(&self, u: Node) -> Option<Node> {
        if self.from == u {
            Some(self.to)
        } else if self.to == u {
            Some(self.from)
        } else {
            None
        }
    }

    /// Rewrites every endpoint equal to `old` into `new`.
    /// Returns *true* if at least one endpoint changed.
    pub fn redirect(&mut self, old: Node, new: Node) -> bool {
        let mut changed = false;
        if self.from == old {
            self.from = new;
            changed = true;
        }
        if self.to == old {
            self.to = new;
            changed = true;
        }
        changed
    }
}

impl From<(Node, Node, Weight)> for Edge {
    fn from(value: (Node, Node, Weight)) -> Self {
        Edge::new(value.0, value.1, value.2)
    }
}

impl From<&(Node, Node, Weight)> for Edge {
    fn from(value: &(Node, Node, Weight)) -> Self {
        Edge::new(value.0, value.1, value.2)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}
