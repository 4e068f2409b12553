/*!
`mgraphs` is a small in-memory library for **weighted undirected multigraphs** built around
edge contraction. It offers

- a mutable graph store with stable vertex ids (any `u64`) and stable edge ids,
- edge contraction that merges two vertices, keeps parallel edges and discards self-loops,
- Karger's random contraction as a Monte Carlo estimator of the global minimum cut,
- Prim-style spanning tree growth that reports disconnected inputs explicitly.

# Representation

Vertices are `u64` ids, not required to be contiguous. Edges are records `(from, to, weight)`
stored in an arena keyed by [`EdgeId`]; the order of `from` and `to` is the insertion order and has
no meaning for adjacency. Parallel edges are first-class: they are never merged, as they carry
the multiplicities that random contraction relies on.

Whether unknown endpoints are created on demand or rejected is a choice of the graph's
[`VertexPolicy`](crate::repr::VertexPolicy).

# Randomness

No algorithm touches a global random generator. Every randomized operation takes an `&mut R`
where `R: rand::Rng`; seed it (e.g. with `rand_pcg::Pcg64Mcg::seed_from_u64`) for reproducible
runs.

# Usage

```rust
use mgraphs::{prelude::*, algo::*};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

let mut graph = MultiGraph::new();
graph.insert_node_adjacency(1, [2, 3, 4]).unwrap();
graph.add_edge(2, 3, 5).unwrap();

let rng = &mut Pcg64Mcg::seed_from_u64(42);
let tree = graph.find_mst(rng);
assert!(tree.is_spanning());
assert_eq!(tree.total_weight(), 3);

let estimate = KargerMinCut::new().trials(50).run(&graph, rng).unwrap();
assert_eq!(estimate.cut, 1);
```

In most use-cases, `use mgraphs::{prelude::*, algo::*};` suffices.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `mgraphs::prelude` includes vertex and edge definitions, the error type, all basic graph
/// operation traits and the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
