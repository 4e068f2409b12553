/*!
# Graph Algorithms

Randomized algorithms built on top of [`MultiGraph`](crate::repr::MultiGraph):

- [`RandomContraction`]: a single run of Karger's random contraction, an upper bound on the
  global minimum cut; [`KargerMinCut`] repeats it over independently seeded trials,
- [`FrontierMst`]: Prim-style spanning tree growth from a random start vertex.

Both are implemented as traits on the graph itself and take an explicit random generator, so
every run is reproducible from its seed:
```rust
use mgraphs::{prelude::*, algo::*, gens::*};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

let rng = &mut Pcg64Mcg::seed_from_u64(1);
let mut graph = MultiGraph::new();
graph.connect_cycle(0..6, 1).unwrap();

assert!(graph.find_mst(rng).is_spanning());
assert_eq!(graph.contraction_algorithm(rng).unwrap(), 2);
```
*/

mod contraction;
mod frontier_mst;

use crate::prelude::*;

pub use contraction::*;
pub use frontier_mst::*;
