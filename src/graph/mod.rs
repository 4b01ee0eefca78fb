use crate::{Edge, GraphSpecs};
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::sync::Arc;

/**
The `Graph` struct represents a graph of nodes and edges.
It allows graphs to be created with support for:
* directed and undirected edges
* weighted and unweighted edges
* self-loops

A `Graph` has one generic argument, `T`, which specifies the type to use for
node names. Any type that is `Eq + Clone + Hash + Display + Send + Sync` can
name a node; no ordering is required. Nodes, edges and neighborhoods are
iterated in insertion order, so the same sequence of additions always yields
the same graph.

# Example

```
use watset::{Edge, Graph, GraphSpecs};

let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected_create_missing());
graph.add_edges(vec![
    Edge::with_weight("n1", "n2", 1.0),
    Edge::with_weight("n1", "n3", 3.0),
    Edge::with_weight("n2", "n3", 3.0),
]).unwrap();
assert_eq!(graph.number_of_nodes(), 3);
```
*/
pub struct Graph<T: Eq + Clone + Hash + Display + Send + Sync> {
    /// The graph's node names in insertion order.
    nodes_vec: Vec<T>,
    /// Maps a node name to its index in `nodes_vec`.
    nodes_map: HashMap<T, usize>,
    /// The graph's edges in insertion order.
    edges_vec: Vec<Arc<Edge<T>>>,
    /// Maps a canonical (u, v) node-index pair to the edge's position in
    /// `edges_vec`. For undirected graphs the pair is ordered by index.
    edges_map: HashMap<(usize, usize), usize>,
    /// Adjacency by node index, in insertion order. Each entry pairs a
    /// neighbor's index with the connecting edge's weight. For a directed
    /// graph the entries are the out-neighbors; for an undirected graph,
    /// all adjacent nodes.
    successors_vec: Vec<Vec<(usize, f64)>>,
    /// The [GraphSpecs](./struct.GraphSpecs.html) for the graph.
    pub specs: GraphSpecs,
}

mod creation;
mod ensure;
mod query;
mod subgraph;
