use crate::{Error, Graph};
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;
use std::sync::Arc;

/**
The capability every clustering algorithm provides.

An instance is constructed for one graph, `fit` computes the clusters, and
`clusters` returns them. Instances are cheap to construct; concurrent use of
the same instance is not supported, so construct one per call instead.
*/
pub trait ClusteringAlgorithm<T> {
    /// Computes the clusters. Calling `fit` again recomputes from scratch.
    fn fit(&mut self) -> Result<(), Error>;

    /// Returns the computed clusters, in a deterministic order.
    ///
    /// Returns an `Err` with `ErrorKind::NotFitted` if `fit` has not been
    /// called yet.
    fn clusters(&self) -> Result<Vec<HashSet<T>>, Error>;
}

/**
A factory producing a [ClusteringAlgorithm](trait.ClusteringAlgorithm.html)
for a graph. Watset takes one of these for its local stage and one for its
global stage; the factory must be pure, and is invoked once per graph.

The built-in algorithms supply their own factories, e.g.
`MaxMax::provider()` and `Together::provider()`.
*/
pub type ClusteringProvider<T> =
    Arc<dyn for<'g> Fn(&'g Graph<T>) -> Box<dyn ClusteringAlgorithm<T> + 'g> + Send + Sync>;

/**
Constructs a clustering algorithm for `graph` via `provider`, fits it, and
returns the clusters.

# Examples

```
use watset::algorithms::together::Together;
use watset::{get_clustering, Edge, Graph, GraphSpecs};

let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected_create_missing());
graph.add_edge(Edge::with_weight("n1", "n2", 1.0)).unwrap();
let clusters = get_clustering(&graph, &Together::provider()).unwrap();
assert_eq!(clusters.len(), 1);
```
*/
pub fn get_clustering<T>(
    graph: &Graph<T>,
    provider: &ClusteringProvider<T>,
) -> Result<Vec<HashSet<T>>, Error>
where
    T: Eq + Clone + Hash + Display + Send + Sync + 'static,
{
    let mut algorithm = provider(graph);
    algorithm.fit()?;
    algorithm.clusters()
}
