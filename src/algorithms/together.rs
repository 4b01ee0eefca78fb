use crate::{ClusteringAlgorithm, ClusteringProvider, Error, ErrorKind, Graph};
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;
use std::sync::Arc;

/**
The trivial clustering algorithm: places every node of the graph into one
cluster. Useful as a baseline, and as a degenerate local algorithm for
[Watset](../watset/struct.Watset.html) that gives every item a single sense.

# Examples

```
use watset::algorithms::together::Together;
use watset::{ClusteringAlgorithm, Edge, Graph, GraphSpecs};

let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected_create_missing());
graph.add_edges(vec![
    Edge::with_weight("n1", "n2", 1.0),
    Edge::with_weight("n3", "n4", 1.0),
]).unwrap();
let mut together = Together::new(&graph);
together.fit().unwrap();
let clusters = together.clusters().unwrap();
assert_eq!(clusters.len(), 1);
assert_eq!(clusters[0].len(), 4);
```
*/
pub struct Together<'a, T>
where
    T: Eq + Clone + Hash + Display + Send + Sync,
{
    graph: &'a Graph<T>,
    clusters: Option<Vec<HashSet<T>>>,
}

impl<'a, T> Together<'a, T>
where
    T: Eq + Clone + Hash + Display + Send + Sync,
{
    pub fn new(graph: &'a Graph<T>) -> Together<'a, T> {
        Together {
            graph,
            clusters: None,
        }
    }

    /// Returns a factory that constructs a `Together` instance per graph.
    pub fn provider() -> ClusteringProvider<T>
    where
        T: 'static,
    {
        Arc::new(new_boxed::<T>)
    }
}

impl<'a, T> ClusteringAlgorithm<T> for Together<'a, T>
where
    T: Eq + Clone + Hash + Display + Send + Sync,
{
    fn fit(&mut self) -> Result<(), Error> {
        let cluster = self
            .graph
            .get_all_nodes()
            .into_iter()
            .cloned()
            .collect::<HashSet<T>>();
        self.clusters = Some(vec![cluster]);
        Ok(())
    }

    fn clusters(&self) -> Result<Vec<HashSet<T>>, Error> {
        match &self.clusters {
            None => Err(Error {
                kind: ErrorKind::NotFitted,
                message: "The `fit` method must be called before `clusters`.".to_string(),
            }),
            Some(clusters) => Ok(clusters.clone()),
        }
    }
}

fn new_boxed<'g, T>(graph: &'g Graph<T>) -> Box<dyn ClusteringAlgorithm<T> + 'g>
where
    T: Eq + Clone + Hash + Display + Send + Sync,
{
    Box::new(Together::new(graph))
}

/**
Places every node of `graph` into a single cluster.

# Examples

```
use watset::algorithms::together::together_clusters;
use watset::{Graph, GraphSpecs};

let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected());
graph.add_nodes(vec!["n1", "n2", "n3"]);
let clusters = together_clusters(&graph).unwrap();
assert_eq!(clusters.len(), 1);
assert_eq!(clusters[0].len(), 3);
```
*/
pub fn together_clusters<T>(graph: &Graph<T>) -> Result<Vec<HashSet<T>>, Error>
where
    T: Eq + Clone + Hash + Display + Send + Sync,
{
    let mut together = Together::new(graph);
    together.fit()?;
    together.clusters()
}
