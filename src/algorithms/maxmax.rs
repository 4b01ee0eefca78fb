use crate::{
    ClusteringAlgorithm, ClusteringProvider, Edge, EdgeDedupeStrategy, Error, ErrorKind, Graph,
    GraphSpecs,
};
use nohash::IntSet;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Display;
use std::hash::Hash;
use std::sync::Arc;

/**
The MaxMax soft clustering algorithm for undirected weighted graphs.

MaxMax rewrites the input graph into an unweighted directed graph in which
every node points at the nodes it is a *maximal neighbor* of, that is, a
neighbor sharing the node's highest incident edge weight. Root nodes of the directed
graph are identified with a single deterministic sweep, and each root yields
one cluster. Clusters may overlap: a node can be reachable from more than
one root.

`fit` derives the directed graph, the maximal-neighbor map and the root
flags exactly once per call; they are available read-only afterwards via
`digraph`, `maximals` and `roots`.

# Examples

```
use watset::algorithms::maxmax::MaxMax;
use watset::{ClusteringAlgorithm, Edge, Graph, GraphSpecs};

let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected_create_missing());
graph.add_edges(vec![
    Edge::with_weight("a", "b", 1.0),
    Edge::with_weight("c", "d", 1.0),
]).unwrap();
let mut maxmax = MaxMax::new(&graph);
maxmax.fit().unwrap();
let clusters = maxmax.clusters().unwrap();
assert_eq!(clusters.len(), 2);
```

# References

1. Hope, D., Keller, B.: MaxMax: A Graph-Based Soft Clustering Algorithm
Applied to Word Sense Induction. CICLing 2013.
<https://doi.org/10.1007/978-3-642-37247-6_30>
*/
pub struct MaxMax<'a, T>
where
    T: Eq + Clone + Hash + Display + Send + Sync,
{
    graph: &'a Graph<T>,
    digraph: Option<Graph<T>>,
    maximals: Option<HashMap<T, HashSet<T>>>,
    roots: Option<HashMap<T, bool>>,
    clusters: Option<Vec<HashSet<T>>>,
}

impl<'a, T> MaxMax<'a, T>
where
    T: Eq + Clone + Hash + Display + Send + Sync,
{
    pub fn new(graph: &'a Graph<T>) -> MaxMax<'a, T> {
        MaxMax {
            graph,
            digraph: None,
            maximals: None,
            roots: None,
            clusters: None,
        }
    }

    /// Returns a factory that constructs a `MaxMax` instance per graph.
    pub fn provider() -> ClusteringProvider<T>
    where
        T: 'static,
    {
        Arc::new(new_boxed::<T>)
    }

    /// Returns the directed maximal-neighbor graph derived by `fit`.
    pub fn digraph(&self) -> Result<&Graph<T>, Error> {
        match &self.digraph {
            None => Err(not_fitted()),
            Some(digraph) => Ok(digraph),
        }
    }

    /// Returns the maximal-neighbor set of every node, as derived by `fit`.
    /// An isolated node maps to an empty set.
    pub fn maximals(&self) -> Result<&HashMap<T, HashSet<T>>, Error> {
        match &self.maximals {
            None => Err(not_fitted()),
            Some(maximals) => Ok(maximals),
        }
    }

    /// Returns the root flag of every node, as derived by `fit`.
    pub fn roots(&self) -> Result<&HashMap<T, bool>, Error> {
        match &self.roots {
            None => Err(not_fitted()),
            Some(roots) => Ok(roots),
        }
    }
}

impl<'a, T> ClusteringAlgorithm<T> for MaxMax<'a, T>
where
    T: Eq + Clone + Hash + Display + Send + Sync,
{
    fn fit(&mut self) -> Result<(), Error> {
        self.digraph = None;
        self.maximals = None;
        self.roots = None;
        self.clusters = None;

        let graph = self.graph;
        graph.ensure_undirected()?;
        graph.ensure_no_self_loops()?;
        graph.ensure_weights_valid()?;

        // Preparation: compute the maximal-neighbor set of every node
        let mut maximals: HashMap<T, HashSet<T>> =
            HashMap::with_capacity(graph.number_of_nodes());
        for node in graph.get_all_nodes() {
            let edges = graph.get_edges_for_node(node.clone())?;
            let max = edges.iter().map(|edge| edge.weight).fold(-1.0, f64::max);
            let maximal = edges
                .iter()
                .filter(|edge| edge.weight == max)
                .map(|edge| edge.opposite(node).clone())
                .collect::<HashSet<T>>();
            maximals.insert(node.clone(), maximal);
        }

        // Graph transformation: direct each edge at the node it is maximal for
        let mut digraph: Graph<T> = Graph::new(GraphSpecs {
            edge_dedupe_strategy: EdgeDedupeStrategy::KeepFirst,
            ..GraphSpecs::directed()
        });
        for node in graph.get_all_nodes() {
            digraph.add_node(node.clone());
        }
        for edge in graph.get_all_edges() {
            if maximals.get(&edge.u).unwrap().contains(&edge.v) {
                digraph.add_edge(Edge::new(edge.v.clone(), edge.u.clone()))?;
            }
            if maximals.get(&edge.v).unwrap().contains(&edge.u) {
                digraph.add_edge(Edge::new(edge.u.clone(), edge.v.clone()))?;
            }
        }

        // Identifying roots: every node that is still a root when visited,
        // in insertion order, demotes its direct successors
        let node_count = graph.number_of_nodes();
        let mut roots_vec = vec![true; node_count];
        for node_index in 0..node_count {
            if !roots_vec[node_index] {
                continue;
            }
            for &(successor_index, _) in digraph.adjacency_by_index(node_index) {
                if successor_index != node_index {
                    roots_vec[successor_index] = false;
                }
            }
        }

        // Identifying clusters: a root collects itself and the non-root
        // nodes reachable from it without entering another root
        let mut clusters: Vec<HashSet<T>> = vec![];
        for root_index in 0..node_count {
            if !roots_vec[root_index] {
                continue;
            }
            let mut members = IntSet::<usize>::default();
            members.insert(root_index);
            let mut queue = digraph
                .adjacency_by_index(root_index)
                .iter()
                .map(|(successor_index, _)| *successor_index)
                .collect::<VecDeque<usize>>();
            while let Some(node_index) = queue.pop_front() {
                if members.contains(&node_index) || roots_vec[node_index] {
                    continue;
                }
                members.insert(node_index);
                queue.extend(
                    digraph
                        .adjacency_by_index(node_index)
                        .iter()
                        .map(|(successor_index, _)| *successor_index),
                );
            }
            clusters.push(
                members
                    .iter()
                    .map(|node_index| graph.get_node_by_index(*node_index).unwrap().clone())
                    .collect::<HashSet<T>>(),
            );
        }

        self.roots = Some(
            (0..node_count)
                .map(|node_index| {
                    let node = graph.get_node_by_index(node_index).unwrap().clone();
                    (node, roots_vec[node_index])
                })
                .collect(),
        );
        self.digraph = Some(digraph);
        self.maximals = Some(maximals);
        self.clusters = Some(clusters);
        Ok(())
    }

    fn clusters(&self) -> Result<Vec<HashSet<T>>, Error> {
        match &self.clusters {
            None => Err(not_fitted()),
            Some(clusters) => Ok(clusters.clone()),
        }
    }
}

fn new_boxed<'g, T>(graph: &'g Graph<T>) -> Box<dyn ClusteringAlgorithm<T> + 'g>
where
    T: Eq + Clone + Hash + Display + Send + Sync,
{
    Box::new(MaxMax::new(graph))
}

fn not_fitted() -> Error {
    Error {
        kind: ErrorKind::NotFitted,
        message: "The `fit` method must be called before `clusters`.".to_string(),
    }
}

/**
Clusters an undirected weighted `graph` with the MaxMax algorithm.

# Examples

```
use watset::algorithms::maxmax::maxmax_clusters;
use watset::{Edge, Graph, GraphSpecs};

let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected_create_missing());
graph.add_edges(vec![
    Edge::with_weight("a", "b", 1.0),
    Edge::with_weight("b", "c", 1.0),
    Edge::with_weight("a", "c", 1.0),
]).unwrap();
let clusters = maxmax_clusters(&graph).unwrap();
assert_eq!(clusters.len(), 1);
```
*/
pub fn maxmax_clusters<T>(graph: &Graph<T>) -> Result<Vec<HashSet<T>>, Error>
where
    T: Eq + Clone + Hash + Display + Send + Sync,
{
    let mut maxmax = MaxMax::new(graph);
    maxmax.fit()?;
    maxmax.clusters()
}
