use crate::{
    cosine_similarity, ClusteringAlgorithm, ClusteringProvider, Context, ContextSimilarity, Edge,
    EdgeDedupeStrategy, Error, ErrorKind, Graph, GraphSpecs, Sense, SenseInventory,
};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;
use std::sync::Arc;

pub mod sense_induction;

/**
The Watset local-global meta-algorithm for fuzzy graph clustering.

Watset first clusters the neighborhood of every node with the `local`
provider, inducing one *sense* per neighborhood cluster. Each sense's
context is then disambiguated against the full sense inventory: every
neighbor is replaced by its best-matching sense under the `similarity`
function. The disambiguated contexts are assembled into a weighted *sense
graph*, which the `global` provider clusters; the resulting sense clusters
are projected back onto the original items. An item with several senses can
land in several clusters, which is the point.

Both providers are invoked once per graph and must be pure. The sense
induction and disambiguation phases run in parallel across nodes and senses
respectively; the inventory is fully constructed before disambiguation
begins.

After a successful `fit` the derived state is available read-only through
`senses`, `contexts` and `sense_graph`. Fitting again recomputes everything
from scratch.

# Examples

```
use watset::algorithms::{maxmax::MaxMax, watset::Watset};
use watset::{ClusteringAlgorithm, Edge, Graph, GraphSpecs, Sense};

let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected_create_missing());
graph.add_edges(vec![
    Edge::with_weight("bank", "river", 1.0),
    Edge::with_weight("bank", "water", 1.0),
    Edge::with_weight("bank", "money", 1.0),
    Edge::with_weight("bank", "loan", 1.0),
    Edge::with_weight("river", "water", 1.0),
    Edge::with_weight("money", "loan", 1.0),
]).unwrap();
let mut watset = Watset::new(
    &graph,
    &MaxMax::provider(),
    &MaxMax::<Sense<&str>>::provider(),
    None,
    None,
);
watset.fit().unwrap();
assert_eq!(watset.senses().unwrap().get("bank").unwrap().len(), 2);
assert_eq!(watset.clusters().unwrap().len(), 2);
```

# References

1. Ustalov, D., Panchenko, A., Biemann, C., Ponzetto, S.P.: Watset:
Local-Global Graph Clustering with Applications in Sense and Frame
Induction. Computational Linguistics 45(3), 2019.
<https://doi.org/10.1162/COLI_a_00354>
*/
pub struct Watset<'a, T>
where
    T: Eq + Clone + Hash + Display + Send + Sync + 'static,
{
    graph: &'a Graph<T>,
    local: ClusteringProvider<T>,
    global: ClusteringProvider<Sense<T>>,
    similarity: ContextSimilarity<T>,
    self_weight: f64,
    inventory: Option<SenseInventory<T>>,
    contexts: Option<HashMap<Sense<T>, HashMap<Sense<T>, f64>>>,
    sense_graph: Option<Graph<Sense<T>>>,
    clusters: Option<Vec<HashSet<T>>>,
}

impl<'a, T> Watset<'a, T>
where
    T: Eq + Clone + Hash + Display + Send + Sync + 'static,
{
    /**
    Creates a `Watset` instance for `graph`.

    # Arguments

    * `graph`: the undirected weighted graph to cluster
    * `local`: the clustering provider applied to every node's neighborhood
    * `global`: the clustering provider applied to the sense graph
    * `similarity`: the context similarity; defaults to cosine
    * `self_weight`: the weight an item contributes to its own senses'
    contexts during disambiguation; defaults to `1.0`
    */
    pub fn new(
        graph: &'a Graph<T>,
        local: &ClusteringProvider<T>,
        global: &ClusteringProvider<Sense<T>>,
        similarity: Option<ContextSimilarity<T>>,
        self_weight: Option<f64>,
    ) -> Watset<'a, T> {
        Watset {
            graph,
            local: Arc::clone(local),
            global: Arc::clone(global),
            similarity: similarity.unwrap_or_else(|| Arc::new(cosine_similarity::<T>)),
            self_weight: self_weight.unwrap_or(1.0),
            inventory: None,
            contexts: None,
            sense_graph: None,
            clusters: None,
        }
    }

    /// Returns the sense inventory derived by `fit`: for every item, the
    /// contexts of its induced senses.
    pub fn senses(&self) -> Result<&SenseInventory<T>, Error> {
        match &self.inventory {
            None => Err(not_fitted()),
            Some(inventory) => Ok(inventory),
        }
    }

    /// Returns the disambiguated context of every sense, as derived by `fit`.
    pub fn contexts(&self) -> Result<&HashMap<Sense<T>, HashMap<Sense<T>, f64>>, Error> {
        match &self.contexts {
            None => Err(not_fitted()),
            Some(contexts) => Ok(contexts),
        }
    }

    /// Returns the weighted sense graph derived by `fit`.
    pub fn sense_graph(&self) -> Result<&Graph<Sense<T>>, Error> {
        match &self.sense_graph {
            None => Err(not_fitted()),
            Some(sense_graph) => Ok(sense_graph),
        }
    }
}

impl<'a, T> ClusteringAlgorithm<T> for Watset<'a, T>
where
    T: Eq + Clone + Hash + Display + Send + Sync + 'static,
{
    fn fit(&mut self) -> Result<(), Error> {
        self.inventory = None;
        self.contexts = None;
        self.sense_graph = None;
        self.clusters = None;

        let graph = self.graph;
        graph.ensure_undirected()?;
        graph.ensure_no_self_loops()?;
        graph.ensure_weights_valid()?;

        // Local step: induce the senses of every node in parallel.
        let local = Arc::clone(&self.local);
        let node_count = graph.number_of_nodes();
        let node_contexts = (0..node_count)
            .into_par_iter()
            .map(|node_index| {
                let node = graph.get_node_by_index(node_index).unwrap();
                sense_induction::contexts(graph, &local, node)
            })
            .collect::<Result<Vec<Vec<Context<T>>>, Error>>()?;

        let mut inventory: SenseInventory<T> = HashMap::with_capacity(node_count);
        for (node_index, contexts) in node_contexts.into_iter().enumerate() {
            let node = graph.get_node_by_index(node_index).unwrap();
            let senses = contexts
                .into_iter()
                .enumerate()
                .map(|(sense_index, context)| (Sense::new(node.clone(), sense_index), context))
                .collect::<HashMap<Sense<T>, Context<T>>>();
            inventory.insert(node.clone(), senses);
        }
        // An item without neighbors still takes part in the clustering,
        // through a single sense with an empty context.
        for node in graph.get_all_nodes() {
            let senses = inventory.get_mut(node).unwrap();
            if senses.is_empty() {
                senses.insert(Sense::new(node.clone(), 0), Context::new());
            }
        }

        // Global step: disambiguate the context of every sense in parallel.
        // The inventory is complete at this point; it is only read below.
        let sense_list = graph
            .get_all_nodes()
            .into_iter()
            .flat_map(|node| {
                let senses = inventory.get(node).unwrap();
                (0..senses.len()).map(move |sense_index| {
                    let sense = Sense::new(node.clone(), sense_index);
                    let context = senses.get(&sense).unwrap().clone();
                    (sense, context)
                })
            })
            .collect::<Vec<(Sense<T>, Context<T>)>>();

        let similarity = Arc::clone(&self.similarity);
        let self_weight = self.self_weight;
        let disambiguated = sense_list
            .into_par_iter()
            .map(|(sense, context)| match context.is_empty() {
                true => Ok((sense, HashMap::new())),
                false => {
                    let mut context = context;
                    context.insert(sense.item().clone(), self_weight);
                    let exclude = vec![sense.item().clone()]
                        .into_iter()
                        .collect::<HashSet<T>>();
                    let disambiguated =
                        Sense::disambiguate(&inventory, similarity.as_ref(), &context, &exclude)?;
                    Ok((sense, disambiguated))
                }
            })
            .collect::<Result<Vec<(Sense<T>, HashMap<Sense<T>, f64>)>, Error>>()?;

        // Sense-graph assembly. A second write to an existing edge
        // overwrites the weight.
        let mut sense_graph: Graph<Sense<T>> = Graph::new(GraphSpecs {
            edge_dedupe_strategy: EdgeDedupeStrategy::KeepLast,
            ..GraphSpecs::undirected()
        });
        for (sense, _) in &disambiguated {
            sense_graph.add_node(sense.clone());
        }
        for (sense, context) in &disambiguated {
            for (other_sense, weight) in context {
                sense_graph.add_edge(Edge::with_weight(
                    sense.clone(),
                    other_sense.clone(),
                    *weight,
                ))?;
            }
        }
        if sense_graph.number_of_edges() < graph.number_of_edges() {
            return Err(Error {
                kind: ErrorKind::CorruptSenseGraph,
                message: format!(
                    "The sense graph has {} edges but the input graph has {}; \
                    the disambiguation dropped a neighbor it must not have.",
                    sense_graph.number_of_edges(),
                    graph.number_of_edges()
                ),
            });
        }

        // Global clustering and projection back onto the items.
        let sense_clusters = {
            let mut algorithm = (self.global)(&sense_graph);
            algorithm.fit()?;
            algorithm.clusters()?
        };
        let clusters = sense_clusters
            .into_iter()
            .map(|cluster| {
                cluster
                    .into_iter()
                    .map(|sense| sense.item().clone())
                    .collect::<HashSet<T>>()
            })
            .collect::<Vec<HashSet<T>>>();

        self.contexts = Some(disambiguated.into_iter().collect());
        self.inventory = Some(inventory);
        self.sense_graph = Some(sense_graph);
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

fn not_fitted() -> Error {
    Error {
        kind: ErrorKind::NotFitted,
        message: "The `fit` method must be called before `clusters`.".to_string(),
    }
}

/**
Clusters an undirected weighted `graph` with the Watset meta-algorithm.

# Arguments

* `graph`: the undirected weighted graph to cluster
* `local`: the clustering provider applied to every node's neighborhood
* `global`: the clustering provider applied to the sense graph
* `similarity`: the context similarity; defaults to cosine
* `self_weight`: the default self-weight used during disambiguation;
defaults to `1.0`

# Examples

```
use watset::algorithms::{together::Together, watset::watset_clusters};
use watset::{Edge, Graph, GraphSpecs, Sense};

let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected_create_missing());
graph.add_edges(vec![
    Edge::with_weight("n1", "n2", 1.0),
    Edge::with_weight("n2", "n3", 2.0),
]).unwrap();
let clusters = watset_clusters(
    &graph,
    &Together::provider(),
    &Together::<Sense<&str>>::provider(),
    None,
    None,
).unwrap();
assert_eq!(clusters.len(), 1);
```
*/
pub fn watset_clusters<T>(
    graph: &Graph<T>,
    local: &ClusteringProvider<T>,
    global: &ClusteringProvider<Sense<T>>,
    similarity: Option<ContextSimilarity<T>>,
    self_weight: Option<f64>,
) -> Result<Vec<HashSet<T>>, Error>
where
    T: Eq + Clone + Hash + Display + Send + Sync + 'static,
{
    let mut watset = Watset::new(graph, local, global, similarity, self_weight);
    watset.fit()?;
    watset.clusters()
}
