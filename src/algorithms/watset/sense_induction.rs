use crate::{ClusteringProvider, Context, Error, Graph};
use std::fmt::Display;
use std::hash::Hash;

/**
Induces the sense contexts of a single `node`.

The neighborhood of `node` (the subgraph induced by its neighbors, with
`node` itself excluded and all weights preserved) is clustered with the
`local` provider. Every cluster becomes one context, mapping each member `y`
to the weight of the (`node`, `y`) edge. Contexts are returned in the local
algorithm's cluster order, so a stable local algorithm yields a stable sense
numbering.

A node without neighbors yields an empty vector; the local algorithm is not
invoked for it.

# Examples

```
use watset::algorithms::{maxmax::MaxMax, watset::sense_induction};
use watset::{Edge, Graph, GraphSpecs};

let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected_create_missing());
graph.add_edges(vec![
    Edge::with_weight("bank", "river", 1.0),
    Edge::with_weight("bank", "water", 1.0),
    Edge::with_weight("bank", "money", 1.0),
    Edge::with_weight("bank", "loan", 1.0),
    Edge::with_weight("river", "water", 1.0),
    Edge::with_weight("money", "loan", 1.0),
]).unwrap();
let contexts = sense_induction::contexts(&graph, &MaxMax::provider(), &"bank").unwrap();
assert_eq!(contexts.len(), 2);
```
*/
pub fn contexts<T>(
    graph: &Graph<T>,
    local: &ClusteringProvider<T>,
    node: &T,
) -> Result<Vec<Context<T>>, Error>
where
    T: Eq + Clone + Hash + Display + Send + Sync + 'static,
{
    let neighbors = graph
        .get_neighbor_nodes(node.clone())?
        .into_iter()
        .cloned()
        .collect::<Vec<T>>();
    if neighbors.is_empty() {
        return Ok(vec![]);
    }
    let ego_graph = graph.get_subgraph(&neighbors)?;
    let mut algorithm = local(&ego_graph);
    algorithm.fit()?;
    let clusters = algorithm.clusters()?;
    let mut result = Vec::with_capacity(clusters.len());
    for cluster in clusters {
        let mut context = Context::with_capacity(cluster.len());
        for neighbor in cluster {
            let weight = graph.get_edge(node.clone(), neighbor.clone())?.weight;
            context.insert(neighbor, weight);
        }
        result.push(context);
    }
    Ok(result)
}
