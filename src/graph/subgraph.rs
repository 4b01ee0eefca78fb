use super::Graph;
use crate::{Error, ErrorKind};
use nohash::IntSet;
use std::fmt::Display;
use std::hash::Hash;

impl<T> Graph<T>
where
    T: Eq + Clone + Hash + Display + Send + Sync,
{
    /**
    Returns an induced subgraph that contains only the specified nodes
    and the edges between those nodes. Node and edge insertion order is
    inherited from the parent graph.

    # Arguments

    * `nodes`: The nodes the subgraph must contain.

    # Examples

    ```
    use watset::{Edge, Graph, GraphSpecs};

    let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected_create_missing());
    graph.add_edges(vec![
        Edge::with_weight("n1", "n2", 1.0),
        Edge::with_weight("n2", "n3", 2.0),
        Edge::with_weight("n3", "n4", 3.0),
    ]).unwrap();
    let subgraph = graph.get_subgraph(&["n2", "n3"]).unwrap();
    assert_eq!(subgraph.number_of_nodes(), 2);
    assert_eq!(subgraph.number_of_edges(), 1);
    ```
    */
    pub fn get_subgraph(&self, nodes: &[T]) -> Result<Graph<T>, Error> {
        if !self.has_nodes(nodes) {
            return Err(Error {
                kind: ErrorKind::NodeNotFound,
                message: "The node was not found in graph".to_string(),
            });
        }
        let indexes = nodes
            .iter()
            .map(|name| *self.nodes_map.get(name).unwrap())
            .collect::<IntSet<usize>>();
        let mut subgraph = Graph::new(self.specs.clone());
        for (node_index, name) in self.nodes_vec.iter().enumerate() {
            if indexes.contains(&node_index) {
                subgraph.add_node(name.clone());
            }
        }
        for edge in &self.edges_vec {
            let u_node_index = *self.nodes_map.get(&edge.u).unwrap();
            let v_node_index = *self.nodes_map.get(&edge.v).unwrap();
            if indexes.contains(&u_node_index) && indexes.contains(&v_node_index) {
                subgraph.add_edge(edge.clone())?;
            }
        }
        Ok(subgraph)
    }
}

#[cfg(test)]
mod tests {

    use crate::{Edge, Graph, GraphSpecs};

    #[test]
    fn test_get_subgraph() {
        let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected_create_missing());
        graph
            .add_edges(vec![
                Edge::with_weight("n1", "n2", 1.0),
                Edge::with_weight("n2", "n3", 2.0),
                Edge::with_weight("n3", "n4", 3.0),
                Edge::with_weight("n4", "n2", 4.0),
            ])
            .unwrap();
        let subgraph = graph.get_subgraph(&["n2", "n3", "n4"]).unwrap();
        assert_eq!(subgraph.get_all_nodes(), vec![&"n2", &"n3", &"n4"]);
        assert_eq!(subgraph.number_of_edges(), 3);
        assert!(subgraph.get_edge("n2", "n3").is_ok());
        assert!(subgraph.get_edge("n3", "n4").is_ok());
        assert!(subgraph.get_edge("n4", "n2").is_ok());
        assert!(subgraph.get_edge("n1", "n2").is_err());
        assert_eq!(subgraph.get_edge("n2", "n3").unwrap().weight, 2.0);
    }

    #[test]
    fn test_get_subgraph_missing_node() {
        let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected_create_missing());
        graph
            .add_edge(Edge::with_weight("n1", "n2", 1.0))
            .unwrap();
        assert!(graph.get_subgraph(&["n1", "n9"]).is_err());
    }
}
