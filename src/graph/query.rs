use super::Graph;
use crate::{Edge, Error, ErrorKind};
use std::fmt::Display;
use std::hash::Hash;
use std::sync::Arc;

impl<T> Graph<T>
where
    T: Eq + Clone + Hash + Display + Send + Sync,
{
    /**
    Gets a `Vec` of all the edges in the graph, in insertion order.

    # Examples

    ```
    use watset::{Edge, Graph, GraphSpecs};

    let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected_create_missing());
    graph.add_edges(vec![
        Edge::with_weight("n1", "n2", 1.0),
        Edge::with_weight("n2", "n3", 2.0),
    ]).unwrap();
    let all_edges = graph.get_all_edges();
    assert_eq!(all_edges.len(), 2);
    ```
    **/
    pub fn get_all_edges(&self) -> Vec<&Arc<Edge<T>>> {
        self.edges_vec.iter().collect()
    }

    /**
    Gets a `Vec` of all the node names in the graph, in insertion order.

    # Examples

    ```
    use watset::{Graph, GraphSpecs};

    let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected());
    graph.add_nodes(vec!["n1", "n2"]);
    let all_nodes = graph.get_all_nodes();
    assert_eq!(all_nodes, vec![&"n1", &"n2"]);
    ```
    */
    pub fn get_all_nodes(&self) -> Vec<&T> {
        self.nodes_vec.iter().collect()
    }

    /**
    Gets the `Edge` between `u` and `v` nodes.

    For undirected graphs the query matches either orientation.

    # Arguments

    `u`: The name of the first node of the edge.
    `v`: The name of the second node of the edge.

    # Returns

    If no edge exists between `u` and `v`, `Err` is returned.

    # Examples

    ```
    use watset::{Edge, Graph, GraphSpecs};

    let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected_create_missing());
    graph.add_edge(Edge::with_weight("n1", "n2", 1.0)).unwrap();
    assert!(graph.get_edge("n2", "n1").is_ok());
    ```
    */
    pub fn get_edge(&self, u: T, v: T) -> Result<&Arc<Edge<T>>, Error> {
        if !self.nodes_map.contains_key(&u) || !self.nodes_map.contains_key(&v) {
            return Err(Error {
                kind: ErrorKind::NodeNotFound,
                message: "One or both of the specified nodes were not found in the graph."
                    .to_string(),
            });
        }

        let u_node_index = *self.nodes_map.get(&u).unwrap();
        let v_node_index = *self.nodes_map.get(&v).unwrap();

        match self.edges_map.get(&self.edge_key(u_node_index, v_node_index)) {
            None => Err(Error {
                kind: ErrorKind::EdgeNotFound,
                message: format!("The requested edge ({}, {}) does not exist.", u, v),
            }),
            Some(position) => Ok(&self.edges_vec[*position]),
        }
    }

    /**
    Returns all edges that connect to a specified node, in the order the
    adjacencies were created. For directed graphs these are the out-edges.

    # Arguments

    * `name`: the node to get all adjacent edges for

    # Examples

    ```
    use watset::{Edge, Graph, GraphSpecs};

    let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected_create_missing());
    graph.add_edges(vec![
        Edge::with_weight("n1", "n2", 1.0),
        Edge::with_weight("n3", "n2", 2.0),
    ]).unwrap();
    let n2_edges = graph.get_edges_for_node("n2").unwrap();
    assert_eq!(n2_edges.len(), 2);
    ```
    */
    pub fn get_edges_for_node(&self, name: T) -> Result<Vec<&Arc<Edge<T>>>, Error> {
        let node_index = self.get_node_index(&name)?;
        Ok(self.successors_vec[node_index]
            .iter()
            .map(|(neighbor_index, _)| {
                let key = self.edge_key(node_index, *neighbor_index);
                let position = self.edges_map.get(&key).unwrap();
                &self.edges_vec[*position]
            })
            .collect())
    }

    /**
    Returns the neighbors of a node in an undirected graph, in the order the
    adjacencies were created.

    Returns an error if called on a directed graph. Use `get_successor_nodes`
    for directed graphs.

    # Examples

    ```
    use watset::{Edge, Graph, GraphSpecs};

    let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected_create_missing());
    graph.add_edges(vec![
        Edge::with_weight("n1", "n2", 1.0),
        Edge::with_weight("n1", "n3", 2.0),
    ]).unwrap();
    let neighbors = graph.get_neighbor_nodes("n1").unwrap();
    assert_eq!(neighbors, vec![&"n2", &"n3"]);
    ```
    */
    pub fn get_neighbor_nodes(&self, node_name: T) -> Result<Vec<&T>, Error> {
        if self.specs.directed {
            return Err(Error {
                kind: ErrorKind::WrongMethod,
                message: "For directed graphs use the `get_successor_nodes` method instead \
                    of the `get_neighbor_nodes` method."
                    .to_string(),
            });
        }
        let node_index = self.get_node_index(&node_name)?;
        Ok(self.successors_vec[node_index]
            .iter()
            .map(|(neighbor_index, _)| &self.nodes_vec[*neighbor_index])
            .collect())
    }

    /**
    Returns the successors of a node in a directed graph, in the order the
    adjacencies were created. A successor of u is a node v such that there
    exists a directed edge from u to v.

    Returns an error if called on an undirected graph. Use `get_neighbor_nodes`
    for undirected graphs.
    */
    pub fn get_successor_nodes(&self, node_name: T) -> Result<Vec<&T>, Error> {
        if !self.specs.directed {
            return Err(Error {
                kind: ErrorKind::WrongMethod,
                message: "For undirected graphs use the `get_neighbor_nodes` method instead \
                    of the `get_successor_nodes` method."
                    .to_string(),
            });
        }
        let node_index = self.get_node_index(&node_name)?;
        Ok(self.successors_vec[node_index]
            .iter()
            .map(|(successor_index, _)| &self.nodes_vec[*successor_index])
            .collect())
    }

    /**
    Returns `true` if the graph contains an edge between `u` and `v`, `false` otherwise.
    */
    pub fn has_edge(&self, u: &T, v: &T) -> bool {
        match (self.nodes_map.get(u), self.nodes_map.get(v)) {
            (Some(u_node_index), Some(v_node_index)) => self
                .edges_map
                .contains_key(&self.edge_key(*u_node_index, *v_node_index)),
            _ => false,
        }
    }

    /**
    Returns `true` if the graph contains a given node, `false` otherwise.

    # Arguments

    * `name`: the name of the node to query for
    */
    pub fn has_node(&self, name: &T) -> bool {
        self.nodes_map.contains_key(name)
    }

    /// Returns `true` if the graph contains all the given nodes, `false` otherwise.
    pub fn has_nodes(&self, names: &[T]) -> bool {
        names.iter().all(|name| self.has_node(name))
    }

    /// Returns the name of the node at a given index, or `None` if the index
    /// is out of bounds. Indexes follow node insertion order.
    pub fn get_node_by_index(&self, node_index: usize) -> Option<&T> {
        self.nodes_vec.get(node_index)
    }

    /// Returns the number of nodes in the graph.
    pub fn number_of_nodes(&self) -> usize {
        self.nodes_vec.len()
    }

    /// Returns the number of edges in the graph.
    pub fn number_of_edges(&self) -> usize {
        self.edges_vec.len()
    }

    pub(crate) fn get_node_index(&self, node_name: &T) -> Result<usize, Error> {
        match self.nodes_map.get(node_name) {
            None => Err(Error {
                kind: ErrorKind::NodeNotFound,
                message: format!("Requested node '{}' was not found in the graph.", node_name),
            }),
            Some(node_index) => Ok(*node_index),
        }
    }

    /// Returns the (neighbor index, edge weight) adjacency entries of a
    /// node, in insertion order.
    pub(crate) fn adjacency_by_index(&self, node_index: usize) -> &Vec<(usize, f64)> {
        &self.successors_vec[node_index]
    }
}
