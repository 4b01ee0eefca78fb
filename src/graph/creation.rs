use super::Graph;
use crate::{
    Edge, EdgeDedupeStrategy, Error, ErrorKind, GraphSpecs, MissingNodeStrategy, SelfLoopStrategy,
};
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::sync::Arc;

impl<T> Graph<T>
where
    T: Eq + Clone + Hash + Display + Send + Sync,
{
    /**
    Adds an `edge` to the `Graph`.

    If the new edge references nodes that don't exist the graph's `specs.missing_node_strategy`
    determines what happens.

    ```
    use watset::{Edge, Graph, GraphSpecs};

    let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected_create_missing());
    let result = graph.add_edge(Edge::with_weight("n1", "n2", 1.0));
    assert!(result.is_ok());
    ```
    */
    pub fn add_edge(&mut self, edge: Arc<Edge<T>>) -> Result<(), Error> {
        // check for self loops
        if edge.u == edge.v {
            match self.specs.self_loop_strategy {
                SelfLoopStrategy::Allow => {}
                SelfLoopStrategy::Error => {
                    return Err(Error {
                        kind: ErrorKind::SelfLoopsFound,
                        message: format!(
                            "Edge ({}, {}) is a self-loop and the graph's \
                            `self_loop_strategy` is `Error`.",
                            edge.u, edge.v
                        ),
                    });
                }
                SelfLoopStrategy::Drop => {
                    return Ok(());
                }
            }
        }

        // check for missing nodes
        if self.specs.missing_node_strategy == MissingNodeStrategy::Error
            && (!self.nodes_map.contains_key(&edge.u) || !self.nodes_map.contains_key(&edge.v))
        {
            return Err(Error {
                kind: ErrorKind::NodeNotFound,
                message: format!(
                    "While adding edge ({}, {}) one or both of the nodes was not \
                    found in the graph. Either add the nodes or set \
                    GraphSpecs.missing_node_strategy to `Create`.",
                    edge.u, edge.v
                ),
            });
        }

        // missing_node_strategy == MissingNodeStrategy::Create
        self.add_node(edge.u.clone());
        self.add_node(edge.v.clone());

        let u_node_index = *self.nodes_map.get(&edge.u).unwrap();
        let v_node_index = *self.nodes_map.get(&edge.v).unwrap();
        let key = self.edge_key(u_node_index, v_node_index);

        match self.edges_map.get(&key).copied() {
            None => {
                self.edges_map.insert(key, self.edges_vec.len());
                self.successors_vec[u_node_index].push((v_node_index, edge.weight));
                if !self.specs.directed && u_node_index != v_node_index {
                    self.successors_vec[v_node_index].push((u_node_index, edge.weight));
                }
                self.edges_vec.push(edge);
                Ok(())
            }
            Some(position) => match self.specs.edge_dedupe_strategy {
                EdgeDedupeStrategy::Error => Err(Error {
                    kind: ErrorKind::DuplicateEdge,
                    message: format!(
                        "A duplicate edge was found: {}. \
                        Set the `GraphSpecs.edge_dedupe_strategy` if a different
                        behavior is desired.",
                        edge
                    ),
                }),
                EdgeDedupeStrategy::KeepFirst => Ok(()),
                EdgeDedupeStrategy::KeepLast => {
                    self.update_successor_weight(u_node_index, v_node_index, edge.weight);
                    if !self.specs.directed {
                        self.update_successor_weight(v_node_index, u_node_index, edge.weight);
                    }
                    self.edges_vec[position] = edge;
                    Ok(())
                }
            },
        }
    }

    /**
    Adds new edges to a `Graph`, or updates existing edges, or both.

    If the new edges reference nodes that don't exist the graph's `specs.missing_node_strategy`
    determines what happens.

    # Arguments

    * `edges`: the new edges to add to the graph

    ```
    use watset::{Edge, Graph, GraphSpecs};

    let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected_create_missing());
    let result = graph.add_edges(vec![
        Edge::with_weight("n1", "n2", 1.0),
        Edge::with_weight("n2", "n3", 1.5),
    ]);
    assert!(result.is_ok());
    ```
    */
    pub fn add_edges(&mut self, edges: Vec<Arc<Edge<T>>>) -> Result<(), Error> {
        for edge in edges {
            self.add_edge(edge)?;
        }
        Ok(())
    }

    /**
    Adds a node to the graph. Adding a node that already exists has no effect.

    # Arguments

    `name`: the name of the new node to add to the graph

    ```
    use watset::{Graph, GraphSpecs};

    let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected());
    graph.add_node("n1");
    ```
    */
    pub fn add_node(&mut self, name: T) {
        if self.nodes_map.contains_key(&name) {
            return;
        }
        let node_index = self.nodes_vec.len();
        self.nodes_map.insert(name.clone(), node_index);
        self.nodes_vec.push(name);
        self.successors_vec.push(vec![]);
    }

    /**
    Adds nodes to the graph. Nodes that already exist are skipped.

    # Arguments

    `names`: the names of the new nodes to add to the graph

    ```
    use watset::{Graph, GraphSpecs};

    let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected());
    graph.add_nodes(vec!["n1", "n2"]);
    ```
    */
    pub fn add_nodes(&mut self, names: Vec<T>) {
        for name in names {
            self.add_node(name);
        }
    }

    /**
    Creates an empty graph, according to the `specs`.

    # Arguments

    * `specs`: An instance of [GraphSpecs](./struct.GraphSpecs.html) that determines the
    characteristics and constraints of the graph.

    # Examples

    ```
    use watset::{Graph, GraphSpecs};
    let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected_create_missing());
    ```
    */
    pub fn new(specs: GraphSpecs) -> Graph<T> {
        Graph {
            nodes_vec: Vec::<T>::new(),
            nodes_map: HashMap::<T, usize>::new(),
            edges_vec: Vec::<Arc<Edge<T>>>::new(),
            edges_map: HashMap::<(usize, usize), usize>::new(),
            successors_vec: Vec::<Vec<(usize, f64)>>::new(),
            specs,
        }
    }

    /**
    Create a new `Graph` from the specified `nodes` and `edges`.

    Duplicate node names are deduplicated.

    # Arguments

    * `nodes`: The names of the nodes to add to the graph.
    * `edges`: The [Edge](./struct.Edge.html) objects to add to the graph.
    * `specs`: An instance of [GraphSpecs](./struct.GraphSpecs.html) that determines the
    characteristics and constraints of the graph.

    # Examples

    ```
    use watset::{Edge, Graph, GraphSpecs};

    let nodes = vec!["n1", "n2", "n3"];

    let edges = vec![
        Edge::with_weight("n1", "n2", 1.0),
        Edge::with_weight("n1", "n3", 3.0),
        Edge::with_weight("n2", "n3", 3.0),
    ];

    let specs = GraphSpecs::undirected();

    let graph = Graph::<&str>::new_from_nodes_and_edges(
        nodes,
        edges,
        specs
    );
    ```
    */
    pub fn new_from_nodes_and_edges(
        nodes: Vec<T>,
        edges: Vec<Arc<Edge<T>>>,
        specs: GraphSpecs,
    ) -> Result<Graph<T>, Error> {
        let mut graph = Graph::new(specs);
        graph.add_nodes(nodes);
        let result = graph.add_edges(edges);
        match result {
            Err(e) => Err(e),
            Ok(_) => Ok(graph),
        }
    }

    // PRIVATE METHODS

    /// Returns the canonical `edges_map` key for a pair of node indexes.
    /// For undirected graphs the lower index comes first.
    pub(crate) fn edge_key(&self, u_node_index: usize, v_node_index: usize) -> (usize, usize) {
        match !self.specs.directed && u_node_index > v_node_index {
            true => (v_node_index, u_node_index),
            false => (u_node_index, v_node_index),
        }
    }

    /// Overwrites the weight stored in the adjacency entry `from` -> `to`.
    fn update_successor_weight(&mut self, from: usize, to: usize, weight: f64) {
        for entry in self.successors_vec[from].iter_mut() {
            if entry.0 == to {
                entry.1 = weight;
            }
        }
    }
}
