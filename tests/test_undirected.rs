#[cfg(test)]
mod tests {

    use watset::{
        Edge, EdgeDedupeStrategy, ErrorKind, Graph, GraphSpecs, MissingNodeStrategy,
        SelfLoopStrategy,
    };

    #[test]
    fn test_add_edge_missing_node_error() {
        let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected());
        let result = graph.add_edge(Edge::with_weight("n1", "n2", 1.0));
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind, ErrorKind::NodeNotFound);
    }

    #[test]
    fn test_add_edge_missing_node_create() {
        let mut graph: Graph<&str> = Graph::new(GraphSpecs {
            missing_node_strategy: MissingNodeStrategy::Create,
            ..GraphSpecs::undirected()
        });
        let result = graph.add_edge(Edge::with_weight("n1", "n2", 1.0));
        assert!(result.is_ok());
        assert!(graph.get_edge("n1", "n2").is_ok());
        assert!(graph.get_edge("n2", "n1").is_ok());
        assert!(graph.get_edge("n1", "n3").is_err());
        assert_eq!(graph.get_all_edges().len(), 1);
        assert_eq!(graph.get_neighbor_nodes("n1").unwrap(), vec![&"n2"]);
        assert_eq!(graph.get_neighbor_nodes("n2").unwrap(), vec![&"n1"]);
    }

    #[test]
    fn test_add_edge_duplicate_error() {
        let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected_create_missing());
        graph.add_edge(Edge::with_weight("n1", "n2", 1.0)).unwrap();
        let result = graph.add_edge(Edge::with_weight("n2", "n1", 2.0));
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind, ErrorKind::DuplicateEdge);
    }

    #[test]
    fn test_add_edge_duplicate_keep_first() {
        let mut graph: Graph<&str> = Graph::new(GraphSpecs {
            edge_dedupe_strategy: EdgeDedupeStrategy::KeepFirst,
            ..GraphSpecs::undirected_create_missing()
        });
        graph.add_edge(Edge::with_weight("n1", "n2", 1.0)).unwrap();
        graph.add_edge(Edge::with_weight("n2", "n1", 2.0)).unwrap();
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.get_edge("n1", "n2").unwrap().weight, 1.0);
    }

    #[test]
    fn test_add_edge_duplicate_keep_last_overwrites_weight() {
        let mut graph: Graph<&str> = Graph::new(GraphSpecs {
            edge_dedupe_strategy: EdgeDedupeStrategy::KeepLast,
            ..GraphSpecs::undirected_create_missing()
        });
        graph.add_edge(Edge::with_weight("n1", "n2", 1.0)).unwrap();
        graph.add_edge(Edge::with_weight("n2", "n1", 2.0)).unwrap();
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.get_edge("n1", "n2").unwrap().weight, 2.0);
        // the adjacency view reflects the overwrite as well
        let edges = graph.get_edges_for_node("n1").unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].weight, 2.0);
    }

    #[test]
    fn test_add_edge_self_loop_error() {
        let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected_create_missing());
        let result = graph.add_edge(Edge::with_weight("n1", "n1", 1.0));
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind, ErrorKind::SelfLoopsFound);
    }

    #[test]
    fn test_add_edge_self_loop_drop() {
        let mut graph: Graph<&str> = Graph::new(GraphSpecs {
            self_loop_strategy: SelfLoopStrategy::Drop,
            ..GraphSpecs::undirected_create_missing()
        });
        graph.add_edge(Edge::with_weight("n1", "n1", 1.0)).unwrap();
        assert_eq!(graph.number_of_edges(), 0);
        assert_eq!(graph.number_of_nodes(), 0);
    }

    #[test]
    fn test_get_edge_either_orientation() {
        let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected_create_missing());
        graph.add_edge(Edge::with_weight("n2", "n1", 3.0)).unwrap();
        assert_eq!(graph.get_edge("n1", "n2").unwrap().weight, 3.0);
        assert_eq!(graph.get_edge("n2", "n1").unwrap().weight, 3.0);
        assert!(graph.has_edge(&"n1", &"n2"));
        assert!(graph.has_edge(&"n2", &"n1"));
    }

    #[test]
    fn test_get_edge_not_found() {
        let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected());
        graph.add_nodes(vec!["n1", "n2"]);
        let result = graph.get_edge("n1", "n2");
        assert_eq!(result.unwrap_err().kind, ErrorKind::EdgeNotFound);
        let result = graph.get_edge("n1", "n9");
        assert_eq!(result.unwrap_err().kind, ErrorKind::NodeNotFound);
    }

    #[test]
    fn test_neighbor_order_is_insertion_order() {
        let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected_create_missing());
        graph
            .add_edges(vec![
                Edge::with_weight("n1", "n4", 1.0),
                Edge::with_weight("n1", "n2", 1.0),
                Edge::with_weight("n3", "n1", 1.0),
            ])
            .unwrap();
        assert_eq!(graph.get_neighbor_nodes("n1").unwrap(), vec![&"n4", &"n2", &"n3"]);
        assert_eq!(graph.get_all_nodes(), vec![&"n1", &"n4", &"n2", &"n3"]);
    }

    #[test]
    fn test_get_successor_nodes_wrong_method() {
        let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected());
        graph.add_node("n1");
        let result = graph.get_successor_nodes("n1");
        assert_eq!(result.unwrap_err().kind, ErrorKind::WrongMethod);
    }

    #[test]
    fn test_new_from_nodes_and_edges_dedupes_nodes() {
        let graph = Graph::<&str>::new_from_nodes_and_edges(
            vec!["n1", "n2", "n1", "n2", "n3"],
            vec![Edge::with_weight("n1", "n2", 1.0)],
            GraphSpecs::undirected(),
        )
        .unwrap();
        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn test_add_node_twice() {
        let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected());
        graph.add_node("n1");
        graph.add_node("n1");
        assert_eq!(graph.number_of_nodes(), 1);
    }

    #[test]
    fn test_ensure_weights_valid() {
        let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected_create_missing());
        graph.add_edge(Edge::with_weight("n1", "n2", 1.0)).unwrap();
        assert!(graph.ensure_weights_valid().is_ok());

        let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected_create_missing());
        graph.add_edge(Edge::with_weight("n1", "n2", -1.0)).unwrap();
        let result = graph.ensure_weights_valid();
        assert_eq!(result.unwrap_err().kind, ErrorKind::InvalidGraph);

        let mut graph: Graph<&str> = Graph::new(GraphSpecs::undirected_create_missing());
        graph.add_edge(Edge::new("n1", "n2")).unwrap();
        let result = graph.ensure_weights_valid();
        assert_eq!(result.unwrap_err().kind, ErrorKind::InvalidGraph);
    }

    #[test]
    fn test_ensure_undirected() {
        let graph: Graph<&str> = Graph::new(GraphSpecs::undirected());
        assert!(graph.ensure_undirected().is_ok());
        let graph: Graph<&str> = Graph::new(GraphSpecs::directed());
        assert_eq!(
            graph.ensure_undirected().unwrap_err().kind,
            ErrorKind::InvalidGraph
        );
    }
}
