#[cfg(test)]
mod tests {

    use watset::{Edge, EdgeDedupeStrategy, ErrorKind, Graph, GraphSpecs, MissingNodeStrategy};

    fn create_missing_specs() -> GraphSpecs {
        GraphSpecs {
            missing_node_strategy: MissingNodeStrategy::Create,
            ..GraphSpecs::directed()
        }
    }

    #[test]
    fn test_add_edge_directed() {
        let mut graph: Graph<&str> = Graph::new(create_missing_specs());
        graph.add_edge(Edge::with_weight("n1", "n2", 1.0)).unwrap();
        assert!(graph.get_edge("n1", "n2").is_ok());
        assert!(graph.get_edge("n2", "n1").is_err());
        assert!(graph.has_edge(&"n1", &"n2"));
        assert!(!graph.has_edge(&"n2", &"n1"));
    }

    #[test]
    fn test_opposite_directions_are_distinct_edges() {
        let mut graph: Graph<&str> = Graph::new(create_missing_specs());
        graph.add_edge(Edge::with_weight("n1", "n2", 1.0)).unwrap();
        graph.add_edge(Edge::with_weight("n2", "n1", 2.0)).unwrap();
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.get_edge("n1", "n2").unwrap().weight, 1.0);
        assert_eq!(graph.get_edge("n2", "n1").unwrap().weight, 2.0);
    }

    #[test]
    fn test_duplicate_directed_edge_keep_first() {
        let mut graph: Graph<&str> = Graph::new(GraphSpecs {
            edge_dedupe_strategy: EdgeDedupeStrategy::KeepFirst,
            ..create_missing_specs()
        });
        graph.add_edge(Edge::with_weight("n1", "n2", 1.0)).unwrap();
        graph.add_edge(Edge::with_weight("n1", "n2", 9.0)).unwrap();
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.get_edge("n1", "n2").unwrap().weight, 1.0);
    }

    #[test]
    fn test_get_successor_nodes() {
        let mut graph: Graph<&str> = Graph::new(create_missing_specs());
        graph
            .add_edges(vec![
                Edge::with_weight("n1", "n3", 1.0),
                Edge::with_weight("n1", "n2", 1.0),
                Edge::with_weight("n2", "n1", 1.0),
            ])
            .unwrap();
        assert_eq!(graph.get_successor_nodes("n1").unwrap(), vec![&"n3", &"n2"]);
        assert_eq!(graph.get_successor_nodes("n2").unwrap(), vec![&"n1"]);
        assert_eq!(graph.get_successor_nodes("n3").unwrap().len(), 0);
    }

    #[test]
    fn test_get_neighbor_nodes_wrong_method() {
        let mut graph: Graph<&str> = Graph::new(GraphSpecs::directed());
        graph.add_node("n1");
        let result = graph.get_neighbor_nodes("n1");
        assert_eq!(result.unwrap_err().kind, ErrorKind::WrongMethod);
    }

    #[test]
    fn test_get_edges_for_node_returns_out_edges() {
        let mut graph: Graph<&str> = Graph::new(create_missing_specs());
        graph
            .add_edges(vec![
                Edge::with_weight("n1", "n2", 1.0),
                Edge::with_weight("n3", "n1", 1.0),
            ])
            .unwrap();
        let edges = graph.get_edges_for_node("n1").unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].v, "n2");
    }
}
