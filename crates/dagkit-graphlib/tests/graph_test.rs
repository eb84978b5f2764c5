use dagkit_graphlib::{Graph, GraphError, GraphOptions};

fn path_graph(ids: &[&str]) -> Graph<(), ()> {
    let mut g: Graph<(), ()> = Graph::default();
    for id in ids {
        g.set_node(*id, ());
    }
    for (i, pair) in ids.windows(2).enumerate() {
        g.set_edge(format!("e{i}"), pair[0], pair[1], ()).unwrap();
    }
    g
}

#[test]
fn nodes_and_edges_keep_insertion_order() {
    let g = path_graph(&["c", "a", "b"]);
    assert_eq!(g.node_ids().collect::<Vec<_>>(), vec!["c", "a", "b"]);
    let edges: Vec<(&str, &str, &str)> = g.edges().map(|e| (e.id, e.v, e.w)).collect();
    assert_eq!(edges, vec![("e0", "c", "a"), ("e1", "a", "b")]);
}

#[test]
fn set_node_replaces_label_of_existing_node() {
    let mut g: Graph<i32, ()> = Graph::default();
    assert!(g.set_node("a", 1));
    assert!(!g.set_node("a", 2));
    assert_eq!(g.node("a"), Some(&2));
    assert_eq!(g.node_count(), 1);
}

#[test]
fn set_edge_requires_existing_endpoints() {
    let mut g: Graph<(), ()> = Graph::default();
    g.set_node("a", ());
    assert_eq!(
        g.set_edge("e1", "a", "b", ()),
        Err(GraphError::MissingNode { id: "b".to_string() })
    );
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn set_edge_rejects_reused_ids() {
    let mut g = path_graph(&["a", "b"]);
    assert_eq!(
        g.set_edge("e0", "b", "a", ()),
        Err(GraphError::DuplicateEdgeId { id: "e0".to_string() })
    );
}

#[test]
fn self_loops_can_be_disabled() {
    let mut g: Graph<(), ()> = Graph::new(GraphOptions {
        self_loops: false,
        ..Default::default()
    });
    g.set_node("a", ());
    assert_eq!(
        g.set_edge("e1", "a", "a", ()),
        Err(GraphError::SelfLoop { id: "a".to_string() })
    );

    let mut g: Graph<(), ()> = Graph::default();
    g.set_node("a", ());
    assert!(g.set_edge("e1", "a", "a", ()).is_ok());
    assert_eq!(g.successors("a"), vec!["a"]);
}

#[test]
fn multigraph_allows_parallel_edges() {
    let mut g = path_graph(&["a", "b"]);
    g.set_edge("again", "a", "b", ()).unwrap();
    assert_eq!(g.out_edges("a").len(), 2);
    assert_eq!(g.successors("a"), vec!["b", "b"]);

    let mut simple: Graph<(), ()> = Graph::new(GraphOptions {
        multigraph: false,
        ..Default::default()
    });
    simple.set_node("a", ());
    simple.set_node("b", ());
    simple.set_edge("x", "a", "b", ()).unwrap();
    assert_eq!(
        simple.set_edge("y", "a", "b", ()),
        Err(GraphError::ParallelEdge {
            v: "a".to_string(),
            w: "b".to_string()
        })
    );
}

#[test]
fn remove_node_cascades_to_incident_edges_only() {
    let mut g = path_graph(&["a", "b", "c", "d"]);
    g.set_edge("ad", "a", "d", ()).unwrap();

    let removed = g.remove_node("b").unwrap();
    let removed_ids: Vec<&str> = removed.edges.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(removed_ids, vec!["e0", "e1"]);

    let left: Vec<&str> = g.edges().map(|e| e.id).collect();
    assert_eq!(left, vec!["e2", "ad"]);
    assert_eq!(g.successors("a"), vec!["d"]);
    assert_eq!(g.predecessors("c"), Vec::<&str>::new());
    assert!(g.remove_node("b").is_none());
}

#[test]
fn adjacency_is_refreshed_after_edits() {
    let mut g = path_graph(&["a", "b", "c"]);
    assert_eq!(g.successors("b"), vec!["c"]);
    g.remove_edge("e1");
    assert!(g.successors("b").is_empty());
    g.set_edge("bc2", "b", "c", ()).unwrap();
    assert_eq!(g.successors("b"), vec!["c"]);
    assert_eq!(g.sources(), vec!["a"]);
    assert_eq!(g.sinks(), vec!["c"]);
    assert!(g.has_edge_between("b", "c"));
    assert!(!g.has_edge_between("c", "b"));
}

#[test]
fn edge_lookup_by_id() {
    let mut g: Graph<(), &str> = Graph::default();
    g.set_node("a", ());
    g.set_node("b", ());
    g.set_edge("ab", "a", "b", "label").unwrap();
    assert_eq!(g.edge("ab"), Some(&"label"));
    assert_eq!(g.edge_endpoints("ab"), Some(("a", "b")));
    *g.edge_mut("ab").unwrap() = "relabelled";
    assert_eq!(g.remove_edge("ab"), Some("relabelled"));
    assert!(!g.has_edge("ab"));
}

#[test]
fn clear_empties_everything() {
    let mut g = path_graph(&["a", "b"]);
    g.clear();
    assert_eq!(g.node_count(), 0);
    assert_eq!(g.edge_count(), 0);
    assert!(g.sources().is_empty());
}
