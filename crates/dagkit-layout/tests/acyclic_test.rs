use dagkit_layout::acyclic;
use dagkit_layout::graphlib::{GraphError, GraphOptions, alg};
use dagkit_layout::{EdgeLabel, LayoutGraph, NodeLabel};

fn new_graph(nodes: &[&str], edges: &[(&str, &str)]) -> LayoutGraph {
    let mut g = LayoutGraph::default();
    for id in nodes {
        g.set_node(*id, NodeLabel::default());
    }
    for (i, (v, w)) in edges.iter().enumerate() {
        g.set_edge(format!("e{i}"), *v, *w, EdgeLabel::default())
            .unwrap();
    }
    g
}

fn endpoints(g: &LayoutGraph) -> Vec<(String, String, String)> {
    g.edges()
        .map(|e| (e.id.to_string(), e.v.to_string(), e.w.to_string()))
        .collect()
}

#[test]
fn acyclic_run_does_not_change_an_already_acyclic_graph() {
    let mut g = new_graph(
        &["a", "b", "c", "d"],
        &[("a", "b"), ("b", "d"), ("a", "c"), ("c", "d")],
    );
    let before = endpoints(&g);
    acyclic::run(&mut g).unwrap();
    assert_eq!(endpoints(&g), before);
}

#[test]
fn acyclic_run_breaks_cycles_in_the_input_graph() {
    let mut g = new_graph(
        &["a", "b", "c", "d"],
        &[("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")],
    );
    acyclic::run(&mut g).unwrap();
    assert!(alg::find_cycles(&g).is_empty());
    assert_eq!(g.edge("e3").map(|e| e.reversed), Some(true));
    assert_eq!(g.edge_endpoints("e3"), Some(("a", "d")));
}

#[test]
fn acyclic_run_handles_parallel_back_edges() {
    let mut g = new_graph(&["a", "b"], &[("a", "b"), ("b", "a"), ("b", "a")]);
    acyclic::run(&mut g).unwrap();
    assert!(alg::find_cycles(&g).is_empty());
    assert_eq!(g.edge_count(), 3);
}

#[test]
fn acyclic_undo_restores_reversed_edges() {
    let mut g = new_graph(
        &["a", "b", "c"],
        &[("a", "b"), ("b", "c"), ("c", "a")],
    );
    acyclic::run(&mut g).unwrap();
    acyclic::undo(&mut g).unwrap();

    let mut edges = endpoints(&g);
    edges.sort();
    assert_eq!(
        edges,
        vec![
            ("e0".to_string(), "a".to_string(), "b".to_string()),
            ("e1".to_string(), "b".to_string(), "c".to_string()),
            ("e2".to_string(), "c".to_string(), "a".to_string()),
        ]
    );
    assert!(g.edges().all(|e| !e.label.reversed));
}

#[test]
fn acyclic_run_keeps_every_edge_of_a_two_cycle() {
    let mut g = new_graph(&["a", "b"], &[("a", "b"), ("b", "a")]);
    acyclic::run(&mut g).unwrap();
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.edge_endpoints("e1"), Some(("a", "b")));
    assert_eq!(g.edge("e1").map(|e| e.reversed), Some(true));
}

#[test]
fn acyclic_run_fails_without_changes_when_reversal_would_duplicate_an_edge() {
    let mut g = LayoutGraph::new(GraphOptions {
        multigraph: false,
        self_loops: true,
    });
    for id in ["a", "b", "c"] {
        g.set_node(id, NodeLabel::default());
    }
    for (id, v, w) in [("ab", "a", "b"), ("bc", "b", "c"), ("ca", "c", "a"), ("ba", "b", "a")] {
        g.set_edge(id, v, w, EdgeLabel::default()).unwrap();
    }
    let before = endpoints(&g);

    let err = acyclic::run(&mut g).unwrap_err();
    assert!(matches!(err, GraphError::ParallelEdge { .. }));
    assert_eq!(endpoints(&g), before);
    assert!(g.edges().all(|e| !e.label.reversed));
}

#[test]
fn dfs_fas_handles_a_chain_deeper_than_the_call_stack() {
    let n = 100_000;
    let ids: Vec<String> = (0..n).map(|i| format!("n{i}")).collect();
    let mut g = LayoutGraph::default();
    for id in &ids {
        g.set_node(id.as_str(), NodeLabel::default());
    }
    for (i, pair) in ids.windows(2).enumerate() {
        g.set_edge(format!("e{i}"), pair[0].as_str(), pair[1].as_str(), EdgeLabel::default())
            .unwrap();
    }
    g.set_edge("back", ids[n - 1].as_str(), ids[0].as_str(), EdgeLabel::default())
        .unwrap();

    assert_eq!(acyclic::dfs_fas(&g), vec!["back".to_string()]);
}
