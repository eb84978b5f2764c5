use crate::*;
use serde_json::json;

fn empty_canvas() -> Canvas {
    let config = CanvasConfig {
        starter_graph: false,
        seed: Some(1),
        ..Default::default()
    };
    Canvas::new(config, Box::new(layout::NoopLayout))
}

fn event(value: serde_json::Value) -> Event {
    serde_json::from_value(value).unwrap()
}

fn stack_layout(input: &LayoutInput<'_>) -> std::result::Result<Positions, LayoutError> {
    Ok(input
        .nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id.clone(), Position::new(0.0, i as f64 * 100.0)))
        .collect())
}

#[test]
fn default_canvas_starts_with_the_starter_graph() {
    let canvas = Canvas::default();
    let snapshot = canvas.snapshot();
    assert_eq!(snapshot.nodes.len(), 2);
    assert_eq!(snapshot.edges.len(), 1);
    assert_eq!(snapshot.label, "✅ DAG is valid");
}

#[test]
fn events_parse_from_tagged_json() {
    assert_eq!(
        event(json!({"type": "connect", "source": "n1", "target": "n2"})),
        Event::Connect {
            source: "n1".to_string(),
            target: "n2".to_string()
        }
    );
    assert_eq!(
        event(json!({"type": "runLayout", "direction": "LR"})),
        Event::RunLayout {
            direction: Direction::LeftToRight
        }
    );
    assert_eq!(
        event(json!({"type": "runLayout"})),
        Event::RunLayout {
            direction: Direction::TopToBottom
        }
    );
    assert_eq!(event(json!({"type": "deleteNode"})), Event::DeleteNode);
    assert_eq!(
        event(json!({"type": "addNode"})),
        Event::AddNode { label: None }
    );
}

#[test]
fn self_loop_connect_produces_a_warning() {
    let mut canvas = empty_canvas();
    canvas
        .dispatch(Event::AddNode {
            label: Some("A".to_string()),
        })
        .unwrap();
    let err = canvas
        .dispatch(event(json!({"type": "connect", "source": "n1", "target": "n1"})))
        .unwrap_err();
    assert!(matches!(err, Rejection::SelfLoopRejected { .. }));
    assert_eq!(
        canvas.take_notices(),
        vec![Notice {
            severity: Severity::Warning,
            message: "Cannot connect a node to itself!".to_string(),
        }]
    );
    assert_eq!(canvas.store().edge_count(), 0);
    assert!(canvas.notices().is_empty());
}

#[test]
fn dismissed_prompt_is_silent() {
    let mut canvas = empty_canvas();
    assert_eq!(
        canvas.dispatch(Event::AddNode { label: None }),
        Err(Rejection::EmptyLabel)
    );
    assert!(canvas.notices().is_empty());
    assert!(canvas.store().is_empty());
}

#[test]
fn delete_node_without_selection_is_an_error_notice() {
    let mut canvas = empty_canvas();
    canvas
        .dispatch(Event::AddNode {
            label: Some("A".to_string()),
        })
        .unwrap();
    assert_eq!(
        canvas.dispatch(Event::DeleteNode),
        Err(Rejection::NoSelectionForDelete)
    );
    let notices = canvas.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].severity, Severity::Error);
    assert_eq!(notices[0].message, "Please select a node to delete");
    assert_eq!(canvas.store().node_count(), 1);
}

#[test]
fn delete_node_removes_only_the_first_selected() {
    let mut canvas = Canvas::default();
    canvas.dispatch(event(json!({"type": "addNode", "label": "C"}))).unwrap();
    canvas
        .dispatch(event(json!({
            "type": "nodesChange",
            "changes": [
                {"type": "select", "id": "n3", "selected": true},
                {"type": "select", "id": "n2", "selected": true},
                {"type": "dimensions", "id": "n2"}
            ]
        })))
        .unwrap();
    canvas.dispatch(Event::DeleteNode).unwrap();

    let snapshot = canvas.snapshot();
    let ids: Vec<_> = snapshot.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["n1", "n3"]);
    assert!(snapshot.edges.is_empty());
    assert_eq!(snapshot.selected_nodes, vec!["n3".to_string()]);
}

#[test]
fn delete_key_removes_the_selection() {
    let mut canvas = Canvas::default();
    canvas
        .dispatch(event(json!({
            "type": "edgesChange",
            "changes": [{"type": "select", "id": "e1", "selected": true}]
        })))
        .unwrap();
    canvas
        .dispatch(Event::Key {
            key: "Backspace".to_string(),
        })
        .unwrap();
    assert_eq!(canvas.store().edge_count(), 1);

    canvas
        .dispatch(Event::Key {
            key: "Delete".to_string(),
        })
        .unwrap();
    assert_eq!(canvas.store().edge_count(), 0);
    assert_eq!(canvas.store().node_count(), 2);
    assert!(canvas.snapshot().selected_edges.is_empty());
}

#[test]
fn connecting_back_marks_the_canvas_cyclic() {
    let mut canvas = Canvas::default();
    canvas
        .dispatch(Event::Connect {
            source: "n2".to_string(),
            target: "n1".to_string(),
        })
        .unwrap();
    assert_eq!(canvas.status(), DagStatus::Cyclic);
    assert_eq!(canvas.snapshot().label, "❌ Invalid DAG: Cycle detected");

    canvas.dispatch(Event::ClearCanvas).unwrap();
    assert_eq!(canvas.status(), DagStatus::Valid);
    assert!(canvas.store().is_empty());
}

#[test]
fn layout_queues_one_fit_view_per_run() {
    let config = CanvasConfig::default();
    let mut canvas = Canvas::new(config, Box::new(stack_layout));
    canvas
        .dispatch(Event::RunLayout {
            direction: Direction::TopToBottom,
        })
        .unwrap();
    canvas
        .dispatch(Event::RunLayout {
            direction: Direction::LeftToRight,
        })
        .unwrap();
    assert_eq!(canvas.pending_deferred(), 2);

    let before = canvas.snapshot();
    let drained = canvas.drain_deferred();
    assert_eq!(
        drained[0],
        ViewportRequest::FitView {
            padding: 0.2,
            duration_ms: 300
        }
    );
    assert_eq!(canvas.pending_deferred(), 0);
    assert_eq!(canvas.snapshot(), before);

    let n2 = canvas.store().node("n2").unwrap();
    assert_eq!(n2.position, Position::new(0.0, 100.0));
    assert_eq!(n2.handles, Handles::for_direction(Direction::LeftToRight));
}

#[test]
fn layout_failure_is_reported_and_nothing_is_queued() {
    fn failing(_: &LayoutInput<'_>) -> std::result::Result<Positions, LayoutError> {
        Err(LayoutError::new("engine unavailable"))
    }
    let mut canvas = Canvas::new(CanvasConfig::default(), Box::new(failing));
    let before = canvas.snapshot();
    let err = canvas
        .dispatch(Event::RunLayout {
            direction: Direction::TopToBottom,
        })
        .unwrap_err();
    assert!(matches!(err, Rejection::LayoutFailed(_)));
    assert_eq!(canvas.pending_deferred(), 0);
    assert_eq!(canvas.snapshot(), before);
    let notices = canvas.take_notices();
    assert_eq!(notices[0].severity, Severity::Error);
    assert_eq!(notices[0].message, "Layout failed: engine unavailable");
}

#[test]
fn unknown_node_connect_is_a_warning() {
    let mut canvas = Canvas::default();
    let err = canvas
        .dispatch(Event::Connect {
            source: "n1".to_string(),
            target: "missing".to_string(),
        })
        .unwrap_err();
    assert_eq!(
        err,
        Rejection::UnknownNode {
            id: "missing".to_string()
        }
    );
    assert_eq!(canvas.take_notices()[0].severity, Severity::Warning);
    assert_eq!(canvas.store().edge_count(), 1);
}

#[test]
fn snapshot_serializes_camel_case() {
    let canvas = Canvas::default();
    let value = serde_json::to_value(canvas.snapshot()).unwrap();
    assert_eq!(value["status"], json!("valid"));
    assert_eq!(value["selectedNodes"], json!([]));
    assert_eq!(value["nodes"][0]["handles"], json!({"source": "right", "target": "left"}));
}
