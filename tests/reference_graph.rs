use std::collections::{BTreeSet, HashMap};

use refgraph::prelude::*;
use serde_json::json;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// A snapshot of objects kept alive by reference cycles: two lists that refer
/// to each other, a dict owned by one of them and a self-referencing object
/// that nothing else points to.
fn snapshot() -> AnnotatedGraph {
    let vertices = vec![
        AnnotatedVertex::new(1, "list"),
        AnnotatedVertex::new(2, "list"),
        AnnotatedVertex::new(3, json!({"type": "dict", "len": 1})),
        AnnotatedVertex::new(4, "Node"),
        AnnotatedVertex::new(5, "int"),
    ];
    let edges = vec![
        AnnotatedEdge::new(10, "item[0]", 1, 2),
        AnnotatedEdge::new(11, "item[0]", 2, 1),
        AnnotatedEdge::new(12, "item[1]", 2, 3),
        AnnotatedEdge::new(13, "value", 3, 5),
        AnnotatedEdge::new(14, "next", 4, 4),
    ];

    AnnotatedGraph::new(vertices, edges).unwrap()
}

fn ids(graph: &AnnotatedGraph) -> BTreeSet<u64> {
    graph.vertices().map(|vertex| vertex.id).collect()
}

#[test]
fn cycles_keeping_objects_alive() {
    init_logging();

    let graph = snapshot();

    let sccs = graph.strongly_connected_components();
    assert_eq!(sccs.len(), 4);

    let sources = graph.source_components();
    assert_eq!(
        sources.iter().map(ids).collect::<Vec<_>>(),
        vec![BTreeSet::from([1, 2]), BTreeSet::from([4])]
    );

    // Everything except the self-referencing node hangs off the list cycle.
    let kept_alive = graph.descendants(graph.vertex(&1).unwrap(), None).unwrap();
    assert_eq!(ids(&kept_alive), BTreeSet::from([1, 2, 3, 5]));
    assert_eq!(ids(&(&graph - &kept_alive)), BTreeSet::from([4]));
}

#[test]
fn export_and_reload() {
    init_logging();

    let graph = snapshot();

    let mut buffer = Vec::new();
    graph.write_json(&mut buffer).unwrap();
    let reloaded = AnnotatedGraph::<u64>::read_json(buffer.as_slice()).unwrap();

    assert_eq!(reloaded, graph);
    assert_eq!(reloaded.to_dot(), graph.to_dot());

    let dict = reloaded.vertex(&3).unwrap();
    assert_eq!(dict.annotation.to_string(), r#"{"len":1,"type":"dict"}"#);
}

#[test]
fn dot_of_a_component() {
    let graph = snapshot();
    let cycle = graph.ancestors(graph.vertex(&1).unwrap(), Some(1)).unwrap();

    let labels = HashMap::from([(1, "a".to_owned()), (2, "b".to_owned())]);
    assert_eq!(
        cycle.to_dot_with(None, Some(&labels)),
        "digraph G {\n    1 -> 2 [label=\"item[0]\"];\n    2 -> 1 [label=\"item[0]\"];\n    1 [label=\"a\"];\n    2 [label=\"b\"];\n}\n"
    );
}

#[test]
fn broken_snapshot() {
    let text = json!({
        "vertices": [{"id": 1, "annotation": "list"}],
        "edges": [{"id": 10, "annotation": "item[0]", "head": 2, "tail": 1}],
    })
    .to_string();

    let error = AnnotatedGraph::<u64>::from_json(&text).unwrap_err();
    assert!(matches!(error, GraphError::MalformedGraph(_)));
    assert_eq!(
        error.to_string(),
        "malformed graph: edge 10 references undeclared vertex 2"
    );
}
