#![no_main]

use libfuzzer_sys::fuzz_target;

use refgraph::{
    infra::{arbitrary::ArbitraryDocument, testing::check_consistency},
    prelude::*,
};

fuzz_target!(|document: ArbitraryDocument| {
    let Ok(graph) = AnnotatedGraph::<u8>::from_json(&document.to_json()) else {
        return;
    };

    check_consistency(&graph)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();

    let reconstructed = AnnotatedGraph::<u8>::from_json(&graph.export_json().unwrap()).unwrap();
    assert_eq!(reconstructed, graph);

    let covered = graph
        .strongly_connected_components()
        .iter()
        .map(|scc| scc.len())
        .sum::<usize>();
    assert_eq!(covered, graph.len());
});
