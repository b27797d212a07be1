#![no_main]

use libfuzzer_sys::fuzz_target;

use refgraph::{infra::testing::check_consistency, prelude::*};

fuzz_target!(|text: &str| {
    if let Ok(graph) = AnnotatedGraph::<u64>::from_json(text) {
        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
