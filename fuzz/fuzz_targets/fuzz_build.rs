#![no_main]

use hufftree_lib::{self, HuffmanForest, Options, Selection};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let _ = hufftree_lib::render_tokens(&tokens, &Options::default());
    }

    let weights: Vec<u64> = data.iter().map(|byte| u64::from(*byte)).collect();
    if let (Ok(scan), Ok(heap)) = (
        HuffmanForest::build(&weights, Selection::Scan),
        HuffmanForest::build(&weights, Selection::Heap),
    ) {
        assert_eq!(scan.nodes(), heap.nodes());
        assert_eq!(scan.iter().count(), 2 * weights.len() - 1);
    }
});
