use hufftree_lib::{self, HuffmanForest, Options, Selection};

/*
    Replay inputs that stress the arena and the selection loop.
    Run fuzzing:
        cargo fuzz run fuzz_build -- -timeout=10

    When the fuzzer finds a crash, add the input here along with the
    panic message and file.
*/

#[test]
fn test_all_zero_weights() {
    let weights = vec![0; 500];
    let forest = HuffmanForest::build(&weights, Selection::Scan).unwrap();
    assert_eq!(forest.len(), 999);
    assert_eq!(forest.nodes()[998].weight, 0);
}

#[test]
fn test_total_at_limit() {
    let forest = HuffmanForest::build(&[u64::MAX - 1, 1, 0], Selection::Heap).unwrap();
    assert_eq!(forest.nodes()[forest.root().unwrap()].weight, u64::MAX);
    assert!(HuffmanForest::build(&[u64::MAX, u64::MAX], Selection::Scan).is_err());
}

#[test]
fn test_degenerate_depth() {
    // Doubling weights produce a comb as deep as the input is long
    let weights: Vec<u64> = (0..60).map(|shift| 1 << shift).collect();
    let forest = HuffmanForest::build(&weights, Selection::Heap).unwrap();
    let max_depth = forest.iter().map(|(_, depth)| depth).max();
    assert_eq!(max_depth, Some(59));
}

#[test]
fn test_large_input() {
    let tokens: Vec<String> = (0..20_000u64).map(|i| (i * 7919 % 1000).to_string()).collect();
    let heap = Options {
        selection: Selection::Heap,
        ..Options::default()
    };
    let rendered = hufftree_lib::render_tokens(&tokens, &heap).unwrap();
    assert_eq!(rendered.lines().count(), 39_999);
}

#[test]
fn test_odd_tokens() {
    let tokens = ["", " ", "+", "-0", "\t7", "9999999999", "1e3"];
    let rendered = hufftree_lib::render_tokens(&tokens, &Options::default()).unwrap();
    assert_eq!(rendered.lines().count(), 13);
    assert!(rendered.lines().any(|line| line == "10000000007"));
}
