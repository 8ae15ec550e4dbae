use super::*;

use proptest::prelude::*;

fn validate_forest(forest: &HuffmanForest, weights: &[u64]) {
    let n = weights.len();
    assert_eq!(forest.len(), 2 * n - 1, "arena must hold 2n - 1 nodes");
    assert_eq!(forest.root(), Some(2 * n - 2), "root must be the last node");

    let roots: Vec<usize> = forest.unattached().map(|(index, _)| index).collect();
    assert_eq!(roots, vec![2 * n - 2], "exactly one node without parent");

    for (index, node) in forest.nodes().iter().enumerate() {
        if index < n {
            assert!(node.is_leaf(), "node {index} must be a leaf");
            assert_eq!(node.weight, weights[index], "leaf {index} keeps its weight");
            continue;
        }

        let (left, right) = node.children().expect("internal node has two children");
        assert!(left < index && right < index, "children precede their parent");
        assert_eq!(forest.nodes()[left].parent, Some(index));
        assert_eq!(forest.nodes()[right].parent, Some(index));
        assert_eq!(
            node.weight,
            forest.nodes()[left].weight + forest.nodes()[right].weight,
            "internal node {index} weighs the sum of its children"
        );
        assert!(
            forest.nodes()[left].weight <= forest.nodes()[right].weight,
            "left child is the lighter one"
        );
    }
}

fn weights_strategy() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..1_000, 1..=64)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_structure(weights in weights_strategy()) {
        let forest = HuffmanForest::build(&weights, Selection::Scan).unwrap();
        validate_forest(&forest, &weights);

        let root = forest.root().unwrap();
        prop_assert_eq!(forest.nodes()[root].weight, weights.iter().sum::<u64>());
    }

    #[test]
    fn prop_deterministic(weights in weights_strategy()) {
        let first = HuffmanForest::build(&weights, Selection::Scan).unwrap();
        let second = HuffmanForest::build(&weights, Selection::Scan).unwrap();
        prop_assert_eq!(first.nodes(), second.nodes());
        prop_assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn prop_heap_matches_scan(weights in prop::collection::vec(0u64..8, 1..=128)) {
        let scan = HuffmanForest::build(&weights, Selection::Scan).unwrap();
        let heap = HuffmanForest::build(&weights, Selection::Heap).unwrap();
        validate_forest(&heap, &weights);
        prop_assert_eq!(scan.nodes(), heap.nodes());
    }

    #[test]
    fn prop_traversal(weights in weights_strategy()) {
        let forest = HuffmanForest::build(&weights, Selection::Scan).unwrap();
        let visited: Vec<_> = forest.iter().collect();
        prop_assert_eq!(visited.len(), forest.len());
        prop_assert_eq!(visited.iter().filter(|(_, depth)| *depth == 0).count(), 1);
        prop_assert_eq!(&visited, &forest.iter().collect::<Vec<_>>());

        let rendered = forest.to_string();
        prop_assert_eq!(rendered.lines().count(), forest.len());
        for (line, (weight, depth)) in rendered.lines().zip(visited) {
            prop_assert_eq!(line, format!("{}{}", " ".repeat(4 * depth), weight));
        }
    }

    #[test]
    fn prop_lenient_tokens(weights in weights_strategy()) {
        let tokens: Vec<String> = weights.iter().map(u64::to_string).collect();
        let strict = Options { mode: ParseMode::Strict, ..Options::default() };
        prop_assert_eq!(parse_weights(&tokens, ParseMode::Lenient).unwrap(), weights.clone());
        prop_assert_eq!(
            render_tokens(&tokens, &strict).unwrap(),
            HuffmanForest::build(&weights, Selection::Scan).unwrap().to_string()
        );
    }
}
