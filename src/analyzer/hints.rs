/// Advisory hints triggered by well-known algorithm identifiers in the
/// source. Hints never change the aggregated labels or pattern tags.
static ALGORITHM_HINTS: &[(&[&str], &str)] = &[
    (
        &["sort(", "sorted(", "qsort"],
        "sorting routine detected; typical cost is O(n log n)",
    ),
    (
        &["binary_search", "lower_bound", "upper_bound"],
        "binary search detected; lookups cost O(log n)",
    ),
    (
        &["dfs", "bfs"],
        "graph traversal detected; cost is typically O(V + E)",
    ),
    (
        &["memo", "dp["],
        "memoization or DP table detected; watch the table size for space cost",
    ),
];

pub fn algorithm_hints(source: &str) -> Vec<String> {
    let lowered = source.to_lowercase();

    ALGORITHM_HINTS
        .iter()
        .filter(|(needles, _)| needles.iter().any(|needle| lowered.contains(needle)))
        .map(|(_, hint)| hint.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorting_call_is_hinted() {
        let hints = algorithm_hints("std::sort(v.begin(), v.end());");
        assert_eq!(hints.len(), 1);
        assert!(hints[0].contains("O(n log n)"));
    }

    #[test]
    fn detection_is_case_insensitive() {
        let hints = algorithm_hints("DFS(root);");
        assert!(hints.iter().any(|h| h.contains("graph traversal")));
    }

    #[test]
    fn each_hint_appears_once() {
        let hints = algorithm_hints("sort(a);\nsort(b);\nsort(c);");
        assert_eq!(hints.len(), 1);
    }

    #[test]
    fn unremarkable_code_yields_no_hints() {
        assert!(algorithm_hints("int x = 1;\nx += 2;").is_empty());
    }
}
