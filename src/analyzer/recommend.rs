use crate::core::ComplexityClass;

/// Canned suggestions keyed by the aggregated labels. A static lookup
/// table, not derived optimization advice.
pub fn recommendations(time: ComplexityClass, space: ComplexityClass) -> Vec<String> {
    let mut recommendations = Vec::new();

    if matches!(time, ComplexityClass::Polynomial(_)) {
        recommendations.extend(
            [
                "Consider replacing the nested loops with a more efficient algorithm",
                "Try a hash table to speed up lookup operations",
                "Check whether dynamic programming or divide and conquer applies",
            ]
            .map(String::from),
        );
    }

    if time == ComplexityClass::Exponential {
        recommendations.extend(
            [
                "Plain recursion of this shape is expensive; consider an iterative rewrite",
                "Use memoization to avoid recomputing subproblems",
                "Check for optimal substructure and consider dynamic programming",
            ]
            .map(String::from),
        );
    }

    if space >= ComplexityClass::Linear {
        recommendations.extend(
            [
                "Check whether the computation can be done in place to reduce memory",
                "Review the space efficiency of the data structures involved",
                "Try a more compact data representation",
            ]
            .map(String::from),
        );
    }

    if recommendations.is_empty() {
        recommendations.push("Code complexity looks good, keep it up!".to_string());
    }

    recommendations
}
