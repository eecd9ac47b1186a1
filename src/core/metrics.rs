use crate::core::{LineClassification, LineKind};
use serde::{Deserialize, Serialize};

/// Counts derived from the per-line classifications, rendered by the report
/// writers.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StructureSummary {
    pub total_lines: usize,
    pub loops: usize,
    pub function_calls: usize,
    pub allocations: usize,
}

pub fn summarize_structure(structure: &[LineClassification]) -> StructureSummary {
    StructureSummary {
        total_lines: structure.len(),
        loops: count_kind(structure, LineKind::Loop),
        function_calls: count_kind(structure, LineKind::FunctionCall),
        allocations: count_kind(structure, LineKind::Allocation),
    }
}

pub fn count_kind(structure: &[LineClassification], kind: LineKind) -> usize {
    structure.iter().filter(|c| c.kind == kind).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ComplexityClass;

    fn classification(kind: LineKind) -> LineClassification {
        LineClassification {
            line: 1,
            content: "x".to_string(),
            kind,
            complexity: ComplexityClass::Constant,
        }
    }

    #[test]
    fn summarize_counts_by_kind() {
        let structure = vec![
            classification(LineKind::Loop),
            classification(LineKind::Loop),
            classification(LineKind::FunctionCall),
            classification(LineKind::Allocation),
            classification(LineKind::Statement),
        ];

        let summary = summarize_structure(&structure);
        assert_eq!(summary.total_lines, 5);
        assert_eq!(summary.loops, 2);
        assert_eq!(summary.function_calls, 1);
        assert_eq!(summary.allocations, 1);
    }

    #[test]
    fn empty_structure_summarizes_to_zeroes() {
        assert_eq!(summarize_structure(&[]), StructureSummary::default());
    }
}
