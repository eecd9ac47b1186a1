use crate::analyzer::patterns::PatternMatchers;
use crate::core::{ComplexityClass, LineClassification, LineKind, PatternTag, SourceLine};

/// Output of the structural pass: per-line classifications plus the pattern
/// tags and the deepest loop nesting observed.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedSource {
    pub lines: Vec<LineClassification>,
    pub patterns: Vec<PatternTag>,
    pub max_loop_depth: u32,
}

impl ClassifiedSource {
    pub fn has_pattern(&self, tag: PatternTag) -> bool {
        self.patterns.contains(&tag)
    }
}

/// Walk the scanned lines in order, tracking loop nesting with a scalar
/// brace counter, and classify each line.
///
/// Brace handling is purely textual: any `}` decrements the counter while it
/// is positive, without checking that the brace closes a loop body. A loop
/// with a brace-less single-statement body therefore leaves the counter
/// elevated for the rest of the pass. Known limitation, kept as-is and
/// pinned by tests.
pub fn classify(
    lines: &[SourceLine],
    source: &str,
    matchers: &PatternMatchers,
) -> ClassifiedSource {
    let mut classified = ClassifiedSource::default();
    let mut loop_depth: u32 = 0;

    for line in lines {
        let text = line.content.as_str();

        let is_loop = matchers.is_loop_start(text);
        let is_recursion = matchers.is_recursive_call(text, source);
        let is_allocation = matchers.is_dynamic_allocation(text);

        if is_loop {
            loop_depth += 1;
            classified.max_loop_depth = classified.max_loop_depth.max(loop_depth);
            if loop_depth >= 2 {
                record_pattern(&mut classified.patterns, PatternTag::NestedLoop);
            }
        }
        if is_recursion {
            record_pattern(&mut classified.patterns, PatternTag::Recursion);
        }
        if is_allocation {
            record_pattern(&mut classified.patterns, PatternTag::DynamicAllocation);
        }

        // Kind precedence: loop > recursion > allocation > function call.
        let kind = if is_loop {
            LineKind::Loop
        } else if is_recursion {
            LineKind::Recursion
        } else if is_allocation {
            LineKind::Allocation
        } else if matchers.is_function_call(text) {
            LineKind::FunctionCall
        } else {
            LineKind::Statement
        };

        // Local time label. Recursion dominates any loop depth; allocation
        // affects only the space dimension, via its tag.
        let complexity = if is_recursion {
            ComplexityClass::Exponential
        } else if is_loop {
            ComplexityClass::for_loop_depth(loop_depth)
        } else {
            ComplexityClass::Constant
        };

        if text.contains('}') && loop_depth > 0 {
            loop_depth -= 1;
        }

        classified.lines.push(LineClassification {
            line: line.number,
            content: line.content.clone(),
            kind,
            complexity,
        });
    }

    classified
}

fn record_pattern(patterns: &mut Vec<PatternTag>, tag: PatternTag) {
    if !patterns.contains(&tag) {
        patterns.push(tag);
    }
}
