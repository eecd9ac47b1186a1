pub mod metrics;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Qualitative asymptotic growth bucket assigned by the heuristics.
///
/// Variants are declared in ascending precedence, so the derived ordering is
/// the aggregation order: `Exponential` dominates every `Polynomial(depth)`,
/// deeper polynomials dominate shallower ones, and `Constant` loses to all.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComplexityClass {
    Constant,
    Logarithmic,
    Linear,
    Linearithmic,
    Polynomial(u32),
    Exponential,
}

impl ComplexityClass {
    /// Label for a loop nest at the given depth. Depth 0 means no loop.
    pub fn for_loop_depth(depth: u32) -> Self {
        match depth {
            0 => ComplexityClass::Constant,
            1 => ComplexityClass::Linear,
            d => ComplexityClass::Polynomial(d),
        }
    }

}

impl std::fmt::Display for ComplexityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplexityClass::Constant => write!(f, "O(1)"),
            ComplexityClass::Logarithmic => write!(f, "O(log n)"),
            ComplexityClass::Linear => write!(f, "O(n)"),
            ComplexityClass::Linearithmic => write!(f, "O(n log n)"),
            ComplexityClass::Polynomial(2) => write!(f, "O(n²)"),
            ComplexityClass::Polynomial(depth) => write!(f, "O(n^{depth})"),
            ComplexityClass::Exponential => write!(f, "O(2ⁿ)"),
        }
    }
}

/// Structural role assigned to a classified line.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LineKind {
    Statement,
    Loop,
    Recursion,
    Allocation,
    FunctionCall,
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(LineKind, &str)] = &[
            (LineKind::Statement, "statement"),
            (LineKind::Loop, "loop"),
            (LineKind::Recursion, "recursion"),
            (LineKind::Allocation, "allocation"),
            (LineKind::FunctionCall, "function-call"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(k, _)| k == self)
            .map(|(_, s)| *s)
            .unwrap_or("unknown");

        write!(f, "{display_str}")
    }
}

/// Tag recorded when a structural heuristic fires during classification.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PatternTag {
    NestedLoop,
    Recursion,
    DynamicAllocation,
}

impl std::fmt::Display for PatternTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(PatternTag, &str)] = &[
            (PatternTag::NestedLoop, "nested-loop"),
            (PatternTag::Recursion, "recursion"),
            (PatternTag::DynamicAllocation, "dynamic-allocation"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(t, _)| t == self)
            .map(|(_, s)| *s)
            .unwrap_or("unknown");

        write!(f, "{display_str}")
    }
}

/// A non-blank source line with its original 1-based line number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    pub content: String,
}

/// Per-line verdict produced by the structural classifier.
///
/// `complexity` is the line's local *time* label. Space effects are carried
/// by the `dynamic-allocation` pattern tag, never by this label.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineClassification {
    pub line: usize,
    pub content: String,
    pub kind: LineKind,
    pub complexity: ComplexityClass,
}

/// Complete outcome of one `analyze` invocation.
///
/// Deterministic: identical input produces a bit-identical value. Nothing in
/// here depends on wall-clock time or ambient state.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub time_complexity: ComplexityClass,
    pub space_complexity: ComplexityClass,
    pub explanations: Vec<String>,
    pub recommendations: Vec<String>,
    pub structure: Vec<LineClassification>,
    pub patterns: Vec<PatternTag>,
    pub hints: Vec<String>,
    pub confidence: f64,
}

impl AnalysisResult {
    /// The result returned for empty or whitespace-only input.
    pub fn insufficient() -> Self {
        Self {
            time_complexity: ComplexityClass::Constant,
            space_complexity: ComplexityClass::Constant,
            explanations: vec!["No code was supplied; nothing to analyze.".to_string()],
            recommendations: Vec::new(),
            structure: Vec::new(),
            patterns: Vec::new(),
            hints: Vec::new(),
            confidence: 0.0,
        }
    }

    pub fn has_pattern(&self, tag: PatternTag) -> bool {
        self.patterns.contains(&tag)
    }
}

/// CLI-level envelope around an [`AnalysisResult`].
///
/// The timestamp lives here rather than in the result so that `analyze`
/// stays pure.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub source: Option<PathBuf>,
    pub generated_at: DateTime<Utc>,
    pub analysis: AnalysisResult,
}

impl AnalysisReport {
    pub fn new(source: Option<PathBuf>, analysis: AnalysisResult) -> Self {
        Self {
            source,
            generated_at: Utc::now(),
            analysis,
        }
    }
}
