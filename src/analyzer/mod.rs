//! The heuristic analysis pipeline: scan lines, match patterns, classify
//! structure, aggregate labels, attach recommendations and hints.
//!
//! Everything here is a documented textual heuristic over the raw source.
//! There is no parser and no AST; misclassification on non-trivial code is
//! an accepted limitation, not an error condition.

pub mod aggregate;
pub mod classifier;
pub mod hints;
pub mod patterns;
pub mod recommend;
pub mod scanner;

use crate::config::{ConfidenceConfig, OrdoConfig};
use crate::core::AnalysisResult;
use patterns::PatternMatchers;

/// Analysis context: compiled matchers plus confidence tuning. Construct
/// one per configuration and reuse it across calls; each call runs with
/// fresh local state.
#[derive(Debug, Clone)]
pub struct Analyzer {
    matchers: PatternMatchers,
    confidence: ConfidenceConfig,
}

impl Analyzer {
    pub fn new(config: &OrdoConfig) -> Self {
        Self {
            matchers: PatternMatchers::new(&config.keywords),
            confidence: config.confidence.clone(),
        }
    }

    /// The sole analysis entry point. Total: never panics and never errors.
    /// Empty or whitespace-only input yields the low-confidence
    /// insufficient-data result.
    pub fn analyze(&self, source: &str) -> AnalysisResult {
        let lines = scanner::scan(source);
        if lines.is_empty() {
            return AnalysisResult::insufficient();
        }

        let classified = classifier::classify(&lines, source, &self.matchers);

        let time_complexity = aggregate::time_complexity(&classified);
        let space_complexity = aggregate::space_complexity(&classified);
        let explanations = aggregate::explanations(&classified);
        let recommendations = recommend::recommendations(time_complexity, space_complexity);
        let confidence = aggregate::confidence(&classified, &self.confidence);
        let hints = hints::algorithm_hints(source);

        AnalysisResult {
            time_complexity,
            space_complexity,
            explanations,
            recommendations,
            structure: classified.lines,
            patterns: classified.patterns,
            hints,
            confidence,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(&OrdoConfig::default())
    }
}

/// Convenience entry point using the default configuration.
pub fn analyze(source: &str) -> AnalysisResult {
    Analyzer::default().analyze(source)
}
