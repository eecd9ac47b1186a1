use crate::analyzer::classifier::ClassifiedSource;
use crate::config::ConfidenceConfig;
use crate::core::{ComplexityClass, PatternTag};

/// Overall time label: recursion forces exponential, otherwise the deepest
/// loop nest decides, otherwise constant.
///
/// Equivalent to taking the maximum local label across all classified lines;
/// the classifier labels recursion lines exponential and loop lines by their
/// depth, so both formulations agree.
pub fn time_complexity(classified: &ClassifiedSource) -> ComplexityClass {
    if classified.has_pattern(PatternTag::Recursion) {
        ComplexityClass::Exponential
    } else {
        ComplexityClass::for_loop_depth(classified.max_loop_depth)
    }
}

/// Overall space label: linear iff a dynamic-allocation tag was recorded.
pub fn space_complexity(classified: &ClassifiedSource) -> ComplexityClass {
    if classified.has_pattern(PatternTag::DynamicAllocation) {
        ComplexityClass::Linear
    } else {
        ComplexityClass::Constant
    }
}

/// One sentence per escalation, plus the corresponding negative sentences
/// when nothing fired.
pub fn explanations(classified: &ClassifiedSource) -> Vec<String> {
    let mut explanations = Vec::new();

    if classified.has_pattern(PatternTag::Recursion) {
        explanations
            .push("Recursive call detected; time complexity is likely exponential.".to_string());
    } else if classified.max_loop_depth >= 2 {
        explanations.push(format!(
            "Detected {} levels of nested loops.",
            classified.max_loop_depth
        ));
    } else if classified.max_loop_depth == 1 {
        explanations.push("Single loop detected.".to_string());
    } else {
        explanations.push(
            "No loops or recursion detected; time complexity is likely constant.".to_string(),
        );
    }

    if classified.has_pattern(PatternTag::DynamicAllocation) {
        explanations.push("Dynamic memory allocation detected.".to_string());
    } else {
        explanations.push("No dynamic memory allocation detected.".to_string());
    }

    explanations
}

/// Confidence in [0, 1]: full confidence, discounted for short inputs and
/// for inputs where no structural signal (tag or loop) fired at all.
pub fn confidence(classified: &ClassifiedSource, config: &ConfidenceConfig) -> f64 {
    let mut confidence = 1.0;

    if classified.lines.len() < config.short_input_lines {
        confidence *= config.short_input_factor;
    }
    if classified.patterns.is_empty() && classified.max_loop_depth == 0 {
        confidence *= config.no_pattern_factor;
    }

    confidence.min(1.0)
}
