use crate::core::metrics::summarize_structure;
use crate::core::{AnalysisReport, ComplexityClass};
use colored::*;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
    Text,
}

pub trait OutputWriter {
    fn write_results(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_results(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_analysis(report)?;
        self.write_recommendations(report)?;
        self.write_structure(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Ordo Complexity Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        if let Some(source) = &report.source {
            writeln!(self.writer, "Source: `{}`", source.display())?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let analysis = &report.analysis;
        let summary = summarize_structure(&analysis.structure);

        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Time complexity | {} |",
            analysis.time_complexity
        )?;
        writeln!(
            self.writer,
            "| Space complexity | {} |",
            analysis.space_complexity
        )?;
        writeln!(
            self.writer,
            "| Confidence | {:.1}% |",
            analysis.confidence * 100.0
        )?;
        writeln!(self.writer, "| Lines classified | {} |", summary.total_lines)?;
        writeln!(self.writer, "| Loop lines | {} |", summary.loops)?;
        writeln!(
            self.writer,
            "| Allocation lines | {} |",
            summary.allocations
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_analysis(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let analysis = &report.analysis;

        writeln!(self.writer, "## Analysis")?;
        writeln!(self.writer)?;
        for explanation in &analysis.explanations {
            writeln!(self.writer, "- {explanation}")?;
        }
        writeln!(self.writer)?;

        if !analysis.patterns.is_empty() {
            writeln!(self.writer, "### Detected Patterns")?;
            writeln!(self.writer)?;
            for tag in &analysis.patterns {
                writeln!(self.writer, "- `{tag}`")?;
            }
            writeln!(self.writer)?;
        }

        if !analysis.hints.is_empty() {
            writeln!(self.writer, "### Hints")?;
            writeln!(self.writer)?;
            for hint in &analysis.hints {
                writeln!(self.writer, "- {hint}")?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_recommendations(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        if report.analysis.recommendations.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Recommendations")?;
        writeln!(self.writer)?;
        for (i, recommendation) in report.analysis.recommendations.iter().enumerate() {
            writeln!(self.writer, "{}. {recommendation}", i + 1)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_structure(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        if report.analysis.structure.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Code Structure")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Line | Code | Kind | Complexity |")?;
        writeln!(self.writer, "|------|------|------|------------|")?;
        for classification in &report.analysis.structure {
            writeln!(
                self.writer,
                "| {} | `{}` | {} | {} |",
                classification.line,
                classification.content.replace('|', "\\|"),
                classification.kind,
                classification.complexity
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Plain-text report, suitable for saving alongside a submission.
pub struct TextWriter<W: Write> {
    writer: W,
}

impl<W: Write> TextWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TextWriter<W> {
    fn write_results(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let analysis = &report.analysis;
        let summary = summarize_structure(&analysis.structure);

        writeln!(self.writer, "Ordo Complexity Report")?;
        writeln!(self.writer, "======================")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        if let Some(source) = &report.source {
            writeln!(self.writer, "Source: {}", source.display())?;
        }
        writeln!(self.writer, "Lines classified: {}", summary.total_lines)?;
        writeln!(self.writer)?;

        writeln!(self.writer, "Summary:")?;
        writeln!(self.writer, "--------")?;
        writeln!(self.writer, "Time complexity: {}", analysis.time_complexity)?;
        writeln!(
            self.writer,
            "Space complexity: {}",
            analysis.space_complexity
        )?;
        writeln!(
            self.writer,
            "Confidence: {:.1}%",
            analysis.confidence * 100.0
        )?;
        writeln!(self.writer)?;

        writeln!(self.writer, "Analysis:")?;
        writeln!(self.writer, "---------")?;
        for explanation in &analysis.explanations {
            writeln!(self.writer, "- {explanation}")?;
        }
        writeln!(self.writer)?;

        if !analysis.hints.is_empty() {
            writeln!(self.writer, "Hints:")?;
            writeln!(self.writer, "------")?;
            for hint in &analysis.hints {
                writeln!(self.writer, "- {hint}")?;
            }
            writeln!(self.writer)?;
        }

        if !analysis.recommendations.is_empty() {
            writeln!(self.writer, "Recommendations:")?;
            writeln!(self.writer, "----------------")?;
            for recommendation in &analysis.recommendations {
                writeln!(self.writer, "- {recommendation}")?;
            }
            writeln!(self.writer)?;
        }

        if !analysis.structure.is_empty() {
            writeln!(self.writer, "Code structure:")?;
            writeln!(self.writer, "---------------")?;
            for classification in &analysis.structure {
                let kind = classification.kind.to_string();
                let complexity = classification.complexity.to_string();
                writeln!(
                    self.writer,
                    "line {:>4}: [{kind:<13}] {complexity:<9} {}",
                    classification.line, classification.content
                )?;
            }
            writeln!(self.writer)?;
        }

        let patterns = if analysis.patterns.is_empty() {
            "none".to_string()
        } else {
            analysis
                .patterns
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        writeln!(self.writer, "Detected patterns: {patterns}")?;
        Ok(())
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_results(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        print_header();
        print_summary(report);
        print_analysis(report);
        print_recommendations(report);
        print_structure(report);
        Ok(())
    }
}

fn print_header() {
    println!("{}", "Ordo Complexity Report".bold().blue());
    println!("{}", "======================".blue());
    println!();
}

fn print_summary(report: &AnalysisReport) {
    let analysis = &report.analysis;
    let summary = summarize_structure(&analysis.structure);

    println!("{} Summary:", "📊".bold());
    println!(
        "  Time complexity:  {}",
        colorize_label(analysis.time_complexity)
    );
    println!(
        "  Space complexity: {}",
        colorize_label(analysis.space_complexity)
    );
    println!("  Confidence:       {:.1}%", analysis.confidence * 100.0);
    println!(
        "  Lines classified: {} (loops: {}, calls: {}, allocations: {})",
        summary.total_lines, summary.loops, summary.function_calls, summary.allocations
    );
    println!();
}

fn print_analysis(report: &AnalysisReport) {
    let analysis = &report.analysis;

    println!("{} Analysis:", "🔍".bold());
    for explanation in &analysis.explanations {
        println!("  - {explanation}");
    }

    if !analysis.patterns.is_empty() {
        let patterns = analysis
            .patterns
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("  Patterns: {}", patterns.yellow());
    }

    for hint in &analysis.hints {
        println!("  Hint: {hint}");
    }
    println!();
}

fn print_recommendations(report: &AnalysisReport) {
    if report.analysis.recommendations.is_empty() {
        return;
    }

    println!("{} Recommendations:", "💡".bold());
    for (i, recommendation) in report.analysis.recommendations.iter().enumerate() {
        println!("  {}. {recommendation}", i + 1);
    }
    println!();
}

fn print_structure(report: &AnalysisReport) {
    if report.analysis.structure.is_empty() {
        return;
    }

    println!("{} Code structure:", "🧭".bold());
    for classification in &report.analysis.structure {
        let kind = classification.kind.to_string();
        let label = classification.complexity.to_string();
        println!(
            "  line {:>4}: [{kind:<13}] {} {}",
            classification.line,
            colorize_label_str(classification.complexity, format!("{label:<9}")),
            classification.content
        );
    }
    println!();
}

fn colorize_label(label: ComplexityClass) -> ColoredString {
    colorize_label_str(label, label.to_string())
}

// Severity coding follows the usual traffic-light buckets: constant and
// logarithmic are fine, linear-ish warrants a look, polynomial and
// exponential are the ones to fix.
fn colorize_label_str(label: ComplexityClass, text: String) -> ColoredString {
    match label {
        ComplexityClass::Constant | ComplexityClass::Logarithmic => text.green(),
        ComplexityClass::Linear | ComplexityClass::Linearithmic => text.yellow(),
        ComplexityClass::Polynomial(_) => text.red(),
        ComplexityClass::Exponential => text.red().bold(),
    }
}

/// Build a writer for the requested format and destination. Terminal output
/// directed at a file falls back to the plain-text layout, colors being a
/// property of the terminal.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let writer: Box<dyn OutputWriter> = match (format, output) {
        (OutputFormat::Json, None) => Box::new(JsonWriter::new(std::io::stdout())),
        (OutputFormat::Json, Some(path)) => Box::new(JsonWriter::new(File::create(path)?)),
        (OutputFormat::Markdown, None) => Box::new(MarkdownWriter::new(std::io::stdout())),
        (OutputFormat::Markdown, Some(path)) => Box::new(MarkdownWriter::new(File::create(path)?)),
        (OutputFormat::Text, None) => Box::new(TextWriter::new(std::io::stdout())),
        (OutputFormat::Text, Some(path)) => Box::new(TextWriter::new(File::create(path)?)),
        (OutputFormat::Terminal, None) => Box::new(TerminalWriter::new()),
        (OutputFormat::Terminal, Some(path)) => {
            log::warn!("terminal format writes plain text when directed to a file");
            Box::new(TextWriter::new(File::create(path)?))
        }
    };
    Ok(writer)
}
