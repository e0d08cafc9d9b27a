//! Report writers: JSON (the compatibility artifact), Markdown, and a
//! colorized terminal rendering.

use crate::core::PortabilityReport;
use crate::registry::Difficulty;
use crate::scoring::SeverityLevel;
use colored::*;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &PortabilityReport) -> anyhow::Result<()>;
}

pub fn create_writer(writer: Box<dyn Write>, format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
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
    fn write_report(&mut self, report: &PortabilityReport) -> anyhow::Result<()> {
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
    fn write_report(&mut self, report: &PortabilityReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_api_usage(report)?;
        self.write_dependencies(report)?;
        self.write_recommendations(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &PortabilityReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Portability Analysis Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Library: `{}`", report.library_path.display())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &PortabilityReport) -> anyhow::Result<()> {
        let c = &report.summary.complexity;
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Migration complexity | {} ({}/100) |",
            c.level.as_str(),
            c.score
        )?;
        writeln!(self.writer, "| Java files | {} |", report.summary.java_files)?;
        writeln!(self.writer, "| Kotlin files | {} |", report.summary.kotlin_files)?;
        writeln!(self.writer, "| Native files | {} |", report.summary.native_files)?;
        writeln!(self.writer, "| Gradle files | {} |", report.summary.gradle_files)?;
        writeln!(self.writer, "| Total API hits | {} |", c.total_api_hits)?;
        writeln!(
            self.writer,
            "| Native code | {} |",
            if c.has_native_code { "yes" } else { "no" }
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_api_usage(&mut self, report: &PortabilityReport) -> anyhow::Result<()> {
        if report.android_apis.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Android API Usage")?;
        writeln!(self.writer)?;
        for (id, usage) in report.android_apis.iter() {
            writeln!(
                self.writer,
                "### {} ({} hits, {})",
                id,
                usage.count,
                usage.difficulty.as_str()
            )?;
            writeln!(self.writer)?;
            writeln!(self.writer, "OpenHarmony alternative: {}", usage.oh_alternative)?;
            writeln!(self.writer)?;
            for sample in &usage.samples {
                writeln!(
                    self.writer,
                    "- `{}:{}` — `{}`",
                    sample.file.display(),
                    sample.line,
                    sample.content
                )?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_dependencies(&mut self, report: &PortabilityReport) -> anyhow::Result<()> {
        if report.dependencies.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Dependencies")?;
        writeln!(self.writer)?;
        for dep in &report.dependencies {
            writeln!(self.writer, "- `{}`", dep)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, report: &PortabilityReport) -> anyhow::Result<()> {
        if report.recommendations.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Recommendations")?;
        writeln!(self.writer)?;
        for (index, rec) in report.recommendations.iter().enumerate() {
            writeln!(
                self.writer,
                "{}. [{}] {}",
                index + 1,
                rec.difficulty.as_str(),
                rec.action
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &PortabilityReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Android API Usage".bold())?;
        for (id, usage) in report.android_apis.iter() {
            writeln!(
                self.writer,
                "  {:<20} {:>5} hits  [{}]  -> {}",
                id,
                usage.count,
                colorize_difficulty(usage.difficulty),
                usage.oh_alternative
            )?;
        }
        if report.android_apis.is_empty() {
            writeln!(self.writer, "  no Android API usage detected")?;
        }
        writeln!(self.writer)?;

        if !report.recommendations.is_empty() {
            writeln!(self.writer, "{}", "Recommendations".bold())?;
            for rec in &report.recommendations {
                writeln!(
                    self.writer,
                    "  [{}] {}",
                    colorize_difficulty(rec.difficulty),
                    rec.action
                )?;
            }
            writeln!(self.writer)?;
        }

        write_summary_banner(&mut self.writer, report)?;
        Ok(())
    }
}

fn colorize_difficulty(difficulty: Difficulty) -> ColoredString {
    match difficulty {
        Difficulty::High => difficulty.as_str().red(),
        Difficulty::Medium => difficulty.as_str().yellow(),
        Difficulty::Low => difficulty.as_str().green(),
    }
}

fn colorize_level(level: SeverityLevel) -> ColoredString {
    match level {
        SeverityLevel::Low => level.as_str().green(),
        SeverityLevel::Medium => level.as_str().yellow(),
        SeverityLevel::High => level.as_str().red(),
        SeverityLevel::VeryHigh => level.as_str().bright_red().bold(),
    }
}

fn write_summary_banner<W: Write>(writer: &mut W, report: &PortabilityReport) -> anyhow::Result<()> {
    let c = &report.summary.complexity;
    writeln!(writer, "{}", "=".repeat(50))?;
    writeln!(
        writer,
        "Migration Complexity: {} (score: {}/100)",
        colorize_level(c.level),
        c.score
    )?;
    writeln!(writer, "Total API hits: {}", c.total_api_hits)?;
    writeln!(writer, "High difficulty: {}", c.high_difficulty_hits)?;
    writeln!(
        writer,
        "Native code: {}",
        if c.has_native_code { "Yes" } else { "No" }
    )?;
    writeln!(writer, "Dependencies: {}", report.dependencies.len())?;
    writeln!(writer, "{}", "=".repeat(50))?;
    Ok(())
}

/// Print the complexity banner to stdout. Used after the full report has
/// been written to a file.
pub fn print_summary(report: &PortabilityReport) -> anyhow::Result<()> {
    write_summary_banner(&mut std::io::stdout().lock(), report)
}
