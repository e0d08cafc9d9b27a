//! The analyze command: walk, scan, extract, score, assemble, write.

use crate::analyzers::scan_file;
use crate::builders::report::assemble_report;
use crate::core::{FindingSet, NativeBuildInfo, PortabilityReport};
use crate::extraction::{cmake, gradle};
use crate::io::output::{create_writer, print_summary, OutputFormat};
use crate::io::walker::{discover_files, DiscoveredFiles};
use crate::registry;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub parallel: bool,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    // Fail on a malformed pattern table before touching the file system.
    registry::validate();

    let report = analyze_library(&config.path, config.parallel)?;
    write_report(&report, &config)
}

/// Run the full analysis pipeline over a library tree.
pub fn analyze_library(path: &Path, parallel: bool) -> Result<PortabilityReport> {
    let root = canonical_root(path)?;
    log::info!("analyzing {}", root.display());

    let discovered = discover_files(&root)?;
    let findings = scan_sources(&discovered, parallel);
    let dependencies = extract_dependencies(&discovered);
    let native_info = extract_native_info(&discovered);

    Ok(assemble_report(
        &root,
        &discovered,
        findings,
        dependencies,
        native_info,
    ))
}

fn canonical_root(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(crate::errors::PortmapError::RootNotFound(path.to_path_buf()).into());
    }
    path.canonicalize()
        .with_context(|| format!("resolving library path {}", path.display()))
}

/// Scan all source files. The file list is pre-sorted and the parallel
/// collect preserves input order, so the fold merges fragments in the same
/// deterministic order either way.
fn scan_sources(discovered: &DiscoveredFiles, parallel: bool) -> FindingSet {
    let files = discovered.scannable();
    let fragments: Vec<FindingSet> = if parallel {
        files.par_iter().map(|path| scan_file(path)).collect()
    } else {
        files.iter().map(|path| scan_file(path)).collect()
    };
    FindingSet::from_fragments(fragments)
}

fn extract_dependencies(discovered: &DiscoveredFiles) -> Vec<String> {
    let mut dependencies = Vec::new();
    for path in &discovered.gradle {
        dependencies.extend(gradle::extract_from_file(path));
    }
    dependencies
}

fn extract_native_info(discovered: &DiscoveredFiles) -> Option<NativeBuildInfo> {
    if discovered.cmake.is_empty() {
        return None;
    }
    let mut info = NativeBuildInfo::default();
    for path in &discovered.cmake {
        info.merge(cmake::extract_from_file(path));
    }
    Some(info)
}

fn write_report(report: &PortabilityReport, config: &AnalyzeConfig) -> Result<()> {
    match &config.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating report file {}", path.display()))?;
            create_writer(Box::new(file), config.format).write_report(report)?;
            println!("Report saved to: {}", path.display());
            print_summary(report)?;
        }
        None => {
            create_writer(Box::new(std::io::stdout()), config.format).write_report(report)?;
            // The terminal writer already ends with the banner.
            if config.format != OutputFormat::Terminal {
                print_summary(report)?;
            }
        }
    }
    Ok(())
}
