// Export modules for library usage
pub mod analyzers;
pub mod builders;
pub mod cli;
pub mod commands;
pub mod core;
pub mod errors;
pub mod extraction;
pub mod io;
pub mod recommendations;
pub mod registry;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    ApiUsage, ApiUsageMap, FileKind, Finding, FindingSet, NativeBuildInfo, PortabilityReport,
    ScanSummary, SAMPLE_LIMIT,
};

pub use crate::analyzers::{scan_content, scan_file};
pub use crate::builders::report::assemble_report;
pub use crate::commands::analyze::analyze_library;
pub use crate::errors::PortmapError;
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::io::walker::{discover_files, DiscoveredFiles};
pub use crate::recommendations::{generate_recommendations, Recommendation};
pub use crate::registry::{Category, Difficulty};
pub use crate::scoring::{calculate_complexity, weighted_score, ComplexityScore, SeverityLevel};
