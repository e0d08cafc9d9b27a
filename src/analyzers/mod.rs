//! Line-oriented source scanning.
//!
//! Detection is textual: every registry pattern is tested against every
//! line, so false positives (patterns inside strings or comments) and false
//! negatives (multi-line constructs) are accepted by design. Scanning a
//! file is pure with respect to its content, which keeps per-file work
//! trivially parallelizable.

use crate::core::{Finding, FindingSet};
use crate::registry;
use std::fs;
use std::path::Path;

/// Scan one file from disk. Read failures degrade to an empty result and
/// invalid UTF-8 sequences are replaced, never fatal.
pub fn scan_file(path: &Path) -> FindingSet {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("skipping unreadable file {}: {}", path.display(), e);
            return FindingSet::new();
        }
    };
    let content = String::from_utf8_lossy(&bytes);
    scan_content(path, &content)
}

/// Scan decoded content. Every category's every pattern is applied to every
/// line, in registry order, with no early exit: one line may yield several
/// findings, across categories and within one.
pub fn scan_content(path: &Path, content: &str) -> FindingSet {
    let mut findings = FindingSet::new();
    for (index, line) in content.lines().enumerate() {
        for category in registry::categories() {
            for pattern in category.patterns() {
                if pattern.is_match(line) {
                    findings.push(
                        category.id,
                        Finding::new(path.to_path_buf(), index + 1, line),
                    );
                }
            }
        }
    }
    findings
}
