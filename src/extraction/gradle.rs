//! Dependency coordinate extraction from Gradle build files.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

// Declaration forms: `implementation "g:a:v"`, `api('g:a:v')`, and
// `implementation project(':module')`.
static DEPENDENCY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r#"(?:implementation|api|compile|compileOnly)\s*\(?\s*['"]([^'"]+)['"]"#,
        r#"(?:implementation|api|compile|compileOnly)\s*\(?\s*project\s*\(['"]([^'"]+)['"]\)"#,
    ]
    .iter()
    .map(|p| Regex::new(p).expect("gradle dependency pattern"))
    .collect()
});

/// Extract dependency coordinate strings from Gradle content.
///
/// Duplicates are kept: the raw occurrence count feeds the complexity
/// score, while the report deduplicates separately.
pub fn extract_dependencies(content: &str) -> Vec<String> {
    let mut dependencies = Vec::new();
    for pattern in DEPENDENCY_PATTERNS.iter() {
        for captures in pattern.captures_iter(content) {
            dependencies.push(captures[1].to_string());
        }
    }
    dependencies
}

/// Read a Gradle file and extract its dependencies. Read failures degrade
/// to an empty list.
pub fn extract_from_file(path: &Path) -> Vec<String> {
    match fs::read(path) {
        Ok(bytes) => extract_dependencies(&String::from_utf8_lossy(&bytes)),
        Err(e) => {
            log::warn!("skipping unreadable gradle file {}: {}", path.display(), e);
            Vec::new()
        }
    }
}
