//! Native build metadata extraction from CMake descriptors.

use crate::core::NativeBuildInfo;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

static ADD_LIBRARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"add_library\s*\(\s*(\w+)([^)]*)\)").expect("add_library pattern"));

static LINK_LIBRARIES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"target_link_libraries\s*\([^)]*\)").expect("link pattern"));

// Keywords in add_library argument lists that are not source files.
const ADD_LIBRARY_KEYWORDS: &[&str] = &[
    "SHARED",
    "STATIC",
    "MODULE",
    "OBJECT",
    "INTERFACE",
    "ALIAS",
    "IMPORTED",
    "EXCLUDE_FROM_ALL",
];

/// Extract declared library targets, their source arguments, and raw
/// link directives from CMake content.
pub fn extract_native_info(content: &str) -> NativeBuildInfo {
    let mut info = NativeBuildInfo::default();

    for captures in ADD_LIBRARY.captures_iter(content) {
        info.libraries.push(captures[1].to_string());
        info.source_files.extend(
            captures[2]
                .split_whitespace()
                .filter(|arg| !ADD_LIBRARY_KEYWORDS.contains(arg))
                .map(str::to_string),
        );
    }

    for directive in LINK_LIBRARIES.find_iter(content) {
        info.link_libraries.push(directive.as_str().to_string());
    }

    info
}

/// Read a CMake file and extract its native metadata. Read failures
/// degrade to an empty descriptor.
pub fn extract_from_file(path: &Path) -> NativeBuildInfo {
    match fs::read(path) {
        Ok(bytes) => extract_native_info(&String::from_utf8_lossy(&bytes)),
        Err(e) => {
            log::warn!("skipping unreadable cmake file {}: {}", path.display(), e);
            NativeBuildInfo::default()
        }
    }
}
