//! Report data model shared across the analyzer.

pub mod findings;

pub use findings::{CategoryId, Finding, FindingSet};

use crate::recommendations::Recommendation;
use crate::registry::Difficulty;
use crate::scoring::ComplexityScore;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

/// File classes the walker distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Java,
    Kotlin,
    /// C/C++ sources and headers.
    Native,
    Gradle,
    CMake,
}

impl FileKind {
    /// Classify a path, or `None` when the file is irrelevant to the scan.
    pub fn classify(path: &Path) -> Option<FileKind> {
        let name = path.file_name()?.to_str()?;
        if name == "build.gradle" || name == "build.gradle.kts" {
            return Some(FileKind::Gradle);
        }
        if name == "CMakeLists.txt" {
            return Some(FileKind::CMake);
        }
        match path.extension()?.to_str()? {
            "java" => Some(FileKind::Java),
            "kt" => Some(FileKind::Kotlin),
            "c" | "cpp" | "h" => Some(FileKind::Native),
            _ => None,
        }
    }
}

/// File counts plus the derived complexity, the report's `summary` section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanSummary {
    pub java_files: usize,
    pub kotlin_files: usize,
    pub native_files: usize,
    pub gradle_files: usize,
    pub complexity: ComplexityScore,
}

/// Per-category detail in the report: hit count, tier, replacement, and up
/// to [`SAMPLE_LIMIT`] sample findings in scan order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiUsage {
    pub count: usize,
    pub difficulty: Difficulty,
    pub oh_alternative: &'static str,
    pub samples: Vec<Finding>,
}

/// Cap on sample findings carried per category.
pub const SAMPLE_LIMIT: usize = 5;

/// The `android_apis` report section. Serialized as a JSON map in category
/// insertion order (scan order), which `HashMap` would not guarantee.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiUsageMap {
    entries: Vec<(CategoryId, ApiUsage)>,
}

impl ApiUsageMap {
    pub fn push(&mut self, id: CategoryId, usage: ApiUsage) {
        self.entries.push((id, usage));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ApiUsage> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, usage)| usage)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CategoryId, &ApiUsage)> {
        self.entries.iter().map(|(id, usage)| (*id, usage))
    }
}

impl Serialize for ApiUsageMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, usage) in &self.entries {
            map.serialize_entry(id, usage)?;
        }
        map.end()
    }
}

/// Native build metadata extracted from CMake descriptors.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NativeBuildInfo {
    pub libraries: Vec<String>,
    pub source_files: Vec<String>,
    pub link_libraries: Vec<String>,
}

impl NativeBuildInfo {
    /// Merge another descriptor's contents into this one. Multiple CMake
    /// files in one tree all contribute.
    pub fn merge(&mut self, other: NativeBuildInfo) {
        self.libraries.extend(other.libraries);
        self.source_files.extend(other.source_files);
        self.link_libraries.extend(other.link_libraries);
    }
}

/// The final report artifact. Field order is the JSON key order and is part
/// of the output compatibility contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortabilityReport {
    pub library_path: PathBuf,
    pub summary: ScanSummary,
    pub android_apis: ApiUsageMap,
    pub dependencies: Vec<String>,
    pub native_code: Option<NativeBuildInfo>,
    pub recommendations: Vec<Recommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_by_extension_and_name() {
        assert_eq!(FileKind::classify(Path::new("a/B.java")), Some(FileKind::Java));
        assert_eq!(FileKind::classify(Path::new("a/B.kt")), Some(FileKind::Kotlin));
        assert_eq!(FileKind::classify(Path::new("jni/native-lib.cpp")), Some(FileKind::Native));
        assert_eq!(FileKind::classify(Path::new("jni/header.h")), Some(FileKind::Native));
        assert_eq!(
            FileKind::classify(Path::new("lib/build.gradle")),
            Some(FileKind::Gradle)
        );
        assert_eq!(
            FileKind::classify(Path::new("lib/build.gradle.kts")),
            Some(FileKind::Gradle)
        );
        assert_eq!(
            FileKind::classify(Path::new("src/main/cpp/CMakeLists.txt")),
            Some(FileKind::CMake)
        );
        assert_eq!(FileKind::classify(Path::new("README.md")), None);
        assert_eq!(FileKind::classify(Path::new("no_extension")), None);
    }

    #[test]
    fn api_usage_map_serializes_in_insertion_order() {
        let mut map = ApiUsageMap::default();
        map.push(
            "ui_view",
            ApiUsage {
                count: 2,
                difficulty: Difficulty::High,
                oh_alternative: "ArkUI declarative components",
                samples: vec![],
            },
        );
        map.push(
            "logging",
            ApiUsage {
                count: 1,
                difficulty: Difficulty::Low,
                oh_alternative: "hilog (@ohos.hilog)",
                samples: vec![],
            },
        );

        let json = serde_json::to_string(&map).unwrap();
        let ui = json.find("ui_view").unwrap();
        let logging = json.find("logging").unwrap();
        assert!(ui < logging);
    }

    #[test]
    fn native_build_info_merge_appends() {
        let mut a = NativeBuildInfo {
            libraries: vec!["core".into()],
            source_files: vec!["core.cpp".into()],
            link_libraries: vec!["target_link_libraries(core log)".into()],
        };
        a.merge(NativeBuildInfo {
            libraries: vec!["codec".into()],
            source_files: vec![],
            link_libraries: vec![],
        });
        assert_eq!(a.libraries, vec!["core", "codec"]);
        assert_eq!(a.source_files, vec!["core.cpp"]);
    }
}
