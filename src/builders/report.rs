//! Assembles the final report from the pipeline's intermediate results.

use crate::core::{
    ApiUsage, ApiUsageMap, FindingSet, NativeBuildInfo, PortabilityReport, ScanSummary,
    SAMPLE_LIMIT,
};
use crate::io::walker::DiscoveredFiles;
use crate::recommendations::generate_recommendations;
use crate::registry::{self, NATIVE_CATEGORY};
use crate::scoring::calculate_complexity;
use std::path::Path;

/// Build the report. `dependencies` is the raw, duplicate-inclusive list
/// from the Gradle extractor: its length feeds the score, while the report
/// carries it deduplicated and sorted. `native_info` is the merged CMake
/// metadata, `None` when no descriptor file was found.
pub fn assemble_report(
    root: &Path,
    discovered: &DiscoveredFiles,
    findings: FindingSet,
    dependencies: Vec<String>,
    native_info: Option<NativeBuildInfo>,
) -> PortabilityReport {
    let has_native = !discovered.native.is_empty() || findings.count(NATIVE_CATEGORY) > 0;
    let complexity = calculate_complexity(&findings, dependencies.len(), has_native);
    let recommendations = generate_recommendations(&findings);

    let mut android_apis = ApiUsageMap::default();
    for (id, hits) in findings.iter() {
        if hits.is_empty() {
            continue;
        }
        // Scanner findings always come from registry ids.
        let Some(category) = registry::find(id) else {
            continue;
        };
        android_apis.push(
            id,
            ApiUsage {
                count: hits.len(),
                difficulty: category.difficulty,
                oh_alternative: category.oh_alternative,
                samples: hits.iter().take(SAMPLE_LIMIT).cloned().collect(),
            },
        );
    }

    let mut dependency_list = dependencies;
    dependency_list.sort();
    dependency_list.dedup();

    PortabilityReport {
        library_path: root.to_path_buf(),
        summary: ScanSummary {
            java_files: discovered.java.len(),
            kotlin_files: discovered.kotlin.len(),
            native_files: discovered.native.len(),
            gradle_files: discovered.gradle.len(),
            complexity,
        },
        android_apis,
        dependencies: dependency_list,
        native_code: if has_native {
            Some(native_info.unwrap_or_default())
        } else {
            None
        },
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Finding;
    use crate::scoring::SeverityLevel;
    use std::path::PathBuf;

    fn finding(line: usize) -> Finding {
        Finding::new(PathBuf::from("src/A.java"), line, "import android.view.View;")
    }

    #[test]
    fn samples_are_capped_to_first_five_in_scan_order() {
        let mut findings = FindingSet::new();
        for line in 1..=8 {
            findings.push("ui_view", finding(line));
        }
        let report = assemble_report(
            Path::new("/lib"),
            &DiscoveredFiles::default(),
            findings,
            vec![],
            None,
        );
        let usage = report.android_apis.get("ui_view").unwrap();
        assert_eq!(usage.count, 8);
        assert_eq!(usage.samples.len(), 5);
        let lines: Vec<_> = usage.samples.iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn dependencies_are_deduplicated_and_sorted() {
        let report = assemble_report(
            Path::new("/lib"),
            &DiscoveredFiles::default(),
            FindingSet::new(),
            vec![
                "z.example:zlib:1".into(),
                "a.example:alib:1".into(),
                "z.example:zlib:1".into(),
            ],
            None,
        );
        assert_eq!(
            report.dependencies,
            vec!["a.example:alib:1".to_string(), "z.example:zlib:1".to_string()]
        );
        // Score still sees the raw count of 3.
        assert_eq!(report.summary.complexity.score, 9);
    }

    #[test]
    fn native_metadata_present_only_with_native_evidence() {
        let clean = assemble_report(
            Path::new("/lib"),
            &DiscoveredFiles::default(),
            FindingSet::new(),
            vec![],
            Some(NativeBuildInfo::default()),
        );
        assert!(clean.native_code.is_none());

        let mut discovered = DiscoveredFiles::default();
        discovered.native.push(PathBuf::from("jni/a.cpp"));
        let native = assemble_report(Path::new("/lib"), &discovered, FindingSet::new(), vec![], None);
        assert_eq!(native.native_code, Some(NativeBuildInfo::default()));
        assert!(native.summary.complexity.has_native_code);
    }

    #[test]
    fn jni_findings_imply_native_without_native_files() {
        let mut findings = FindingSet::new();
        findings.push(
            "jni_ndk",
            Finding::new(PathBuf::from("A.java"), 10, "System.loadLibrary(\"core\");"),
        );
        let report = assemble_report(
            Path::new("/lib"),
            &DiscoveredFiles::default(),
            findings,
            vec![],
            None,
        );
        assert!(report.summary.complexity.has_native_code);
        assert!(report.native_code.is_some());
    }

    #[test]
    fn concrete_scoring_scenario() {
        // 3 ui_view (high) + 1 network (medium), no deps, no native:
        // 3*5 + 1*2 = 17 -> LOW, and exactly two api categories.
        let mut findings = FindingSet::new();
        for line in 1..=3 {
            findings.push("ui_view", finding(line));
        }
        findings.push(
            "network",
            Finding::new(PathBuf::from("src/A.java"), 9, "import okhttp3.OkHttpClient;"),
        );
        let report = assemble_report(
            Path::new("/lib"),
            &DiscoveredFiles::default(),
            findings,
            vec![],
            None,
        );
        assert_eq!(report.summary.complexity.score, 17);
        assert_eq!(report.summary.complexity.level, SeverityLevel::Low);
        assert_eq!(report.android_apis.len(), 2);
        assert_eq!(report.android_apis.get("ui_view").unwrap().count, 3);
        assert_eq!(report.android_apis.get("network").unwrap().count, 1);
    }
}
