//! File discovery: gitignore-aware walk, file-kind classification, and the
//! deterministic ordering the rest of the pipeline depends on.

use crate::core::FileKind;
use crate::errors::PortmapError;
use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// The files of one library tree, grouped by kind. Every group is sorted
/// lexicographically by full path.
#[derive(Debug, Default, Clone)]
pub struct DiscoveredFiles {
    pub java: Vec<PathBuf>,
    pub kotlin: Vec<PathBuf>,
    pub native: Vec<PathBuf>,
    pub gradle: Vec<PathBuf>,
    pub cmake: Vec<PathBuf>,
}

impl DiscoveredFiles {
    /// All files the line scanner should visit, in one lexicographically
    /// sorted list. Directory enumeration order is not stable across
    /// platforms; sorting here is what makes repeated scans of an
    /// unchanged tree byte-identical.
    pub fn scannable(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = self
            .java
            .iter()
            .chain(&self.kotlin)
            .chain(&self.native)
            .cloned()
            .collect();
        files.sort();
        files
    }
}

/// Walk `root` and classify every file. A missing root is fatal; an
/// unreadable directory entry is skipped with a warning.
pub fn discover_files(root: &Path) -> Result<DiscoveredFiles> {
    if !root.exists() {
        return Err(PortmapError::RootNotFound(root.to_path_buf()).into());
    }

    let mut discovered = DiscoveredFiles::default();
    let walker = WalkBuilder::new(root).hidden(false).git_ignore(true).build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        match FileKind::classify(path) {
            Some(FileKind::Java) => discovered.java.push(path.to_path_buf()),
            Some(FileKind::Kotlin) => discovered.kotlin.push(path.to_path_buf()),
            Some(FileKind::Native) => discovered.native.push(path.to_path_buf()),
            Some(FileKind::Gradle) => discovered.gradle.push(path.to_path_buf()),
            Some(FileKind::CMake) => discovered.cmake.push(path.to_path_buf()),
            None => {}
        }
    }

    discovered.java.sort();
    discovered.kotlin.sort();
    discovered.native.sort();
    discovered.gradle.sort();
    discovered.cmake.sort();

    log::debug!(
        "discovered {} java, {} kotlin, {} native, {} gradle, {} cmake files under {}",
        discovered.java.len(),
        discovered.kotlin.len(),
        discovered.native.len(),
        discovered.gradle.len(),
        discovered.cmake.len(),
        root.display()
    );

    Ok(discovered)
}
