//! Finding value types and the ordered category → findings map.

use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Category identifiers are borrowed from the static registry.
pub type CategoryId = &'static str;

/// One detected occurrence of a category pattern at a specific file/line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub file: PathBuf,
    /// 1-based line number.
    pub line: usize,
    /// The matched line, trimmed of surrounding whitespace.
    pub content: String,
}

impl Finding {
    pub fn new(file: PathBuf, line: usize, content: &str) -> Self {
        Self {
            file,
            line,
            content: content.trim().to_string(),
        }
    }
}

/// Category → findings map that remembers category insertion order.
///
/// Insertion order is scan order (file-then-line traversal), and the report
/// serializer relies on it: two scans of an unchanged tree must produce
/// byte-identical output. Per-file scans each build their own `FindingSet`;
/// the aggregator folds them together with [`FindingSet::merge`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FindingSet {
    order: Vec<CategoryId>,
    by_category: HashMap<CategoryId, Vec<Finding>>,
}

impl FindingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one finding, registering the category on first use.
    pub fn push(&mut self, category: CategoryId, finding: Finding) {
        let entry = self.by_category.entry(category).or_default();
        if entry.is_empty() {
            self.order.push(category);
        }
        entry.push(finding);
    }

    /// Pure merge: concatenates `other`'s findings after `self`'s,
    /// per category, preserving first-encounter category order.
    pub fn merge(mut self, other: FindingSet) -> FindingSet {
        for category in other.order {
            let findings = other
                .by_category
                .get(category)
                .cloned()
                .unwrap_or_default();
            let entry = self.by_category.entry(category).or_default();
            if entry.is_empty() {
                self.order.push(category);
            }
            entry.extend(findings);
        }
        self
    }

    /// Fold a sequence of per-file fragments into one tree-wide set.
    pub fn from_fragments<I: IntoIterator<Item = FindingSet>>(fragments: I) -> FindingSet {
        fragments
            .into_iter()
            .fold(FindingSet::new(), FindingSet::merge)
    }

    pub fn count(&self, category: &str) -> usize {
        self.by_category.get(category).map_or(0, Vec::len)
    }

    pub fn total_hits(&self) -> usize {
        self.by_category.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Categories with their findings, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (CategoryId, &[Finding])> {
        self.order
            .iter()
            .map(move |&id| (id, self.by_category[id].as_slice()))
    }
}
