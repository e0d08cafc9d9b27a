//! Ranked migration recommendations derived from aggregated findings.

use crate::core::FindingSet;
use crate::registry::{self, Difficulty};
use serde::Serialize;

/// One actionable suggestion: replace a category's usages with its
/// OpenHarmony alternative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub category: &'static str,
    pub hit_count: usize,
    pub difficulty: Difficulty,
    pub oh_alternative: &'static str,
    pub action: String,
}

/// One recommendation per category with at least one finding, hardest
/// first. The sort is stable, so categories of equal difficulty keep their
/// scan-encounter order.
pub fn generate_recommendations(findings: &FindingSet) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = findings
        .iter()
        .filter(|(_, hits)| !hits.is_empty())
        .filter_map(|(id, hits)| {
            let category = registry::find(id)?;
            Some(Recommendation {
                category: category.id,
                hit_count: hits.len(),
                difficulty: category.difficulty,
                oh_alternative: category.oh_alternative,
                action: format!(
                    "Replace {} {} API calls with {}",
                    hits.len(),
                    category.id,
                    category.oh_alternative
                ),
            })
        })
        .collect();
    recommendations.sort_by_key(|r| r.difficulty.rank());
    recommendations
}
