//! Migration complexity scoring.
//!
//! The score is a weighted sum over difficulty tiers, dependency count and
//! native-code presence, clamped to [0, 100]. Low-difficulty hits carry no
//! weight: they are considered trivially portable.

use crate::core::FindingSet;
use crate::registry::{self, Difficulty};
use serde::Serialize;

const HIGH_WEIGHT: u64 = 5;
const MEDIUM_WEIGHT: u64 = 2;
const DEPENDENCY_WEIGHT: u64 = 3;
const NATIVE_PENALTY: u64 = 20;
const MAX_SCORE: u64 = 100;

/// Discrete severity bucket derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum SeverityLevel {
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "MEDIUM")]
    Medium,
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "VERY_HIGH")]
    VeryHigh,
}

impl SeverityLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=19 => SeverityLevel::Low,
            20..=49 => SeverityLevel::Medium,
            50..=79 => SeverityLevel::High,
            _ => SeverityLevel::VeryHigh,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SeverityLevel::Low => "LOW",
            SeverityLevel::Medium => "MEDIUM",
            SeverityLevel::High => "HIGH",
            SeverityLevel::VeryHigh => "VERY_HIGH",
        }
    }
}

/// Complexity score plus the raw tier counts it was derived from.
/// Recomputed fresh per scan, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplexityScore {
    pub score: u32,
    pub level: SeverityLevel,
    pub total_api_hits: usize,
    pub high_difficulty_hits: usize,
    pub medium_difficulty_hits: usize,
    pub has_native_code: bool,
}

/// Weighted score over raw inputs. Saturating arithmetic keeps the clamp
/// valid for arbitrarily large inputs.
pub fn weighted_score(
    high_hits: u64,
    medium_hits: u64,
    dependency_count: u64,
    has_native: bool,
) -> u32 {
    let mut raw = high_hits
        .saturating_mul(HIGH_WEIGHT)
        .saturating_add(medium_hits.saturating_mul(MEDIUM_WEIGHT))
        .saturating_add(dependency_count.saturating_mul(DEPENDENCY_WEIGHT));
    if has_native {
        raw = raw.saturating_add(NATIVE_PENALTY);
    }
    raw.min(MAX_SCORE) as u32
}

/// Score the aggregated findings of one scan.
pub fn calculate_complexity(
    findings: &FindingSet,
    dependency_count: usize,
    has_native: bool,
) -> ComplexityScore {
    let mut high_hits = 0usize;
    let mut medium_hits = 0usize;
    for category in registry::categories() {
        match category.difficulty {
            Difficulty::High => high_hits += findings.count(category.id),
            Difficulty::Medium => medium_hits += findings.count(category.id),
            Difficulty::Low => {}
        }
    }

    let score = weighted_score(
        high_hits as u64,
        medium_hits as u64,
        dependency_count as u64,
        has_native,
    );

    ComplexityScore {
        score,
        level: SeverityLevel::from_score(score),
        total_api_hits: findings.total_hits(),
        high_difficulty_hits: high_hits,
        medium_difficulty_hits: medium_hits,
        has_native_code: has_native,
    }
}
