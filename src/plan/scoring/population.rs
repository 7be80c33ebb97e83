use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::super::domain::{PopulationIntervention, PreventionTier, StrategyType};

/// Ceiling of each population sub-score.
pub const SUBSCORE_CEILING: u32 = 25;
/// SDOH categories counted toward coverage. Healthcare Access is left out.
pub const SDOH_COVERAGE_DENOMINATOR: u32 = 8;
/// Points the tier spread can earn before the primary bonus.
pub const PREVENTION_SPREAD_POINTS: u32 = 20;
pub const PRIMARY_TIER_BONUS: u32 = 5;
/// Quality points for a strategy without a rating.
pub const UNRATED_QUALITY_POINTS: u32 = 10;

/// Four 0-25 sub-scores rating a population plan, and their 0-100 sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationScore {
    pub strategy_diversity: u32,
    pub sdoh_coverage: u32,
    pub prevention_balance: u32,
    pub quality_score: u32,
    pub total: u32,
}

/// `None` when nothing was selected, so "no plan" stays distinct from a
/// plan that scored zero.
pub fn compute_population_score(selected: &[&PopulationIntervention]) -> Option<PopulationScore> {
    if selected.is_empty() {
        return None;
    }

    let strategy_types: BTreeSet<_> = selected.iter().map(|s| s.strategy_type).collect();
    let sdoh_categories: BTreeSet<_> = selected.iter().map(|s| s.sdoh_category).collect();
    let tiers: BTreeSet<_> = selected.iter().map(|s| s.prevention).collect();

    let strategy_diversity = scaled(
        strategy_types.len(),
        StrategyType::COUNT as u32,
        SUBSCORE_CEILING,
    )
    .min(SUBSCORE_CEILING);

    let sdoh_coverage = scaled(
        sdoh_categories.len(),
        SDOH_COVERAGE_DENOMINATOR,
        SUBSCORE_CEILING,
    )
    .min(SUBSCORE_CEILING);

    let primary_bonus = if tiers.contains(&PreventionTier::Primary) {
        PRIMARY_TIER_BONUS
    } else {
        0
    };
    let prevention_balance = (scaled(
        tiers.len(),
        PreventionTier::COUNT as u32,
        PREVENTION_SPREAD_POINTS,
    ) + primary_bonus)
        .min(SUBSCORE_CEILING);

    let quality_total: u32 = selected
        .iter()
        .map(|s| {
            s.quality
                .map(|rating| rating.points())
                .unwrap_or(UNRATED_QUALITY_POINTS)
        })
        .sum();
    let quality_score = (quality_total as f64 / selected.len() as f64).round() as u32;

    Some(PopulationScore {
        strategy_diversity,
        sdoh_coverage,
        prevention_balance,
        quality_score,
        total: strategy_diversity + sdoh_coverage + prevention_balance + quality_score,
    })
}

/// `round(count / denominator * points)`, zero when the denominator is zero.
fn scaled(count: usize, denominator: u32, points: u32) -> u32 {
    if denominator == 0 {
        return 0;
    }
    (count as f64 / denominator as f64 * points as f64).round() as u32
}
