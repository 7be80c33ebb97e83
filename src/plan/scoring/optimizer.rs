//! Greedy ceiling used to normalise student performance.
//!
//! Each step takes the single intervention with the largest immediate gain.
//! This is a heuristic bound, not a proven optimum across competing domains.

use tracing::debug;

use super::super::domain::{IndividualOption, ItemId, OptionKind, WellnessDomainScores};

/// Ceiling scores plus the interventions the optimizer picked, in pick order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreedyPlan {
    pub scores: WellnessDomainScores,
    pub picks: Vec<ItemId>,
}

pub fn compute_max_scores(
    baseline: &WellnessDomainScores,
    available: &[&IndividualOption],
    selection_limit: usize,
) -> WellnessDomainScores {
    plan_max_scores(baseline, available, selection_limit).scores
}

pub fn plan_max_scores(
    baseline: &WellnessDomainScores,
    available: &[&IndividualOption],
    selection_limit: usize,
) -> GreedyPlan {
    let mut scores = *baseline;
    let mut pool: Vec<&IndividualOption> = available
        .iter()
        .copied()
        .filter(|option| option.base_impact(OptionKind::Intervention) > 0)
        .collect();
    let mut picks = Vec::new();

    for step in 0..selection_limit {
        let Some((index, gain)) = best_candidate(&scores, &pool) else {
            debug!(step, "no remaining intervention improves any domain");
            break;
        };

        let option = pool.remove(index);
        scores.apply(option.domain, gain);
        picks.push(option.id.clone());
    }

    GreedyPlan { scores, picks }
}

/// Largest positive gain wins; ties go to the larger raw impact, then to
/// the earlier catalog entry.
fn best_candidate(
    scores: &WellnessDomainScores,
    pool: &[&IndividualOption],
) -> Option<(usize, i64)> {
    let mut best: Option<(usize, i64, i64)> = None;

    for (index, option) in pool.iter().enumerate() {
        let impact = option.base_impact(OptionKind::Intervention);
        let gain = scores.headroom_gain(option.domain, impact);
        if gain <= 0 {
            continue;
        }

        let better = match best {
            None => true,
            Some((_, best_gain, best_impact)) => {
                gain > best_gain || (gain == best_gain && impact > best_impact)
            }
        };
        if better {
            best = Some((index, gain, impact));
        }
    }

    best.map(|(index, gain, _)| (index, gain))
}
