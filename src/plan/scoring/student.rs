use std::collections::BTreeSet;

use super::super::domain::{
    IndividualOption, ItemId, OptionKind, WellnessDomain, WellnessDomainScores,
};

/// Multiplier applied to impacts landing in a target domain.
pub const TARGET_DOMAIN_WEIGHT: i64 = 2;
/// Penalty reported per unsafe intervention.
pub const UNSAFE_PENALTY_POINTS: u32 = 10;

pub(crate) struct StudentSignals {
    pub scores: WellnessDomainScores,
    pub unsafe_penalty: u32,
    pub unsafe_interventions: Vec<ItemId>,
    pub wellness_gain: i64,
}

/// Apply every selected item to the baseline. Each step clamps the touched
/// domain before the next item is applied.
pub fn compute_student_scores(
    baseline: &WellnessDomainScores,
    interventions: &[&IndividualOption],
    referrals: &[&IndividualOption],
    target_domains: &BTreeSet<WellnessDomain>,
) -> WellnessDomainScores {
    let mut scores = *baseline;

    let applied = interventions
        .iter()
        .map(|option| (*option, OptionKind::Intervention))
        .chain(referrals.iter().map(|option| (*option, OptionKind::Referral)));

    for (option, kind) in applied {
        let weight = if target_domains.contains(&option.domain) {
            TARGET_DOMAIN_WEIGHT
        } else {
            1
        };
        scores.apply(option.domain, option.base_impact(kind).saturating_mul(weight));
    }

    scores
}

/// Ids of interventions rated unsafe. Referrals are not penalised.
pub fn unsafe_interventions(interventions: &[&IndividualOption]) -> Vec<ItemId> {
    interventions
        .iter()
        .filter(|option| option.is_unsafe())
        .map(|option| option.id.clone())
        .collect()
}

pub fn unsafe_penalty(unsafe_count: usize) -> u32 {
    UNSAFE_PENALTY_POINTS.saturating_mul(u32::try_from(unsafe_count).unwrap_or(u32::MAX))
}

/// Unweighted sum of the impacts the plan carries, saturating at the `i64` bounds.
pub fn wellness_gain(interventions: &[&IndividualOption], referrals: &[&IndividualOption]) -> i64 {
    interventions
        .iter()
        .map(|option| option.base_impact(OptionKind::Intervention))
        .chain(
            referrals
                .iter()
                .map(|option| option.base_impact(OptionKind::Referral)),
        )
        .fold(0, i64::saturating_add)
}

pub(crate) fn score_student(
    baseline: &WellnessDomainScores,
    interventions: &[&IndividualOption],
    referrals: &[&IndividualOption],
    target_domains: &BTreeSet<WellnessDomain>,
) -> StudentSignals {
    let scores = compute_student_scores(baseline, interventions, referrals, target_domains);
    let unsafe_interventions = unsafe_interventions(interventions);
    let unsafe_penalty = unsafe_penalty(unsafe_interventions.len());

    StudentSignals {
        scores,
        unsafe_penalty,
        unsafe_interventions,
        wellness_gain: wellness_gain(interventions, referrals),
    }
}
