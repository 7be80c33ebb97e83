use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::plan::catalog::{Catalog, IcfCategory};
use crate::plan::domain::{
    CriticalNeed, IndividualOption, ItemId, NeedId, PopulationBudget, PopulationIntervention,
    PreventionTier, QualityRating, ResourceCost, SdohCategory, StrategyType, WellnessDomain,
    WellnessDomainScores,
};
use crate::plan::scoring::{CaseConfig, ScoringEngine};
use crate::plan::selection::SelectionSnapshot;
use crate::plan::session::PlanSession;

pub(super) fn option(id: &str, domain: WellnessDomain, impact: Option<i64>) -> IndividualOption {
    IndividualOption {
        id: ItemId::from(id),
        text: format!("{id} option"),
        domain,
        impact,
        prevention: PreventionTier::Secondary,
        cost: None,
        quality: None,
        rationale: None,
    }
}

pub(super) fn costed(
    mut option: IndividualOption,
    visits: f64,
    clinical_time: f64,
    money: f64,
    effort: f64,
) -> IndividualOption {
    option.cost = Some(ResourceCost {
        visits,
        clinical_time,
        money,
        effort,
    });
    option
}

pub(super) fn rated(mut option: IndividualOption, quality: QualityRating) -> IndividualOption {
    option.quality = Some(quality);
    option
}

pub(super) fn tiered(mut option: IndividualOption, tier: PreventionTier) -> IndividualOption {
    option.prevention = tier;
    option
}

pub(super) fn strategy(
    id: &str,
    strategy_type: StrategyType,
    sdoh_category: SdohCategory,
    prevention: PreventionTier,
    quality: Option<QualityRating>,
) -> PopulationIntervention {
    PopulationIntervention {
        id: ItemId::from(id),
        name: format!("{id} strategy"),
        strategy_type,
        sdoh_category,
        prevention,
        quality,
    }
}

pub(super) fn baseline() -> WellnessDomainScores {
    WellnessDomainScores::from_pairs([
        (WellnessDomain::Physical, 3),
        (WellnessDomain::Emotional, 4),
        (WellnessDomain::Social, 5),
        (WellnessDomain::Intellectual, 6),
        (WellnessDomain::Spiritual, 7),
        (WellnessDomain::Environmental, 5),
        (WellnessDomain::Occupational, 4),
        (WellnessDomain::Financial, 2),
    ])
}

pub(super) fn interventions_by_category() -> BTreeMap<IcfCategory, Vec<IndividualOption>> {
    let mut interventions = BTreeMap::new();
    interventions.insert(
        IcfCategory::HealthCondition,
        vec![rated(
            costed(
                option("hc-pain-mgmt", WellnessDomain::Physical, Some(3)),
                2.0,
                1.5,
                40.0,
                0.0,
            ),
            QualityRating::Good,
        )],
    );
    interventions.insert(
        IcfCategory::BodyFunctions,
        vec![rated(
            tiered(
                costed(
                    option("bf-strength", WellnessDomain::Physical, Some(2)),
                    3.0,
                    0.0,
                    0.0,
                    4.0,
                ),
                PreventionTier::Tertiary,
            ),
            QualityRating::Good,
        )],
    );
    interventions.insert(
        IcfCategory::Activities,
        vec![rated(
            tiered(
                costed(
                    option("act-adl-training", WellnessDomain::Occupational, Some(3)),
                    2.0,
                    2.0,
                    0.0,
                    0.0,
                ),
                PreventionTier::Tertiary,
            ),
            QualityRating::Excellent,
        )],
    );
    interventions.insert(
        IcfCategory::Participation,
        vec![rated(
            tiered(
                costed(
                    option("par-peer-group", WellnessDomain::Social, Some(2)),
                    1.0,
                    0.0,
                    0.0,
                    2.0,
                ),
                PreventionTier::Primary,
            ),
            QualityRating::Ok,
        )],
    );
    interventions.insert(
        IcfCategory::Environmental,
        vec![rated(
            costed(
                option("env-home-mod", WellnessDomain::Environmental, Some(4)),
                0.0,
                0.0,
                250.0,
                0.0,
            ),
            QualityRating::Good,
        )],
    );
    interventions.insert(
        IcfCategory::Personal,
        vec![
            rated(
                costed(
                    option("per-coping", WellnessDomain::Emotional, Some(2)),
                    0.0,
                    1.0,
                    0.0,
                    0.0,
                ),
                QualityRating::Good,
            ),
            rated(
                costed(
                    option("per-sedation", WellnessDomain::Emotional, Some(-2)),
                    0.0,
                    0.0,
                    20.0,
                    0.0,
                ),
                QualityRating::Unsafe,
            ),
            rated(
                option("per-journaling", WellnessDomain::Emotional, None),
                QualityRating::Neutral,
            ),
        ],
    );
    interventions
}

pub(super) fn referrals() -> Vec<IndividualOption> {
    vec![
        costed(
            option("ref-social-work", WellnessDomain::Financial, Some(2)),
            1.0,
            1.0,
            0.0,
            0.0,
        ),
        costed(
            option("ref-nutrition", WellnessDomain::Physical, None),
            0.0,
            0.0,
            30.0,
            0.0,
        ),
        option("ref-pt", WellnessDomain::Physical, Some(2)),
    ]
}

pub(super) fn strategies() -> Vec<PopulationIntervention> {
    vec![
        strategy(
            "pop-transit-policy",
            StrategyType::Policy,
            SdohCategory::Transportation,
            PreventionTier::Primary,
            Some(QualityRating::Excellent),
        ),
        strategy(
            "pop-food-bank",
            StrategyType::Community,
            SdohCategory::FoodSecurity,
            PreventionTier::Secondary,
            Some(QualityRating::Good),
        ),
        strategy(
            "pop-clinic-screen",
            StrategyType::Screening,
            SdohCategory::HealthcareAccess,
            PreventionTier::Secondary,
            Some(QualityRating::Ok),
        ),
        strategy(
            "pop-housing-advocacy",
            StrategyType::Advocacy,
            SdohCategory::HousingStability,
            PreventionTier::Tertiary,
            Some(QualityRating::Good),
        ),
        strategy(
            "pop-health-ed",
            StrategyType::Education,
            SdohCategory::EducationAccess,
            PreventionTier::Primary,
            None,
        ),
    ]
}

pub(super) fn catalog() -> Catalog {
    Catalog::new(interventions_by_category(), referrals(), strategies())
        .expect("fixture catalog has unique ids")
}

pub(super) fn budget() -> PopulationBudget {
    ResourceCost {
        visits: 8.0,
        clinical_time: 5.0,
        money: 300.0,
        effort: 6.0,
    }
}

pub(super) fn need(id: &str, addressed_by: &[&str]) -> CriticalNeed {
    CriticalNeed {
        id: NeedId::from(id),
        category: "Safety".to_string(),
        description: format!("{id} must be addressed"),
        addressed_by: addressed_by.iter().map(|item| ItemId::from(*item)).collect(),
    }
}

pub(super) fn case_config() -> CaseConfig {
    CaseConfig::new(baseline())
        .with_target_domains([WellnessDomain::Physical])
        .with_budget(budget())
        .with_critical_needs(vec![
            need("n-mobility", &["hc-pain-mgmt", "bf-strength", "ref-pt"]),
            need("n-finances", &["ref-social-work", "pop-food-bank"]),
        ])
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(case_config())
}

pub(super) fn session() -> PlanSession {
    PlanSession::new(Arc::new(engine()), Arc::new(catalog()))
}

/// Interventions, referrals, and strategies making up a sound plan.
pub(super) fn balanced_selection() -> SelectionSnapshot {
    SelectionSnapshot::new(
        ["hc-pain-mgmt", "per-coping"],
        ["ref-social-work"],
        ["pop-transit-policy", "pop-food-bank"],
    )
}

pub(super) fn ids(values: &[&str]) -> BTreeSet<ItemId> {
    values.iter().map(|value| ItemId::from(*value)).collect()
}
