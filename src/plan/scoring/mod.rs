mod budget;
mod config;
mod needs;
mod optimizer;
mod population;
mod results;
mod student;

pub use budget::{compute_spent, is_over_budget, BudgetStatus, DimensionStatus};
pub use config::CaseConfig;
pub use needs::{addressed_needs, all_addressed, unaddressed_needs};
pub use optimizer::{compute_max_scores, plan_max_scores, GreedyPlan};
pub use population::{
    compute_population_score, PopulationScore, SDOH_COVERAGE_DENOMINATOR, SUBSCORE_CEILING,
};
pub use results::{PlanGrade, PlanPerformance, PlanResults};
pub use student::{
    compute_student_scores, unsafe_interventions, unsafe_penalty, wellness_gain,
    TARGET_DOMAIN_WEIGHT, UNSAFE_PENALTY_POINTS,
};

use tracing::{info, warn};

use super::catalog::{Catalog, CatalogLookupError, ItemKind};
use super::domain::{IndividualOption, OptionKind, PopulationIntervention};
use super::selection::SelectionSnapshot;

/// Failures that abort results assembly for a submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error(transparent)]
    Lookup(#[from] CatalogLookupError),
}

/// Selection snapshot with every id resolved against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSelection<'a> {
    pub interventions: Vec<&'a IndividualOption>,
    pub referrals: Vec<&'a IndividualOption>,
    pub strategies: Vec<&'a PopulationIntervention>,
}

impl<'a> ResolvedSelection<'a> {
    pub fn resolve(
        catalog: &'a Catalog,
        selection: &SelectionSnapshot,
    ) -> Result<Self, CatalogLookupError> {
        let interventions = selection
            .interventions
            .iter()
            .map(|id| catalog.option(OptionKind::Intervention, id))
            .collect::<Result<Vec<_>, _>>()?;
        let referrals = selection
            .referrals
            .iter()
            .map(|id| catalog.option(OptionKind::Referral, id))
            .collect::<Result<Vec<_>, _>>()?;
        let strategies = selection
            .strategies
            .iter()
            .map(|id| catalog.strategy(id))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            interventions,
            referrals,
            strategies,
        })
    }
}

/// Stateless assembler that applies a case configuration to selection snapshots.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: CaseConfig,
}

impl ScoringEngine {
    pub fn new(config: CaseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CaseConfig {
        &self.config
    }

    /// Spend and over-budget flags for a snapshot, without full scoring.
    pub fn budget_status(
        &self,
        catalog: &Catalog,
        selection: &SelectionSnapshot,
    ) -> Result<BudgetStatus, PlanError> {
        let resolved = ResolvedSelection::resolve(catalog, selection)?;
        let spent = compute_spent(&resolved.interventions, &resolved.referrals);
        Ok(BudgetStatus::evaluate(&spent, self.config.budget.as_ref()))
    }

    /// Score a snapshot. Either every computation succeeds and a complete
    /// `PlanResults` is returned, or nothing is.
    pub fn assemble(
        &self,
        catalog: &Catalog,
        selection: &SelectionSnapshot,
    ) -> Result<PlanResults, PlanError> {
        let resolved = ResolvedSelection::resolve(catalog, selection)?;

        for (kind, count) in selection.over_limit(&self.config.limits) {
            warn!(
                kind = kind.label(),
                count,
                limit = self.config.limits.limit_for(kind),
                "selection exceeds cap, scoring every selected item"
            );
        }

        let baseline = &self.config.baseline;
        let student = student::score_student(
            baseline,
            &resolved.interventions,
            &resolved.referrals,
            &self.config.target_domains,
        );

        let greedy = plan_max_scores(
            baseline,
            &catalog.all_interventions(),
            self.config.limits.limit_for(ItemKind::Intervention),
        );

        let population_score = compute_population_score(&resolved.strategies);

        let spent = compute_spent(&resolved.interventions, &resolved.referrals);
        let budget_status = BudgetStatus::evaluate(&spent, self.config.budget.as_ref());

        let selected_ids = selection.all_ids();
        let critical_needs_addressed = all_addressed(&self.config.critical_needs, &selected_ids);
        let unaddressed_needs = unaddressed_needs(&self.config.critical_needs, &selected_ids);

        let performance = PlanPerformance::measure(
            baseline,
            &student.scores,
            &greedy.scores,
            resolved.interventions.len() + resolved.referrals.len(),
        );

        info!(
            student_gain = performance.student_gain,
            max_gain = performance.max_gain,
            percentage = performance.percentage,
            unsafe_penalty = student.unsafe_penalty,
            critical_needs_addressed,
            over_budget = budget_status.any_over,
            "plan results assembled"
        );

        Ok(PlanResults {
            student: student.scores,
            max: greedy.scores,
            optimal_picks: greedy.picks,
            population_score,
            unsafe_penalty: student.unsafe_penalty,
            unsafe_interventions: student.unsafe_interventions,
            critical_needs_addressed,
            unaddressed_needs,
            budget: self.config.budget.map(|budget| budget.sanitized()),
            spent,
            budget_status,
            wellness_gain: student.wellness_gain,
            performance,
        })
    }
}
