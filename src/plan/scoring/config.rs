use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::super::domain::{CriticalNeed, PopulationBudget, WellnessDomain, WellnessDomainScores};
use super::super::selection::SelectionLimits;

/// Per-case scoring configuration: where the patient starts, what matters
/// most, and what the plan may spend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseConfig {
    pub baseline: WellnessDomainScores,
    /// Domains whose interventions count double.
    #[serde(default)]
    pub target_domains: BTreeSet<WellnessDomain>,
    #[serde(default)]
    pub budget: Option<PopulationBudget>,
    #[serde(default)]
    pub critical_needs: Vec<CriticalNeed>,
    #[serde(default)]
    pub limits: SelectionLimits,
}

impl CaseConfig {
    pub fn new(baseline: WellnessDomainScores) -> Self {
        Self {
            baseline,
            target_domains: BTreeSet::new(),
            budget: None,
            critical_needs: Vec::new(),
            limits: SelectionLimits::default(),
        }
    }

    pub fn with_target_domains<I>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = WellnessDomain>,
    {
        self.target_domains = domains.into_iter().collect();
        self
    }

    pub fn with_budget(mut self, budget: PopulationBudget) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn with_critical_needs(mut self, needs: Vec<CriticalNeed>) -> Self {
        self.critical_needs = needs;
        self
    }

    pub fn with_limits(mut self, limits: SelectionLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
