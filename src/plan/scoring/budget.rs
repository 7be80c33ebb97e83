use serde::{Deserialize, Serialize};

use super::super::domain::{IndividualOption, PopulationBudget, ResourceCost, ResourceDimension};

const OVERSPEND_TOLERANCE: f64 = 1e-9;

/// Sum the resource cost of every selected intervention and referral.
/// Missing cost components count as zero.
pub fn compute_spent(
    interventions: &[&IndividualOption],
    referrals: &[&IndividualOption],
) -> ResourceCost {
    interventions
        .iter()
        .chain(referrals)
        .map(|option| option.resource_cost())
        .fold(ResourceCost::default(), |spent, cost| spent + cost)
}

pub fn is_over_budget(
    spent: &ResourceCost,
    budget: &PopulationBudget,
    dimension: ResourceDimension,
) -> bool {
    spent.get(dimension) - budget.sanitized().get(dimension) > OVERSPEND_TOLERANCE
}

/// Spend against one ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionStatus {
    pub dimension: ResourceDimension,
    pub spent: f64,
    pub ceiling: f64,
    pub over: bool,
    /// Percentage of the ceiling consumed; zero when the ceiling is zero.
    pub utilization_pct: u32,
}

/// Per-dimension over-budget flags plus the aggregate gate. Blocking
/// submission is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub dimensions: Vec<DimensionStatus>,
    pub any_over: bool,
}

impl BudgetStatus {
    pub fn evaluate(spent: &ResourceCost, budget: Option<&PopulationBudget>) -> Self {
        let dimensions: Vec<DimensionStatus> = ResourceDimension::ordered()
            .into_iter()
            .map(|dimension| {
                let spent_value = spent.get(dimension);
                match budget {
                    Some(budget) => {
                        let ceiling = budget.sanitized().get(dimension);
                        DimensionStatus {
                            dimension,
                            spent: spent_value,
                            ceiling,
                            over: is_over_budget(spent, budget, dimension),
                            utilization_pct: utilization(spent_value, ceiling),
                        }
                    }
                    None => DimensionStatus {
                        dimension,
                        spent: spent_value,
                        ceiling: 0.0,
                        over: false,
                        utilization_pct: 0,
                    },
                }
            })
            .collect();

        let any_over = dimensions.iter().any(|status| status.over);
        Self {
            dimensions,
            any_over,
        }
    }

    pub fn is_over(&self, dimension: ResourceDimension) -> bool {
        self.dimensions
            .iter()
            .any(|status| status.dimension == dimension && status.over)
    }

    pub fn over_dimensions(&self) -> Vec<ResourceDimension> {
        self.dimensions
            .iter()
            .filter(|status| status.over)
            .map(|status| status.dimension)
            .collect()
    }
}

fn utilization(spent: f64, ceiling: f64) -> u32 {
    if ceiling <= 0.0 {
        return 0;
    }
    let pct = (spent / ceiling * 100.0).round();
    if pct.is_finite() {
        pct.clamp(0.0, u32::MAX as f64) as u32
    } else {
        0
    }
}
