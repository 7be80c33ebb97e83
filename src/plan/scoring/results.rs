use serde::{Deserialize, Serialize};

use super::super::domain::{ItemId, NeedId, PopulationBudget, ResourceCost, WellnessDomainScores};
use super::budget::BudgetStatus;
use super::population::PopulationScore;

/// Band a plan falls into by performance percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanGrade {
    Exemplary,
    Proficient,
    Developing,
    Beginning,
}

impl PlanGrade {
    pub const fn from_percentage(percentage: u8) -> Self {
        match percentage {
            90..=u8::MAX => Self::Exemplary,
            70..=89 => Self::Proficient,
            40..=69 => Self::Developing,
            _ => Self::Beginning,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Exemplary => "Exemplary",
            Self::Proficient => "Proficient",
            Self::Developing => "Developing",
            Self::Beginning => "Beginning",
        }
    }
}

/// How the student's plan compares with the greedy ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanPerformance {
    /// Domain points gained over baseline by the student plan.
    pub student_gain: i64,
    /// Domain points gained over baseline by the greedy ceiling.
    pub max_gain: i64,
    pub percentage: u8,
    /// Domain points gained per selected individual item.
    pub efficiency_score: f64,
    pub grade: PlanGrade,
}

impl PlanPerformance {
    pub fn measure(
        baseline: &WellnessDomainScores,
        student: &WellnessDomainScores,
        max: &WellnessDomainScores,
        items_selected: usize,
    ) -> Self {
        let student_gain = student.gain_over(baseline);
        let max_gain = max.gain_over(baseline);

        let percentage = if max_gain > 0 {
            let ratio = student_gain as f64 / max_gain as f64 * 100.0;
            ratio.round().clamp(0.0, 100.0) as u8
        } else {
            0
        };

        let efficiency_score = if items_selected > 0 {
            student_gain as f64 / items_selected as f64
        } else {
            0.0
        };

        Self {
            student_gain,
            max_gain,
            percentage,
            efficiency_score,
            grade: PlanGrade::from_percentage(percentage),
        }
    }
}

/// Outcome of one plan submission. Built once and never mutated; a new
/// submission produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResults {
    pub student: WellnessDomainScores,
    pub max: WellnessDomainScores,
    /// Interventions the greedy ceiling used, in pick order.
    pub optimal_picks: Vec<ItemId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population_score: Option<PopulationScore>,
    pub unsafe_penalty: u32,
    pub unsafe_interventions: Vec<ItemId>,
    pub critical_needs_addressed: bool,
    pub unaddressed_needs: Vec<NeedId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<PopulationBudget>,
    pub spent: ResourceCost,
    pub budget_status: BudgetStatus,
    pub wellness_gain: i64,
    pub performance: PlanPerformance,
}

impl PlanResults {
    /// Plain-language findings for the results view.
    pub fn summary(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "{}% of the achievable improvement ({} of {} domain points, {})",
            self.performance.percentage,
            self.performance.student_gain,
            self.performance.max_gain,
            self.performance.grade.label()
        )];

        if let Some(score) = &self.population_score {
            lines.push(format!("population plan scored {}/100", score.total));
        }

        if !self.unsafe_interventions.is_empty() {
            let ids: Vec<&str> = self.unsafe_interventions.iter().map(ItemId::as_str).collect();
            lines.push(format!(
                "unsafe interventions cost {} points: {}",
                self.unsafe_penalty,
                ids.join(", ")
            ));
        }

        if !self.critical_needs_addressed {
            let ids: Vec<String> = self.unaddressed_needs.iter().map(ToString::to_string).collect();
            lines.push(format!("critical needs left unaddressed: {}", ids.join(", ")));
        }

        for status in self.budget_status.dimensions.iter().filter(|s| s.over) {
            lines.push(format!(
                "{} over budget ({} of {})",
                status.dimension.label(),
                status.spent,
                status.ceiling
            ));
        }

        lines
    }
}
