//! Care-plan selections and the pure computations that score them.

pub mod catalog;
pub mod domain;
pub mod scoring;
pub mod selection;
pub mod session;

#[cfg(test)]
mod tests;

pub use catalog::{
    Catalog, CatalogError, CatalogItem, CatalogLookupError, IcfCategory, ItemKind,
};
pub use domain::{
    CriticalNeed, IndividualOption, ItemId, NeedId, OptionKind, PopulationBudget,
    PopulationIntervention, PreventionTier, QualityRating, ResourceCost, ResourceDimension,
    SdohCategory, StrategyType, WellnessDomain, WellnessDomainScores, MAX_DOMAIN_SCORE,
    MIN_DOMAIN_SCORE,
};
pub use scoring::{
    BudgetStatus, CaseConfig, DimensionStatus, PlanError, PlanGrade, PlanPerformance,
    PlanResults, PopulationScore, ResolvedSelection, ScoringEngine,
};
pub use selection::{SelectionError, SelectionLimits, SelectionSnapshot, SelectionState};
pub use session::{PlanSession, PlanState, SessionError};
