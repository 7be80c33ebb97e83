use std::sync::Arc;

use tracing::debug;

use super::catalog::{Catalog, CatalogLookupError, ItemKind};
use super::domain::{ItemId, OptionKind, ResourceDimension};
use super::scoring::{BudgetStatus, PlanError, PlanResults, ScoringEngine};
use super::selection::{SelectionError, SelectionState};

/// Lifecycle of a plan: built up, submitted, optionally reopened.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanState {
    Building,
    Submitted(PlanResults),
}

impl PlanState {
    pub fn label(&self) -> &'static str {
        match self {
            PlanState::Building => "building",
            PlanState::Submitted(_) => "submitted",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("plan is submitted; modify it before changing selections")]
    PlanLocked,
    #[error("plan exceeds the budget on: {}", format_dimensions(.dimensions))]
    OverBudget { dimensions: Vec<ResourceDimension> },
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Lookup(#[from] CatalogLookupError),
    #[error(transparent)]
    Plan(#[from] PlanError),
}

fn format_dimensions(dimensions: &[ResourceDimension]) -> String {
    dimensions
        .iter()
        .map(|dimension| dimension.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Controller pairing a cap-enforcing selection with the scoring engine.
pub struct PlanSession {
    engine: Arc<ScoringEngine>,
    catalog: Arc<Catalog>,
    selection: SelectionState,
    state: PlanState,
}

impl PlanSession {
    pub fn new(engine: Arc<ScoringEngine>, catalog: Arc<Catalog>) -> Self {
        let selection = SelectionState::new(engine.config().limits);
        Self {
            engine,
            catalog,
            selection,
            state: PlanState::Building,
        }
    }

    pub fn state(&self) -> &PlanState {
        &self.state
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn results(&self) -> Option<&PlanResults> {
        match &self.state {
            PlanState::Submitted(results) => Some(results),
            PlanState::Building => None,
        }
    }

    /// Add a catalog item to the plan. Unknown ids are rejected up front.
    pub fn select(&mut self, kind: ItemKind, id: ItemId) -> Result<bool, SessionError> {
        self.ensure_building()?;
        self.ensure_known(kind, &id)?;
        Ok(self.selection.select(kind, id)?)
    }

    pub fn deselect(&mut self, kind: ItemKind, id: &ItemId) -> Result<bool, SessionError> {
        self.ensure_building()?;
        Ok(self.selection.deselect(kind, id))
    }

    pub fn toggle(&mut self, kind: ItemKind, id: ItemId) -> Result<bool, SessionError> {
        self.ensure_building()?;
        self.ensure_known(kind, &id)?;
        Ok(self.selection.toggle(kind, id)?)
    }

    /// Live spend preview for the current selection.
    pub fn budget_status(&self) -> Result<BudgetStatus, SessionError> {
        Ok(self
            .engine
            .budget_status(&self.catalog, &self.selection.snapshot())?)
    }

    /// Score the current selection. Refused while over budget.
    pub fn submit(&mut self) -> Result<PlanResults, SessionError> {
        self.ensure_building()?;

        let snapshot = self.selection.snapshot();
        let status = self.engine.budget_status(&self.catalog, &snapshot)?;
        if status.any_over {
            return Err(SessionError::OverBudget {
                dimensions: status.over_dimensions(),
            });
        }

        let results = self.engine.assemble(&self.catalog, &snapshot)?;
        debug!(from = self.state.label(), to = "submitted", "plan state change");
        self.state = PlanState::Submitted(results.clone());
        Ok(results)
    }

    /// Reopen a submitted plan, keeping its selections.
    pub fn modify(&mut self) {
        if matches!(self.state, PlanState::Submitted(_)) {
            debug!(from = self.state.label(), to = "building", "plan state change");
        }
        self.state = PlanState::Building;
    }

    fn ensure_building(&self) -> Result<(), SessionError> {
        match self.state {
            PlanState::Building => Ok(()),
            PlanState::Submitted(_) => Err(SessionError::PlanLocked),
        }
    }

    fn ensure_known(&self, kind: ItemKind, id: &ItemId) -> Result<(), CatalogLookupError> {
        match kind {
            ItemKind::Intervention => self
                .catalog
                .option(OptionKind::Intervention, id)
                .map(|_| ()),
            ItemKind::Referral => self.catalog.option(OptionKind::Referral, id).map(|_| ()),
            ItemKind::Strategy => self.catalog.strategy(id).map(|_| ()),
        }
    }
}
