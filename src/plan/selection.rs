use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::catalog::ItemKind;
use super::domain::ItemId;

/// Per-kind caps on how many items a plan may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionLimits {
    pub interventions: usize,
    pub referrals: usize,
    pub strategies: usize,
}

impl SelectionLimits {
    pub fn limit_for(&self, kind: ItemKind) -> usize {
        match kind {
            ItemKind::Intervention => self.interventions,
            ItemKind::Referral => self.referrals,
            ItemKind::Strategy => self.strategies,
        }
    }
}

impl Default for SelectionLimits {
    fn default() -> Self {
        Self {
            interventions: 5,
            referrals: 2,
            strategies: 3,
        }
    }
}

/// Immutable view of what the student has chosen. Only membership matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionSnapshot {
    pub interventions: BTreeSet<ItemId>,
    pub referrals: BTreeSet<ItemId>,
    pub strategies: BTreeSet<ItemId>,
}

impl SelectionSnapshot {
    pub fn new<I, R, S>(interventions: I, referrals: R, strategies: S) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ItemId>,
        R: IntoIterator,
        R::Item: Into<ItemId>,
        S: IntoIterator,
        S::Item: Into<ItemId>,
    {
        Self {
            interventions: interventions.into_iter().map(Into::into).collect(),
            referrals: referrals.into_iter().map(Into::into).collect(),
            strategies: strategies.into_iter().map(Into::into).collect(),
        }
    }

    pub fn ids(&self, kind: ItemKind) -> &BTreeSet<ItemId> {
        match kind {
            ItemKind::Intervention => &self.interventions,
            ItemKind::Referral => &self.referrals,
            ItemKind::Strategy => &self.strategies,
        }
    }

    /// Every selected id regardless of kind.
    pub fn all_ids(&self) -> BTreeSet<ItemId> {
        self.interventions
            .iter()
            .chain(&self.referrals)
            .chain(&self.strategies)
            .cloned()
            .collect()
    }

    /// Kinds whose selection count is above its cap, with the count found.
    pub fn over_limit(&self, limits: &SelectionLimits) -> Vec<(ItemKind, usize)> {
        [ItemKind::Intervention, ItemKind::Referral, ItemKind::Strategy]
            .into_iter()
            .filter_map(|kind| {
                let count = self.ids(kind).len();
                (count > limits.limit_for(kind)).then_some((kind, count))
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.interventions.is_empty() && self.referrals.is_empty() && self.strategies.is_empty()
    }

    fn ids_mut(&mut self, kind: ItemKind) -> &mut BTreeSet<ItemId> {
        match kind {
            ItemKind::Intervention => &mut self.interventions,
            ItemKind::Referral => &mut self.referrals,
            ItemKind::Strategy => &mut self.strategies,
        }
    }
}

/// Errors raised while mutating a selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("cannot select more than {limit} {}(s)", .kind.label())]
    CapReached { kind: ItemKind, limit: usize },
}

/// Mutable selection that refuses to grow past its caps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    limits: SelectionLimits,
    selected: SelectionSnapshot,
}

impl SelectionState {
    pub fn new(limits: SelectionLimits) -> Self {
        Self {
            limits,
            selected: SelectionSnapshot::default(),
        }
    }

    pub fn limits(&self) -> &SelectionLimits {
        &self.limits
    }

    /// Add an item. Returns `false` when it was already selected.
    pub fn select(&mut self, kind: ItemKind, id: ItemId) -> Result<bool, SelectionError> {
        if self.selected.ids(kind).contains(&id) {
            return Ok(false);
        }

        let limit = self.limits.limit_for(kind);
        if self.selected.ids(kind).len() >= limit {
            return Err(SelectionError::CapReached { kind, limit });
        }

        Ok(self.selected.ids_mut(kind).insert(id))
    }

    pub fn deselect(&mut self, kind: ItemKind, id: &ItemId) -> bool {
        self.selected.ids_mut(kind).remove(id)
    }

    /// Flip membership. Returns whether the item is selected afterwards.
    pub fn toggle(&mut self, kind: ItemKind, id: ItemId) -> Result<bool, SelectionError> {
        if self.deselect(kind, &id) {
            return Ok(false);
        }
        self.select(kind, id)?;
        Ok(true)
    }

    pub fn contains(&self, kind: ItemKind, id: &ItemId) -> bool {
        self.selected.ids(kind).contains(id)
    }

    pub fn len(&self, kind: ItemKind) -> usize {
        self.selected.ids(kind).len()
    }

    pub fn remaining(&self, kind: ItemKind) -> usize {
        self.limits.limit_for(kind).saturating_sub(self.len(kind))
    }

    pub fn clear(&mut self) {
        self.selected = SelectionSnapshot::default();
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        self.selected.clone()
    }
}
