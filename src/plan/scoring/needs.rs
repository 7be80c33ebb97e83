use std::collections::BTreeSet;

use super::super::domain::{CriticalNeed, ItemId, NeedId};

/// Needs with at least one addressing item in `selected`.
pub fn addressed_needs(needs: &[CriticalNeed], selected: &BTreeSet<ItemId>) -> BTreeSet<NeedId> {
    needs
        .iter()
        .filter(|need| is_addressed(need, selected))
        .map(|need| need.id.clone())
        .collect()
}

/// Needs no selected item addresses, sorted by id.
pub fn unaddressed_needs(needs: &[CriticalNeed], selected: &BTreeSet<ItemId>) -> Vec<NeedId> {
    let missing: BTreeSet<NeedId> = needs
        .iter()
        .filter(|need| !is_addressed(need, selected))
        .map(|need| need.id.clone())
        .collect();
    missing.into_iter().collect()
}

/// Vacuously true for a case without critical needs.
pub fn all_addressed(needs: &[CriticalNeed], selected: &BTreeSet<ItemId>) -> bool {
    needs.iter().all(|need| is_addressed(need, selected))
}

fn is_addressed(need: &CriticalNeed, selected: &BTreeSet<ItemId>) -> bool {
    !need.addressed_by.is_disjoint(selected)
}
