use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::{IndividualOption, ItemId, OptionKind, PopulationIntervention};

/// ICF grouping under which individual interventions are published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IcfCategory {
    #[serde(rename = "Health Condition")]
    HealthCondition,
    #[serde(rename = "Body Functions")]
    BodyFunctions,
    Activities,
    Participation,
    Environmental,
    Personal,
}

impl IcfCategory {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::HealthCondition,
            Self::BodyFunctions,
            Self::Activities,
            Self::Participation,
            Self::Environmental,
            Self::Personal,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HealthCondition => "Health Condition",
            Self::BodyFunctions => "Body Functions",
            Self::Activities => "Activities",
            Self::Participation => "Participation",
            Self::Environmental => "Environmental",
            Self::Personal => "Personal",
        }
    }
}

/// Which part of the catalog an identifier was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Intervention,
    Referral,
    Strategy,
}

impl ItemKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Intervention => "intervention",
            Self::Referral => "referral",
            Self::Strategy => "population strategy",
        }
    }
}

impl From<OptionKind> for ItemKind {
    fn from(kind: OptionKind) -> Self {
        match kind {
            OptionKind::Intervention => Self::Intervention,
            OptionKind::Referral => Self::Referral,
        }
    }
}

/// Raised when a selected identifier has no catalog entry of the expected kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no {} with id '{id}' in the case catalog", .kind.label())]
pub struct CatalogLookupError {
    pub kind: ItemKind,
    pub id: ItemId,
}

/// Structural problems found while building a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog id '{0}' is used by more than one item")]
    DuplicateId(ItemId),
    #[error("catalog JSON is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A resolved catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CatalogItem<'a> {
    Intervention(&'a IndividualOption),
    Referral(&'a IndividualOption),
    Strategy(&'a PopulationIntervention),
}

impl CatalogItem<'_> {
    pub fn kind(&self) -> ItemKind {
        match self {
            CatalogItem::Intervention(_) => ItemKind::Intervention,
            CatalogItem::Referral(_) => ItemKind::Referral,
            CatalogItem::Strategy(_) => ItemKind::Strategy,
        }
    }
}

/// Read-only collections of everything a student may select for a case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CatalogData")]
pub struct Catalog {
    interventions: BTreeMap<IcfCategory, Vec<IndividualOption>>,
    referrals: Vec<IndividualOption>,
    strategies: Vec<PopulationIntervention>,
}

/// Wire shape of a catalog before id validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CatalogData {
    interventions: BTreeMap<IcfCategory, Vec<IndividualOption>>,
    referrals: Vec<IndividualOption>,
    strategies: Vec<PopulationIntervention>,
}

impl TryFrom<CatalogData> for Catalog {
    type Error = CatalogError;

    fn try_from(data: CatalogData) -> Result<Self, Self::Error> {
        Catalog::new(data.interventions, data.referrals, data.strategies)
    }
}

impl Catalog {
    /// Build a catalog, rejecting ids that appear more than once across all kinds.
    pub fn new(
        interventions: BTreeMap<IcfCategory, Vec<IndividualOption>>,
        referrals: Vec<IndividualOption>,
        strategies: Vec<PopulationIntervention>,
    ) -> Result<Self, CatalogError> {
        ensure_unique_ids(&interventions, &referrals, &strategies)?;

        Ok(Self {
            interventions,
            referrals,
            strategies,
        })
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(raw)?;
        Self::try_from(data)
    }

    pub fn interventions_in(&self, category: IcfCategory) -> &[IndividualOption] {
        self.interventions
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every intervention across all ICF categories, in category order.
    pub fn all_interventions(&self) -> Vec<&IndividualOption> {
        IcfCategory::ordered()
            .into_iter()
            .flat_map(|category| self.interventions_in(category))
            .collect()
    }

    pub fn referrals(&self) -> &[IndividualOption] {
        &self.referrals
    }

    pub fn strategies(&self) -> &[PopulationIntervention] {
        &self.strategies
    }

    /// Resolve an id against every part of the catalog.
    pub fn lookup(&self, id: &ItemId) -> Option<CatalogItem<'_>> {
        if let Some(option) = self.interventions.values().flatten().find(|o| &o.id == id) {
            return Some(CatalogItem::Intervention(option));
        }
        if let Some(option) = self.referrals.iter().find(|o| &o.id == id) {
            return Some(CatalogItem::Referral(option));
        }
        self.strategies
            .iter()
            .find(|s| &s.id == id)
            .map(CatalogItem::Strategy)
    }

    pub fn option(
        &self,
        kind: OptionKind,
        id: &ItemId,
    ) -> Result<&IndividualOption, CatalogLookupError> {
        match (kind, self.lookup(id)) {
            (OptionKind::Intervention, Some(CatalogItem::Intervention(option)))
            | (OptionKind::Referral, Some(CatalogItem::Referral(option))) => Ok(option),
            _ => Err(missing(kind.into(), id)),
        }
    }

    pub fn strategy(&self, id: &ItemId) -> Result<&PopulationIntervention, CatalogLookupError> {
        match self.lookup(id) {
            Some(CatalogItem::Strategy(strategy)) => Ok(strategy),
            _ => Err(missing(ItemKind::Strategy, id)),
        }
    }
}

fn ensure_unique_ids(
    interventions: &BTreeMap<IcfCategory, Vec<IndividualOption>>,
    referrals: &[IndividualOption],
    strategies: &[PopulationIntervention],
) -> Result<(), CatalogError> {
    let mut seen = BTreeSet::new();
    let ids = interventions
        .values()
        .flatten()
        .chain(referrals)
        .map(|option| &option.id)
        .chain(strategies.iter().map(|strategy| &strategy.id));
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId(id.clone()));
        }
    }
    Ok(())
}

fn missing(kind: ItemKind, id: &ItemId) -> CatalogLookupError {
    warn!(kind = kind.label(), %id, "catalog lookup failed");
    CatalogLookupError {
        kind,
        id: id.clone(),
    }
}
