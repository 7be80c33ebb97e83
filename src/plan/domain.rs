use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Lowest score a wellness domain can hold.
pub const MIN_DOMAIN_SCORE: u8 = 1;
/// Highest score a wellness domain can hold.
pub const MAX_DOMAIN_SCORE: u8 = 10;

/// Identifier wrapper for catalog items (interventions, referrals, strategies).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Identifier wrapper for the mandatory needs of a case.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NeedId(pub String);

impl fmt::Display for NeedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NeedId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// The eight fixed wellness domains every patient is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WellnessDomain {
    Physical,
    Emotional,
    Social,
    Intellectual,
    Spiritual,
    Environmental,
    Occupational,
    Financial,
}

impl WellnessDomain {
    pub const COUNT: usize = 8;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Physical,
            Self::Emotional,
            Self::Social,
            Self::Intellectual,
            Self::Spiritual,
            Self::Environmental,
            Self::Occupational,
            Self::Financial,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Physical => "Physical",
            Self::Emotional => "Emotional",
            Self::Social => "Social",
            Self::Intellectual => "Intellectual",
            Self::Spiritual => "Spiritual",
            Self::Environmental => "Environmental",
            Self::Occupational => "Occupational",
            Self::Financial => "Financial",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Score per wellness domain. Every domain is always present and always
/// within `MIN_DOMAIN_SCORE..=MAX_DOMAIN_SCORE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<WellnessDomain, i64>",
    into = "BTreeMap<WellnessDomain, u8>"
)]
pub struct WellnessDomainScores {
    scores: [u8; WellnessDomain::COUNT],
}

impl WellnessDomainScores {
    /// Every domain set to the same value (clamped).
    pub fn uniform(value: i64) -> Self {
        Self {
            scores: [clamp_score(value); WellnessDomain::COUNT],
        }
    }

    /// Build from explicit pairs; unlisted domains sit at the floor and
    /// out-of-range values are clamped.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (WellnessDomain, i64)>,
    {
        let mut scores = Self::uniform(MIN_DOMAIN_SCORE as i64);
        for (domain, value) in pairs {
            scores.set(domain, value);
        }
        scores
    }

    pub fn get(&self, domain: WellnessDomain) -> u8 {
        self.scores[domain.index()]
    }

    pub fn set(&mut self, domain: WellnessDomain, value: i64) {
        self.scores[domain.index()] = clamp_score(value);
    }

    /// Add `delta` to one domain and clamp immediately.
    pub fn apply(&mut self, domain: WellnessDomain, delta: i64) {
        let current = self.get(domain) as i64;
        self.set(domain, current.saturating_add(delta));
    }

    /// Points `delta` would actually add to `domain` before saturating at the ceiling.
    pub fn headroom_gain(&self, domain: WellnessDomain, delta: i64) -> i64 {
        let current = self.get(domain) as i64;
        current.saturating_add(delta).min(MAX_DOMAIN_SCORE as i64) - current
    }

    pub fn iter(&self) -> impl Iterator<Item = (WellnessDomain, u8)> + '_ {
        WellnessDomain::ordered()
            .into_iter()
            .map(move |domain| (domain, self.get(domain)))
    }

    pub fn total(&self) -> u32 {
        self.scores.iter().map(|score| *score as u32).sum()
    }

    /// Signed sum of per-domain differences against `baseline`.
    pub fn gain_over(&self, baseline: &WellnessDomainScores) -> i64 {
        self.total() as i64 - baseline.total() as i64
    }
}

impl Default for WellnessDomainScores {
    fn default() -> Self {
        Self::uniform(MIN_DOMAIN_SCORE as i64)
    }
}

impl From<BTreeMap<WellnessDomain, i64>> for WellnessDomainScores {
    fn from(raw: BTreeMap<WellnessDomain, i64>) -> Self {
        for (domain, value) in &raw {
            if !(MIN_DOMAIN_SCORE as i64..=MAX_DOMAIN_SCORE as i64).contains(value) {
                tracing::warn!(?domain, value, "domain score outside range, clamping");
            }
        }
        Self::from_pairs(raw)
    }
}

impl From<WellnessDomainScores> for BTreeMap<WellnessDomain, u8> {
    fn from(scores: WellnessDomainScores) -> Self {
        scores.iter().collect()
    }
}

fn clamp_score(value: i64) -> u8 {
    value.clamp(MIN_DOMAIN_SCORE as i64, MAX_DOMAIN_SCORE as i64) as u8
}

/// Prevention tier of an intervention or strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PreventionTier {
    Primary,
    Secondary,
    Tertiary,
}

impl PreventionTier {
    pub const COUNT: usize = 3;

    pub const fn label(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Tertiary => "Tertiary",
        }
    }
}

/// Six-point ordinal quality scale, worst first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QualityRating {
    Unsafe,
    Poor,
    Neutral,
    #[serde(rename = "OK")]
    Ok,
    Good,
    Excellent,
}

impl QualityRating {
    /// Points awarded on the 0-25 population quality scale.
    pub const fn points(self) -> u32 {
        match self {
            Self::Unsafe => 0,
            Self::Poor => 5,
            Self::Neutral => 10,
            Self::Ok => 15,
            Self::Good => 20,
            Self::Excellent => 25,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Unsafe => "Unsafe",
            Self::Poor => "Poor",
            Self::Neutral => "Neutral",
            Self::Ok => "OK",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

/// Kind of population-level strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrategyType {
    Policy,
    Community,
    Advocacy,
    Education,
    Screening,
}

impl StrategyType {
    pub const COUNT: usize = 5;

    pub const fn label(self) -> &'static str {
        match self {
            Self::Policy => "Policy",
            Self::Community => "Community",
            Self::Advocacy => "Advocacy",
            Self::Education => "Education",
            Self::Screening => "Screening",
        }
    }
}

/// Social determinant of health a population strategy targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SdohCategory {
    #[serde(rename = "Economic Stability")]
    EconomicStability,
    #[serde(rename = "Education Access")]
    EducationAccess,
    #[serde(rename = "Healthcare Access")]
    HealthcareAccess,
    #[serde(rename = "Neighborhood & Built Environment")]
    NeighborhoodEnvironment,
    #[serde(rename = "Social & Community Context")]
    SocialCommunity,
    #[serde(rename = "Food Security")]
    FoodSecurity,
    #[serde(rename = "Housing Stability")]
    HousingStability,
    Transportation,
    #[serde(rename = "Interpersonal Safety")]
    InterpersonalSafety,
}

impl SdohCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::EconomicStability => "Economic Stability",
            Self::EducationAccess => "Education Access",
            Self::HealthcareAccess => "Healthcare Access",
            Self::NeighborhoodEnvironment => "Neighborhood & Built Environment",
            Self::SocialCommunity => "Social & Community Context",
            Self::FoodSecurity => "Food Security",
            Self::HousingStability => "Housing Stability",
            Self::Transportation => "Transportation",
            Self::InterpersonalSafety => "Interpersonal Safety",
        }
    }
}

/// The four resource dimensions a plan consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceDimension {
    Visits,
    ClinicalTime,
    Money,
    Effort,
}

impl ResourceDimension {
    pub const fn ordered() -> [Self; 4] {
        [Self::Visits, Self::ClinicalTime, Self::Money, Self::Effort]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Visits => "Visits",
            Self::ClinicalTime => "Clinical Time",
            Self::Money => "Money",
            Self::Effort => "Effort",
        }
    }
}

/// Resource consumption (or ceiling) across the four dimensions. Absent
/// fields deserialize as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceCost {
    pub visits: f64,
    pub clinical_time: f64,
    pub money: f64,
    pub effort: f64,
}

/// Budget ceilings share the shape of a cost.
pub type PopulationBudget = ResourceCost;

impl ResourceCost {
    pub fn get(&self, dimension: ResourceDimension) -> f64 {
        match dimension {
            ResourceDimension::Visits => self.visits,
            ResourceDimension::ClinicalTime => self.clinical_time,
            ResourceDimension::Money => self.money,
            ResourceDimension::Effort => self.effort,
        }
    }

    /// Negative or non-finite components become zero.
    pub fn sanitized(self) -> Self {
        fn component(value: f64) -> f64 {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                0.0
            }
        }

        Self {
            visits: component(self.visits),
            clinical_time: component(self.clinical_time),
            money: component(self.money),
            effort: component(self.effort),
        }
    }
}

impl Add for ResourceCost {
    type Output = ResourceCost;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            visits: self.visits + rhs.visits,
            clinical_time: self.clinical_time + rhs.clinical_time,
            money: self.money + rhs.money,
            effort: self.effort + rhs.effort,
        }
    }
}

impl AddAssign for ResourceCost {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Individual-level item kinds. They share a shape but differ in catalog,
/// cap, and fallback impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OptionKind {
    Intervention,
    Referral,
}

impl OptionKind {
    /// Impact applied when the catalog entry carries none.
    pub const fn default_impact(self) -> i64 {
        match self {
            Self::Intervention => 2,
            Self::Referral => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Intervention => "intervention",
            Self::Referral => "referral",
        }
    }
}

/// An individual intervention or referral a student can add to the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualOption {
    pub id: ItemId,
    pub text: String,
    pub domain: WellnessDomain,
    /// Negative values model harmful choices.
    #[serde(default)]
    pub impact: Option<i64>,
    pub prevention: PreventionTier,
    #[serde(default)]
    pub cost: Option<ResourceCost>,
    #[serde(default)]
    pub quality: Option<QualityRating>,
    #[serde(default)]
    pub rationale: Option<String>,
}

impl IndividualOption {
    pub fn base_impact(&self, kind: OptionKind) -> i64 {
        self.impact.unwrap_or(kind.default_impact())
    }

    pub fn is_unsafe(&self) -> bool {
        self.quality == Some(QualityRating::Unsafe)
    }

    pub fn resource_cost(&self) -> ResourceCost {
        self.cost.map(ResourceCost::sanitized).unwrap_or_default()
    }
}

/// A population-level strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationIntervention {
    pub id: ItemId,
    pub name: String,
    pub strategy_type: StrategyType,
    pub sdoh_category: SdohCategory,
    pub prevention: PreventionTier,
    #[serde(default)]
    pub quality: Option<QualityRating>,
}

/// A mandatory need of the case, satisfied by any one of `addressed_by`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalNeed {
    pub id: NeedId,
    pub category: String,
    pub description: String,
    pub addressed_by: BTreeSet<ItemId>,
}
