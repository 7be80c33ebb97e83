use super::common::*;
use crate::plan::catalog::{Catalog, CatalogError, CatalogItem, IcfCategory, ItemKind};
use crate::plan::domain::{
    ItemId, OptionKind, QualityRating, SdohCategory, StrategyType, WellnessDomain,
};

#[test]
fn lookup_reports_the_item_kind() {
    let catalog = catalog();

    let found = catalog
        .lookup(&ItemId::from("ref-pt"))
        .expect("referral present");
    assert_eq!(found.kind(), ItemKind::Referral);

    match catalog.lookup(&ItemId::from("pop-food-bank")) {
        Some(CatalogItem::Strategy(strategy)) => {
            assert_eq!(strategy.id, ItemId::from("pop-food-bank"))
        }
        other => panic!("expected strategy, got {other:?}"),
    }
    assert!(catalog.lookup(&ItemId::from("missing")).is_none());
}

#[test]
fn option_lookup_checks_kind() {
    let catalog = catalog();

    let option = catalog
        .option(OptionKind::Intervention, &ItemId::from("per-coping"))
        .expect("intervention present");
    assert_eq!(option.domain, WellnessDomain::Emotional);

    let err = catalog
        .option(OptionKind::Referral, &ItemId::from("per-coping"))
        .expect_err("interventions are not referrals");
    assert_eq!(err.kind, ItemKind::Referral);
    assert_eq!(
        err.to_string(),
        "no referral with id 'per-coping' in the case catalog"
    );
}

#[test]
fn interventions_flatten_in_category_order() {
    let catalog = catalog();

    let ids: Vec<&str> = catalog
        .all_interventions()
        .iter()
        .map(|option| option.id.as_str())
        .collect();

    assert_eq!(ids.first(), Some(&"hc-pain-mgmt"));
    assert_eq!(ids.len(), 8);
    assert_eq!(
        &ids[5..],
        &["per-coping", "per-sedation", "per-journaling"]
    );
    assert_eq!(catalog.interventions_in(IcfCategory::Environmental).len(), 1);
}

#[test]
fn duplicate_ids_across_kinds_are_rejected() {
    let mut referrals = referrals();
    referrals[0].id = ItemId::from("bf-strength");

    match Catalog::new(interventions_by_category(), referrals, strategies()) {
        Err(CatalogError::DuplicateId(id)) => assert_eq!(id, ItemId::from("bf-strength")),
        other => panic!("expected duplicate id, got {other:?}"),
    }
}

#[test]
fn malformed_json_is_reported() {
    match Catalog::from_json_str(r#"{"interventions": {"unknown_category": []}}"#) {
        Err(CatalogError::Malformed(_)) => {}
        other => panic!("expected malformed catalog, got {other:?}"),
    }
}

#[test]
fn empty_catalog_json_is_valid() {
    let catalog = Catalog::from_json_str("{}").expect("all sections default");
    assert!(catalog.all_interventions().is_empty());
    assert!(catalog.referrals().is_empty());
    assert!(catalog.strategies().is_empty());
}

#[test]
fn catalog_reads_published_spellings() {
    let raw = r#"{
        "interventions": {
            "Body Functions": [
                {
                    "id": "bf-balance",
                    "text": "Balance retraining",
                    "domain": "Physical",
                    "impact": 2,
                    "prevention": "Primary",
                    "quality": "OK",
                    "cost": { "clinicalTime": 2 }
                }
            ]
        },
        "strategies": [
            {
                "id": "pop-mobile-clinic",
                "name": "Mobile clinic",
                "strategyType": "Screening",
                "sdohCategory": "Healthcare Access",
                "prevention": "Secondary",
                "quality": "Unsafe"
            }
        ]
    }"#;

    let catalog = Catalog::from_json_str(raw).expect("published shape parses");

    let balance = catalog
        .option(OptionKind::Intervention, &ItemId::from("bf-balance"))
        .expect("intervention present");
    assert_eq!(balance.quality, Some(QualityRating::Ok));
    assert_eq!(balance.resource_cost().clinical_time, 2.0);

    let clinic = catalog
        .strategy(&ItemId::from("pop-mobile-clinic"))
        .expect("strategy present");
    assert_eq!(clinic.strategy_type, StrategyType::Screening);
    assert_eq!(clinic.sdoh_category, SdohCategory::HealthcareAccess);
    assert_eq!(clinic.quality, Some(QualityRating::Unsafe));
}
