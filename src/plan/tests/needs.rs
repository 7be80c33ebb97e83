use super::common::*;
use crate::plan::domain::NeedId;
use crate::plan::scoring::{addressed_needs, all_addressed, unaddressed_needs};

#[test]
fn need_is_met_by_any_listed_item() {
    let needs = vec![need("n1", &["i1", "i2"])];

    assert!(!all_addressed(&needs, &ids(&["i3"])));
    assert!(all_addressed(&needs, &ids(&["i3", "i1"])));
}

#[test]
fn no_needs_is_vacuously_addressed() {
    assert!(all_addressed(&[], &ids(&[])));
    assert!(addressed_needs(&[], &ids(&["i1"])).is_empty());
}

#[test]
fn reports_addressed_and_missing_needs() {
    let needs = vec![
        need("n-housing", &["ref-housing"]),
        need("n-food", &["pop-food-bank", "ref-nutrition"]),
        need("n-meds", &["hc-med-review"]),
    ];
    let selected = ids(&["ref-nutrition", "hc-other"]);

    let addressed = addressed_needs(&needs, &selected);
    let missing = unaddressed_needs(&needs, &selected);

    assert_eq!(addressed.len(), 1);
    assert!(addressed.contains(&NeedId::from("n-food")));
    assert_eq!(
        missing,
        vec![NeedId::from("n-housing"), NeedId::from("n-meds")]
    );
    assert!(!all_addressed(&needs, &selected));
}
