use std::collections::HashMap;

use sam_core::TextPredicate;
use sam_core::registry::{self, REALIZATIONS, RealizationId};

#[test]
fn realization_names_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, RealizationId> = HashMap::new();

    for info in REALIZATIONS {
        assert_eq!(
            registry::from_str(info.canonical),
            Some(info.id),
            "realization name not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            registry::as_str(info.id),
            info.canonical,
            "realization as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!("duplicate realization name {:?}: {:?} and {:?}", info.canonical, prev, info.id);
        }
    }
}

#[test]
fn constructed_realizations_follow_registry_order() {
    let constructed = sam_core::realizations();
    let ids: Vec<RealizationId> = constructed.iter().map(|(id, _)| *id).collect();
    let registered: Vec<RealizationId> = REALIZATIONS.iter().map(|info| info.id).collect();
    assert_eq!(ids, registered);
}

#[test]
fn constructed_realizations_agree_with_summaries() {
    for (id, pred) in sam_core::realizations() {
        let verdict = pred.test("Apple");
        match id {
            RealizationId::AlwaysFalse => assert!(!verdict),
            RealizationId::StartsWithA => assert!(verdict),
        }
        assert!(!pred.test(""), "{} accepted empty text", registry::as_str(id));
    }
}
