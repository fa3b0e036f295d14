//! End-to-end resolution behavior over realistic rule sets.

use associations::{Association, AssociationSet, PathInfo};

fn sample_set() -> AssociationSet {
    AssociationSet::from_associations(vec![
        Association::new("Kotlin", r".*\.kt")
            .with_priority(10)
            .with_icon("kotlin.svg"),
        Association::new("Default", ".*")
            .with_priority(100)
            .with_icon("file.svg"),
    ])
}

#[test]
fn specific_rule_beats_catch_all() {
    let set = sample_set();
    let hit = set.find_association(&PathInfo::new("Main.kt")).unwrap();
    assert_eq!(hit.name(), "Kotlin");
    assert_eq!(hit.icon(), "kotlin.svg");
}

#[test]
fn catch_all_takes_everything_else() {
    let set = sample_set();
    let hit = set.find_association(&PathInfo::new("README")).unwrap();
    assert_eq!(hit.name(), "Default");
}

#[test]
fn path_scoped_rule_requires_segment_structure() {
    let set = AssociationSet::from_associations(vec![Association::new(
        "Kotlin sources",
        r"src/.*\.kt",
    )]);
    assert!(
        set.find_association(&PathInfo::new("src/main/kotlin/App.kt"))
            .is_some()
    );
    // Same base name outside src/ does not qualify.
    assert!(set.find_association(&PathInfo::new("docs/App.kt")).is_none());
}

#[test]
fn name_rule_ignores_directory_of_candidate() {
    let set = AssociationSet::from_associations(vec![Association::new("Kotlin", r".*\.kt")]);
    assert!(
        set.find_association(&PathInfo::new("some/other/place/Foo.kt"))
            .is_some()
    );
}

#[test]
fn broken_rule_degrades_to_non_match_without_poisoning_the_set() {
    let set = AssociationSet::from_associations(vec![
        Association::new("Broken", "*.kt").with_priority(1),
        Association::new("Default", ".*").with_priority(100),
    ]);
    let hit = set.find_association(&PathInfo::new("Main.kt")).unwrap();
    assert_eq!(hit.name(), "Default");
}

mod determinism {
    use super::sample_set;
    use associations::PathInfo;
    use proptest::prelude::*;

    proptest! {
        /// Repeated resolution of the same path against the same set always
        /// picks the same winner.
        #[test]
        fn resolve_is_a_pure_function(name in "[A-Za-z0-9._-]{1,24}") {
            let set = sample_set();
            let candidate = PathInfo::new(&name);
            let first = set.find_association(&candidate).map(|r| r.name().to_owned());
            for _ in 0..3 {
                let again = set.find_association(&candidate).map(|r| r.name().to_owned());
                prop_assert_eq!(&again, &first);
            }
        }

        /// Every non-empty candidate is caught by the `.*` fallback, so the
        /// sample set never resolves to `None`.
        #[test]
        fn fallback_is_total(name in "[A-Za-z0-9._-]{1,24}") {
            let set = sample_set();
            prop_assert!(set.find_association(&PathInfo::new(&name)).is_some());
        }
    }
}
