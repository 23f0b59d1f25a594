//! Property-based tests for the class registry invariants.

use labdash_core::{ClassFields, ClassRegistry, RegistryError};
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Rename(usize, String),
    Delete(usize),
}

fn name() -> impl Strategy<Value = String> {
    // A small alphabet with mixed case makes case-only collisions common.
    "[aAbB]{1,3}"
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        name().prop_map(Op::Add),
        (0usize..8, name()).prop_map(|(i, n)| Op::Rename(i, n)),
        (0usize..8).prop_map(Op::Delete),
    ]
}

fn fields(name: &str) -> ClassFields {
    ClassFields::new(name, "Fall 2024", ["alice"])
}

fn lowercase_names(registry: &ClassRegistry) -> Vec<String> {
    registry
        .records()
        .iter()
        .map(|r| r.name.to_lowercase())
        .collect()
}

proptest! {
    #[test]
    fn test_names_stay_unique_ignoring_case(ops in prop::collection::vec(op(), 0..40)) {
        let mut registry = ClassRegistry::new();

        for op in ops {
            let before = registry.list();
            let result = match op {
                Op::Add(n) => registry.add(fields(&n)).map(|_| ()),
                Op::Rename(i, n) => match before.get(i) {
                    Some(record) => registry.update(&record.name, fields(&n)).map(|_| ()),
                    None => Ok(()),
                },
                Op::Delete(i) => {
                    if let Some(record) = before.get(i) {
                        registry.delete(&record.name);
                    }
                    Ok(())
                }
            };

            if result.is_err() {
                prop_assert_eq!(registry.list(), before);
            }

            let names = lowercase_names(&registry);
            let unique: HashSet<_> = names.iter().collect();
            prop_assert_eq!(unique.len(), names.len());
        }
    }

    #[test]
    fn test_add_appends_in_order(names in prop::collection::hash_set("[a-z]{1,6}", 0..10)) {
        let mut registry = ClassRegistry::new();
        let names: Vec<String> = names.into_iter().collect();

        for n in &names {
            registry.add(fields(n)).unwrap();
        }

        let listed: Vec<String> = registry.list().into_iter().map(|r| r.name).collect();
        prop_assert_eq!(listed, names);
    }

    #[test]
    fn test_blank_names_are_rejected(spaces in "[ \t]{0,5}") {
        let mut registry = ClassRegistry::new();
        let err = registry.add(fields(&spaces)).unwrap_err();
        prop_assert_eq!(err, RegistryError::Validation { field: "name" });
        prop_assert!(registry.is_empty());
    }

    #[test]
    fn test_stored_names_are_trimmed(
        core in "[A-Za-z0-9]{1,8}",
        lead in " {0,3}",
        trail in " {0,3}",
    ) {
        let mut registry = ClassRegistry::new();
        let raw = format!("{lead}{core}{trail}");
        registry.add(fields(&raw)).unwrap();

        prop_assert!(registry.get(&core).is_some());
        let duplicate = registry.add(fields(&core.to_uppercase()));
        let is_duplicate = matches!(duplicate, Err(RegistryError::DuplicateName { .. }));
        prop_assert!(is_duplicate);
    }

    #[test]
    fn test_delete_twice_is_noop(names in prop::collection::hash_set("[a-z]{1,6}", 1..6)) {
        let mut registry = ClassRegistry::new();
        for n in &names {
            registry.add(fields(n)).unwrap();
        }
        let target = names.iter().next().unwrap().clone();

        prop_assert!(registry.delete(&target).is_some());
        let after_first = registry.list();
        prop_assert!(registry.delete(&target).is_none());
        prop_assert_eq!(registry.list(), after_first);
    }

    #[test]
    fn test_case_only_rename_is_allowed(n in "[a-z]{1,6}") {
        let mut registry = ClassRegistry::new();
        let id = registry.add(fields(&n)).unwrap();

        let renamed = registry.update(&n, fields(&n.to_uppercase())).unwrap();
        prop_assert_eq!(renamed, id);
        prop_assert_eq!(registry.len(), 1);
    }
}
