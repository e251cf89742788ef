//! Property-based tests for the constant registry's positional contract.

use coreconst_core::{ConstantRegistry, RegistryConfig, RegistryError};
use proptest::prelude::*;

fn populated(include_doc_metadata: bool) -> ConstantRegistry {
    let mut registry = ConstantRegistry::with_config(RegistryConfig::new().with_doc_metadata(include_doc_metadata));
    registry.initialize().unwrap();
    registry
}

proptest! {
    /// Property: every in-range index resolves, and `record` agrees with the positional accessors.
    #[test]
    fn in_range_indices_resolve(index in 0usize..473, metadata in any::<bool>()) {
        let registry = populated(metadata);
        let record = registry.record(index).unwrap();
        prop_assert_eq!(record.name, registry.name_at(index));
        prop_assert_eq!(record.value, registry.value_at(index));
        prop_assert_eq!(record.enum_group_name(), registry.enum_group_at(index));
        prop_assert_eq!(record.hide_value_in_docs, registry.hide_value_in_docs_at(index));
    }

    /// Property: out-of-range indices are reported, never clamped.
    #[test]
    fn out_of_range_indices_are_rejected(index in 473usize..usize::MAX) {
        let registry = populated(true);
        prop_assert_eq!(
            registry.record(index),
            Err(RegistryError::OutOfRange { index, count: 473 })
        );
        prop_assert!(registry.get(index).is_none());
    }

    /// Property: `find` returns the index a name was registered at.
    #[test]
    fn find_inverts_name_at(index in 0usize..473) {
        let registry = populated(true);
        let name = registry.name_at(index);
        prop_assert_eq!(registry.find(name), Some(index));
    }
}
