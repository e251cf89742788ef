//! The constant registry: an ordered, positional table of named integer constants.
//!
//! The registry owns a `Vec<ConstantRecord>` populated from the literal tables in [`crate::tables`]. It has exactly
//! two lifecycle states ([`RegistryState::Empty`] and [`RegistryState::Populated`]): [`ConstantRegistry::initialize`]
//! moves from empty to populated, [`ConstantRegistry::teardown`] resets back to empty.
//!
//! ## Notes
//! - The index is the stable public handle. Order is registration order, never sorted by name or value.
//! - Positional accessors (`name_at`, `value_at`, ...) treat an out-of-range index as a contract violation and
//!   panic. Use [`ConstantRegistry::record`] or [`ConstantRegistry::get`] when the index is untrusted.
//! - Lifecycle methods take `&mut self`, so queries can never interleave with `initialize`/`teardown`.
//!
//! ## Examples
//! ```rust
//! use coreconst_core::{ConstantRegistry, RegistryConfig};
//!
//! let mut registry = ConstantRegistry::with_config(RegistryConfig::minimal());
//! registry.initialize().unwrap();
//!
//! for i in 0..registry.count() {
//!     assert!(!registry.name_at(i).is_empty());
//!     assert_eq!(registry.enum_group_at(i), "");
//! }
//! ```

use std::collections::HashMap;

use crate::config::RegistryConfig;
use crate::errors::RegistryError;
use crate::groups::EnumGroup;
use crate::record::{ConstantDef, ConstantRecord};
use crate::tables;

/// Lifecycle state of a [`ConstantRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    Empty,
    Populated,
}

/// Ordered table of named integer constants.
#[derive(Debug, Clone)]
pub struct ConstantRegistry {
    config: RegistryConfig,
    state: RegistryState,
    records: Vec<ConstantRecord>,
}

impl Default for ConstantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstantRegistry {
    /// Create an empty registry with the default config.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with an explicit config.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            state: RegistryState::Empty,
            records: Vec::new(),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn state(&self) -> RegistryState {
        self.state
    }

    /// Register every known constant, in table order.
    ///
    /// ## Errors
    /// - [`RegistryError::AlreadyInitialized`] if the registry is already populated. Nothing is appended.
    /// - [`RegistryError::DuplicateName`] if name validation is enabled and two rows share a name. The registry is
    ///   left empty.
    #[tracing::instrument(skip_all, fields(doc_metadata = self.config.include_doc_metadata))]
    pub fn initialize(&mut self) -> Result<(), RegistryError> {
        if self.state == RegistryState::Populated {
            return Err(RegistryError::AlreadyInitialized {
                count: self.records.len(),
            });
        }

        self.populate(tables::TABLES)?;
        tracing::debug!(count = self.records.len(), "registered global constants");
        Ok(())
    }

    /// Append every row of `tables` in order, validating names if configured.
    fn populate(&mut self, tables: &[&[ConstantDef]]) -> Result<(), RegistryError> {
        let with_metadata = self.config.include_doc_metadata;
        self.records.reserve(tables.iter().map(|t| t.len()).sum());
        for table in tables {
            self.records
                .extend(table.iter().map(|def| ConstantRecord::from_def(def, with_metadata)));
        }

        if self.config.validate_names {
            if let Err(err) = validate_unique_names(&self.records) {
                self.records.clear();
                return Err(err);
            }
        }

        self.state = RegistryState::Populated;
        Ok(())
    }

    /// Clear every record and return to [`RegistryState::Empty`].
    pub fn teardown(&mut self) {
        let count = self.records.len();
        self.records.clear();
        self.state = RegistryState::Empty;
        tracing::debug!(count, "unregistered global constants");
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Return the record at `index`, or [`RegistryError::OutOfRange`].
    pub fn record(&self, index: usize) -> Result<&ConstantRecord, RegistryError> {
        self.records.get(index).ok_or(RegistryError::OutOfRange {
            index,
            count: self.records.len(),
        })
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&ConstantRecord> {
        self.records.get(index)
    }

    /// Return the name of the constant at `index`.
    ///
    /// ## Panics
    /// - If `index >= count()`.
    #[track_caller]
    pub fn name_at(&self, index: usize) -> &'static str {
        self.record_or_panic(index).name
    }

    /// Return the value of the constant at `index`.
    ///
    /// ## Panics
    /// - If `index >= count()`.
    #[track_caller]
    pub fn value_at(&self, index: usize) -> i64 {
        self.record_or_panic(index).value
    }

    /// Return the enum group spelling of the constant at `index`, or `""` for standalone constants and for
    /// registries built without doc metadata.
    ///
    /// ## Panics
    /// - If `index >= count()`.
    #[track_caller]
    pub fn enum_group_at(&self, index: usize) -> &'static str {
        self.record_or_panic(index).enum_group_name()
    }

    /// Return whether docs should omit the literal value of the constant at `index`.
    ///
    /// Always `false` for registries built without doc metadata.
    ///
    /// ## Panics
    /// - If `index >= count()`.
    #[track_caller]
    pub fn hide_value_in_docs_at(&self, index: usize) -> bool {
        self.record_or_panic(index).hide_value_in_docs
    }

    /// All records as a slice, in registration order.
    pub fn records(&self) -> &[ConstantRecord] {
        &self.records
    }

    /// Iterate over records in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ConstantRecord> {
        self.records.iter()
    }

    /// Return the index of the first record named `name`.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name == name)
    }

    /// Return the value of the first record named `name`.
    pub fn value_of(&self, name: &str) -> Option<i64> {
        self.find(name).map(|i| self.records[i].value)
    }

    /// Iterate over `(index, record)` pairs belonging to `group`, in registration order.
    pub fn members_of(&self, group: EnumGroup) -> impl Iterator<Item = (usize, &ConstantRecord)> {
        self.records
            .iter()
            .enumerate()
            .filter(move |(_, r)| r.enum_group == Some(group))
    }

    /// Return the distinct enum groups in order of first appearance.
    pub fn groups(&self) -> Vec<EnumGroup> {
        let mut out: Vec<EnumGroup> = Vec::new();
        for group in self.records.iter().filter_map(|r| r.enum_group) {
            if !out.contains(&group) {
                out.push(group);
            }
        }
        out
    }

    /// Return `(canonical, alias)` index pairs: records that share a value with an earlier record of the same enum
    /// group.
    ///
    /// ## Notes
    /// - Standalone records are never reported; values only collide meaningfully inside one enumeration.
    pub fn aliases(&self) -> Vec<(usize, usize)> {
        let mut first_by_value: HashMap<(EnumGroup, i64), usize> = HashMap::new();
        let mut out = Vec::new();
        for (i, r) in self.records.iter().enumerate() {
            let Some(group) = r.enum_group else {
                continue;
            };
            match first_by_value.get(&(group, r.value)) {
                Some(&canonical) => out.push((canonical, i)),
                None => {
                    first_by_value.insert((group, r.value), i);
                }
            }
        }
        out
    }

    #[track_caller]
    fn record_or_panic(&self, index: usize) -> &ConstantRecord {
        match self.records.get(index) {
            Some(record) => record,
            None => panic!(
                "{}",
                RegistryError::OutOfRange {
                    index,
                    count: self.records.len(),
                }
            ),
        }
    }
}

/// Check that no two records share a name.
///
/// ## Errors
/// - [`RegistryError::DuplicateName`] for the first repeated name, with both indices.
pub fn validate_unique_names(records: &[ConstantRecord]) -> Result<(), RegistryError> {
    let mut seen: HashMap<&'static str, usize> = HashMap::with_capacity(records.len());
    for (i, r) in records.iter().enumerate() {
        if let Some(&first) = seen.get(r.name) {
            return Err(RegistryError::DuplicateName {
                name: r.name,
                first,
                second: i,
            });
        }
        seen.insert(r.name, i);
    }
    Ok(())
}
