//! Record shapes for the constant tables and the registry.
//!
//! [`ConstantDef`] is the `Copy`-friendly row type that lives in `const` tables. [`ConstantRecord`] is what the
//! registry stores once a table row has been registered under a given [`RegistryConfig`](crate::RegistryConfig).

use crate::groups::EnumGroup;

/// One row of a literal constant table.
///
/// ## Notes
/// - Rows are built with the `const fn` helpers below so tables stay readable.
/// - `hide_value_in_docs` marks rows whose literal value should not be printed in docs (platform-dependent or
///   alias values).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantDef {
    pub name: &'static str,
    pub value: i64,
    pub group: Option<EnumGroup>,
    pub hide_value_in_docs: bool,
}

impl ConstantDef {
    /// A member of an enum group.
    pub const fn member(group: EnumGroup, name: &'static str, value: i64) -> Self {
        Self {
            name,
            value,
            group: Some(group),
            hide_value_in_docs: false,
        }
    }

    /// A member of an enum group whose value is hidden from generated docs.
    pub const fn member_no_val(group: EnumGroup, name: &'static str, value: i64) -> Self {
        Self {
            name,
            value,
            group: Some(group),
            hide_value_in_docs: true,
        }
    }

    /// A standalone constant with no enum group.
    pub const fn standalone(name: &'static str, value: i64) -> Self {
        Self {
            name,
            value,
            group: None,
            hide_value_in_docs: false,
        }
    }
}

/// One registered constant.
///
/// `enum_group` and `hide_value_in_docs` are only populated when the registry was built with doc metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantRecord {
    pub name: &'static str,
    pub value: i64,
    pub enum_group: Option<EnumGroup>,
    pub hide_value_in_docs: bool,
}

impl ConstantRecord {
    /// Build a record from a table row, dropping doc metadata when `with_metadata` is false.
    pub fn from_def(def: &ConstantDef, with_metadata: bool) -> Self {
        if with_metadata {
            Self {
                name: def.name,
                value: def.value,
                enum_group: def.group,
                hide_value_in_docs: def.hide_value_in_docs,
            }
        } else {
            Self {
                name: def.name,
                value: def.value,
                enum_group: None,
                hide_value_in_docs: false,
            }
        }
    }

    /// Return the enum group spelling, or `""` for standalone records.
    #[inline]
    pub fn enum_group_name(&self) -> &'static str {
        self.enum_group.map(EnumGroup::as_str).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_def_keeps_metadata() {
        let def = ConstantDef::member_no_val(EnumGroup::KeyModifierMask, "KEY_MASK_CMD", 1 << 28);
        let record = ConstantRecord::from_def(&def, true);
        assert_eq!(record.enum_group, Some(EnumGroup::KeyModifierMask));
        assert!(record.hide_value_in_docs);
        assert_eq!(record.enum_group_name(), "KeyModifierMask");
    }

    #[test]
    fn test_from_def_strips_metadata() {
        let def = ConstantDef::member_no_val(EnumGroup::KeyModifierMask, "KEY_MASK_CMD", 1 << 28);
        let record = ConstantRecord::from_def(&def, false);
        assert_eq!(record.name, "KEY_MASK_CMD");
        assert_eq!(record.value, 1 << 28);
        assert_eq!(record.enum_group, None);
        assert!(!record.hide_value_in_docs);
        assert_eq!(record.enum_group_name(), "");
    }

    #[test]
    fn test_standalone_has_no_group() {
        let def = ConstantDef::standalone("SPKEY", 1 << 24);
        assert_eq!(def.group, None);
        assert!(!def.hide_value_in_docs);
    }
}
