//! Serializable snapshot of a populated registry.
//!
//! The CLI's `list --json` output is an array of [`ConstantRow`]s built by walking the registry positionally, the
//! same way a binding layer would.

use serde::{Deserialize, Serialize};

use coreconst_core::{ConstantRegistry, EnumGroup};

/// One exported constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantRow {
    pub index: usize,
    pub name: String,
    pub value: i64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub enum_group: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub hide_value_in_docs: bool,
}

/// Walk `[0, count())` and collect rows, optionally restricted to one enum group.
pub fn rows(registry: &ConstantRegistry, group: Option<EnumGroup>) -> Vec<ConstantRow> {
    (0..registry.count())
        .filter(|&i| match group {
            Some(g) => registry.enum_group_at(i) == g.as_str(),
            None => true,
        })
        .map(|i| {
            let enum_group = registry.enum_group_at(i);
            ConstantRow {
                index: i,
                name: registry.name_at(i).to_string(),
                value: registry.value_at(i),
                enum_group: (!enum_group.is_empty()).then(|| enum_group.to_string()),
                hide_value_in_docs: registry.hide_value_in_docs_at(i),
            }
        })
        .collect()
}

/// Serialize rows as pretty-printed JSON.
pub fn to_json(rows: &[ConstantRow]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> ConstantRegistry {
        let mut registry = ConstantRegistry::new();
        registry.initialize().unwrap();
        registry
    }

    #[test]
    fn test_rows_cover_registry() {
        let registry = populated();
        let rows = rows(&registry, None);
        assert_eq!(rows.len(), registry.count());
        assert_eq!(rows[0].name, "MARGIN_LEFT");
        assert_eq!(rows[0].enum_group.as_deref(), Some("Margin"));
    }

    #[test]
    fn test_rows_filtered_by_group_keep_global_index() {
        let registry = populated();
        let errors = rows(&registry, Some(EnumGroup::Error));
        assert_eq!(errors.len(), 49);
        assert_eq!(errors[0].name, "OK");
        assert_eq!(errors[0].index, registry.find("OK").unwrap());
    }

    #[test]
    fn test_json_skips_empty_metadata() {
        let registry = populated();
        let spkey = rows(&registry, None).into_iter().find(|r| r.name == "SPKEY").unwrap();
        let json = serde_json::to_value(&spkey).unwrap();
        assert_eq!(json["value"], 16777216);
        assert!(json.get("enum_group").is_none());
        assert!(json.get("hide_value_in_docs").is_none());
    }

    #[test]
    fn test_json_roundtrip_preserves_order() {
        let registry = populated();
        let original = rows(&registry, Some(EnumGroup::MidiMessageList));
        let json = to_json(&original).unwrap();
        let parsed: Vec<ConstantRow> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
