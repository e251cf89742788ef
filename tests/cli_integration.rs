//! Integration tests for the coreconst CLI surface

use clap::Parser;
use proptest::prelude::*;

use coreconst::cli::{Cli, ExitCode, commands, execute};
use coreconst::export::{self, ConstantRow};
use coreconst::{ConstantRegistry, RegistryConfig};

fn registry_for(args: &[&str]) -> ConstantRegistry {
    let cli = Cli::try_parse_from(args).unwrap();
    let mut registry = ConstantRegistry::with_config(cli.registry_config());
    registry.initialize().unwrap();
    registry
}

#[test]
fn test_execute_runs_every_command() {
    for args in [
        vec!["coreconst", "groups"],
        vec!["coreconst", "check"],
        vec!["coreconst", "get", "OK"],
        vec!["coreconst", "list", "--group", "MidiMessageList"],
        vec!["coreconst", "--validate-names", "check"],
    ] {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        assert_eq!(execute(cli).unwrap(), ExitCode::SUCCESS, "command failed: {args:?}");
    }
}

#[test]
fn test_execute_unknown_constant_fails() {
    let cli = Cli::try_parse_from(["coreconst", "get", "KEY_NOPE"]).unwrap();
    let err = execute(cli).unwrap_err();
    assert_eq!(err.exit_code, ExitCode::FAILURE);
    assert_eq!(err.message, "unknown constant 'KEY_NOPE'");
}

#[test]
fn test_execute_group_filter_needs_metadata() {
    let cli = Cli::try_parse_from(["coreconst", "list", "-g", "KeyList", "--no-doc-metadata"]).unwrap();
    let err = execute(cli).unwrap_err();
    assert!(err.help.unwrap().contains("--no-doc-metadata"));
}

#[test]
fn test_json_export_without_metadata_drops_groups() {
    let registry = registry_for(&["coreconst", "--no-doc-metadata", "list", "--json"]);
    let out = commands::list(&registry, None, true).unwrap();
    let rows: Vec<ConstantRow> = serde_json::from_str(&out).unwrap();
    assert_eq!(rows.len(), 473);
    assert!(rows.iter().all(|r| r.enum_group.is_none() && !r.hide_value_in_docs));
}

#[test]
fn test_json_marks_only_platform_mask_hidden() {
    let registry = registry_for(&["coreconst", "list"]);
    let hidden: Vec<String> = export::rows(&registry, None)
        .into_iter()
        .filter(|r| r.hide_value_in_docs)
        .map(|r| r.name)
        .collect();
    assert_eq!(hidden, vec!["KEY_MASK_CMD".to_string()]);
}

#[test]
fn test_variant_type_listing() {
    let registry = registry_for(&["coreconst", "list"]);
    let out = commands::list(&registry, Some("Variant.Type"), false).unwrap();
    let first = out.lines().next().unwrap();
    let last = out.lines().last().unwrap();
    assert!(first.contains("TYPE_NIL") && first.trim_end().ends_with("Variant.Type"));
    assert!(last.contains("TYPE_MAX"));
    assert_eq!(out.lines().count(), 36);
}

#[test]
fn test_get_values_across_tables() {
    let registry = registry_for(&["coreconst", "get", "X"]);
    assert_eq!(commands::get(&registry, "SPKEY").unwrap(), 1 << 24);
    assert_eq!(commands::get(&registry, "KEY_MODIFIER_MASK").unwrap(), -16777216);
    assert_eq!(commands::get(&registry, "ERR_PRINTER_ON_FIRE").unwrap(), 48);
    assert_eq!(commands::get(&registry, "JOY_AXIS_INVALID").unwrap(), -1);
}

#[test]
fn test_reference_markdown_lists_standalone_section() {
    let registry = registry_for(&["coreconst", "reference"]);
    let page = coreconst_core::reference::render_markdown(&registry);
    assert!(page.contains("## Standalone constants"));
    assert!(page.contains("| `KEY_MASK_CMD` | |"));
    assert!(page.ends_with("|\n"));
}

proptest! {
    /// Property: `get` by name agrees with the positional value for every index.
    #[test]
    fn get_agrees_with_value_at(index in 0usize..473) {
        let registry = registry_for(&["coreconst", "check"]);
        let name = registry.name_at(index);
        prop_assert_eq!(commands::get(&registry, name).unwrap(), registry.value_at(index));
    }
}
