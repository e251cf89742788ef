//! CLI command implementations
//!
//! Commands take a populated registry and return their output as a `String` (or a `CliResult`), so
//! printing and exits stay in the top-level `run()`.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use coreconst_core::groups::{self, EnumGroup};
use coreconst_core::reference::render_markdown;
use coreconst_core::registry::validate_unique_names;
use coreconst_core::ConstantRegistry;

use crate::export;

use super::{CliError, CliResult, ExitCode};

/// Resolve a user-supplied group spelling.
fn resolve_group(registry: &ConstantRegistry, name: &str) -> CliResult<EnumGroup> {
    if !registry.config().include_doc_metadata {
        return Err(CliError::failure("enum groups are unavailable without doc metadata")
            .with_help("drop --no-doc-metadata to filter by group"));
    }
    groups::from_str(name).ok_or_else(|| {
        let known: Vec<&str> = groups::GROUPS.iter().map(|g| g.canonical).collect();
        CliError::failure(format!("unknown enum group '{name}'"))
            .with_help(format!("known groups: {}", known.join(", ")))
    })
}

/// `list`: one line per constant, or a JSON array.
pub fn list(registry: &ConstantRegistry, group: Option<&str>, json: bool) -> CliResult<String> {
    let group = group.map(|g| resolve_group(registry, g)).transpose()?;
    let rows = export::rows(registry, group);

    if json {
        let mut out = export::to_json(&rows).map_err(|e| CliError::failure(format!("JSON export failed: {e}")))?;
        out.push('\n');
        return Ok(out);
    }

    let name_width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for r in &rows {
        let group = r.enum_group.as_deref().unwrap_or("-");
        let _ = writeln!(out, "{:>4}  {:<name_width$}  {:>11}  {}", r.index, r.name, r.value, group);
    }
    Ok(out)
}

/// `get`: the value of one constant.
pub fn get(registry: &ConstantRegistry, name: &str) -> CliResult<i64> {
    registry.value_of(name).ok_or_else(|| {
        let err = CliError::failure(format!("unknown constant '{name}'"));
        match suggest(registry, name) {
            Some(s) => err.with_help(format!("did you mean '{s}'?")),
            None => err,
        }
    })
}

/// Suggest a constant whose name matches case-insensitively.
fn suggest(registry: &ConstantRegistry, name: &str) -> Option<&'static str> {
    registry
        .iter()
        .find(|r| r.name.eq_ignore_ascii_case(name))
        .map(|r| r.name)
}

/// `groups`: each enum group with its member count, then the standalone count.
pub fn groups(registry: &ConstantRegistry) -> String {
    let mut out = String::new();
    for group in registry.groups() {
        let _ = writeln!(out, "{:<20} {}", group.as_str(), registry.members_of(group).count());
    }
    let standalone = registry.iter().filter(|r| r.enum_group.is_none()).count();
    let _ = writeln!(out, "{:<20} {}", "(standalone)", standalone);
    out
}

/// `check`: validate names, then report aliases.
///
/// ## Errors
/// - If two constants share a name.
pub fn check(registry: &ConstantRegistry) -> CliResult<String> {
    validate_unique_names(registry.records())?;

    let aliases = registry.aliases();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} constants, {} enum groups, {} aliases",
        registry.count(),
        registry.groups().len(),
        aliases.len()
    );
    for (canonical, alias) in aliases {
        let _ = writeln!(
            out,
            "  {} = {} ({}, {})",
            registry.name_at(alias),
            registry.name_at(canonical),
            registry.enum_group_at(alias),
            registry.value_at(alias)
        );
    }
    Ok(out)
}

/// `reference`: render the Markdown reference to stdout or a file.
pub fn reference(registry: &ConstantRegistry, output: Option<&Path>) -> CliResult<ExitCode> {
    if !registry.config().include_doc_metadata {
        tracing::warn!("rendering without doc metadata; every constant will be listed as standalone");
    }
    let page = render_markdown(registry);

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| {
                    CliError::failure(format!("Cannot create directory '{}': {}", parent.display(), e))
                })?;
            }
            fs::write(path, page)
                .map_err(|e| CliError::failure(format!("Cannot write '{}': {}", path.display(), e)))?;
            tracing::info!(path = %path.display(), "wrote constant reference");
        }
        None => print!("{page}"),
    }
    Ok(ExitCode::SUCCESS)
}
