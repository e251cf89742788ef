//! Generate the Markdown constant reference from the `coreconst_core` tables.
//!
//! This binary initializes a registry with full doc metadata and writes `docs/reference/constants.md`.
//!
//! ## Notes
//! - The generated file is meant to be checked into the repo and treated as a derived artifact.
//! - Do not edit the generated Markdown by hand; update the tables instead.
//!
//! ## Examples
//! Run from the workspace root:
//! ```bash
//! cargo run -p coreconst_core --bin generate_constant_reference
//! ```
//!
//! ## Panics
//! - If the workspace root cannot be resolved.
//! - If the output file cannot be written.

use std::fs;
use std::path::PathBuf;

use coreconst_core::reference::render_markdown;
use coreconst_core::{ConstantRegistry, RegistryConfig};

fn main() {
    let root = workspace_root();

    let out_dir = root.join("docs/reference");
    fs::create_dir_all(&out_dir).expect("create docs/reference/");

    let mut registry = ConstantRegistry::with_config(RegistryConfig::new().with_doc_metadata(true));
    registry.initialize().expect("initialize constant registry");
    let page = render_markdown(&registry);
    registry.teardown();

    fs::write(out_dir.join("constants.md"), page).expect("write constants.md");
}

/// Resolve the workspace root from this crate's manifest dir (`crates/coreconst_core`).
fn workspace_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .map(PathBuf::from)
        .expect("resolve workspace root from CARGO_MANIFEST_DIR")
}
