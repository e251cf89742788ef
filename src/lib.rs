#![forbid(unsafe_code)]
//! coreconst: drive the global constant registry from the command line.
//!
//! This crate is the in-repo consumer of [`coreconst_core`]. It plays the part of a binding layer: it owns one
//! [`ConstantRegistry`], initializes it once, enumerates `[0, count())`, and tears it down before exit.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **Registry contract**: positional accessors panic on out-of-range indices. Callers here only ever index inside
//!   `[0, count())`.

pub mod cli;
pub mod export;
pub mod version;

pub use coreconst_core::{ConstantRecord, ConstantRegistry, EnumGroup, RegistryConfig, RegistryError};
