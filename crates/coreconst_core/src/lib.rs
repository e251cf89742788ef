//! Provide the engine-wide integer constant tables and the positional registry that exposes them.
//!
//! This crate is intentionally small and dependency-light. It contains:
//! - literal constant tables grouped by category ([`tables`]),
//! - the typed enum-group vocabulary used for documentation grouping ([`groups`]),
//! - the [`ConstantRegistry`] with its `initialize`/`teardown` lifecycle and positional queries,
//! - a Markdown reference renderer for generated docs ([`reference`]).
//!
//! ## Notes
//!
//! - There is **no global state**: whoever owns process startup owns the registry and hands references to the
//!   consuming binding layer.
//! - Index order is registration order. Consumers enumerate with `for i in 0..registry.count()`.
//!
//! ## Examples
//! ```rust
//! use coreconst_core::ConstantRegistry;
//!
//! let mut registry = ConstantRegistry::new();
//! registry.initialize().unwrap();
//!
//! let ok = registry.find("OK").unwrap();
//! assert_eq!(registry.value_at(ok), 0);
//! assert_eq!(registry.enum_group_at(ok), "Error");
//!
//! registry.teardown();
//! assert_eq!(registry.count(), 0);
//! ```

pub mod config;
pub mod errors;
pub mod groups;
pub mod record;
pub mod reference;
pub mod registry;
pub mod tables;

pub use config::RegistryConfig;
pub use errors::RegistryError;
pub use groups::EnumGroup;
pub use record::{ConstantDef, ConstantRecord};
pub use registry::{ConstantRegistry, RegistryState};
