//! Errors raised by the constant registry.

use thiserror::Error;

/// Errors raised by [`ConstantRegistry`](crate::ConstantRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("constant index {index} out of range for registry of {count} constants")]
    OutOfRange { index: usize, count: usize },

    #[error("registry already initialized with {count} constants; call teardown() first")]
    AlreadyInitialized { count: usize },

    #[error("duplicate constant name `{name}` at indices {first} and {second}")]
    DuplicateName {
        name: &'static str,
        first: usize,
        second: usize,
    },
}
