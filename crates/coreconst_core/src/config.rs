//! Registry configuration.

/// Registry configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Keep enum-group and doc-hide metadata on each record
    pub include_doc_metadata: bool,
    /// Reject duplicate names during `initialize`
    pub validate_names: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            include_doc_metadata: true,
            validate_names: cfg!(debug_assertions),
        }
    }
}

impl RegistryConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Config for reduced builds that carry names and values only
    pub fn minimal() -> Self {
        Self::default().with_doc_metadata(false)
    }

    /// Keep or strip doc metadata
    pub fn with_doc_metadata(mut self, include: bool) -> Self {
        self.include_doc_metadata = include;
        self
    }

    /// Enable or disable name uniqueness validation
    pub fn with_name_validation(mut self, validate: bool) -> Self {
        self.validate_names = validate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_keeps_metadata() {
        let config = RegistryConfig::default();
        assert!(config.include_doc_metadata);
        assert_eq!(config.validate_names, cfg!(debug_assertions));
    }

    #[test]
    fn test_minimal_config_strips_metadata() {
        let config = RegistryConfig::minimal();
        assert!(!config.include_doc_metadata);
    }

    #[test]
    fn test_builder_chaining() {
        let config = RegistryConfig::new()
            .with_doc_metadata(false)
            .with_name_validation(true);
        assert!(!config.include_doc_metadata);
        assert!(config.validate_names);
    }
}
