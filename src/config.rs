//! Per-run generator configuration.
//!
//! Passed explicitly into each generation run; there is no process-wide
//! state.

/// Configuration for one generation run.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Log generation steps at debug level.
    pub debug: bool,
    /// Additional annotation names the mirroring table should copy onto
    /// generated elements, beyond the built-in set.
    pub mirror_allow: Vec<String>,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn allow_mirror(mut self, name: impl Into<String>) -> Self {
        self.mirror_allow.push(name.into());
        self
    }
}
