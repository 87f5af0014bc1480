//! Loader configuration.

use crate::index::IndexNaming;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Directory filesystem names are resolved against.
    pub base_dir: PathBuf,
    pub naming: IndexNaming,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            naming: IndexNaming::default(),
        }
    }
}

impl LoaderConfig {
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    pub fn with_target_collection(mut self, name: impl Into<String>) -> Self {
        self.naming = self.naming.with_target_collection(name);
        self
    }
}
