//! Output sinks for rendered compilation units.
//!
//! The generator never touches storage directly; it hands the finished unit
//! to a [`Sink`] exactly once, at the very end of a successful run.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::spec::SourceUnit;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Destination for one generated compilation unit per source type.
pub trait Sink {
    fn write(&mut self, package: &str, unit: &SourceUnit) -> Result<(), SinkError>;
}

/// Writes units as `.java` files under a root directory, one directory per
/// package segment.
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Sink for FsSink {
    fn write(&mut self, package: &str, unit: &SourceUnit) -> Result<(), SinkError> {
        let mut dir = self.root.clone();
        if !package.is_empty() {
            dir.push(package.replace('.', "/"));
        }
        fs::create_dir_all(&dir).map_err(|source| SinkError::Io {
            path: dir.clone(),
            source,
        })?;

        let path = dir.join(format!("{}.java", unit.type_name()));
        fs::write(&path, unit.render()).map_err(|source| SinkError::Io { path, source })
    }
}

/// Collects rendered units in memory; used by tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// `(package, type name, rendered source)` per written unit.
    pub units: Vec<(String, String, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sink for MemorySink {
    fn write(&mut self, package: &str, unit: &SourceUnit) -> Result<(), SinkError> {
        self.units
            .push((package.to_string(), unit.type_name().to_string(), unit.render()));
        Ok(())
    }
}
