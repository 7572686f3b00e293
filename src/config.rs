//! Run configuration
//!
//! Built once per invocation from a YAML run file and/or command-line flags,
//! completed by interactive prompts, then passed by reference to every stage.

use crate::enrich::NeighborMode;
use crate::error::{RangeDbError, RangeDbResult};
use crate::sink::{database_path, InsertMode, DEFAULT_EXTENSION};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Everything one pipeline run needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub file: PathBuf,
    pub range: String,
    pub directory: PathBuf,
    pub database_name: String,
    pub sort: String,
    /// 1-indexed worksheet number
    pub sheet: usize,
    pub extension: String,
    pub neighbor_mode: NeighborMode,
    pub insert_mode: InsertMode,
    pub dry_run: bool,
}

impl RunConfig {
    /// Config with default options for the five required inputs
    pub fn new(
        file: impl Into<PathBuf>,
        range: impl Into<String>,
        directory: impl Into<PathBuf>,
        database_name: impl Into<String>,
        sort: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            range: range.into(),
            directory: directory.into(),
            database_name: database_name.into(),
            sort: sort.into(),
            sheet: 1,
            extension: DEFAULT_EXTENSION.to_string(),
            neighbor_mode: NeighborMode::default(),
            insert_mode: InsertMode::default(),
            dry_run: false,
        }
    }

    pub fn database_path(&self) -> PathBuf {
        database_path(&self.directory, &self.database_name, &self.extension)
    }
}

/// A possibly incomplete configuration, as found in a run file or on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    pub file: Option<PathBuf>,
    pub range: Option<String>,
    pub directory: Option<PathBuf>,
    pub database_name: Option<String>,
    pub sort: Option<String>,
    pub sheet: Option<usize>,
    pub extension: Option<String>,
    pub neighbor_mode: Option<NeighborMode>,
    pub insert_mode: Option<InsertMode>,
}

impl PartialConfig {
    /// Load a YAML run file
    pub fn from_yaml_file(path: &Path) -> RangeDbResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> RangeDbResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Values set in `other` win
    pub fn overlay(self, other: PartialConfig) -> Self {
        Self {
            file: other.file.or(self.file),
            range: other.range.or(self.range),
            directory: other.directory.or(self.directory),
            database_name: other.database_name.or(self.database_name),
            sort: other.sort.or(self.sort),
            sheet: other.sheet.or(self.sheet),
            extension: other.extension.or(self.extension),
            neighbor_mode: other.neighbor_mode.or(self.neighbor_mode),
            insert_mode: other.insert_mode.or(self.insert_mode),
        }
    }

    /// Build the final config; all five inputs must be present
    pub fn into_config(self, dry_run: bool) -> RangeDbResult<RunConfig> {
        let mut config = RunConfig::new(
            required(self.file, "file")?,
            required(self.range, "range")?,
            required(self.directory, "directory")?,
            required(self.database_name, "database_name")?,
            required(self.sort, "sort")?,
        );
        if let Some(sheet) = self.sheet {
            config.sheet = sheet;
        }
        if let Some(extension) = self.extension {
            config.extension = extension;
        }
        config.neighbor_mode = self.neighbor_mode.unwrap_or_default();
        config.insert_mode = self.insert_mode.unwrap_or_default();
        config.dry_run = dry_run;
        Ok(config)
    }
}

fn required<T>(value: Option<T>, name: &str) -> RangeDbResult<T> {
    value.ok_or_else(|| RangeDbError::Parse(format!("Missing required input '{}'", name)))
}
