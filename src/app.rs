//! Per-invocation context shared by all commands

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::{RankError, Result};
use crate::storage::{self, ContentStore};

pub struct AppContext {
    pub config: Config,
    pub format: OutputFormat,
}

impl AppContext {
    /// Load configuration relative to the working directory and apply
    /// command-line overrides.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let mut config = Config::load(cli.config.as_deref(), &cwd)?;
        if let Some(store) = &cli.store {
            config.store.path.clone_from(store);
        }

        Ok(Self {
            config,
            format: cli.output_format(),
        })
    }

    #[must_use]
    pub fn store_path(&self) -> &Path {
        &self.config.store.path
    }

    /// Open the configured store for reading.
    ///
    /// # Errors
    ///
    /// [`RankError::NotFound`] when a SQLite store has not been created yet.
    pub fn open_store(&self) -> Result<Box<dyn ContentStore>> {
        let path = self.store_path();
        if !storage::is_json_path(path) && !path.exists() {
            return Err(RankError::NotFound(format!(
                "content store {} (run `cookrank import <file>` first)",
                path.display()
            )));
        }
        storage::open_store(path)
    }
}
