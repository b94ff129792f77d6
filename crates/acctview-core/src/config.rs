//! View configuration and account data loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use tracing::info;

use crate::models::{AccountData, sample_data};

/// Default number of transactions per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default event poll interval.
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(250);

/// Default latency of the simulated backend.
pub const DEFAULT_SERVICE_DELAY: Duration = Duration::from_secs(1);

/// Errors while loading account data.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid account data in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Runtime settings for the account view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    /// Account data file (JSON). `None` uses the built-in sample account.
    pub data_path: Option<PathBuf>,
    /// Transactions per page, at least 1.
    pub page_size: usize,
    /// Event poll interval.
    pub tick_rate: Duration,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            tick_rate: DEFAULT_TICK_RATE,
        }
    }
}

impl ViewConfig {
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = Some(path.into());
        self
    }

    /// Sets the page size, clamped to at least one row.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Loads account data from `data_path`, or the sample account if unset.
    pub fn load_data(&self) -> Result<AccountData, DataError> {
        match &self.data_path {
            Some(path) => load_account_data(path),
            None => Ok(sample_data()),
        }
    }
}

/// Reads an [`AccountData`] JSON document.
pub fn load_account_data(path: &Path) -> Result<AccountData, DataError> {
    let raw = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let data: AccountData = serde_json::from_str(&raw).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "Loaded account {} with {} transactions from {}",
        data.account.account_number.short(12),
        data.transactions.len(),
        path.display()
    );
    Ok(data)
}
