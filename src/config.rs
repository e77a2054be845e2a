//! Where the CLI reads its snapshot from, and which day counts as today.

use std::ffi::OsString;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use directories::ProjectDirs;
use portfolio_core::{Dataset, Portfolio};

/// Environment variable naming a dataset file.
pub const DATA_ENV: &str = "PORTFOLIO_DATA";

const DATA_FILE: &str = "portfolio.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Sample,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: DataSource,
    /// Reference date for days-remaining.
    pub today: NaiveDate,
}

impl Config {
    /// Resolve from CLI flags, then `PORTFOLIO_DATA`, then the per-user data
    /// directory, falling back to the bundled sample.
    pub fn resolve(data: Option<PathBuf>, today: Option<NaiveDate>) -> Self {
        Self::resolve_with(
            data,
            std::env::var_os(DATA_ENV),
            default_data_path(),
            today.unwrap_or_else(|| Local::now().date_naive()),
        )
    }

    fn resolve_with(
        flag: Option<PathBuf>,
        env: Option<OsString>,
        default_path: Option<PathBuf>,
        today: NaiveDate,
    ) -> Self {
        let source = flag
            .or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
            .or_else(|| default_path.filter(|p| p.exists()))
            .map(DataSource::File)
            .unwrap_or(DataSource::Sample);

        Self { source, today }
    }

    pub fn load_portfolio(&self) -> portfolio_core::Result<Portfolio> {
        let dataset = match &self.source {
            DataSource::File(path) => Dataset::load(path)?,
            DataSource::Sample => {
                tracing::debug!("No dataset configured, using bundled sample");
                Dataset::sample()?
            }
        };
        Ok(dataset.into_portfolio())
    }
}

/// `<data dir>/portfolio.json` for the current user, if a home exists.
pub fn default_data_path() -> Option<PathBuf> {
    ProjectDirs::from("dev", "portfolio", "portfolio").map(|dirs| dirs.data_dir().join(DATA_FILE))
}
