//! Read-only JSON snapshots of employees and projects.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, Result};
use crate::models::{Employee, Project};
use crate::store::Portfolio;

const SAMPLE_JSON: &str = include_str!("../data/sample.json");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Dataset {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| PortfolioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json(&json)?;

        tracing::info!(
            path = %path.display(),
            projects = dataset.projects.len(),
            employees = dataset.employees.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Bundled demonstration dataset.
    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE_JSON)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn into_portfolio(self) -> Portfolio {
        Portfolio::new(self.projects, self.employees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn sample_parses() {
        let dataset = Dataset::sample().unwrap();
        assert_eq!(dataset.employees.len(), 5);
        assert_eq!(dataset.projects.len(), 3);
    }

    #[test]
    fn load_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"employees": [], "projects": []}"#).unwrap();

        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset, Dataset::default());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = Dataset::load(&path).unwrap_err();
        assert!(matches!(err, PortfolioError::Io { .. }));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = Dataset::from_json("{\"projects\": [{}]}").unwrap_err();
        assert!(matches!(err, PortfolioError::Json(_)));
    }
}
