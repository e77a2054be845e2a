use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::project::{ProjectCategory, ProjectStatus};

/// Inclusive calendar window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// True when `[start, end]` shares at least one day with this window.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        !(end < self.start || start > self.end)
    }
}

/// Sparse set of project match criteria.
///
/// Every field is optional. An empty set or an empty string places no
/// constraint on its dimension, so `FilterSpec::default()` matches every
/// project.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterSpec {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<ProjectStatus>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<ProjectCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_manager: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status.push(status);
        self
    }

    pub fn with_category(mut self, category: ProjectCategory) -> Self {
        self.category.push(category);
        self
    }

    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self
    }

    pub fn with_date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.date_range = Some(DateRange::new(start, end));
        self
    }

    pub fn with_project_manager(mut self, id: Uuid) -> Self {
        self.project_manager = Some(id);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Client constraint, if one is set and non-empty.
    pub fn client_term(&self) -> Option<&str> {
        non_empty(self.client.as_deref())
    }

    /// Search constraint, if one is set and non-empty.
    pub fn search_term(&self) -> Option<&str> {
        non_empty(self.search.as_deref())
    }

    /// Number of dimensions that currently constrain the result.
    pub fn active_count(&self) -> usize {
        [
            !self.status.is_empty(),
            !self.category.is_empty(),
            self.client_term().is_some(),
            self.date_range.is_some(),
            self.project_manager.is_some(),
            !self.tags.is_empty(),
            self.search_term().is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
