//! Multi-predicate project filtering.
//!
//! Dimensions combine with AND; values within a multi-valued dimension
//! combine with OR. Results keep the input order.

use crate::models::{FilterSpec, Project};

/// Every project that satisfies all active predicates of `spec`.
pub fn filter_projects<'a>(projects: &'a [Project], spec: &FilterSpec) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|project| matches(project, spec))
        .collect()
}

/// Whether a single project satisfies all active predicates of `spec`.
pub fn matches(project: &Project, spec: &FilterSpec) -> bool {
    if !spec.status.is_empty() && !spec.status.contains(&project.status) {
        return false;
    }

    if !spec.category.is_empty() && !spec.category.contains(&project.category) {
        return false;
    }

    if let Some(client) = spec.client_term() {
        if project.client.to_lowercase() != client.to_lowercase() {
            return false;
        }
    }

    if let Some(range) = &spec.date_range {
        if !range.overlaps(project.start_date, project.end_date) {
            return false;
        }
    }

    if let Some(manager) = spec.project_manager {
        if project.project_manager != manager {
            return false;
        }
    }

    if !spec.tags.is_empty() && !spec.tags.iter().any(|tag| project.tags.contains(tag)) {
        return false;
    }

    if let Some(term) = spec.search_term() {
        let needle = term.to_lowercase();
        let found = [&project.name, &project.description, &project.client]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle));
        if !found {
            return false;
        }
    }

    true
}
