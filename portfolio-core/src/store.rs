//! In-memory portfolio state.
//!
//! `Portfolio` owns the project list, the employee roster and the active
//! filter. Callers hold it explicitly and pass it by reference; the metrics
//! and filter engines stay free functions with no access to it.

use chrono::Utc;
use uuid::Uuid;

use crate::error::{PortfolioError, Result};
use crate::filter::filter_projects;
use crate::models::{CreateProjectInput, Employee, FilterSpec, Project};

#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    projects: Vec<Project>,
    employees: Vec<Employee>,
    filters: FilterSpec,
}

impl Portfolio {
    pub fn new(projects: Vec<Project>, employees: Vec<Employee>) -> Self {
        tracing::debug!(
            projects = projects.len(),
            employees = employees.len(),
            "Portfolio initialized"
        );
        Self {
            projects,
            employees,
            filters: FilterSpec::default(),
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn filters(&self) -> &FilterSpec {
        &self.filters
    }

    pub fn set_filters(&mut self, filters: FilterSpec) {
        tracing::debug!(active = filters.active_count(), "Filters changed");
        self.filters = filters;
    }

    pub fn clear_filters(&mut self) {
        self.set_filters(FilterSpec::default());
    }

    /// Projects matching the current filters, recomputed on every call.
    pub fn filtered_projects(&self) -> Vec<&Project> {
        filter_projects(&self.projects, &self.filters)
    }

    pub fn get_project(&self, id: Uuid) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn require_project(&self, id: Uuid) -> Result<&Project> {
        self.get_project(id).ok_or(PortfolioError::ProjectNotFound(id))
    }

    /// Employees eligible to manage a project.
    pub fn project_managers(&self) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|employee| employee.is_project_manager())
            .collect()
    }

    /// Append a project, stamping both timestamps with the current time.
    pub fn add_project(&mut self, mut project: Project) -> &Project {
        let now = Utc::now();
        project.created_at = now;
        project.updated_at = now;

        tracing::info!(id = %project.id, name = %project.name, "Project added");
        self.projects.push(project);
        &self.projects[self.projects.len() - 1]
    }

    /// Build a project from form input and add it.
    pub fn create_project(&mut self, input: CreateProjectInput) -> Result<&Project> {
        let project = Project::from_input(input, Utc::now())?;
        Ok(self.add_project(project))
    }

    /// Replace the project with the same id. Returns false if none exists.
    pub fn update_project(&mut self, mut project: Project) -> bool {
        let Some(slot) = self.projects.iter_mut().find(|p| p.id == project.id) else {
            tracing::warn!(id = %project.id, "Update for unknown project ignored");
            return false;
        };

        project.updated_at = Utc::now();
        tracing::info!(id = %project.id, "Project updated");
        *slot = project;
        true
    }

    /// Remove a project by id. Returns false if none exists.
    pub fn delete_project(&mut self, id: Uuid) -> bool {
        let before = self.projects.len();
        self.projects.retain(|project| project.id != id);

        let deleted = self.projects.len() != before;
        if deleted {
            tracing::info!(id = %id, "Project deleted");
        }
        deleted
    }
}
