use serde::Serialize;
use uuid::Uuid;

use crate::metrics::budget_utilization;
use crate::models::{Employee, Project, ProjectStatus};

/// Utilization above which an active project is flagged on the dashboard.
pub const AT_RISK_UTILIZATION: u32 = 90;

/// Portfolio-wide figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub active_projects: usize,
    pub completed_projects: usize,
    pub on_hold_projects: usize,
    pub team_size: usize,
    pub total_budget: f64,
    pub total_expenses: f64,
    /// Aggregate expenses over aggregate budget; 0 when there is no budget.
    pub budget_utilization: u32,
    /// Active projects whose own utilization exceeds the risk threshold.
    pub at_risk: Vec<Uuid>,
}

impl DashboardSummary {
    pub fn from_projects(projects: &[Project], employees: &[Employee]) -> Self {
        let count = |status: ProjectStatus| projects.iter().filter(|p| p.status == status).count();

        let total_budget: f64 = projects.iter().map(|p| p.budget).sum();
        let total_expenses: f64 = projects.iter().map(|p| p.expenses).sum();
        let budget_utilization_total = if total_budget > 0.0 {
            ((total_expenses / total_budget) * 100.0).round() as u32
        } else {
            0
        };

        let at_risk = projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Active)
            .filter(|p| budget_utilization(p) > AT_RISK_UTILIZATION)
            .map(|p| p.id)
            .collect();

        Self {
            active_projects: count(ProjectStatus::Active),
            completed_projects: count(ProjectStatus::Completed),
            on_hold_projects: count(ProjectStatus::OnHold),
            team_size: employees.len(),
            total_budget,
            total_expenses,
            budget_utilization: budget_utilization_total,
            at_risk,
        }
    }
}
