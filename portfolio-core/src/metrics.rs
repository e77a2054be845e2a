//! Derived progress and budget metrics.
//!
//! Every function here is total. Zero denominators (no estimated hours, no
//! budget, no phases) resolve to 0% instead of failing.

use serde::{Deserialize, Serialize};

use crate::models::{find_employee, Employee, Phase, PhaseStatus, Project, Tone};

/// An in-progress phase never reports more than this; only an explicit
/// `completed` status reaches 100.
pub const IN_PROGRESS_CEILING: u32 = 99;

fn percent(part: f64, whole: f64) -> u32 {
    if whole <= 0.0 {
        return 0;
    }
    // Float-to-int casts saturate, so negatives and NaN land on 0.
    ((part / whole) * 100.0).round() as u32
}

/// Completion of a single phase, 0..=100.
pub fn phase_completion(phase: &Phase) -> u32 {
    match phase.status {
        PhaseStatus::Completed => 100,
        PhaseStatus::NotStarted => 0,
        PhaseStatus::InProgress => {
            percent(phase.actual_hours, phase.estimated_hours).min(IN_PROGRESS_CEILING)
        }
    }
}

/// Completion of a project, weighting each phase by its share of the total
/// estimated hours.
pub fn project_completion(project: &Project) -> u32 {
    if project.phases.is_empty() {
        return 0;
    }

    let total_weight: f64 = project.phases.iter().map(|p| p.estimated_hours).sum();
    if total_weight <= 0.0 {
        return 0;
    }

    let weighted: f64 = project
        .phases
        .iter()
        .map(|phase| f64::from(phase_completion(phase)) * (phase.estimated_hours / total_weight))
        .sum();

    weighted.round() as u32
}

/// Expenses as a percentage of budget. Exceeds 100 when over budget.
pub fn budget_utilization(project: &Project) -> u32 {
    percent(project.expenses, project.budget)
}

/// Four-tier budget classification.
pub fn budget_status(project: &Project) -> BudgetStatus {
    BudgetStatus::from_utilization(budget_utilization(project))
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Critical,
    Warning,
    Normal,
    Healthy,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Normal => "normal",
            Self::Healthy => "healthy",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::Critical => Tone::Negative,
            Self::Warning => Tone::Caution,
            Self::Normal => Tone::Informational,
            Self::Healthy => Tone::Positive,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    OverBudget,
    AtRisk,
    OnTrack,
    UnderBudget,
}

impl BudgetStatus {
    /// Thresholds are strict: exactly 90 is still on track, exactly 100 is
    /// at risk rather than over.
    pub fn from_utilization(utilization: u32) -> Self {
        match utilization {
            u if u > 100 => Self::OverBudget,
            u if u > 90 => Self::AtRisk,
            u if u > 70 => Self::OnTrack,
            _ => Self::UnderBudget,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OverBudget => "Over Budget",
            Self::AtRisk => "At Risk",
            Self::OnTrack => "On Track",
            Self::UnderBudget => "Under Budget",
        }
    }

    pub fn risk_tier(&self) -> RiskTier {
        match self {
            Self::OverBudget => RiskTier::Critical,
            Self::AtRisk => RiskTier::Warning,
            Self::OnTrack => RiskTier::Normal,
            Self::UnderBudget => RiskTier::Healthy,
        }
    }
}

/// Staffing cost of a phase: hours used times the employee's hourly rate.
/// Assignments referencing unknown employees cost nothing.
pub fn phase_cost(phase: &Phase, employees: &[Employee]) -> f64 {
    phase
        .assignments
        .iter()
        .filter_map(|assignment| {
            find_employee(employees, assignment.employee_id)
                .map(|employee| assignment.hours_used * employee.hourly_rate)
        })
        .sum()
}

pub fn project_cost(project: &Project, employees: &[Employee]) -> f64 {
    project
        .phases
        .iter()
        .map(|phase| phase_cost(phase, employees))
        .sum()
}
