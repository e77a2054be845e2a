use chrono::{DateTime, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::employee::{find_employee, Employee};
use super::phase::{Phase, PhaseKind, PhaseStatus};
use super::tone::Tone;
use crate::dates::parse_date;
use crate::error::Result;

/// Planned hours for the discovery phase every new project starts with.
pub const DEFAULT_DISCOVERY_HOURS: f64 = 40.0;

const DEFAULT_DISCOVERY_DELIVERABLES: [&str; 3] = [
    "Requirements Document",
    "Project Plan",
    "Technical Specification",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub client: String,
    #[serde(default)]
    pub description: String,
    pub status: ProjectStatus,
    pub category: ProjectCategory,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Employee id of the project manager.
    pub project_manager: Uuid,
    pub budget: f64,
    pub expenses: f64,
    /// Ordered; the order defines the project timeline.
    #[serde(default)]
    pub phases: Vec<Phase>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Build a project from new-project form input.
    ///
    /// The project starts with no expenses and a single, not yet started
    /// discovery phase spanning the first month.
    pub fn from_input(input: CreateProjectInput, now: DateTime<Utc>) -> Result<Self> {
        let start_date = parse_date("start_date", &input.start_date)?;
        let end_date = parse_date("end_date", &input.end_date)?;
        let id = Uuid::new_v4();

        let discovery_end = start_date
            .checked_add_months(Months::new(1))
            .unwrap_or(start_date);

        let discovery = Phase {
            id: Uuid::new_v4(),
            project_id: id,
            kind: PhaseKind::Discovery,
            name: "Discovery Phase".into(),
            description: "Initial project discovery and requirements gathering".into(),
            status: PhaseStatus::NotStarted,
            start_date,
            end_date: discovery_end,
            estimated_hours: DEFAULT_DISCOVERY_HOURS,
            actual_hours: 0.0,
            assignments: Vec::new(),
            deliverables: DEFAULT_DISCOVERY_DELIVERABLES
                .iter()
                .map(|d| d.to_string())
                .collect(),
        };

        Ok(Self {
            id,
            name: input.name,
            client: input.client,
            description: input.description,
            status: input.status,
            category: input.category,
            start_date,
            end_date,
            project_manager: input.project_manager,
            budget: input.budget,
            expenses: 0.0,
            phases: vec![discovery],
            tags: parse_tags(&input.tags),
            priority: input.priority,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn completed_phase_count(&self) -> usize {
        self.phases
            .iter()
            .filter(|phase| phase.status == PhaseStatus::Completed)
            .count()
    }

    pub fn manager<'a>(&self, employees: &'a [Employee]) -> Option<&'a Employee> {
        find_employee(employees, self.project_manager)
    }
}

/// Split a comma-separated tag list, trimming entries and dropping empty ones.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Active,
    Completed,
    OnHold,
    Cancelled,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        Self::Active,
        Self::Completed,
        Self::OnHold,
        Self::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::OnHold => "on-hold",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            "on-hold" => Some(Self::OnHold),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::OnHold => "On Hold",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::Active => Tone::Positive,
            Self::Completed => Tone::Informational,
            Self::OnHold => Tone::Caution,
            Self::Cancelled => Tone::Negative,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectCategory {
    Web,
    Mobile,
    Desktop,
    Devops,
    Infrastructure,
    Other,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 6] = [
        Self::Web,
        Self::Mobile,
        Self::Desktop,
        Self::Devops,
        Self::Infrastructure,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
            Self::Devops => "devops",
            Self::Infrastructure => "infrastructure",
            Self::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "web" => Some(Self::Web),
            "mobile" => Some(Self::Mobile),
            "desktop" => Some(Self::Desktop),
            "devops" => Some(Self::Devops),
            "infrastructure" => Some(Self::Infrastructure),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Web => "Web",
            Self::Mobile => "Mobile",
            Self::Desktop => "Desktop",
            Self::Devops => "DevOps",
            Self::Infrastructure => "Infrastructure",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::Low => Tone::Informational,
            Self::Medium => Tone::Positive,
            Self::High => Tone::Caution,
            Self::Critical => Tone::Negative,
        }
    }
}

/// Fields collected by the new-project form. Dates are raw `YYYY-MM-DD`
/// strings as entered; tags are a single comma-separated string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProjectInput {
    pub name: String,
    pub client: String,
    #[serde(default)]
    pub description: String,
    pub status: ProjectStatus,
    pub category: ProjectCategory,
    pub start_date: String,
    pub end_date: String,
    pub project_manager: Uuid,
    pub budget: f64,
    #[serde(default)]
    pub tags: String,
    pub priority: Priority,
}
