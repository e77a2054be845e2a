use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::assignment::Assignment;
use super::tone::Tone;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub id: Uuid,
    pub project_id: Uuid,
    #[serde(rename = "type")]
    pub kind: PhaseKind,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: PhaseStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub estimated_hours: f64,
    pub actual_hours: f64,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    #[serde(default)]
    pub deliverables: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PhaseStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl PhaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "not-started" => Some(Self::NotStarted),
            "in-progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::NotStarted => Tone::Neutral,
            Self::InProgress => Tone::Progress,
            Self::Completed => Tone::Informational,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PhaseKind {
    Discovery,
    Design,
    Development,
    Maintenance,
}

impl PhaseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Discovery => "discovery",
            Self::Design => "design",
            Self::Development => "development",
            Self::Maintenance => "maintenance",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "discovery" => Some(Self::Discovery),
            "design" => Some(Self::Design),
            "development" => Some(Self::Development),
            "maintenance" => Some(Self::Maintenance),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Discovery => "Discovery",
            Self::Design => "Design",
            Self::Development => "Development",
            Self::Maintenance => "Maintenance",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_names_round_trip() {
        for status in [
            PhaseStatus::NotStarted,
            PhaseStatus::InProgress,
            PhaseStatus::Completed,
        ] {
            assert_eq!(PhaseStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(PhaseStatus::from_str("in_progress"), None);
    }

    #[test]
    fn kind_serializes_under_type_key() {
        let json = serde_json::json!({
            "id": Uuid::nil(),
            "project_id": Uuid::nil(),
            "type": "design",
            "name": "Design",
            "status": "in-progress",
            "start_date": "2025-02-16",
            "end_date": "2025-03-30",
            "estimated_hours": 120.0,
            "actual_hours": 60.0
        });

        let phase: Phase = serde_json::from_value(json).unwrap();
        assert_eq!(phase.kind, PhaseKind::Design);
        assert_eq!(phase.status, PhaseStatus::InProgress);
        assert!(phase.assignments.is_empty());
        assert!(phase.deliverables.is_empty());
    }
}
