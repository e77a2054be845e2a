use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role name that qualifies an employee to manage projects.
pub const PROJECT_MANAGER_ROLE: &str = "Project Manager";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub hourly_rate: f64,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Hours per week.
    pub availability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Employee {
    pub fn is_project_manager(&self) -> bool {
        self.role == PROJECT_MANAGER_ROLE
    }
}

/// Look up an employee by identity.
pub fn find_employee(employees: &[Employee], id: Uuid) -> Option<&Employee> {
    employees.iter().find(|employee| employee.id == id)
}
