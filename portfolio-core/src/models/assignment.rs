use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One employee staffed on one phase of a project.
///
/// `hours_used` may exceed `hours_allocated`; over-allocation is a normal,
/// displayable state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub project_id: Uuid,
    pub phase_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub hours_allocated: f64,
    pub hours_used: f64,
}

impl Assignment {
    pub fn is_over_allocated(&self) -> bool {
        self.hours_used > self.hours_allocated
    }
}
