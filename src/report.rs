//! Plain-text rendering of projects, phases and the dashboard.
//!
//! Design: monochrome output; tones become a one-character marker so the
//! text stays readable when piped.

use std::fmt::Write;

use chrono::NaiveDate;
use portfolio_core::dates::{days_remaining, format_date};
use portfolio_core::metrics::{
    budget_status, budget_utilization, phase_completion, phase_cost, project_completion,
    project_cost, BudgetStatus,
};
use portfolio_core::models::{find_employee, Employee, Phase, Project, Tone};
use portfolio_core::DashboardSummary;
use serde::Serialize;
use uuid::Uuid;

const BAR_WIDTH: usize = 20;

/// Project detail arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One block per phase, stacked.
    Stacked,
    /// Phases side by side as timeline columns.
    Timeline,
}

/// One line of the project list.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectRow {
    pub id: Uuid,
    pub name: String,
    pub client: String,
    pub status: &'static str,
    pub priority: &'static str,
    pub completion: u32,
    pub budget_utilization: u32,
    pub budget_status: BudgetStatus,
    pub manager: Option<String>,
}

impl ProjectRow {
    pub fn new(project: &Project, employees: &[Employee]) -> Self {
        Self {
            id: project.id,
            name: project.name.clone(),
            client: project.client.clone(),
            status: project.status.as_str(),
            priority: project.priority.as_str(),
            completion: project_completion(project),
            budget_utilization: budget_utilization(project),
            budget_status: budget_status(project),
            manager: project.manager(employees).map(|e| e.name.clone()),
        }
    }
}

pub fn tone_marker(tone: Tone) -> char {
    match tone {
        Tone::Positive => '+',
        Tone::Informational => '*',
        Tone::Progress => '~',
        Tone::Caution => '!',
        Tone::Negative => 'x',
        Tone::Neutral => '-',
    }
}

pub fn progress_bar(percent: u32, width: usize) -> String {
    let filled = (percent.min(100) as usize * width) / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

fn money(amount: f64) -> String {
    format!("${:.0}", amount)
}

fn hours(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}h", amount)
    } else {
        format!("{:.1}h", amount)
    }
}

pub fn render_project_list(projects: &[&Project], employees: &[Employee]) -> String {
    let mut out = String::new();

    if projects.is_empty() {
        out.push_str("No projects match the current filters.\n");
        return out;
    }

    let _ = writeln!(
        out,
        "{:<36}  {:<32} {:<20} {:<11} {:<8} {:>5} {:>6}  {}",
        "ID", "NAME", "CLIENT", "STATUS", "PRIORITY", "DONE", "BUDGET", "HEALTH"
    );
    for project in projects {
        let row = ProjectRow::new(project, employees);
        let status = format!("{} {}", tone_marker(project.status.tone()), project.status.label());
        let _ = writeln!(
            out,
            "{:<36}  {:<32} {:<20} {:<11} {:<8} {:>4}% {:>5}%  {} {}",
            row.id,
            truncate(&row.name, 32),
            truncate(&row.client, 20),
            status,
            project.priority.label(),
            row.completion,
            row.budget_utilization,
            tone_marker(row.budget_status.risk_tier().tone()),
            row.budget_status.label(),
        );
    }
    let _ = writeln!(out, "\n{} project(s)", projects.len());
    out
}

pub fn render_project_detail(
    project: &Project,
    employees: &[Employee],
    today: NaiveDate,
    layout: Layout,
) -> String {
    let mut out = String::new();
    let completion = project_completion(project);
    let status = budget_status(project);

    let _ = writeln!(out, "{}", project.name);
    let _ = writeln!(out, "{}", "=".repeat(project.name.chars().count()));
    let _ = writeln!(out, "Client:      {}", project.client);
    let _ = writeln!(
        out,
        "Status:      {} {}    Priority: {} {}",
        tone_marker(project.status.tone()),
        project.status.label(),
        tone_marker(project.priority.tone()),
        project.priority.label(),
    );
    let _ = writeln!(out, "Category:    {}", project.category.label());
    let _ = writeln!(
        out,
        "Manager:     {}",
        project
            .manager(employees)
            .map(|e| e.name.as_str())
            .unwrap_or("(unassigned)")
    );
    let _ = writeln!(
        out,
        "Timeline:    {} - {} ({} days remaining)",
        format_date(project.start_date),
        format_date(project.end_date),
        days_remaining(project.end_date, today),
    );
    if !project.tags.is_empty() {
        let _ = writeln!(out, "Tags:        {}", project.tags.join(", "));
    }
    if !project.description.is_empty() {
        let _ = writeln!(out, "\n{}", project.description);
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Progress:    {} {}%  ({} of {} phases completed)",
        progress_bar(completion, BAR_WIDTH),
        completion,
        project.completed_phase_count(),
        project.phases.len(),
    );
    let _ = writeln!(
        out,
        "Budget:      {} {}%  {} / {}  {} {}",
        progress_bar(budget_utilization(project), BAR_WIDTH),
        budget_utilization(project),
        money(project.expenses),
        money(project.budget),
        tone_marker(status.risk_tier().tone()),
        status.label(),
    );
    let _ = writeln!(out, "Staff cost:  {}", money(project_cost(project, employees)));

    if project.phases.is_empty() {
        let _ = writeln!(out, "\nNo phases defined.");
        return out;
    }

    let _ = writeln!(out);
    match layout {
        Layout::Stacked => {
            for (index, phase) in project.phases.iter().enumerate() {
                render_phase_block(&mut out, index + 1, phase, employees);
            }
        }
        Layout::Timeline => render_phase_timeline(&mut out, &project.phases, employees),
    }
    out
}

fn render_phase_block(out: &mut String, number: usize, phase: &Phase, employees: &[Employee]) {
    let completion = phase_completion(phase);

    let _ = writeln!(
        out,
        "{}. {} [{}]  {} {}",
        number,
        phase.name,
        phase.kind.label(),
        tone_marker(phase.status.tone()),
        phase.status.label(),
    );
    let _ = writeln!(
        out,
        "   {} - {}",
        format_date(phase.start_date),
        format_date(phase.end_date)
    );
    let _ = writeln!(
        out,
        "   {} {}%  {} of {} estimated, cost {}",
        progress_bar(completion, BAR_WIDTH),
        completion,
        hours(phase.actual_hours),
        hours(phase.estimated_hours),
        money(phase_cost(phase, employees)),
    );

    for assignment in &phase.assignments {
        let name = find_employee(employees, assignment.employee_id)
            .map(|e| e.name.as_str())
            .unwrap_or("(unknown)");
        let flag = if assignment.is_over_allocated() {
            "  over allocation"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "   - {:<20} {} / {}{}",
            name,
            hours(assignment.hours_used),
            hours(assignment.hours_allocated),
            flag,
        );
    }

    if !phase.deliverables.is_empty() {
        let _ = writeln!(out, "   Deliverables: {}", phase.deliverables.join(", "));
    }
    let _ = writeln!(out);
}

fn render_phase_timeline(out: &mut String, phases: &[Phase], employees: &[Employee]) {
    const COLUMN: usize = 24;
    const LABELS: [&str; 6] = ["", "Type", "Status", "Dates", "Done", "Cost"];

    let columns: Vec<[String; 6]> = phases
        .iter()
        .map(|p| {
            let completion = phase_completion(p);
            [
                truncate(&p.name, COLUMN),
                p.kind.label().to_string(),
                format!("{} {}", tone_marker(p.status.tone()), p.status.label()),
                format!("{} - {}", p.start_date.format("%b %-d"), p.end_date.format("%b %-d")),
                format!("{} {}%", progress_bar(completion, 10), completion),
                money(phase_cost(p, employees)),
            ]
        })
        .collect();

    for (row, label) in LABELS.iter().enumerate() {
        let _ = write!(out, "{:<8}", label);
        for column in &columns {
            let _ = write!(out, " | {:<width$}", column[row], width = COLUMN);
        }
        let _ = writeln!(out);
    }
}

pub fn render_dashboard(summary: &DashboardSummary, projects: &[Project]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Dashboard");
    let _ = writeln!(out, "=========");
    let _ = writeln!(out, "Active projects:     {}", summary.active_projects);
    let _ = writeln!(out, "Completed projects:  {}", summary.completed_projects);
    let _ = writeln!(out, "On hold projects:    {}", summary.on_hold_projects);
    let _ = writeln!(out, "Team members:        {}", summary.team_size);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Total budget utilization: {} {}%  {} / {}",
        progress_bar(summary.budget_utilization, BAR_WIDTH),
        summary.budget_utilization,
        money(summary.total_expenses),
        money(summary.total_budget),
    );

    let _ = writeln!(out, "\nProjects at risk");
    if summary.at_risk.is_empty() {
        let _ = writeln!(out, "  none");
    }
    for id in &summary.at_risk {
        if let Some(project) = projects.iter().find(|p| p.id == *id) {
            let _ = writeln!(
                out,
                "  {} {:<32} {}% of budget",
                tone_marker(Tone::Negative),
                truncate(&project.name, 32),
                budget_utilization(project),
            );
        }
    }

    let _ = writeln!(out, "\nProject progress");
    for project in projects {
        let completion = project_completion(project);
        let _ = writeln!(
            out,
            "  {:<32} {} {:>3}%   budget {:>3}%",
            truncate(&project.name, 32),
            progress_bar(completion, BAR_WIDTH),
            completion,
            budget_utilization(project),
        );
    }
    out
}

pub fn render_team(employees: &[Employee]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<20} {:<20} {:>6} {:>6}  {}",
        "NAME", "ROLE", "RATE", "HRS/WK", "SKILLS"
    );
    for employee in employees {
        let _ = writeln!(
            out,
            "{:<20} {:<20} {:>6} {:>6}  {}",
            truncate(&employee.name, 20),
            truncate(&employee.role, 20),
            money(employee.hourly_rate),
            hours(employee.availability),
            employee.skills.join(", "),
        );
    }
    out
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('~');
    cut
}
