use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use portfolio::config::Config;
use portfolio::models::{FilterSpec, ProjectCategory, ProjectStatus};
use portfolio::report::{self, Layout, ProjectRow};
use portfolio::{DashboardSummary, Dataset};

#[derive(Parser)]
#[command(name = "pfolio")]
#[command(about = "Project portfolio dashboard: progress, budgets and staffing")]
struct Cli {
    /// Dataset file (JSON). Falls back to $PORTFOLIO_DATA, then the user data dir
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Reference date for days remaining (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List projects matching the given filters
    Projects {
        #[command(flatten)]
        filters: FilterArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one project in detail
    Show {
        /// Project ID
        id: Uuid,

        /// Lay phases out side by side as a timeline
        #[arg(long)]
        horizontal: bool,
    },
    /// Portfolio-wide summary
    Dashboard {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List team members
    Team,
    /// Print the loaded dataset as JSON
    Export,
}

#[derive(Args, Default)]
struct FilterArgs {
    /// Project status (repeatable): active, completed, on-hold, cancelled
    #[arg(long, value_parser = parse_status)]
    status: Vec<ProjectStatus>,

    /// Category (repeatable): web, mobile, desktop, devops, infrastructure, other
    #[arg(long, value_parser = parse_category)]
    category: Vec<ProjectCategory>,

    /// Client name, exact match ignoring case
    #[arg(long)]
    client: Option<String>,

    /// Project manager employee ID
    #[arg(long)]
    manager: Option<Uuid>,

    /// Tag (repeatable); any one must match
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// Text to find in name, description or client
    #[arg(long)]
    search: Option<String>,

    /// Start of the date window
    #[arg(long, requires = "to")]
    from: Option<NaiveDate>,

    /// End of the date window
    #[arg(long, requires = "from")]
    to: Option<NaiveDate>,
}

impl FilterArgs {
    fn into_spec(self) -> FilterSpec {
        let mut spec = FilterSpec {
            status: self.status,
            category: self.category,
            client: self.client,
            project_manager: self.manager,
            tags: self.tags,
            search: self.search,
            ..FilterSpec::default()
        };
        if let (Some(from), Some(to)) = (self.from, self.to) {
            spec = spec.with_date_range(from, to);
        }
        spec
    }
}

fn parse_status(s: &str) -> Result<ProjectStatus, String> {
    ProjectStatus::from_str(s).ok_or_else(|| format!("unknown status '{}'", s))
}

fn parse_category(s: &str) -> Result<ProjectCategory, String> {
    ProjectCategory::from_str(s).ok_or_else(|| format!("unknown category '{}'", s))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "portfolio=debug,portfolio_core=debug"
    } else {
        "portfolio=info,portfolio_core=info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::resolve(cli.data, cli.today);
    tracing::debug!(?config, "Resolved configuration");

    let mut portfolio = config
        .load_portfolio()
        .context("Failed to load portfolio dataset")?;

    match cli.command {
        Some(Commands::Projects { filters, json }) => {
            portfolio.set_filters(filters.into_spec());
            let projects = portfolio.filtered_projects();

            if json {
                let rows: Vec<ProjectRow> = projects
                    .iter()
                    .map(|p| ProjectRow::new(p, portfolio.employees()))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print!("{}", report::render_project_list(&projects, portfolio.employees()));
            }
        }
        Some(Commands::Show { id, horizontal }) => {
            let project = portfolio.require_project(id)?;
            let layout = if horizontal {
                Layout::Timeline
            } else {
                Layout::Stacked
            };
            print!(
                "{}",
                report::render_project_detail(project, portfolio.employees(), config.today, layout)
            );
        }
        Some(Commands::Team) => {
            print!("{}", report::render_team(portfolio.employees()));
        }
        Some(Commands::Export) => {
            let dataset = Dataset {
                employees: portfolio.employees().to_vec(),
                projects: portfolio.projects().to_vec(),
            };
            println!("{}", dataset.to_json_pretty()?);
        }
        Some(Commands::Dashboard { json }) => print_dashboard(&portfolio, json)?,
        None => print_dashboard(&portfolio, false)?,
    }

    Ok(())
}

fn print_dashboard(portfolio: &portfolio::Portfolio, json: bool) -> anyhow::Result<()> {
    let summary = DashboardSummary::from_projects(portfolio.projects(), portfolio.employees());
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", report::render_dashboard(&summary, portfolio.projects()));
    }
    Ok(())
}
