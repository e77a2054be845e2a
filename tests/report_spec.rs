use speculate2::speculate;

speculate! {
    use portfolio::models::{FilterSpec, ProjectStatus};
    use portfolio::report::{render_dashboard, render_project_list, render_team};
    use portfolio::{DashboardSummary, Dataset, Portfolio};

    fn setup_portfolio() -> Portfolio {
        Dataset::sample()
            .expect("Failed to load sample dataset")
            .into_portfolio()
    }

    describe "project list" {
        it "prints one line per filtered project" {
            let mut portfolio = setup_portfolio();
            portfolio.set_filters(FilterSpec::new().with_status(ProjectStatus::Active));

            let text = render_project_list(&portfolio.filtered_projects(), portfolio.employees());

            assert!(text.contains("E-commerce Platform Redesign"));
            assert!(text.contains("Mobile Banking App"));
            assert!(!text.contains("DevOps Infrastructure Upgrade"));
            assert!(text.contains("2 project(s)"));
        }

        it "shows budget health labels" {
            let portfolio = setup_portfolio();
            let text = render_project_list(&portfolio.filtered_projects(), portfolio.employees());
            assert!(text.contains("Under Budget"));
        }
    }

    describe "dashboard" {
        it "reports counts and aggregate utilization" {
            let portfolio = setup_portfolio();
            let summary = DashboardSummary::from_projects(portfolio.projects(), portfolio.employees());

            let text = render_dashboard(&summary, portfolio.projects());
            assert!(text.contains("Active projects:     2"));
            assert!(text.contains("On hold projects:    1"));
            assert!(text.contains("Team members:        5"));
            assert!(text.contains("47%  $185000 / $390000"));
        }

        it "lists projects at risk by name" {
            let mut dataset = Dataset::sample().unwrap();
            dataset.projects[1].expenses = 175000.0;
            let summary = DashboardSummary::from_projects(&dataset.projects, &dataset.employees);

            let text = render_dashboard(&summary, &dataset.projects);
            assert!(text.contains("Mobile Banking App"));
            assert!(text.contains("97% of budget"));
            assert!(!text.contains("  none"));
        }
    }

    describe "team" {
        it "lists every employee with rate and availability" {
            let portfolio = setup_portfolio();
            let text = render_team(portfolio.employees());

            assert_eq!(text.lines().count(), 6);
            assert!(text.contains("Sarah Johnson"));
            assert!(text.contains("$70"));
            assert!(text.contains("30h"));
        }
    }
}
