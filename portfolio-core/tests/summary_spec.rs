use speculate2::speculate;

speculate! {
    use portfolio_core::metrics::{budget_status, budget_utilization, project_completion, BudgetStatus};
    use portfolio_core::models::*;
    use portfolio_core::{DashboardSummary, Dataset};

    fn sample() -> Dataset {
        Dataset::sample().expect("Failed to load sample dataset")
    }

    describe "sample dataset metrics" {
        it "derives completion for each project" {
            let dataset = sample();
            let completion: Vec<u32> = dataset.projects.iter().map(project_completion).collect();

            // Mobile: (100*100 + 100*150 + 45*400) / 770 = 55.8
            // DevOps: (100*60 + 67*120) / 280 = 50.1
            assert_eq!(completion, vec![69, 56, 50]);
        }

        it "derives budget utilization for each project" {
            let dataset = sample();
            let utilization: Vec<u32> = dataset.projects.iter().map(budget_utilization).collect();
            assert_eq!(utilization, vec![54, 50, 33]);

            assert!(dataset
                .projects
                .iter()
                .all(|p| budget_status(p) == BudgetStatus::UnderBudget));
        }

        it "counts completed phases" {
            let dataset = sample();
            let counts: Vec<usize> = dataset.projects.iter().map(|p| p.completed_phase_count()).collect();
            assert_eq!(counts, vec![2, 2, 1]);
        }
    }

    describe "dashboard summary" {
        it "aggregates the sample portfolio" {
            let dataset = sample();
            let summary = DashboardSummary::from_projects(&dataset.projects, &dataset.employees);

            assert_eq!(summary.active_projects, 2);
            assert_eq!(summary.completed_projects, 0);
            assert_eq!(summary.on_hold_projects, 1);
            assert_eq!(summary.team_size, 5);
            assert_eq!(summary.total_budget, 390000.0);
            assert_eq!(summary.total_expenses, 185000.0);
            assert_eq!(summary.budget_utilization, 47);
            assert!(summary.at_risk.is_empty());
        }

        it "flags only active projects above the risk threshold" {
            let mut dataset = sample();
            // Active and over 90%.
            dataset.projects[0].expenses = 110000.0;
            // Exactly 90% stays off the list.
            dataset.projects[1].expenses = 162000.0;
            // Over budget but on hold.
            dataset.projects[2].expenses = 95000.0;

            let summary = DashboardSummary::from_projects(&dataset.projects, &dataset.employees);
            assert_eq!(summary.at_risk, vec![dataset.projects[0].id]);
        }

        it "is all zeros for an empty portfolio" {
            let summary = DashboardSummary::from_projects(&[], &[]);
            assert_eq!(summary.active_projects, 0);
            assert_eq!(summary.team_size, 0);
            assert_eq!(summary.budget_utilization, 0);
            assert!(summary.at_risk.is_empty());
        }
    }
}
