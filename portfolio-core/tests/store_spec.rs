use speculate2::speculate;

speculate! {
    use portfolio_core::models::*;
    use portfolio_core::{Dataset, Portfolio, PortfolioError};
    use uuid::Uuid;

    fn setup_portfolio() -> Portfolio {
        Dataset::sample()
            .expect("Failed to load sample dataset")
            .into_portfolio()
    }

    fn new_project_input(manager: Uuid) -> CreateProjectInput {
        CreateProjectInput {
            name: "Loyalty Kiosk".into(),
            client: "FashionRetail Inc.".into(),
            description: "In-store kiosk for the loyalty programme".into(),
            status: ProjectStatus::Active,
            category: ProjectCategory::Desktop,
            start_date: "2025-09-01".into(),
            end_date: "2025-12-15".into(),
            project_manager: manager,
            budget: 40000.0,
            tags: "retail, kiosk".into(),
            priority: Priority::Low,
        }
    }

    describe "filters" {
        it "starts unfiltered" {
            let portfolio = setup_portfolio();
            assert!(portfolio.filters().is_empty());
            assert_eq!(portfolio.filtered_projects().len(), portfolio.projects().len());
        }

        it "applies the current spec on every read" {
            let mut portfolio = setup_portfolio();
            portfolio.set_filters(FilterSpec::new().with_status(ProjectStatus::OnHold));
            assert_eq!(portfolio.filtered_projects().len(), 1);

            portfolio.clear_filters();
            assert_eq!(portfolio.filtered_projects().len(), 3);
        }

        it "reflects project mutations without re-setting filters" {
            let mut portfolio = setup_portfolio();
            portfolio.set_filters(FilterSpec::new().with_search("kiosk"));
            assert!(portfolio.filtered_projects().is_empty());

            let manager = portfolio.project_managers()[0].id;
            portfolio.create_project(new_project_input(manager)).unwrap();

            let filtered = portfolio.filtered_projects();
            assert_eq!(filtered.len(), 1);
            assert_eq!(filtered[0].name, "Loyalty Kiosk");
        }
    }

    describe "create_project" {
        it "appends a project with a discovery phase and no expenses" {
            let mut portfolio = setup_portfolio();
            let manager = portfolio.project_managers()[0].id;

            let id = portfolio.create_project(new_project_input(manager)).unwrap().id;

            let last = portfolio.projects().last().unwrap();
            assert_eq!(last.id, id);
            assert_eq!(last.expenses, 0.0);
            assert_eq!(last.tags, vec!["retail", "kiosk"]);
            assert_eq!(last.phases.len(), 1);
            assert_eq!(last.phases[0].kind, PhaseKind::Discovery);
            assert_eq!(last.phases[0].project_id, id);
        }

        it "rejects malformed dates without adding anything" {
            let mut portfolio = setup_portfolio();
            let mut input = new_project_input(Uuid::new_v4());
            input.start_date = "September 1st".into();

            let err = portfolio.create_project(input).unwrap_err();
            assert!(matches!(err, PortfolioError::InvalidDate { field: "start_date", .. }));
            assert_eq!(portfolio.projects().len(), 3);
        }
    }

    describe "add_project" {
        it "stamps both timestamps" {
            let mut portfolio = setup_portfolio();
            let mut project = portfolio.projects()[0].clone();
            project.id = Uuid::new_v4();
            let original_created = project.created_at;

            let added = portfolio.add_project(project);
            assert!(added.created_at > original_created);
            assert_eq!(added.created_at, added.updated_at);
        }
    }

    describe "update_project" {
        it "replaces the project and bumps updated_at" {
            let mut portfolio = setup_portfolio();
            let mut project = portfolio.projects()[1].clone();
            let previous = project.updated_at;
            project.expenses = 200000.0;

            assert!(portfolio.update_project(project.clone()));

            let stored = portfolio.get_project(project.id).unwrap();
            assert_eq!(stored.expenses, 200000.0);
            assert!(stored.updated_at > previous);
            assert_eq!(stored.created_at, project.created_at);
        }

        it "keeps the project position" {
            let mut portfolio = setup_portfolio();
            let project = portfolio.projects()[1].clone();

            portfolio.update_project(project.clone());
            assert_eq!(portfolio.projects()[1].id, project.id);
        }

        it "returns false for unknown projects" {
            let mut portfolio = setup_portfolio();
            let mut project = portfolio.projects()[0].clone();
            project.id = Uuid::new_v4();

            assert!(!portfolio.update_project(project));
            assert_eq!(portfolio.projects().len(), 3);
        }
    }

    describe "delete_project" {
        it "removes the project" {
            let mut portfolio = setup_portfolio();
            let id = portfolio.projects()[0].id;

            assert!(portfolio.delete_project(id));
            assert!(portfolio.get_project(id).is_none());
            assert_eq!(portfolio.projects().len(), 2);
        }

        it "returns false for unknown ids" {
            let mut portfolio = setup_portfolio();
            assert!(!portfolio.delete_project(Uuid::new_v4()));
        }
    }

    describe "lookups" {
        it "reports unknown projects as errors when required" {
            let portfolio = setup_portfolio();
            let id = Uuid::new_v4();

            let err = portfolio.require_project(id).unwrap_err();
            assert!(matches!(err, PortfolioError::ProjectNotFound(missing) if missing == id));
        }

        it "lists employees with the project manager role" {
            let portfolio = setup_portfolio();
            let managers = portfolio.project_managers();

            assert_eq!(managers.len(), 1);
            assert_eq!(managers[0].name, "Emma Rodriguez");
        }

        it "resolves a project's manager" {
            let portfolio = setup_portfolio();
            let project = &portfolio.projects()[0];

            let manager = project.manager(portfolio.employees()).unwrap();
            assert_eq!(manager.role, "Project Manager");
        }
    }
}
