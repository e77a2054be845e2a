//! Core library for the portfolio dashboard.
//!
//! This crate provides the domain models, the derived-metrics and filtering
//! engines, and an in-memory state container, independent of any front end.
//!
//! # Usage
//!
//! ```no_run
//! use portfolio_core::models::*;
//! use portfolio_core::{metrics, Dataset};
//!
//! let portfolio = Dataset::sample()?.into_portfolio();
//!
//! for project in portfolio.filtered_projects() {
//!     let status = metrics::budget_status(project);
//!     println!("{} {}% {}", project.name, metrics::project_completion(project), status.label());
//! }
//! # Ok::<(), portfolio_core::PortfolioError>(())
//! ```

pub mod dataset;
pub mod dates;
pub mod error;
pub mod filter;
pub mod metrics;
pub mod models;
pub mod store;
pub mod summary;

// Re-export commonly used types at crate root
pub use dataset::Dataset;
pub use error::{PortfolioError, Result};
pub use store::Portfolio;
pub use summary::DashboardSummary;
