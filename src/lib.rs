//! Command-line front end for the portfolio dashboard.
//!
//! Domain logic lives in `portfolio_core`; this crate resolves configuration
//! and renders reports.

pub mod config;
pub mod report;

pub use portfolio_core::{metrics, models, DashboardSummary, Dataset, Portfolio};
