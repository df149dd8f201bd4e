//! # clockrep - client reports from Clockify time entries
//!
//! Pulls every time entry of a workspace for a period, narrows them to one
//! client and its projects, and renders the result as a PDF report.
//!
//! ## Features
//!
//! - **Provider Access**: paginated Clockify v1 calls with per-user entry aggregation
//! - **Selection**: client choice by list number or name, project multi-select
//! - **Rendering**: A4 PDF with logo, totals and an optional manual line
//! - **Data Export**: the same table as CSV, JSON or Excel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clockrep::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
