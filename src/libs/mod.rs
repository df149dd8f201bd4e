//! Core library modules for clockrep.
//!
//! ## Features
//!
//! - **Input**: date normalization and report periods
//! - **Data**: resolved time entries, client and project filtering, weekly sums
//! - **Output**: PDF rendering, CSV/JSON/Excel export, console tables
//! - **Infrastructure**: configuration, credentials, messaging, errors

pub mod config;
pub mod credentials;
pub mod data_storage;
pub mod dates;
pub mod entry;
pub mod error;
pub mod export;
pub mod filter;
pub mod formatter;
pub mod messages;
pub mod pdf;
pub mod selector;
pub mod summary;
pub mod view;
