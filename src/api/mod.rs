//! Provider API access.
//!
//! The Clockify REST API hands out master lists and time entries one page at
//! a time. [`PageSource`] is the seam between the pagination logic and the
//! transport: [`http::HttpSource`] talks to the real service, tests plug in
//! an in-memory source.
//!
//! ## Pagination
//!
//! [`fetch_all`] asks for `page` 1, 2, … with a fixed `page-size` and stops at
//! the first page that is empty or shorter than the page size. Pages are
//! concatenated in request order.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clockrep::api::{fetch_all, http::HttpSource};
//! use clockrep::api::clockify::{Client, ClockifyConfig};
//! use clockrep::libs::credentials::{Credentials, CredentialsSource};
//! use clockrep::libs::config::Config;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let credentials = Credentials::resolve(&CredentialsSource::Env, &Config::default())?;
//! let source = HttpSource::new(&credentials, &ClockifyConfig::default())?;
//! let endpoint = format!("/workspaces/{}/clients", credentials.workspace_id);
//! let clients: Vec<Client> = fetch_all(&source, &endpoint, &[]).await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::error::ReportError;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub mod clockify;
pub mod http;

pub use clockify::{Clockify, ClockifyConfig};

/// Page-based endpoint family.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Number of records requested per page.
    fn page_size(&self) -> usize;

    /// Issues one request and returns the records of that page.
    ///
    /// `query` already carries the `page` and `page-size` parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Transport`] for a non-success status and
    /// [`ReportError::Http`] when the request itself fails.
    async fn get(&self, endpoint: &str, query: &[(String, String)]) -> Result<Vec<Value>, ReportError>;
}

impl<S: PageSource + ?Sized> PageSource for &S {
    fn page_size(&self) -> usize {
        (**self).page_size()
    }

    async fn get(&self, endpoint: &str, query: &[(String, String)]) -> Result<Vec<Value>, ReportError> {
        (**self).get(endpoint, query).await
    }
}

/// Retrieves every record behind `endpoint`, hiding pagination from the caller.
pub async fn fetch_all<T, S>(source: &S, endpoint: &str, params: &[(&str, String)]) -> Result<Vec<T>, ReportError>
where
    T: DeserializeOwned,
    S: PageSource,
{
    let page_size = source.page_size().max(1);
    let mut items = Vec::new();
    let mut page = 1usize;

    loop {
        let mut query = vec![
            ("page".to_string(), page.to_string()),
            ("page-size".to_string(), page_size.to_string()),
            ("hydrated".to_string(), "true".to_string()),
        ];
        query.extend(params.iter().map(|(k, v)| (k.to_string(), v.clone())));

        let batch = source.get(endpoint, &query).await?;
        let count = batch.len();
        tracing::debug!(endpoint, page, count, "fetched page");

        for record in batch {
            items.push(serde_json::from_value(record)?);
        }

        if count < page_size {
            break;
        }
        page += 1;
    }

    Ok(items)
}
