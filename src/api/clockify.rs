//! Clockify client: master lists, per-user time entries and their aggregation.
//!
//! Provides the report pipeline's data source. A [`Clockify`] value is built
//! from explicit [`Credentials`] and walks the workspace in a fixed order:
//! projects, clients, users, then each user's entries for the range.
//!
//! ## Features
//!
//! - **Master Lists**: projects, clients and users fetched once per request
//! - **Join**: entry → project → client, with blank names when a lookup misses
//! - **Derived Fields**: fractional hours rounded to two decimals
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clockrep::api::clockify::{Clockify, ClockifyConfig};
//! use clockrep::libs::credentials::{Credentials, CredentialsSource};
//! use clockrep::libs::{config::Config, dates::DateRange};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let credentials = Credentials::resolve(&CredentialsSource::Env, &Config::default())?;
//! let clockify = Clockify::new(&credentials, &ClockifyConfig::default())?;
//! let range = DateRange::parse("01.01.2024", "31.01.2024")?;
//! let dataset = clockify.get_entries_by_date(range.start(), range.end()).await?;
//! println!("{} entries", dataset.len());
//! # Ok(())
//! # }
//! ```

use super::{fetch_all, http::HttpSource, PageSource};
use crate::libs::{
    config::ConfigModule,
    credentials::Credentials,
    dates::to_canonical,
    entry::{round_hours, ReportDataset, TimeEntry},
    error::ReportError,
    formatter::duration_hours,
    messages::Message,
};
use crate::msg_print;
use chrono::{DateTime, Utc};
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

pub const DEFAULT_PAGE_SIZE: usize = 1000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Project master record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub client_id: Option<String>,
}

/// Client master record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkspaceUser {
    pub id: String,
    pub name: String,
}

/// Time entry as returned by the provider, before the join.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTimeEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub project_id: Option<String>,
    pub time_interval: TimeInterval,
    #[serde(default)]
    pub task: Option<TaskRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimeInterval {
    pub start: DateTime<Utc>,
    /// Absent while the timer is still running.
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
}

/// Hydrated task reference carried by an entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskRef {
    #[serde(default)]
    pub name: String,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

fn null_as_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Project and client master lists indexed by id.
#[derive(Debug, Default)]
pub struct MasterLists {
    projects: HashMap<String, Project>,
    clients: HashMap<String, Client>,
}

impl MasterLists {
    pub fn new(projects: Vec<Project>, clients: Vec<Client>) -> Self {
        Self {
            projects: projects.into_iter().map(|p| (p.id.clone(), p)).collect(),
            clients: clients.into_iter().map(|c| (c.id.clone(), c)).collect(),
        }
    }

    /// Joins one raw entry. Lookups that miss leave the name blank.
    pub fn resolve(&self, user: &WorkspaceUser, raw: RawTimeEntry) -> TimeEntry {
        let project_id = raw.project_id.unwrap_or_default();
        let project = self.projects.get(&project_id);
        if project.is_none() && !project_id.is_empty() {
            tracing::warn!(project_id = %project_id, "project missing from master list");
        }

        let client_id = project.and_then(|p| p.client_id.clone()).unwrap_or_default();
        let client_name = self.clients.get(&client_id).map(|c| c.name.clone()).unwrap_or_default();
        if client_name.is_empty() && !client_id.is_empty() {
            tracing::warn!(client_id = %client_id, "client missing from master list");
        }

        let duration_hours = match raw.time_interval.end {
            Some(end) => round_hours(duration_hours(&(end - raw.time_interval.start))),
            None => 0.0,
        };

        TimeEntry {
            description: raw.description,
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            client_id,
            client_name,
            project_name: project.map(|p| p.name.clone()).unwrap_or_default(),
            project_id,
            task_name: raw.task.map(|t| t.name).unwrap_or_default(),
            start: raw.time_interval.start,
            duration_hours,
        }
    }
}

/// Clockify workspace client, generic over the page transport.
pub struct Clockify<S = HttpSource> {
    source: S,
    workspace_id: String,
}

impl Clockify<HttpSource> {
    pub fn new(credentials: &Credentials, config: &ClockifyConfig) -> Result<Self, ReportError> {
        Ok(Self::with_source(HttpSource::new(credentials, config)?, &credentials.workspace_id))
    }
}

impl<S: PageSource> Clockify<S> {
    pub fn with_source(source: S, workspace_id: &str) -> Self {
        Self {
            source,
            workspace_id: workspace_id.to_string(),
        }
    }

    pub async fn projects(&self) -> Result<Vec<Project>, ReportError> {
        fetch_all(&self.source, &format!("/workspaces/{}/projects", self.workspace_id), &[]).await
    }

    pub async fn clients(&self) -> Result<Vec<Client>, ReportError> {
        fetch_all(&self.source, &format!("/workspaces/{}/clients", self.workspace_id), &[]).await
    }

    pub async fn users(&self) -> Result<Vec<WorkspaceUser>, ReportError> {
        fetch_all(&self.source, &format!("/workspaces/{}/users", self.workspace_id), &[]).await
    }

    pub async fn user_entries(&self, user_id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Vec<RawTimeEntry>, ReportError> {
        let endpoint = format!("/workspaces/{}/user/{}/time-entries", self.workspace_id, user_id);
        fetch_all(&self.source, &endpoint, &[("start", to_canonical(&start)), ("end", to_canonical(&end))]).await
    }

    /// Every entry of every workspace user within `[start, end]`, resolved against the master lists.
    ///
    /// Entries appear in user order, then in the order the provider returned
    /// them. A failed master-list fetch fails the whole request.
    pub async fn get_entries_by_date(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<ReportDataset, ReportError> {
        let masters = MasterLists::new(self.projects().await?, self.clients().await?);
        let users = self.users().await?;
        if users.is_empty() {
            tracing::warn!(workspace = %self.workspace_id, "workspace has no users");
        }

        let mut entries = Vec::new();
        for user in &users {
            let raw_entries = self.user_entries(&user.id, start, end).await?;
            tracing::debug!(user = %user.name, count = raw_entries.len(), "entries for user");
            entries.extend(raw_entries.into_iter().map(|raw| masters.resolve(user, raw)));
        }

        tracing::info!(users = users.len(), entries = entries.len(), "aggregated time entries");
        Ok(ReportDataset::new(entries))
    }
}

/// Transport settings for provider calls.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClockifyConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ClockifyConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClockifyConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "clockify".to_string(),
            name: "Clockify connection".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> anyhow::Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleClockify);
        Ok(Self {
            page_size: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptPageSize.to_string())
                .default(config.page_size)
                .interact_text()?,
            timeout_secs: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTimeout.to_string())
                .default(config.timeout_secs)
                .interact_text()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user() -> WorkspaceUser {
        WorkspaceUser {
            id: "u1".into(),
            name: "Anna".into(),
        }
    }

    fn raw(value: serde_json::Value) -> RawTimeEntry {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn resolves_names_through_project_client() {
        let masters = MasterLists::new(
            vec![Project {
                id: "p1".into(),
                name: "Website".into(),
                client_id: Some("c1".into()),
            }],
            vec![Client {
                id: "c1".into(),
                name: "Acme".into(),
            }],
        );
        let entry = masters.resolve(
            &user(),
            raw(json!({
                "description": "Landing page",
                "projectId": "p1",
                "task": { "name": "Design" },
                "timeInterval": { "start": "2024-01-05T08:00:00Z", "end": "2024-01-05T09:30:00Z" }
            })),
        );

        assert_eq!(entry.project_name, "Website");
        assert_eq!(entry.client_id, "c1");
        assert_eq!(entry.client_name, "Acme");
        assert_eq!(entry.task_name, "Design");
        assert_eq!(entry.user_name, "Anna");
        assert_eq!(entry.duration_hours, 1.5);
    }

    #[test]
    fn missing_lookups_leave_blank_names() {
        let masters = MasterLists::default();
        let entry = masters.resolve(
            &user(),
            raw(json!({
                "description": null,
                "projectId": "gone",
                "timeInterval": { "start": "2024-01-05T08:00:00Z", "end": "2024-01-05T08:20:00Z" }
            })),
        );

        assert_eq!(entry.project_id, "gone");
        assert_eq!(entry.project_name, "");
        assert_eq!(entry.client_name, "");
        assert_eq!(entry.description, "");
        assert_eq!(entry.duration_hours, 0.33);
    }

    #[test]
    fn running_timer_counts_zero_hours() {
        let entry = MasterLists::default().resolve(
            &user(),
            raw(json!({
                "description": "Still going",
                "timeInterval": { "start": "2024-01-05T08:00:00Z", "end": null }
            })),
        );
        assert_eq!(entry.duration_hours, 0.0);
        assert_eq!(entry.project_id, "");
    }

    #[test]
    fn blank_client_id_on_project_is_none() {
        let project: Project = serde_json::from_value(json!({ "id": "p1", "name": "Internal", "clientId": "" })).unwrap();
        assert_eq!(project.client_id, None);
    }
}
