//! User-facing text for every [`Message`].
//!
//! All terminal wording lives here so that commands only deal with typed
//! message values.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigPath(path) => format!("Configuration file: {}", path),
            Message::ConfigModuleClockify => "Clockify connection settings".to_string(),
            Message::ConfigModuleReport => "Report layout settings".to_string(),
            Message::ConfigModuleAccount => "Clockify account".to_string(),

            // === DATA LOADING MESSAGES ===
            Message::LoadingEntries(period) => format!("Loading time entries for {}...", period),
            Message::EntriesLoaded(count) => format!("Loaded {} time entries", count),
            Message::NoEntriesInRange(start, end) => format!("No time entries between {} and {}", start, end),
            Message::UsingAccount(name) => format!("Using account '{}'", name),

            // === SELECTION MESSAGES ===
            Message::ClientsHeader => "Clients in this period:".to_string(),
            Message::ClientsForRange(period) => format!("Clients with booked time in {}", period),
            Message::ClientSelected(name) => format!("Client: {}", name),
            Message::ProjectsSelected(names) => format!("Projects: {}", names),
            Message::AllProjectsSelected => "Projects: all".to_string(),
            Message::NoRowsForSelection => "The selection contains no time entries, nothing to report".to_string(),

            // === REPORT MESSAGES ===
            Message::ReportHeader(client, period) => format!("Report for {} ({})", client, period),
            Message::WeeklyHoursHeader => "Hours per calendar week".to_string(),
            Message::ReportSaved(path) => format!("Report saved to {}", path),
            Message::ManualRowIncomplete => "--extra-description and --extra-hours must be given together".to_string(),
            Message::LogoMissing(path) => format!("Logo file {} not found, the report is rendered without it", path),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select nodes to configure".to_string(),
            Message::PromptStartDate => "Start date (DD.MM.YYYY)".to_string(),
            Message::PromptEndDate => "End date (DD.MM.YYYY)".to_string(),
            Message::PromptClient => "Client number or name".to_string(),
            Message::PromptClientId(name) => format!("Several clients are named '{}', pick an id", name),
            Message::PromptProjects => "Projects (space to select, enter with none selected for all)".to_string(),
            Message::PromptAccountName => "Account name".to_string(),
            Message::PromptApiKey => "Clockify API key".to_string(),
            Message::PromptWorkspaceId => "Workspace id".to_string(),
            Message::PromptBaseUrl => "API base URL".to_string(),
            Message::PromptPageSize => "Records per page".to_string(),
            Message::PromptTimeout => "Request timeout in seconds".to_string(),
            Message::PromptCompanyName => "Company name".to_string(),
            Message::PromptLogoPath => "Logo file (PNG or JPEG, empty for none)".to_string(),
            Message::PromptDecimalSeparator => "Decimal separator for hours".to_string(),
        };
        write!(f, "{}", text)
    }
}
