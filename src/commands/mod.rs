pub mod clients;
pub mod init;
pub mod report;
pub mod summary;

use crate::{
    api::Clockify,
    libs::{
        config::Config,
        credentials::{Credentials, CredentialsSource},
        dates::DateRange,
        entry::ReportDataset,
        messages::Message,
    },
    msg_info, msg_warning,
};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::IsTerminal;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Build a client report from Clockify time entries")]
    Report(report::ReportArgs),
    #[command(about = "List clients with booked time in a period")]
    Clients(clients::ClientsArgs),
    #[command(about = "Hours per calendar week")]
    Summary(summary::SummaryArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Report(args) => report::cmd(args).await,
            Commands::Clients(args) => clients::cmd(args).await,
            Commands::Summary(args) => summary::cmd(args).await,
        }
    }
}

/// Period and account options shared by every command that loads entries.
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// First day of the period (DD.MM.YYYY or YYYY-MM-DD), defaults to the first of this month
    #[arg(short, long)]
    pub start: Option<String>,

    /// Last day of the period, defaults to the end of this month
    #[arg(short, long)]
    pub end: Option<String>,

    /// Named account from the configuration file instead of CLOCKIFY_* variables
    #[arg(short, long)]
    pub account: Option<String>,
}

impl SourceArgs {
    /// The requested period. Missing bounds are asked for on a terminal and
    /// taken from the current month otherwise.
    pub fn range(&self) -> Result<DateRange> {
        let month = DateRange::current_month();
        let interactive = std::io::stdin().is_terminal();

        let start = Self::bound(&self.start, month.start_date().format("%d.%m.%Y").to_string(), Message::PromptStartDate, interactive)?;
        let end = Self::bound(&self.end, month.end_date().format("%d.%m.%Y").to_string(), Message::PromptEndDate, interactive)?;

        Ok(DateRange::parse(&start, &end)?)
    }

    fn bound(given: &Option<String>, default: String, prompt: Message, interactive: bool) -> Result<String> {
        match given {
            Some(value) => Ok(value.clone()),
            None if interactive => Ok(Input::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt.to_string())
                .default(default)
                .interact_text()?),
            None => Ok(default),
        }
    }

    pub fn credentials(&self, config: &Config) -> Result<Credentials> {
        if let Some(name) = &self.account {
            msg_info!(Message::UsingAccount(name.clone()));
        }
        Ok(Credentials::resolve(&CredentialsSource::from_account(self.account.clone()), config)?)
    }

    /// Resolves credentials and loads every entry of the period.
    pub async fn load(&self, config: &Config) -> Result<(DateRange, ReportDataset)> {
        let range = self.range()?;
        let credentials = self.credentials(config)?;
        let clockify = Clockify::new(&credentials, &config.clockify.clone().unwrap_or_default())?;

        msg_info!(Message::LoadingEntries(range.title()));
        let dataset = clockify.get_entries_by_date(range.start(), range.end()).await?;

        if dataset.is_empty() {
            msg_warning!(Message::NoEntriesInRange(
                range.start_date().format("%d.%m.%Y").to_string(),
                range.end_date().format("%d.%m.%Y").to_string()
            ));
        } else {
            msg_info!(Message::EntriesLoaded(dataset.len()));
        }

        Ok((range, dataset))
    }
}
