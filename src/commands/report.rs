//! Client report command.
//!
//! Loads every entry of the period, narrows it to one client and a set of
//! its projects, prints the table and weekly hours, then writes the report in
//! the requested format. Each choice comes from a flag when given and from a
//! prompt otherwise.

use super::SourceArgs;
use crate::{
    libs::{
        config::Config,
        entry::ReportDataset,
        export::{ExportFormat, Exporter},
        filter::{filter_by_client_interactive, select_projects, ProjectSelection},
        messages::Message,
        pdf::{report_file_name, ManualRow, ReportLayout, ReportRow},
        selector::{PromptSelector, ScriptedSelector},
        summary::weekly_hours,
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Client by list number or name; prompts when omitted
    #[arg(short, long)]
    client: Option<String>,

    /// Client id to use when several clients share the given name
    #[arg(long, requires = "client")]
    client_id: Option<String>,

    /// Project name to include, repeatable
    #[arg(short, long = "project")]
    projects: Vec<String>,

    /// Include every project of the client without asking
    #[arg(long, conflicts_with = "projects")]
    all_projects: bool,

    #[arg(short, long, value_enum, default_value = "pdf")]
    format: ExportFormat,

    /// Output file, defaults to e.g. Acme_Website_2024-01.pdf in the current directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Description of an extra line printed below the entries, not added to the total
    #[arg(long)]
    extra_description: Option<String>,

    /// Hours shown on the extra line
    #[arg(long)]
    extra_hours: Option<f64>,
}

impl ReportArgs {
    fn manual_row(&self) -> Result<Option<ManualRow>> {
        match (&self.extra_description, self.extra_hours) {
            (Some(description), Some(hours)) => Ok(Some(ManualRow {
                description: description.clone(),
                hours,
            })),
            (None, None) => Ok(None),
            _ => msg_bail_anyhow!(Message::ManualRowIncomplete),
        }
    }

    fn choose_projects(&self, dataset: &ReportDataset) -> Result<ProjectSelection> {
        let selection = if self.all_projects {
            select_projects(dataset, &mut ScriptedSelector::default())?
        } else if !self.projects.is_empty() {
            select_projects(dataset, &mut ScriptedSelector::default().with_projects(self.projects.clone()))?
        } else {
            select_projects(dataset, &mut PromptSelector)?
        };
        Ok(selection)
    }
}

pub async fn cmd(args: ReportArgs) -> Result<()> {
    let manual_row = args.manual_row()?;
    let config = Config::read()?;
    let report_config = config.report.clone().unwrap_or_default();
    let separator = report_config.decimal_separator;

    let (range, dataset) = args.source.load(&config).await?;
    if dataset.is_empty() {
        return Ok(());
    }

    let (client_rows, client) = match &args.client {
        Some(answer) => {
            let mut selector = ScriptedSelector::new(answer.clone());
            if let Some(id) = &args.client_id {
                selector = selector.then(id.clone());
            }
            filter_by_client_interactive(&dataset, &mut selector)?
        }
        None => filter_by_client_interactive(&dataset, &mut PromptSelector)?,
    };
    msg_info!(Message::ClientSelected(client.name.clone()));

    let selection = args.choose_projects(&client_rows)?;
    if selection.all {
        msg_info!(Message::AllProjectsSelected);
    } else {
        msg_info!(Message::ProjectsSelected(selection.projects.join(", ")));
    }

    let entries = selection.dataset.clone().sorted_by_start();
    if entries.is_empty() {
        msg_warning!(Message::NoRowsForSelection);
        return Ok(());
    }
    let rows: Vec<ReportRow> = entries.iter().map(ReportRow::from).collect();

    msg_print!(Message::ReportHeader(client.name.clone(), range.title()), true);
    View::rows(&rows, manual_row.as_ref(), separator);
    msg_print!(Message::WeeklyHoursHeader, true);
    View::weeks(&weekly_hours(&entries), separator);

    let logo_path = match report_config.logo_path {
        Some(path) if path.exists() => Some(path),
        Some(path) => {
            msg_warning!(Message::LogoMissing(path.display().to_string()));
            None
        }
        None => None,
    };

    let layout = ReportLayout {
        title: range.title(),
        company_name: report_config.company_name,
        logo_path,
        manual_row,
        decimal_separator: separator,
    };

    let output = args.output.clone().unwrap_or_else(|| {
        PathBuf::from(report_file_name(&client.name, &selection.projects, &range, selection.all)).with_extension(args.format.extension())
    });
    Exporter::new(args.format, output).export(&rows, &layout)?;
    Ok(())
}
