use super::SourceArgs;
use crate::{
    libs::{
        config::Config,
        filter::filter_by_client_interactive,
        messages::Message,
        selector::ScriptedSelector,
        summary::weekly_hours,
        view::View,
    },
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Only count this client, given by list number or name
    #[arg(short, long)]
    client: Option<String>,
}

pub async fn cmd(args: SummaryArgs) -> Result<()> {
    let config = Config::read()?;
    let (range, dataset) = args.source.load(&config).await?;
    let separator = config.report.map(|r| r.decimal_separator).unwrap_or(',');

    let (dataset, heading) = match &args.client {
        Some(client) => {
            let (rows, option) = filter_by_client_interactive(&dataset, &mut ScriptedSelector::new(client.clone()))?;
            (rows, option.name)
        }
        None => (dataset, "all clients".to_string()),
    };

    msg_print!(Message::ReportHeader(heading, range.title()), true);
    msg_print!(Message::WeeklyHoursHeader);
    View::weeks(&weekly_hours(&dataset), separator);
    Ok(())
}
