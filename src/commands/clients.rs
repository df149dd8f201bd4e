use super::SourceArgs;
use crate::{
    libs::{config::Config, filter::distinct_clients, messages::Message, view::View},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ClientsArgs {
    #[command(flatten)]
    source: SourceArgs,
}

pub async fn cmd(args: ClientsArgs) -> Result<()> {
    let config = Config::read()?;
    let (range, dataset) = args.source.load(&config).await?;

    let clients = distinct_clients(&dataset);
    if clients.is_empty() {
        return Ok(());
    }

    msg_print!(Message::ClientsForRange(range.title()), true);
    View::clients(&clients);
    Ok(())
}
