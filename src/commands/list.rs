use crate::{
    libs::{config::Config, formatter::FormatEntries, messages::Message, summary, time, view::View},
    msg_bail_anyhow, msg_info,
    store::log::Log,
};
use anyhow::{Context, Result};
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, help = "Start date (YYYY-MM-DD), defaults to today")]
    from: Option<String>,
    #[arg(long, help = "End date (YYYY-MM-DD), defaults to --from")]
    to: Option<String>,
    #[arg(long, help = "List the whole log instead of a date range")]
    all: bool,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let log = Log::new(Config::read()?.log_path()?);
    let mut entries = log.read()?;

    let now_utc = time::now_utc();

    if !args.all {
        let today = time::now_local().date_naive();
        let from_date = match &args.from {
            Some(value) => time::parse_date(value)?,
            None => today,
        };
        let to_date = match &args.to {
            Some(value) => time::parse_date(value)?,
            None => from_date,
        };
        if to_date < from_date {
            msg_bail_anyhow!(Message::ReportEndBeforeStart);
        }

        let from = time::local_day_start(from_date).context("failed to resolve local day start")?;
        let to = time::local_day_end(to_date).context("failed to resolve local day end")?;
        entries = summary::filter_entries_by_range(&entries, time::to_utc(from), time::to_utc(to), now_utc);
    }

    if entries.is_empty() {
        msg_info!(Message::ReportEmpty);
        return Ok(());
    }

    View::entries(&entries.format(now_utc))?;
    Ok(())
}
