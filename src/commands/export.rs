use crate::{
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
        summary, time,
    },
    msg_bail_anyhow, msg_info, msg_success,
    store::log::Log,
};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(long, value_enum, default_value = "csv", help = "Output format")]
    format: ExportFormat,
    #[arg(long, help = "Output file path, defaults to a timestamped name")]
    output: Option<PathBuf>,
    #[arg(long, help = "Start date (YYYY-MM-DD), defaults to today when --to is given")]
    from: Option<String>,
    #[arg(long, help = "End date (YYYY-MM-DD), defaults to --from")]
    to: Option<String>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let log = Log::new(Config::read()?.log_path()?);
    let mut entries = log.read()?;

    let now_utc = time::now_utc();

    // Without a date filter the whole log is exported.
    if args.from.is_some() || args.to.is_some() {
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
        msg_info!(Message::ExportEmpty);
        return Ok(());
    }

    let path = Exporter::new(args.format, args.output).export(&entries, now_utc)?;
    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
