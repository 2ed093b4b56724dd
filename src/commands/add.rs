use crate::{
    libs::{config::Config, entry::Entry, formatter::format_duration, messages::Message, time},
    msg_bail_anyhow, msg_success,
    store::log::{EntryLog, Log},
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(required = true, help = "Entry description, may embed #tags")]
    text: String,
    #[arg(long, required = true, help = "Start time: RFC 3339, naive datetime, or HH:MM for today")]
    start: String,
    #[arg(long, required = true, help = "End time: RFC 3339, naive datetime, or HH:MM for today")]
    end: String,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let log = Log::new(Config::read()?.log_path()?);
    let entries = log.read()?;

    // User-typed bounds are validated strictly; a parse failure is the
    // authoritative reason the whole command is rejected.
    let now = time::now_local();
    let start = time::to_utc(time::parse_when(&args.start, now)?);
    let end = time::to_utc(time::parse_when(&args.end, now)?);

    if end <= start {
        msg_bail_anyhow!(Message::EndBeforeStart);
    }

    let entry = Entry::closed(start, end, args.text);

    if let Some(overlap) = entries.check_overlap(&entry, end) {
        msg_bail_anyhow!(Message::EntryOverlaps(
            overlap.entry.start.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
            format_duration(&overlap.duration)
        ));
    }

    log.append(&entry)?;

    msg_success!(Message::EntryAdded {
        duration: format_duration(&entry.duration(end)),
        start: start.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        end: end.with_timezone(&Local).format("%H:%M").to_string(),
        text: entry.text.clone(),
    });
    Ok(())
}
