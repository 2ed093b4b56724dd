use crate::{
    libs::{config::Config, entry::Entry, formatter::format_duration, messages::Message, time},
    msg_bail_anyhow, msg_success,
    store::log::{EntryLog, Log},
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StopArgs {
    #[arg(long, help = "Stop time: RFC 3339, naive datetime, or HH:MM for today")]
    at: Option<String>,
}

pub fn cmd(args: StopArgs) -> Result<()> {
    let log = Log::new(Config::read()?.log_path()?);
    let mut entries = log.read()?;

    let open_idx = match entries.find_open() {
        Some(idx) => idx,
        None => msg_bail_anyhow!(Message::NoActiveEntry),
    };

    let now = time::now_local();
    let when = time::parse_when(args.at.as_deref().unwrap_or(""), now)?;
    let when_utc = time::to_utc(when);

    let open = entries[open_idx].clone();
    if when_utc <= open.start {
        msg_bail_anyhow!(Message::StopBeforeStart);
    }

    // Entries are value records: closing one replaces it and rewrites
    // the whole collection.
    let closed = Entry::closed(open.start, when_utc, open.text);
    entries[open_idx] = closed.clone();
    log.write(&entries)?;

    msg_success!(Message::EntryStopped(
        closed.text.clone(),
        format_duration(&closed.duration(when_utc))
    ));
    Ok(())
}
