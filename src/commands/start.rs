use crate::{
    libs::{config::Config, entry::Entry, messages::Message, time},
    msg_bail_anyhow, msg_success,
    store::log::{EntryLog, Log},
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StartArgs {
    #[arg(required = true, help = "Entry description, may embed #tags")]
    text: String,
    #[arg(long, help = "Start time: RFC 3339, naive datetime, or HH:MM for today")]
    at: Option<String>,
}

pub fn cmd(args: StartArgs) -> Result<()> {
    let log = Log::new(Config::read()?.log_path()?);
    let entries = log.read()?;

    // Caller-level invariant: at most one open entry in the log.
    if entries.find_open().is_some() {
        msg_bail_anyhow!(Message::AlreadyActiveEntry);
    }

    let now = time::now_local();
    let when = time::parse_when(args.at.as_deref().unwrap_or(""), now)?;
    let entry = Entry::open(time::to_utc(when), args.text);

    // Appending keeps the common case from rewriting the whole file.
    log.append(&entry)?;

    msg_success!(Message::EntryStarted(
        entry.text.clone(),
        when.format("%Y-%m-%d %H:%M").to_string()
    ));
    Ok(())
}
