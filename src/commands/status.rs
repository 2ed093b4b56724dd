use crate::{
    libs::{config::Config, formatter::format_duration, messages::Message, time},
    msg_info, msg_print,
    store::log::{EntryLog, Log},
};
use anyhow::Result;
use chrono::Local;

pub fn cmd() -> Result<()> {
    let log = Log::new(Config::read()?.log_path()?);
    let entries = log.read()?;

    match entries.find_open() {
        Some(idx) => {
            let entry = &entries[idx];
            let now = time::now_utc();
            msg_print!(Message::ActiveEntry {
                text: entry.text.clone(),
                since: entry.start.with_timezone(&Local).format("%H:%M").to_string(),
                elapsed: format_duration(&entry.duration(now)),
            });
        }
        None => {
            msg_info!(Message::NoActiveEntry);
        }
    }

    Ok(())
}
