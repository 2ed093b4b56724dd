use crate::{
    libs::{config::Config, messages::Message, summary, view::View},
    msg_info, msg_print,
    store::log::Log,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let log = Log::new(Config::read()?.log_path()?);
    let entries = log.read()?;

    let tags = summary::get_unique_tags(&entries);
    if tags.is_empty() {
        msg_info!(Message::NoTagsFound);
        return Ok(());
    }

    msg_print!(Message::TagsHeader, true);
    View::tags(&tags)?;
    Ok(())
}
