pub mod add;
pub mod export;
pub mod init;
pub mod list;
pub mod report;
pub mod start;
pub mod status;
pub mod stop;
pub mod tags;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Start tracking a new entry")]
    Start(start::StartArgs),
    #[command(about = "Stop the active entry")]
    Stop(stop::StopArgs),
    #[command(about = "Add a completed entry retroactively")]
    Add(add::AddArgs),
    #[command(about = "Show the active entry")]
    Status,
    #[command(about = "List entries for a date range")]
    List(list::ListArgs),
    #[command(about = "Report logged time by tag for a date range")]
    Report(report::ReportArgs),
    #[command(about = "List all tags found in the log")]
    Tags,
    #[command(about = "Export entries to CSV or JSON")]
    Export(export::ExportArgs),
    #[command(about = "Configuration initialization")]
    Init,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Start(args) => start::cmd(args),
            Commands::Stop(args) => stop::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::Status => status::cmd(),
            Commands::List(args) => list::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Tags => tags::cmd(),
            Commands::Export(args) => export::cmd(args),
            Commands::Init => init::cmd(),
        }
    }
}
