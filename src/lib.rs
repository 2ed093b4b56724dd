//! # Stint
//!
//! A lightweight command-line time tracker built around a single
//! append-only text log. Entries are labeled with `#tags` embedded in
//! free text and reported as per-tag totals over arbitrary date ranges.
//!
//! ## Features
//!
//! - **Interval Tracking**: Start/stop a running entry or add one retroactively
//! - **Hashtag Labels**: Tags are extracted live from entry text, never stored separately
//! - **Overlap Protection**: Retroactive entries are rejected when they collide
//! - **Tag Reports**: Per-tag and per-task totals over day/week/month windows
//! - **Data Export**: CSV and JSON export of any date range
//! - **Plain Text Storage**: One hand-editable log file, comments included
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stint::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod store;
