use crate::{
    libs::{config::Config, formatter::format_duration, messages::Message, summary, time, view::View},
    msg_bail_anyhow, msg_info, msg_print,
    store::log::Log,
};
use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[arg(long, help = "Start date (YYYY-MM-DD), defaults to today")]
    from: Option<String>,
    #[arg(long, help = "End date (YYYY-MM-DD), defaults to --from")]
    to: Option<String>,
    #[arg(long, help = "Report the current week")]
    week: bool,
    #[arg(long, help = "Report the previous week")]
    last_week: bool,
    #[arg(long, help = "Report the current month")]
    month: bool,
    #[arg(long, help = "Include the per-task breakdown for every tag")]
    tasks: bool,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let log = Log::new(Config::read()?.log_path()?);
    let entries = log.read()?;

    let today = time::now_local();
    let (from, to) = report_window(&args, today)?;

    // The aggregation engine only compares absolute instants; the window
    // is computed in local time and normalized here.
    let start_utc = time::to_utc(from);
    let end_utc = time::to_utc(to);
    let now_utc = time::now_utc();

    let total = summary::total_in_window(&entries, start_utc, end_utc, now_utc);
    if total <= Duration::zero() {
        msg_info!(Message::ReportEmpty);
        return Ok(());
    }

    let groups = summary::group_by_tag(&entries, start_utc, end_utc, now_utc);

    msg_print!(
        Message::ReportHeader(from.format("%Y-%m-%d").to_string(), to.format("%Y-%m-%d").to_string()),
        true
    );
    View::report(&groups)?;

    if args.tasks {
        for group in &groups {
            msg_print!(Message::TagTasksHeader(group.tag.clone()), true);
            View::tasks(group)?;
        }
    }

    msg_print!(Message::ReportTotal(format_duration(&total)));
    Ok(())
}

fn report_window(args: &ReportArgs, today: DateTime<Local>) -> Result<(DateTime<Local>, DateTime<Local>)> {
    let range_flags = [args.week, args.last_week, args.month].iter().filter(|flag| **flag).count();
    if range_flags > 1 {
        msg_bail_anyhow!(Message::ConflictingRangeFlags);
    }
    if range_flags == 1 && (args.from.is_some() || args.to.is_some()) {
        msg_bail_anyhow!(Message::RangeFlagsWithDates);
    }

    let today_date = today.date_naive();
    let (from_date, to_date) = if args.week {
        week_of(today_date, 0)
    } else if args.last_week {
        week_of(today_date, 1)
    } else if args.month {
        month_of(today_date)
    } else {
        let from_date = match &args.from {
            Some(value) => time::parse_date(value)?,
            None => today_date,
        };
        let to_date = match &args.to {
            Some(value) => time::parse_date(value)?,
            None => from_date,
        };
        (from_date, to_date)
    };

    if to_date < from_date {
        msg_bail_anyhow!(Message::ReportEndBeforeStart);
    }

    let from = time::local_day_start(from_date).context("failed to resolve local day start")?;
    let to = time::local_day_end(to_date).context("failed to resolve local day end")?;
    Ok((from, to))
}

/// Monday-based week containing `today`, shifted back `weeks_back` weeks.
fn week_of(today: NaiveDate, weeks_back: i64) -> (NaiveDate, NaiveDate) {
    let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()) + weeks_back * 7);
    (monday, monday + Duration::days(6))
}

/// Calendar month containing `today`.
fn month_of(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = today.with_day(1).expect("the first of the month is a valid date");
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    }
    .expect("the first of the next month is a valid date");
    (first, next - Duration::days(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_of_is_monday_based() {
        // 2025-07-02 is a Wednesday.
        assert_eq!(week_of(date(2025, 7, 2), 0), (date(2025, 6, 30), date(2025, 7, 6)));
        // A Monday starts its own week.
        assert_eq!(week_of(date(2025, 6, 30), 0), (date(2025, 6, 30), date(2025, 7, 6)));
        // A Sunday still belongs to the week started the previous Monday.
        assert_eq!(week_of(date(2025, 7, 6), 0), (date(2025, 6, 30), date(2025, 7, 6)));
    }

    #[test]
    fn test_week_of_last_week() {
        assert_eq!(week_of(date(2025, 7, 2), 1), (date(2025, 6, 23), date(2025, 6, 29)));
    }

    #[test]
    fn test_month_of_covers_calendar_month() {
        assert_eq!(month_of(date(2025, 7, 15)), (date(2025, 7, 1), date(2025, 7, 31)));
        assert_eq!(month_of(date(2025, 12, 3)), (date(2025, 12, 1), date(2025, 12, 31)));
        assert_eq!(month_of(date(2024, 2, 10)), (date(2024, 2, 1), date(2024, 2, 29)));
    }

    #[test]
    fn test_report_window_rejects_conflicting_flags() {
        let args = ReportArgs {
            from: None,
            to: None,
            week: true,
            last_week: true,
            month: false,
            tasks: false,
        };
        assert!(report_window(&args, time::now_local()).is_err());

        let args = ReportArgs {
            from: Some("2025-07-01".to_string()),
            to: None,
            week: true,
            last_week: false,
            month: false,
            tasks: false,
        };
        assert!(report_window(&args, time::now_local()).is_err());
    }

    #[test]
    fn test_report_window_rejects_reversed_dates() {
        let args = ReportArgs {
            from: Some("2025-07-10".to_string()),
            to: Some("2025-07-01".to_string()),
            week: false,
            last_week: false,
            month: false,
            tasks: false,
        };
        assert!(report_window(&args, time::now_local()).is_err());
    }

    #[test]
    fn test_report_window_defaults_to_today() {
        let args = ReportArgs {
            from: None,
            to: None,
            week: false,
            last_week: false,
            month: false,
            tasks: false,
        };
        let today = time::now_local();
        let (from, to) = report_window(&args, today).unwrap();
        assert_eq!(from.date_naive(), today.date_naive());
        assert_eq!(to.date_naive(), today.date_naive());
    }
}
