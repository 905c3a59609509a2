//! Deadline parsing and formatting
//!
//! Deadlines are edited as local date-time text and stored as naive local
//! timestamps. Display is relative to today, e.g. "tomorrow at 09:00".

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Date format used for date-only input and config validation
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Canonical local date-time input format (`2025-03-14T09:30`)
pub const DEADLINE_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Alternative formats accepted when parsing a deadline
const DEADLINE_ALT_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parse a deadline typed by the user.
///
/// Accepts `YYYY-MM-DDTHH:MM`, `YYYY-MM-DD HH:MM` (with optional seconds) and
/// a bare `YYYY-MM-DD`, which resolves to midnight.
pub fn parse_deadline(input: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let input = input.trim();
    NaiveDateTime::parse_from_str(input, DEADLINE_INPUT_FORMAT).or_else(|first_err| {
        DEADLINE_ALT_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(input, DATE_FORMAT)
                    .ok()
                    .map(|date| date.and_time(NaiveTime::MIN))
            })
            .ok_or(first_err)
    })
}

/// Format a deadline back into the canonical input format
pub fn format_deadline_input(deadline: NaiveDateTime) -> String {
    deadline.format(DEADLINE_INPUT_FORMAT).to_string()
}

/// Human readable deadline relative to the current local date
pub fn format_human_deadline(deadline: NaiveDateTime) -> String {
    format_human_deadline_from(deadline, Local::now().date_naive())
}

/// Human readable deadline relative to `today`
pub fn format_human_deadline_from(deadline: NaiveDateTime, today: NaiveDate) -> String {
    let date = deadline.date();
    let days_diff = (date - today).num_days();

    let day = match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => format!("next {}", weekday_name(date.weekday())),
        diff if (-7..-1).contains(&diff) => format!("last {}", weekday_name(date.weekday())),
        diff if diff > 7 && diff <= 30 => format!("in {} days", diff),
        diff if (-30..-7).contains(&diff) => format!("{} days ago", -diff),
        _ => {
            if date.year() == today.year() {
                date.format("%b %d").to_string()
            } else {
                date.format("%b %d, %Y").to_string()
            }
        }
    };

    if deadline.time() == NaiveTime::MIN {
        day
    } else {
        format!("{} at {}", day, deadline.format("%H:%M"))
    }
}

/// Whether a deadline has already passed
pub fn is_overdue(deadline: NaiveDateTime) -> bool {
    deadline < Local::now().naive_local()
}

/// Format an estimate in minutes as `1h 30m` style text
pub fn format_estimate(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
