use chrono::{DateTime, Utc};

use crate::models::Thread;

pub const TODAY: &str = "Today";
pub const YESTERDAY: &str = "Yesterday";

/// Calendar-day label for a timestamp relative to `now` (UTC days)
///
/// "Today", "Yesterday", or a literal date such as "Jan 15, 2024".
pub fn relative_day_label(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let days = (now.date_naive() - timestamp.date_naive()).num_days();
    match days {
        0 => TODAY.to_string(),
        1 => YESTERDAY.to_string(),
        _ => timestamp.format("%b %-d, %Y").to_string(),
    }
}

/// A thread annotated with its relative-day label
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledThread<'a> {
    pub relative_day: String,
    pub thread: &'a Thread,
}

/// Feed annotated with labels, plus the distinct labels in first-seen order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RelativeDayFeed<'a> {
    pub items: Vec<LabeledThread<'a>>,
    pub days: Vec<String>,
}

/// Label every thread by the day it was started
pub fn annotate_relative_days<'a>(feed: &'a [Thread], now: &DateTime<Utc>) -> RelativeDayFeed<'a> {
    let mut annotated = RelativeDayFeed::default();

    for thread in feed {
        let relative_day = relative_day_label(&thread.thread_ts, now);
        if !annotated.days.contains(&relative_day) {
            annotated.days.push(relative_day.clone());
        }
        annotated.items.push(LabeledThread { relative_day, thread });
    }

    annotated
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_today() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 15, 0, 5, 0).unwrap();
        assert_eq!(relative_day_label(&ts, &now()), "Today");
    }

    #[test]
    fn test_yesterday_is_calendar_based() {
        // Less than 24h ago but on the previous calendar day
        let ts = Utc.with_ymd_and_hms(2024, 6, 14, 23, 59, 0).unwrap();
        assert_eq!(relative_day_label(&ts, &now()), "Yesterday");
    }

    #[test]
    fn test_older_dates_are_literal() {
        let ts = now() - Duration::days(40);
        assert_eq!(relative_day_label(&ts, &now()), "May 6, 2024");
    }

    #[test]
    fn test_future_dates_are_literal() {
        let ts = now() + Duration::days(2);
        assert_eq!(relative_day_label(&ts, &now()), "Jun 17, 2024");
    }
}
