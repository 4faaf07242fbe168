use chrono::{DateTime, Datelike, Duration, Utc};

/// Short age of a feed or revision timestamp as seen at `now`
///
/// Under a week old reads "just now", "45m ago", "3h ago" or "5d ago". Older (or
/// future) timestamps show the date, with the year only when it differs from `now`.
pub fn format_timestamp(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let age = now.signed_duration_since(*timestamp);
    if age < Duration::zero() || age >= Duration::days(7) {
        return calendar_date(timestamp, now);
    }

    match (age.num_days(), age.num_hours(), age.num_minutes()) {
        (days, _, _) if days > 0 => format!("{}d ago", days),
        (_, hours, _) if hours > 0 => format!("{}h ago", hours),
        (_, _, minutes) if minutes > 0 => format!("{}m ago", minutes),
        _ => "just now".to_string(),
    }
}

fn calendar_date(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let pattern = if timestamp.year() == now.year() { "%b %-d" } else { "%b %-d, %Y" };
    timestamp.format(pattern).to_string()
}
