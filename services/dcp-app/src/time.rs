//! Human-readable relative durations ("5 minutes ago")

use chrono::{DateTime, Utc};

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_MONTH: i64 = 43200;
const MINUTES_IN_TWO_MONTHS: i64 = 86400;

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", n, unit)
    }
}

fn rounded_div(n: i64, d: i64) -> i64 {
    (n + d / 2) / d
}

/// Approximate distance between two instants, without direction
pub fn format_distance(a: DateTime<Utc>, b: DateTime<Utc>) -> String {
    let seconds = (a - b).num_seconds().abs();
    let minutes = rounded_div(seconds, 60);

    if minutes < 1 {
        "less than a minute".to_string()
    } else if minutes < 45 {
        plural(minutes, "minute")
    } else if minutes < 90 {
        "about 1 hour".to_string()
    } else if minutes < MINUTES_IN_DAY {
        format!("about {}", plural(rounded_div(minutes, 60), "hour"))
    } else if minutes < 2520 {
        "1 day".to_string()
    } else if minutes < MINUTES_IN_MONTH {
        plural(rounded_div(minutes, MINUTES_IN_DAY), "day")
    } else if minutes < MINUTES_IN_TWO_MONTHS {
        format!(
            "about {}",
            plural(rounded_div(minutes, MINUTES_IN_MONTH), "month")
        )
    } else {
        let months = rounded_div(minutes, MINUTES_IN_MONTH);
        if months < 12 {
            return plural(months, "month");
        }
        let years = months / 12;
        match months % 12 {
            0..=2 => format!("about {}", plural(years, "year")),
            3..=8 => format!("over {}", plural(years, "year")),
            _ => format!("almost {}", plural(years + 1, "year")),
        }
    }
}

/// Distance from `now` with a direction: "5 minutes ago" or "in 5 minutes"
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let distance = format_distance(then, now);
    if then > now {
        format!("in {}", distance)
    } else {
        format!("{} ago", distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn ago(d: Duration) -> String {
        format_relative(now() - d, now())
    }

    #[test]
    fn under_a_minute() {
        assert_eq!(ago(Duration::seconds(0)), "less than a minute ago");
        assert_eq!(ago(Duration::seconds(29)), "less than a minute ago");
    }

    #[test]
    fn minutes() {
        assert_eq!(ago(Duration::seconds(30)), "1 minute ago");
        assert_eq!(ago(Duration::minutes(5)), "5 minutes ago");
        assert_eq!(ago(Duration::minutes(44)), "44 minutes ago");
    }

    #[test]
    fn hours() {
        assert_eq!(ago(Duration::minutes(45)), "about 1 hour ago");
        assert_eq!(ago(Duration::minutes(89)), "about 1 hour ago");
        assert_eq!(ago(Duration::hours(3)), "about 3 hours ago");
        assert_eq!(ago(Duration::hours(23)), "about 23 hours ago");
    }

    #[test]
    fn days() {
        assert_eq!(ago(Duration::hours(24)), "1 day ago");
        assert_eq!(ago(Duration::hours(41)), "1 day ago");
        assert_eq!(ago(Duration::days(2)), "2 days ago");
        assert_eq!(ago(Duration::days(29)), "29 days ago");
    }

    #[test]
    fn months_and_years() {
        assert_eq!(ago(Duration::days(30)), "about 1 month ago");
        assert_eq!(ago(Duration::days(45)), "about 2 months ago");
        assert_eq!(ago(Duration::days(90)), "3 months ago");
        assert_eq!(ago(Duration::days(365)), "about 1 year ago");
        assert_eq!(ago(Duration::days(540)), "over 1 year ago");
        assert_eq!(ago(Duration::days(700)), "almost 2 years ago");
    }

    #[test]
    fn future_timestamps() {
        assert_eq!(
            format_relative(now() + Duration::minutes(10), now()),
            "in 10 minutes"
        );
    }
}
