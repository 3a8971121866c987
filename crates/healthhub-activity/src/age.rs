//! Relative age labels for the activity feed ("10 minutes ago", "Yesterday").

use chrono::{DateTime, Utc};

/// Describe how long before `now` the instant `at` was.
///
/// Instants in the future, or less than a minute old, are "just now".
pub fn describe_age(now: DateTime<Utc>, at: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);

    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return plural(minutes, "minute");
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return plural(hours, "hour");
    }

    let days = elapsed.num_days();
    match days {
        1 => "Yesterday".to_string(),
        2..=6 => plural(days, "day"),
        _ => plural(days / 7, "week"),
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::describe_age;

    #[test]
    fn test_age_labels() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let cases = [
            (Duration::seconds(-30), "just now"),
            (Duration::seconds(59), "just now"),
            (Duration::minutes(1), "1 minute ago"),
            (Duration::minutes(10), "10 minutes ago"),
            (Duration::minutes(59), "59 minutes ago"),
            (Duration::hours(1), "1 hour ago"),
            (Duration::hours(3), "3 hours ago"),
            (Duration::hours(24), "Yesterday"),
            (Duration::hours(47), "Yesterday"),
            (Duration::days(2), "2 days ago"),
            (Duration::days(6), "6 days ago"),
            (Duration::days(7), "1 week ago"),
            (Duration::days(20), "2 weeks ago"),
        ];
        for (ago, expected) in cases {
            assert_eq!(describe_age(now, now - ago), expected, "for {:?}", ago);
        }
    }
}
