use crate::api::Time;

const BUCKETS: [(i64, &str); 5] = [
    (31_536_000, "year"),
    (2_592_000, "month"),
    (86_400, "day"),
    (3_600, "hour"),
    (60, "minute"),
];

/// Humanized age of `then` as seen at `now`, eg. "3 days ago"
///
/// The first unit with more than one whole unit of elapsed time wins, so 90 seconds is
/// "1 minute ago" and 59 seconds is "just now".
pub fn time_since(then: Time, now: Time) -> String {
    let seconds = (now - then).num_seconds();
    for (divisor, unit) in BUCKETS {
        if seconds > divisor {
            let n = seconds / divisor;
            let plural = if n == 1 { "" } else { "s" };
            return format!("{n} {unit}{plural} ago");
        }
    }
    String::from("just now")
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn ago(d: Duration) -> String {
        let now = Utc.with_ymd_and_hms(2022, 11, 5, 10, 0, 0).unwrap();
        time_since(now - d, now)
    }

    #[test]
    fn buckets() {
        assert_eq!(ago(Duration::seconds(0)), "just now");
        assert_eq!(ago(Duration::seconds(60)), "just now");
        assert_eq!(ago(Duration::seconds(61)), "1 minute ago");
        assert_eq!(ago(Duration::minutes(59)), "59 minutes ago");
        assert_eq!(ago(Duration::minutes(60)), "60 minutes ago");
        assert_eq!(ago(Duration::minutes(61)), "1 hour ago");
        assert_eq!(ago(Duration::hours(5)), "5 hours ago");
        assert_eq!(ago(Duration::hours(25)), "1 day ago");
        assert_eq!(ago(Duration::days(29)), "29 days ago");
        assert_eq!(ago(Duration::days(31)), "1 month ago");
        assert_eq!(ago(Duration::days(200)), "6 months ago");
        assert_eq!(ago(Duration::days(366)), "1 year ago");
        assert_eq!(ago(Duration::days(800)), "2 years ago");
    }

    #[test]
    fn future_dates_are_just_now() {
        assert_eq!(ago(Duration::hours(-3)), "just now");
    }
}
