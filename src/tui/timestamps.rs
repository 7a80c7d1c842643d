use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

/// Format a history timestamp in the viewer's time zone:
/// - Same day: "14:05"
/// - Earlier: "Jan 15 14:05"
pub fn format_history_time<Tz>(timestamp: &DateTime<Utc>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let local = timestamp.with_timezone(&now.timezone());

    if local.date_naive() == now.date_naive() {
        local.format("%H:%M").to_string()
    } else {
        local.format("%b %-d %H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, FixedOffset};

    use super::*;

    #[test]
    fn test_same_day_shows_clock_only() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 18, 30, 0).unwrap();
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 10, 9, 5, 0).unwrap();
        assert_eq!(format_history_time(&timestamp, &now), "09:05");
    }

    #[test]
    fn test_earlier_day_includes_date() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 0, 30, 0).unwrap();
        let timestamp = now - Duration::hours(2);
        assert_eq!(format_history_time(&timestamp, &now), "Mar 9 22:30");
    }

    #[test]
    fn test_uses_viewer_time_zone() {
        // Dhaka is UTC+6
        let dhaka = FixedOffset::east_opt(6 * 3600).unwrap();
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 10, 20, 0, 0).unwrap();
        let now = timestamp.with_timezone(&dhaka) + Duration::minutes(1);

        assert_eq!(format_history_time(&timestamp, &now), "02:00");
    }
}
