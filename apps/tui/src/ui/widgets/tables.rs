use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

// India Standard Time, UTC+05:30.
const DISPLAY_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;
const DISPLAY_FORMAT: &str = "%d/%m/%Y, %I:%M:%S %p";

/// First row to draw so that `selected_index` stays on screen.
pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows || max_visible_rows == 0 {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index + 1 - max_visible_rows;
    }

    0
}

/// Renders an API timestamp in the dashboard's local time.
///
/// Accepts RFC 3339 or a naive `YYYY-MM-DDTHH:MM:SS` taken as UTC. Anything
/// else is shown unchanged.
pub fn format_timestamp(raw: &str) -> String {
    let Some(offset) = FixedOffset::east_opt(DISPLAY_OFFSET_SECS) else {
        return raw.to_string();
    };

    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|time| time.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
                .map(|naive| naive.and_utc())
        });

    match parsed {
        Ok(time) => time.with_timezone(&offset).format(DISPLAY_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_is_kept_visible() {
        assert_eq!(scroll_offset(5, 10, 4), 0);
        assert_eq!(scroll_offset(20, 10, 3), 0);
        assert_eq!(scroll_offset(20, 10, 10), 1);
        assert_eq!(scroll_offset(20, 10, 19), 10);
    }

    #[test]
    fn timestamps_are_shown_in_ist() {
        assert_eq!(format_timestamp("2025-04-21T10:30:00Z"), "21/04/2025, 04:00:00 PM");
        assert_eq!(format_timestamp("2025-04-21 01:15:00"), "21/04/2025, 06:45:00 AM");
    }

    #[test]
    fn unparseable_timestamps_pass_through() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
