use colored::*;
use chrono::{DateTime, Utc};

use crate::constants::{WHEEL_MAX_NAME_LENGTH, WHEEL_NAME_TRUNCATE_LENGTH};

/// Names that would crowd a sector are cut and marked with an ellipsis.
pub fn display_name(name: &str) -> String {
    if name.chars().count() > WHEEL_MAX_NAME_LENGTH {
        let cut: String = name.chars().take(WHEEL_NAME_TRUNCATE_LENGTH).collect();
        format!("{}…", cut)
    } else {
        name.to_string()
    }
}

pub fn format_vacation(vacation: bool) -> ColoredString {
    if vacation {
        "on vacation".yellow()
    } else {
        "in pool".green()
    }
}

pub fn format_angle(degrees: f64) -> String {
    format!("{:.1}°", degrees)
}

pub fn format_relative_time(timestamp: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        let now = Utc::now();
        let duration = now.signed_duration_since(parsed);

        if duration.num_days() > 365 {
            format!("{}y ago", duration.num_days() / 365)
        } else if duration.num_days() > 30 {
            format!("{}mo ago", duration.num_days() / 30)
        } else if duration.num_days() > 0 {
            format!("{}d ago", duration.num_days())
        } else if duration.num_hours() > 0 {
            format!("{}h ago", duration.num_hours())
        } else if duration.num_minutes() > 0 {
            format!("{}m ago", duration.num_minutes())
        } else {
            "just now".to_string()
        }
    } else {
        "unknown".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_display_name_keeps_short_names() {
        assert_eq!(display_name("Anna"), "Anna");
        assert_eq!(display_name(&"x".repeat(20)), "x".repeat(20));
    }

    #[test]
    fn test_display_name_truncates_long_names() {
        let shown = display_name("Maximilian Alexander the Third");
        assert_eq!(shown.chars().count(), 19);
        assert!(shown.ends_with('…'));
        assert!(shown.starts_with("Maximilian Alexand"));
    }

    #[test]
    fn test_display_name_counts_characters_not_bytes() {
        let name = "Александра Константиновна";
        let shown = display_name(name);
        assert_eq!(shown, "Александра Констан…");
    }

    #[test]
    fn test_relative_time() {
        let three_days = (Utc::now() - Duration::days(3)).to_rfc3339();
        assert_eq!(format_relative_time(&three_days), "3d ago");
        assert_eq!(format_relative_time("yesterday-ish"), "unknown");
    }

    #[test]
    fn test_format_angle() {
        assert_eq!(format_angle(2115.0), "2115.0°");
    }
}
