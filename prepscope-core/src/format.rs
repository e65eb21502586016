//! Formatting helpers shared across report surfaces.

/// Format minutes for display (e.g., "1h 24m" or "45m").
pub fn format_minutes(minutes: f64) -> String {
    let total = minutes.round() as i64;
    let hours = total / 60;
    let mins = total % 60;
    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

/// Format a percentage with one decimal (e.g., "72.5%").
pub fn format_pct(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Format a signed value with an explicit sign (e.g., "+1.2" or "-0.4").
pub fn format_signed(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.2}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(84.0), "1h 24m");
        assert_eq!(format_minutes(45.0), "45m");
        assert_eq!(format_minutes(0.0), "0m");
    }

    #[test]
    fn test_format_pct_and_signed() {
        assert_eq!(format_pct(72.46), "72.5%");
        assert_eq!(format_signed(1.2), "+1.20");
        assert_eq!(format_signed(-0.4), "-0.40");
    }
}
