//! Validation helper functions for the task heap MCP server
//!
//! Raw tool arguments arrive as text, the way a user would type them into a
//! form. Everything here runs before the queue is touched, so a rejected
//! request never mutates it.

use crate::task::Timestamp;
use mcp_attr::Result as McpResult;

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Parse one date/time component and check it lies within `min..=max`
///
/// # Arguments
/// * `field` - Component name used in the error message (e.g., "month")
/// * `text` - Raw user input
/// * `min` / `max` - Inclusive bounds
pub fn parse_component(field: &str, text: &str, min: i64, max: i64) -> McpResult<i64> {
    match text.trim().parse::<i64>() {
        Ok(value) if (min..=max).contains(&value) => Ok(value),
        _ => Err(invalid_params(format!(
            "Invalid {} '{}'. Expected a whole number from {} to {}.",
            field, text, min, max
        ))),
    }
}

/// Build a due date from raw form fields
///
/// Accepted ranges: month 1-12, day 1-31, year 0 or later, hour 0-23,
/// minute 0-60. Month lengths are not checked.
pub fn parse_due(
    month: &str,
    day: &str,
    year: &str,
    hour: &str,
    minute: &str,
) -> McpResult<Timestamp> {
    let month = parse_component("month", month, 1, 12)?;
    let day = parse_component("day", day, 1, 31)?;
    let year = parse_component("year", year, 0, i64::from(i32::MAX))?;
    let hour = parse_component("hour", hour, 0, 23)?;
    let minute = parse_component("minute", minute, 0, 60)?;

    // Bounds above keep every cast lossless
    Ok(Timestamp::new(
        year as i32,
        month as u32,
        day as u32,
        hour as u32,
        minute as u32,
    ))
}

/// Replace characters the store format reserves with spaces
///
/// Commas and line breaks would split a record; `=` separated records in
/// older dumps. The result is trimmed.
pub fn sanitize_name(raw: &str) -> String {
    raw.replace([',', '=', '\n', '\r'], " ").trim().to_string()
}

/// Sanitize a task name and make sure something is left
pub fn parse_name(raw: &str) -> McpResult<String> {
    let name = sanitize_name(raw);
    if name.is_empty() {
        return Err(invalid_params(
            "Task name is empty. Please provide a name for the task.".to_string(),
        ));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_due_accepts_valid_fields() {
        let due = parse_due("3", "1", "2023", "10", "15").unwrap();
        assert_eq!(due, Timestamp::new(2023, 3, 1, 10, 15));

        // Padded and whitespace-surrounded input is fine
        let due = parse_due(" 03 ", "01", "2023", "08", "05").unwrap();
        assert_eq!(due, Timestamp::new(2023, 3, 1, 8, 5));
    }

    #[test]
    fn test_parse_due_rejects_out_of_range() {
        assert!(parse_due("13", "1", "2023", "10", "15").is_err());
        assert!(parse_due("0", "1", "2023", "10", "15").is_err());
        assert!(parse_due("3", "32", "2023", "10", "15").is_err());
        assert!(parse_due("3", "1", "-1", "10", "15").is_err());
        assert!(parse_due("3", "1", "2023", "24", "15").is_err());
        assert!(parse_due("3", "1", "2023", "10", "61").is_err());
    }

    #[test]
    fn test_parse_due_rejects_non_numbers() {
        assert!(parse_due("MM", "1", "2023", "10", "15").is_err());
        assert!(parse_due("3", "DD", "2023", "10", "15").is_err());
        assert!(parse_due("3", "1", "YYYY", "10", "15").is_err());
        assert!(parse_due("3", "1", "2023", "", "15").is_err());
        assert!(parse_due("3", "1", "2023", "10", "1.5").is_err());
    }

    #[test]
    fn test_minute_sixty_is_accepted() {
        let due = parse_due("3", "1", "2023", "10", "60").unwrap();
        assert_eq!(due.minute(), 60);
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("Buy milk, eggs"), "Buy milk  eggs");
        assert_eq!(sanitize_name("a=b"), "a b");
        assert_eq!(sanitize_name("  line\nbreak \r"), "line break");
        assert_eq!(sanitize_name("plain"), "plain");
    }

    #[test]
    fn test_parse_name_rejects_blank() {
        assert!(parse_name(",,=").is_err());
        assert!(parse_name("   ").is_err());
        assert_eq!(parse_name("Report").unwrap(), "Report");
    }
}
