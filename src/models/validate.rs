/// Validate a required text field with a max length.
pub fn validate_required(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} is required"));
    }
    if trimmed.len() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Validate an optional text field with a max length (empty is OK).
pub fn validate_optional(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && trimmed.len() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Parse a required `YYYY-MM-DD` form value.
pub fn parse_required_date(value: &str, field_name: &str) -> Result<chrono::NaiveDate, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{field_name} is required"));
    }
    chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| format!("{field_name} must be a valid date (YYYY-MM-DD)"))
}

/// Parse an optional `YYYY-MM-DD` form value (empty is OK).
pub fn parse_optional_date(value: &str, field_name: &str) -> Result<Option<chrono::NaiveDate>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| format!("{field_name} must be a valid date (YYYY-MM-DD)"))
}

/// Parse an optional `HH:MM` form value (empty is OK).
pub fn parse_optional_time(value: &str, field_name: &str) -> Result<Option<chrono::NaiveTime>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    chrono::NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map(Some)
        .map_err(|_| format!("{field_name} must be a valid time (HH:MM)"))
}
