/// Format used to parse date literals and to render range bounds (ISO 8601 calendar date)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Separator between the two bounds in a rendered range
pub const RANGE_SEPARATOR: &str = "<->";

/// Default period step, in days
pub const DEFAULT_STEP_DAYS: u64 = 1;

/// Days in a calendar week, used by weekly period steps
pub const DAYS_PER_WEEK: u64 = 7;
