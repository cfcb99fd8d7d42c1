/// Shortest password the form accepts.
pub const MIN_LENGTH: usize = 6;
/// Longest password the form accepts.
pub const MAX_LENGTH: usize = 30;
/// Length selected when the form is first shown.
pub const DEFAULT_LENGTH: usize = 8;

/// Number of leading characters highlighted when the password is selected for copy.
pub const SELECTION_HIGHLIGHT_LIMIT: usize = 20;

pub const DEFAULT_TOAST_MESSAGE: &str = "Password Copied";
pub const DEFAULT_TOAST_DURATION_MS: u64 = 2_000;

pub const DEFAULT_LOG_LEVEL: &str = "warn";
