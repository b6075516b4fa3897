//! Application constants and configuration

pub const APP_NAME: &str = "Activity Board";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";
/// Environment variable that overrides the saved server URL at startup
pub const SERVER_URL_ENV: &str = "ACTIVITY_BOARD_URL";
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30;

/// How long a notification stays visible
pub const MESSAGE_DURATION_SECS: u64 = 5;

// User-facing strings
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";
pub const NO_PARTICIPANTS: &str = "No participants yet. Be the first to sign up!";
pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";
pub const SIGNUP_REJECTED_FALLBACK: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_REJECTED_FALLBACK: &str = "Unable to unregister participant.";
pub const UNREGISTER_FAILED: &str = "Failed to unregister participant. Please try again.";
pub const MISSING_PARTICIPANT: &str = "Missing activity or participant information.";
