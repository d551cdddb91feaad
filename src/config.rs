//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bundle runs in the browser with no process environment, so settings
//! are captured at compile time with `option_env!`:
//!
//! - `FOLIO_API_BASE`: origin prefix for API calls (default: same origin).
//! - `FOLIO_TOAST_MS`: how long notifications stay visible.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_TOAST_MS: u32 = 5_000;

const API_BASE: Option<&str> = option_env!("FOLIO_API_BASE");
const TOAST_MS: Option<&str> = option_env!("FOLIO_TOAST_MS");

/// API origin prefix without a trailing slash; empty means same origin.
pub fn api_base() -> &'static str {
    API_BASE.map_or("", |base| base.trim().trim_end_matches('/'))
}

/// Absolute or origin-relative URL for an API path.
pub fn api_url(path: &str) -> String {
    join_url(api_base(), path)
}

/// Notification lifetime in milliseconds.
pub fn toast_ms() -> u32 {
    parse_toast_ms(TOAST_MS)
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

fn parse_toast_ms(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_TOAST_MS)
}
