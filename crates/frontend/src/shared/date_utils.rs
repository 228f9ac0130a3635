//! Browser clock and time zone for forms and tables.
//!
//! `chrono::Local` on wasm asks JS `Date` for the offset of each instant,
//! so dates on both sides of a DST change are read and shown correctly.

use chrono::{DateTime, Local, TimeZone, Utc};
use contracts::shared::dates::format_display;
use contracts::shared::form::{FormContext, FormMode};

/// Time zone of the browser
pub fn browser_zone() -> Local {
    Local
}

pub fn now_utc() -> DateTime<Utc> {
    Utc.timestamp_millis_opt(js_sys::Date::now() as i64)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Validation context for a details form
pub fn form_context(mode: FormMode) -> FormContext<Local> {
    FormContext::new(mode, now_utc(), browser_zone())
}

/// `DD.MM.YYYY HH:MM` in the browser's time zone
pub fn format_local(instant: &DateTime<Utc>) -> String {
    format_display(instant, &browser_zone())
}

/// Validity window for tables: `20.10.2026 10:00 – 27.10.2026 10:00`
pub fn format_window(start: &DateTime<Utc>, end: &DateTime<Utc>) -> String {
    format!("{} – {}", format_local(start), format_local(end))
}
