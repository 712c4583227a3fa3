//! HTML pages: the greeting and the info summary.

use axum::{extract::State, response::Html};
use chrono::{DateTime, Local, Offset, TimeZone};

use crate::http::server::AppState;

/// GET /
pub async fn root() -> Html<&'static str> {
    Html("<h1>Hello World!</h1>")
}

/// GET /info
pub async fn info(State(state): State<AppState>) -> Html<String> {
    let zone = iana_time_zone::get_timezone().ok();
    Html(render_info(state.store.len(), &Local::now(), zone.as_deref()))
}

/// Record count plus a human-readable timestamp with its zone.
///
/// `zone` is the IANA name of the server's zone when it can be detected;
/// otherwise the long label falls back to one derived from the offset.
pub fn render_info<Tz: TimeZone>(
    count: usize,
    now: &DateTime<Tz>,
    zone: Option<&str>,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let offset_secs = now.offset().fix().local_minus_utc();
    let long_name = match zone {
        Some(zone) if !zone.is_empty() => zone.to_string(),
        _ => offset_long_name(offset_secs),
    };

    format!(
        "Phonebook has info for {} people <br><br> {} {} ({})",
        count,
        now.format("%a, %b %-d, %Y, %-I:%M:%S %p"),
        offset_short_name(offset_secs),
        long_name,
    )
}

/// `UTC`, `GMT+2`, `GMT-5:30`.
fn offset_short_name(offset_secs: i32) -> String {
    if offset_secs == 0 {
        return "UTC".to_string();
    }
    let sign = if offset_secs < 0 { '-' } else { '+' };
    let minutes = offset_secs.unsigned_abs() / 60;
    match minutes % 60 {
        0 => format!("GMT{}{}", sign, minutes / 60),
        rest => format!("GMT{}{}:{:02}", sign, minutes / 60, rest),
    }
}

fn offset_long_name(offset_secs: i32) -> String {
    if offset_secs == 0 {
        return "Coordinated Universal Time".to_string();
    }
    let sign = if offset_secs < 0 { '-' } else { '+' };
    let minutes = offset_secs.unsigned_abs() / 60;
    format!("GMT{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
}
