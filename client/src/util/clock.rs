//! Wall-clock timestamps for request bodies.

/// Current time as an ISO 8601 UTC string (`2026-10-16T09:30:00.000Z`).
///
/// Empty outside the browser; timestamps are only stamped by user actions
/// after hydration.
pub fn now_iso8601() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
