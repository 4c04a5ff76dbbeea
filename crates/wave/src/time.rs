//! Clock-token parsing for the `"M:S"` time encoding.

/// Converts a `"M:S"` token into elapsed seconds.
///
/// Splits on `:` and requires exactly two numeric parts; seconds may be
/// fractional (`"1:30.5"` is 90.5). Tokens are trimmed, so `" 2 : 15 "`
/// parses. Any other shape returns `None` so a malformed token propagates
/// as a missing value instead of aborting the run.
///
/// A part that parses to NaN (e.g. `"nan:1"`) still yields `Some`; the
/// cleaner's NaN filter drops it one stage later.
pub fn parse_clock(token: &str) -> Option<f64> {
    let mut parts = token.split(':');
    let minutes: f64 = parts.next()?.trim().parse().ok()?;
    let seconds: f64 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(minutes * 60.0 + seconds)
}
