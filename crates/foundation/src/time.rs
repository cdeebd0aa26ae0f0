/// Milliseconds in one synthetic day.
pub const DAY_MS: f64 = 86_400_000.0;

/// Wrap a millisecond value into `[0, DAY_MS)`.
pub fn wrap_day_ms(ms: f64) -> f64 {
    let wrapped = ms.rem_euclid(DAY_MS);
    // rem_euclid can return DAY_MS for inputs a hair below a multiple.
    if wrapped >= DAY_MS {
        0.0
    } else {
        wrapped
    }
}

/// Clamp a millisecond value into the closed range `[0, DAY_MS]`.
pub fn clamp_day_ms(ms: f64) -> f64 {
    ms.clamp(0.0, DAY_MS)
}

/// Render a time-of-day as a 12-hour clock string, e.g. `3:07 PM`.
///
/// The input is wrapped into one day first, so both day-clock values and
/// raw epoch timestamps are accepted.
pub fn format_clock_12h(ms: f64) -> String {
    let ms = wrap_day_ms(ms);
    let total_minutes = (ms / 60_000.0) as u64;
    let hours24 = total_minutes / 60;
    let minutes = total_minutes % 60;

    let suffix = if hours24 >= 12 { "PM" } else { "AM" };
    let hours12 = match hours24 % 12 {
        0 => 12,
        h => h,
    };

    format!("{hours12}:{minutes:02} {suffix}")
}
