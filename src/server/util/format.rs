//! Display formatting for item quantities and refresh countdowns.

/// Formats an item quantity for display.
///
/// # Logic
/// - Below 1,000 the number is printed as is
/// - Below 1,000,000 the thousands are separated by a comma and the remainder is zero padded
/// - From 1,000,000 the value is printed in millions with two decimals and an `M` suffix
///
/// # Example
/// ```ignore
/// assert_eq!(format_quantity(950), "950");
/// assert_eq!(format_quantity(12_005), "12,005");
/// assert_eq!(format_quantity(1_500_000), "1.50M");
/// ```
pub fn format_quantity(quantity: u64) -> String {
    if quantity >= 1_000_000 {
        return format!("{:.2}M", quantity as f64 / 1_000_000.0);
    }

    if quantity < 1_000 {
        return quantity.to_string();
    }

    format!("{},{:03}", quantity / 1_000, quantity % 1_000)
}

/// Formats a countdown in seconds as `{m}m {s}s`, or `{s}s` under a minute.
pub fn format_countdown(seconds: u64) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;

    if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
