//! Display strings for ride cards, dashboards and timers.
//!
//! All formatters are pure: the same input always renders the same text.

/// Symbol prefixed to rupee amounts.
pub const RUPEE_SYMBOL: char = '₹';

/// Rupee amount with no fractional digits and en-IN grouping.
///
/// `130 -> "₹130"`, `156430 -> "₹1,56,430"`, `-130 -> "-₹130"`.
pub fn format_currency(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let digits = amount.unsigned_abs().to_string();
    format!("{sign}{RUPEE_SYMBOL}{}", group_indian(&digits))
}

/// Indian digit grouping: the last three digits, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    let lead = head.len() % 2;
    if lead > 0 {
        out.push_str(&head[..lead]);
    }
    for (i, pair) in head.as_bytes()[lead..].chunks(2).enumerate() {
        if i > 0 || lead > 0 {
            out.push(',');
        }
        // ASCII digits only.
        out.extend(pair.iter().map(|b| char::from(*b)));
    }
    out.push(',');
    out.push_str(tail);
    out
}

/// `"<value> km"` using the shortest decimal form of `distance_km`.
pub fn format_distance(distance_km: f64) -> String {
    format!("{distance_km} km")
}

/// `"38 min"`, `"1 hr"`, `"1 hr 30 min"`.
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes} min");
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest == 0 {
        format!("{hours} hr")
    } else {
        format!("{hours} hr {rest} min")
    }
}

/// Timer text in `m:ss`, e.g. `180 -> "3:00"`, `65 -> "1:05"`.
pub fn format_countdown(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_small_amounts() {
        assert_eq!(format_currency(0), "₹0");
        assert_eq!(format_currency(130), "₹130");
        assert_eq!(format_currency(999), "₹999");
    }

    #[test]
    fn currency_uses_indian_grouping() {
        assert_eq!(format_currency(1_000), "₹1,000");
        assert_eq!(format_currency(8_700), "₹8,700");
        assert_eq!(format_currency(32_500), "₹32,500");
        assert_eq!(format_currency(156_430), "₹1,56,430");
        assert_eq!(format_currency(1_234_567), "₹12,34,567");
        assert_eq!(format_currency(12_345_678), "₹1,23,45,678");
    }

    #[test]
    fn currency_negative_and_extremes() {
        assert_eq!(format_currency(-130), "-₹130");
        assert_eq!(format_currency(-156_430), "-₹1,56,430");
        assert_eq!(
            format_currency(i64::MIN),
            "-₹92,23,37,20,36,85,47,75,808"
        );
    }

    #[test]
    fn distance_uses_shortest_form() {
        assert_eq!(format_distance(5.8), "5.8 km");
        assert_eq!(format_distance(12.0), "12 km");
        assert_eq!(format_distance(0.05), "0.05 km");
    }

    #[test]
    fn duration_switches_to_hours_at_sixty() {
        assert_eq!(format_duration(0), "0 min");
        assert_eq!(format_duration(38), "38 min");
        assert_eq!(format_duration(59), "59 min");
        assert_eq!(format_duration(60), "1 hr");
        assert_eq!(format_duration(90), "1 hr 30 min");
        assert_eq!(format_duration(125), "2 hr 5 min");
    }

    #[test]
    fn countdown_pads_seconds() {
        assert_eq!(format_countdown(180), "3:00");
        assert_eq!(format_countdown(65), "1:05");
        assert_eq!(format_countdown(9), "0:09");
        assert_eq!(format_countdown(1320), "22:00");
    }

    #[test]
    fn formatters_are_idempotent() {
        assert_eq!(format_currency(130), format_currency(130));
        assert_eq!(format_distance(5.8), format_distance(5.8));
        assert_eq!(format_duration(90), format_duration(90));
    }
}
