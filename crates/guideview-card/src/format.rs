//! Follower-count formatting.

/// Group the digits of `n` in runs of three with comma separators.
///
/// # Examples
///
/// ```rust
/// use guideview_card::format::group_thousands;
///
/// assert_eq!(group_thousands(1_234_567), "1,234,567");
/// assert_eq!(group_thousands(999), "999");
/// assert_eq!(group_thousands(0), "0");
/// ```
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Label for the follower-count slot.
///
/// A missing count and a zero count both leave the slot empty; the upstream
/// API does not distinguish the two.
#[must_use]
pub fn follower_count_label(count: Option<u64>) -> Option<String> {
    match count {
        Some(count) if count > 0 => Some(group_thousands(count)),
        _ => None,
    }
}
