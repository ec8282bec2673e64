//! Base-unit amount formatting

/// Render an integer amount of base units as a decimal string
///
/// Trailing fractional zeros are trimmed, so `1_500_000` micro-Algos with
/// 6 decimals renders as `"1.5"` and zero renders as `"0"`.
pub fn format_currency(amount: u64, decimals: u32) -> String {
    if decimals == 0 {
        return amount.to_string();
    }

    // Past 10^38 the unit exceeds any u64 amount, which is then all fraction
    let (whole, frac) = match 10u128.checked_pow(decimals) {
        Some(unit) => (amount as u128 / unit, amount as u128 % unit),
        None => (0, amount as u128),
    };
    if frac == 0 {
        return whole.to_string();
    }

    let frac_str = format!("{:0width$}", frac, width = decimals as usize);
    format!("{}.{}", whole, frac_str.trim_end_matches('0'))
}
