/// Shortest display of a measurement: `3.0` prints as `3`, `5.5` as `5.5`.
pub fn format_number(value: f64) -> String {
    // an empty sum or a rounding of a tiny negative can yield -0.0
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Two decimals with `,` grouping thousands, e.g. `108,948.00`.
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, fraction)
}
