//! Small display helpers shared by the result tables.

/// Formats a dollar amount with thousands separators and no cents,
/// e.g. `-1234567.8` becomes `-$1,234,568`.
pub fn fmt_usd(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let negative = value < 0.0;
    let rounded = value.abs().round() as u64;
    let digits = rounded.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Formats a dollar amount in millions, e.g. `1_250_000.0` becomes `$1.3M`.
pub fn fmt_usd_millions(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    format!("${:.1}M", value / 1_000_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn groups_thousands() {
        assert_eq!(fmt_usd(0.0), "$0");
        assert_eq!(fmt_usd(999.0), "$999");
        assert_eq!(fmt_usd(1_000.0), "$1,000");
        assert_eq!(fmt_usd(8_892_544.0), "$8,892,544");
    }

    #[test]
    fn rounds_and_signs() {
        assert_eq!(fmt_usd(-1_234_567.8), "-$1,234,568");
        assert_eq!(fmt_usd(0.4), "$0");
    }

    #[test]
    fn non_finite_renders_as_dash() {
        assert_eq!(fmt_usd(f64::NAN), "—");
        assert_eq!(fmt_usd_millions(f64::INFINITY), "—");
    }

    #[test]
    fn millions_with_one_decimal() {
        assert_eq!(fmt_usd_millions(1_250_000.0), "$1.2M");
        assert_eq!(fmt_usd_millions(10_250_000.0), "$10.2M");
    }
}
