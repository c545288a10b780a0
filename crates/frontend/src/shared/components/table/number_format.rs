//! Number formatting for tables, cards and chart axes
//!
//! Vietnamese conventions: "." groups thousands, "," separates decimals,
//! amounts are in đồng without fractional part.

const THOUSANDS_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';
const CURRENCY_SYMBOL: &str = "₫";

/// Formats a number with thousands grouping and the given number of decimals
///
/// # Examples
///
/// ```
/// # use frontend::shared::components::table::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1.234,57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals.min(6) as usize);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    // "-0" after rounding is just zero
    let sign = if digits.chars().all(|c| c == '0')
        && decimal_part.map_or(true, |d| d.chars().all(|c| c == '0'))
    {
        ""
    } else {
        sign
    };

    match decimal_part {
        Some(d) => format!("{}{}{}{}", sign, grouped, DECIMAL_SEPARATOR, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Integer with thousands grouping
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Amount in đồng, e.g. "1.234.567 ₫"
pub fn format_money(value: f64) -> String {
    format!("{} {}", format_number_int(value), CURRENCY_SYMBOL)
}

/// Quantity with up to two decimals, trailing zeros dropped
pub fn format_quantity(value: f64) -> String {
    let formatted = format_number_with_decimals(value, 2);
    match formatted.split_once(DECIMAL_SEPARATOR) {
        Some((int, dec)) => {
            let dec = dec.trim_end_matches('0');
            if dec.is_empty() {
                int.to_string()
            } else {
                format!("{}{}{}", int, DECIMAL_SEPARATOR, dec)
            }
        }
        None => formatted,
    }
}

/// Short form for chart axis ticks: "850", "12,5 K", "3 Tr", "1,2 Tỷ"
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1_000_000_000.0 {
        (value / 1_000_000_000.0, " Tỷ")
    } else if abs >= 1_000_000.0 {
        (value / 1_000_000.0, " Tr")
    } else if abs >= 1_000.0 {
        (value / 1_000.0, " K")
    } else {
        (value, "")
    };
    let number = if suffix.is_empty() {
        format_quantity(scaled)
    } else {
        let one_decimal = format_number_with_decimals(scaled, 1);
        one_decimal
            .strip_suffix(",0")
            .map(str::to_string)
            .unwrap_or(one_decimal)
    };
    format!("{}{}", number, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1.235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1.234,6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1.234,57");
        assert_eq!(format_number_with_decimals(-1234567.0, 0), "-1.234.567");
        assert_eq!(format_number_with_decimals(-0.001, 2), "0,00");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234567.0), "1.234.567 ₫");
        assert_eq!(format_money(0.0), "0 ₫");
        assert_eq!(format_money(999.6), "1.000 ₫");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(19.5), "19,5");
        assert_eq!(format_quantity(4.0), "4");
        assert_eq!(format_quantity(1234.25), "1.234,25");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(850.0), "850");
        assert_eq!(format_compact(12_500.0), "12,5 K");
        assert_eq!(format_compact(3_000_000.0), "3 Tr");
        assert_eq!(format_compact(1_260_000_000.0), "1,3 Tỷ");
        assert_eq!(format_compact(0.0), "0");
    }
}
