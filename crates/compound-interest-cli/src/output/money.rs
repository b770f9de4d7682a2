use rust_decimal::{Decimal, RoundingStrategy};

/// Round to cents, half away from zero.
pub fn to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Two-decimal plain rendering used in CSV files ("1234.50").
pub fn plain(value: Decimal) -> String {
    format!("{:.2}", to_cents(value))
}

/// Currency rendering with thousands separators ("R$ 1,234.50").
pub fn currency(symbol: &str, value: Decimal) -> String {
    let digits = plain(value.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if to_cents(value) < Decimal::ZERO { "-" } else { "" };
    if symbol.is_empty() {
        format!("{sign}{grouped}.{frac_part}")
    } else {
        format!("{sign}{symbol} {grouped}.{frac_part}")
    }
}
