//! Formatting helpers for presenting quantities.
//!
//! The dashboard targets the id-ID locale: `.` as the thousands separator
//! and Indonesian magnitude words (Juta, Miliar) for Rupiah amounts. These
//! are fixed conventions of the dataset, not runtime locale state.

const GROUP_SEPARATOR: char = '.';

const MILIAR: f64 = 1e9;
const JUTA: f64 = 1e6;

/// Abbreviated Rupiah amount: `Rp 2.5 Miliar`, `Rp 45 Juta`, `Rp 750.000`.
///
/// Band selection happens after rounding, so a mantissa that rounds up to
/// the next band's threshold is promoted (999_600_000 renders as
/// `Rp 1.0 Miliar`, never `Rp 1000 Juta`) and a strictly larger amount
/// never reads as a smaller unit.
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };

    if amount >= MILIAR {
        return format!("Rp {:.1} Miliar", amount / MILIAR);
    }

    if amount >= JUTA {
        let juta = (amount / JUTA).round();
        if juta >= 1000.0 {
            return format!("Rp {:.1} Miliar", amount / MILIAR);
        }
        return format!("Rp {juta:.0} Juta");
    }

    let rounded = amount.round();
    if rounded >= JUTA {
        return format!("Rp {:.0} Juta", rounded / JUTA);
    }
    format!("Rp {}", group_integer(rounded as i64))
}

/// Fixed-precision index/score value; the caller picks the precision its
/// table uses (brand aggregates show 1 decimal, raw records 2).
pub fn format_index(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    format!("{value:.decimals$}")
}

/// Locale-grouped integer count.
pub fn format_count(count: u64) -> String {
    group_digits(&count.to_string())
}

fn group_integer(value: i64) -> String {
    let grouped = group_digits(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}
