// src/domain/logic.rs

use crate::domain::listing::Currency;

/// Group digits in threes with `.`, the Venezuelan thousands separator.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// `US$ 120.000` / `Bs. 120.000`
pub fn format_price(price: i64, currency: Currency) -> String {
    format!("{} {}", currency.symbol(), group_thousands(price))
}

/// `1.250 m²`
pub fn format_area(area_m2: i64) -> String {
    format!("{} m²", group_thousands(area_m2))
}

/// Meta descriptions over 160 chars are cut to 157 plus "...".
pub fn truncate_description(text: &str) -> String {
    const MAX: usize = 160;
    const KEEP: usize = 157;

    let text = text.trim();
    if text.chars().count() <= MAX {
        return text.to_string();
    }
    let mut out: String = text.chars().take(KEEP).collect();
    out.push_str("...");
    out
}

/// Digits only, used for phone validation and `wa.me` links.
pub fn digits_only(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}
