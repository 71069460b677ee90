// src/forms.rs
//! `application/x-www-form-urlencoded` parsing shared by query strings and
//! POST bodies.

use url::form_urlencoded;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    pub fn parse(raw: &str) -> Self {
        Self {
            pairs: form_urlencoded::parse(raw.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        }
    }

    /// First value for `key`, trimmed; blank values count as missing.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
            .collect()
    }

    /// Set `key` unless it already has a non-blank value.
    pub fn set_default(&mut self, key: &str, value: &str) {
        if self.get(key).is_none() {
            self.pairs.retain(|(k, _)| k != key);
            self.pairs.push((key.to_string(), value.to_string()));
        }
    }

    /// Whole number, optionally grouped in thousands with `.` (`120.000`).
    /// Missing, unparsable or fractional values (`99.99`, `1,5`) are `None`.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(parse_whole_number)
    }
}

fn parse_whole_number(raw: &str) -> Option<i64> {
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw),
    };
    let mut groups = digits.split('.');
    let head = groups.next()?;
    let mut joined = String::from(sign);
    joined.push_str(head);
    for g in groups {
        if head.is_empty() || head.len() > 3 || g.len() != 3 {
            return None;
        }
        joined.push_str(g);
    }
    if !joined.trim_start_matches('-').bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    joined.parse().ok()
}
