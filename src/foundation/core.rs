use std::fmt;

/// Non-negative decimal literal that remembers how it was written.
///
/// Directive coordinates are passed through to markup verbatim, so the source text is the
/// canonical form; `value` is only used for arithmetic (durations) and comparisons.
#[derive(Clone, Debug, PartialEq)]
pub struct Decimal {
    text: String,
    value: f64,
}

impl Decimal {
    /// Parse `digits`, `digits.digits`, `digits.` or `.digits`.
    ///
    /// Returns `None` for anything else, including signs and exponents.
    pub fn parse(text: &str) -> Option<Self> {
        if !is_decimal_literal(text) {
            return None;
        }
        let value: f64 = text.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        Some(Self {
            text: text.to_owned(),
            value,
        })
    }

    /// Numeric value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Source text.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

pub(crate) fn is_decimal_literal(text: &str) -> bool {
    let mut digits = 0usize;
    let mut dots = 0usize;
    for b in text.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

/// Format seconds for SMIL `begin`/`dur` attributes, e.g. `2s`, `0.25s`.
///
/// Values are rounded to nanoseconds so `0.3 - 0.1` prints as `0.2s`.
pub fn format_seconds(secs: f64) -> String {
    let mut s = format!("{secs:.9}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_owned();
    }
    s.push('s');
    s
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
