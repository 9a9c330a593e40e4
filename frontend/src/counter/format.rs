//! Display formatting for counter values.
//!
//! Whole numbers use Indian digit grouping (`12,34,567`): the first
//! separator sits three digits from the right, every later one two digits
//! further left. Browser locale formatters are not used because the output
//! has to be byte-exact regardless of the visitor's locale.

/// Prefix, suffix and precision applied to every rendered value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CounterFormat {
    pub prefix: String,
    pub suffix: String,
    pub decimals: usize,
}

impl CounterFormat {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>, decimals: usize) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            decimals,
        }
    }

    /// `prefix + number + suffix` for an animated value.
    pub fn render(&self, value: f64) -> String {
        format!("{}{}{}", self.prefix, format_number(value, self.decimals), self.suffix)
    }

    /// Text shown before the counter has become visible.
    pub fn render_placeholder(&self) -> String {
        format!("{}0{}", self.prefix, self.suffix)
    }
}

/// Formats `value` with `decimals` fractional digits, or floors it and
/// applies Indian grouping when `decimals == 0`.
pub fn format_number(value: f64, decimals: usize) -> String {
    // -0.0 shows up at the start of a negative-target animation
    let value = if value == 0.0 || value.is_nan() { 0.0 } else { value };

    if decimals > 0 {
        return format!("{:.*}", decimals, round_half_away(value, decimals));
    }

    let whole = value.floor() as i64;
    let grouped = group_indian(whole.unsigned_abs());
    if whole < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Rounds to `decimals` places with ties going away from zero, so `12.25`
/// becomes `12.3` rather than the `12.2` that `{:.1}` alone would print.
fn round_half_away(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals.min(i32::MAX as usize) as i32);
    let rounded = (value * scale).round() / scale;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

/// Groups the digits of `n` as 3 then 2, 2, 2... from the right.
pub fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);

    // an odd-length head starts with a single leading digit
    let lead = head.len() % 2;
    if lead == 1 {
        out.push_str(&head[..1]);
    }
    for (i, pair) in head.as_bytes()[lead..].chunks(2).enumerate() {
        if i > 0 || lead == 1 {
            out.push(',');
        }
        out.extend(pair.iter().map(|b| *b as char));
    }

    out.push(',');
    out.push_str(last_three);
    out
}
