//! Form field value objects

use chrono::NaiveDate;

use crate::state::Scope;

/// Numeric input that keeps the raw keyboard buffer.
///
/// The buffer may hold a partial or unparseable entry while the user types;
/// `value()` is `None` in that case and the validator reports it as an
/// invalid number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberInput {
    raw: String,
}

impl NumberInput {
    pub fn from_value(value: i64) -> Self {
        Self {
            raw: value.to_string(),
        }
    }

    /// Parsed value, `None` when the buffer is empty or not a number.
    pub fn value(&self) -> Option<i64> {
        self.raw.trim().parse().ok()
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_digit() || (c == '-' && self.raw.is_empty()) {
            self.raw.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.raw.pop();
    }
}

/// Date input in `YYYY-MM-DD` form, kept as a raw buffer while typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateInput {
    raw: String,
}

impl DateInput {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            raw: date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Parsed date, `None` when empty or malformed. Dates are never a
    /// validation failure; an unset date serializes as an empty string.
    pub fn value(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.raw.trim(), "%Y-%m-%d").ok()
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_digit() || c == '-' {
            self.raw.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.raw.pop();
    }
}

/// Discriminated union over every value shape a wizard field can hold.
///
/// The variant is fixed by the field's descriptor; the editor and the
/// payload builder both dispatch on it, so the kind inferred at edit time
/// and the kind serialized at submit time cannot drift apart.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(NumberInput),
    Toggle(bool),
    Date(DateInput),
    Choice(String),
}

impl FieldValue {
    pub fn text(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }

    pub fn number(n: i64) -> Self {
        FieldValue::Number(NumberInput::from_value(n))
    }

    pub fn date(d: NaiveDate) -> Self {
        FieldValue::Date(DateInput::from_date(d))
    }

    pub fn empty_date() -> Self {
        FieldValue::Date(DateInput::default())
    }

    pub fn choice(s: &str) -> Self {
        FieldValue::Choice(s.to_string())
    }

    /// The value as the user sees it while editing.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.raw().to_string(),
            FieldValue::Toggle(b) => if *b { "yes" } else { "no" }.to_string(),
            FieldValue::Date(d) => d.raw().to_string(),
            FieldValue::Choice(s) => s.clone(),
        }
    }

    /// Append a character, interpreted per the value kind. Toggles and
    /// choices are not text-editable.
    pub fn push_char(&mut self, c: char) {
        match self {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Number(n) => n.push_char(c),
            FieldValue::Date(d) => d.push_char(c),
            FieldValue::Toggle(_) | FieldValue::Choice(_) => {}
        }
    }

    /// Remove the last character for text-like kinds.
    pub fn pop_char(&mut self) {
        match self {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Number(n) => n.pop_char(),
            FieldValue::Date(d) => d.pop_char(),
            FieldValue::Toggle(_) | FieldValue::Choice(_) => {}
        }
    }

    /// Flip a toggle value; no-op for other kinds.
    pub fn toggle(&mut self) {
        if let FieldValue::Toggle(b) = self {
            *b = !*b;
        }
    }

    /// Advance a choice value to the next option in `options`, wrapping.
    pub fn cycle_choice(&mut self, options: &[&str]) {
        if let FieldValue::Choice(current) = self {
            if options.is_empty() {
                return;
            }
            let next = options
                .iter()
                .position(|o| o == current)
                .map(|i| (i + 1) % options.len())
                .unwrap_or(0);
            *current = options[next].to_string();
        }
    }
}

/// A field's current value plus its administrative scope tag.
///
/// `scope` is `Some` exactly when the descriptor declares the field tagged;
/// that shape never changes over the form's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    pub value: FieldValue,
    pub scope: Option<Scope>,
}

impl FieldState {
    pub fn bare(value: FieldValue) -> Self {
        Self { value, scope: None }
    }

    pub fn tagged(value: FieldValue, scope: Scope) -> Self {
        Self {
            value,
            scope: Some(scope),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod number_input {
        use super::*;

        #[test]
        fn test_from_value_round_trips() {
            let n = NumberInput::from_value(300);
            assert_eq!(n.raw(), "300");
            assert_eq!(n.value(), Some(300));
        }

        #[test]
        fn test_empty_buffer_has_no_value() {
            let n = NumberInput::default();
            assert_eq!(n.value(), None);
        }

        #[test]
        fn test_push_rejects_non_digits() {
            let mut n = NumberInput::default();
            n.push_char('x');
            n.push_char('5');
            assert_eq!(n.raw(), "5");
        }

        #[test]
        fn test_leading_minus_allowed_once() {
            let mut n = NumberInput::default();
            n.push_char('-');
            n.push_char('-');
            n.push_char('3');
            assert_eq!(n.raw(), "-3");
            assert_eq!(n.value(), Some(-3));
        }

        #[test]
        fn test_pop_char_empties_value() {
            let mut n = NumberInput::from_value(7);
            n.pop_char();
            assert_eq!(n.value(), None);
        }
    }

    mod date_input {
        use super::*;

        #[test]
        fn test_from_date_formats_iso() {
            let d = DateInput::from_date(NaiveDate::from_ymd_opt(2026, 5, 1).unwrap());
            assert_eq!(d.raw(), "2026-05-01");
            assert!(d.value().is_some());
        }

        #[test]
        fn test_partial_entry_has_no_value() {
            let mut d = DateInput::default();
            for c in "2026-0".chars() {
                d.push_char(c);
            }
            assert_eq!(d.value(), None);
        }

        #[test]
        fn test_letters_are_ignored() {
            let mut d = DateInput::default();
            d.push_char('a');
            assert_eq!(d.raw(), "");
        }
    }

    mod field_value {
        use super::*;

        #[test]
        fn test_toggle_flips_only_toggles() {
            let mut v = FieldValue::Toggle(false);
            v.toggle();
            assert_eq!(v, FieldValue::Toggle(true));

            let mut t = FieldValue::text("abc");
            t.toggle();
            assert_eq!(t, FieldValue::text("abc"));
        }

        #[test]
        fn test_cycle_choice_wraps() {
            let options = ["relevance", "bidding"];
            let mut v = FieldValue::choice("relevance");
            v.cycle_choice(&options);
            assert_eq!(v, FieldValue::choice("bidding"));
            v.cycle_choice(&options);
            assert_eq!(v, FieldValue::choice("relevance"));
        }

        #[test]
        fn test_cycle_choice_recovers_unknown_value() {
            let options = ["relevance", "bidding"];
            let mut v = FieldValue::choice("bogus");
            v.cycle_choice(&options);
            assert_eq!(v, FieldValue::choice("relevance"));
        }

        #[test]
        fn test_push_char_ignored_for_toggle() {
            let mut v = FieldValue::Toggle(true);
            v.push_char('x');
            assert_eq!(v, FieldValue::Toggle(true));
        }

        #[test]
        fn test_display_toggle() {
            assert_eq!(FieldValue::Toggle(true).display(), "yes");
            assert_eq!(FieldValue::Toggle(false).display(), "no");
        }
    }
}
