//! Const and default values.

/// Numeric literal, kept as written.
///
/// The source spelling matters for round trips (`0x1F`, `017`, `1e3` all
/// have other spellings with the same value), so only the text is stored.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Number {
    raw: String,
}

impl Number {
    pub fn new(raw: impl Into<String>) -> Self {
        Number { raw: raw.into() }
    }

    /// Source text, including any leading `-`.
    #[inline]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Numeric value. Hex (`0x`) and octal (leading `0`) integers are
    /// decoded; anything else is read as a decimal float.
    pub fn value(&self) -> f64 {
        let (negative, digits) = match self.raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, self.raw.as_str()),
        };
        let magnitude = if let Some(hex) = digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
        {
            radix_value(hex, 16)
        } else if digits.len() > 1
            && digits.starts_with('0')
            && digits.bytes().all(|b| b.is_ascii_digit())
        {
            radix_value(&digits[1..], 8)
        } else {
            digits.parse::<f64>().unwrap_or(f64::NAN)
        };
        if negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

fn radix_value(digits: &str, radix: u32) -> f64 {
    digits.chars().fold(0.0, |acc, c| {
        acc * f64::from(radix) + f64::from(c.to_digit(radix).unwrap_or(0))
    })
}

/// A const value or a default value.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Literal {
    Boolean(bool),
    Null,
    Infinity { negative: bool },
    NaN,
    Number(Number),
    /// String contents without the surrounding quotes.
    String(String),
    /// `[]`, only valid as a default value.
    EmptySequence,
}

impl Literal {
    pub fn number(raw: impl Into<String>) -> Self {
        Literal::Number(Number::new(raw))
    }

    /// Short tag naming the literal's kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Literal::Boolean(_) => "boolean",
            Literal::Null => "null",
            Literal::Infinity { .. } => "Infinity",
            Literal::NaN => "NaN",
            Literal::Number(_) => "number",
            Literal::String(_) => "string",
            Literal::EmptySequence => "sequence",
        }
    }
}
