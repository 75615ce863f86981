use std::{fmt::Display, sync::Arc};

use serde::{Serialize, Serializer};

/// Currency of an investment amount.
///
/// Amounts in different currencies are never summed together, so this is
/// the grouping key for every investment aggregate.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Inr,
    Jpy,
    Sgd,
    /// Any other three letter code, stored uppercased.
    Other(Arc<str>),
    /// The amount carried no currency marker at all.
    Unknown,
}

impl Currency {
    /// ISO 4217 code. `XXX` is the ISO code for "no currency".
    pub fn code(&self) -> &str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Inr => "INR",
            Currency::Jpy => "JPY",
            Currency::Sgd => "SGD",
            Currency::Other(code) => code,
            Currency::Unknown => "XXX",
        }
    }

    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            Currency::Usd => Some("$"),
            Currency::Eur => Some("€"),
            Currency::Gbp => Some("£"),
            Currency::Inr => Some("₹"),
            Currency::Jpy => Some("¥"),
            Currency::Sgd => Some("S$"),
            Currency::Other(_) | Currency::Unknown => None,
        }
    }

    /// Recognizes a single currency token such as `$`, `S$`, `EUR` or `sgd`.
    pub fn detect(token: &str) -> Option<Self> {
        let token = token.trim().trim_end_matches(['.', ':']);
        if token.is_empty() {
            return None;
        }
        let upper = token.to_uppercase();
        let currency = match upper.as_str() {
            "US$" | "USD" | "$" => Currency::Usd,
            "S$" | "SGD" => Currency::Sgd,
            "€" | "EUR" => Currency::Eur,
            "£" | "GBP" => Currency::Gbp,
            "₹" | "INR" | "RS" => Currency::Inr,
            "¥" | "JPY" => Currency::Jpy,
            code if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) => {
                Currency::Other(code.into())
            }
            _ => return None,
        };
        Some(currency)
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// A parsed amount, magnitude expressed in billions of `currency`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Money {
    pub currency: Currency,
    pub magnitude: f64,
}

impl Money {
    pub fn new(currency: Currency, magnitude: f64) -> Self {
        Self {
            currency,
            magnitude,
        }
    }

    /// Parses free text like `$3.2B`, `€5.3B`, `SGD 5.7B`, `750M EUR` or
    /// `₹25,000 Cr`. Returns `None` when the text holds no number, or when
    /// the word after the number is neither a magnitude nor a currency.
    pub fn parse(text: &str) -> Option<Self> {
        let (start, end) = numeric_span(text)?;
        let digits: String = text[start..end].chars().filter(|c| *c != ',').collect();
        let value: f64 = digits.parse().ok()?;
        if !value.is_finite() {
            return None;
        }

        let prefix = text[..start].split_whitespace().last().unwrap_or_default();
        let (scale, rest) = split_scale(text[end..].trim_start())?;
        let suffix = rest.split_whitespace().next().unwrap_or_default();
        let currency = Currency::detect(prefix)
            .or_else(|| Currency::detect(suffix))
            .unwrap_or(Currency::Unknown);

        Some(Self::new(currency, value * scale))
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.currency.symbol() {
            Some(symbol) => f.write_fmt(format_args!("{symbol}{:.2}B", self.magnitude)),
            None => f.write_fmt(format_args!("{} {:.2}B", self.currency, self.magnitude)),
        }
    }
}

/// Investment as published by the feed. The raw text is kept for display,
/// `amount` is only present when a number could be found in it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Investment {
    pub raw: Arc<str>,
    pub amount: Option<Money>,
}

impl Investment {
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.trim().into(),
            amount: Money::parse(raw),
        }
    }

    pub fn is_parseable(&self) -> bool {
        self.amount.is_some()
    }
}

impl Display for Investment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

// Byte offsets of the first number in `text`. Only ascii bytes are matched
// so both offsets are char boundaries.
fn numeric_span(text: &str) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let start = (0..bytes.len()).find(|&i| {
        bytes[i].is_ascii_digit()
            || (bytes[i] == b'.' && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    })?;
    let len = bytes[start..]
        .iter()
        .take_while(|b| b.is_ascii_digit() || **b == b'.' || **b == b',')
        .count();
    let mut end = start + len;
    while end > start && matches!(bytes[end - 1], b'.' | b',') {
        end -= 1;
    }
    Some((start, end))
}

// Known codes in any case, unknown three letter codes only when uppercased,
// so words like `bil` are not taken for a currency.
fn is_currency_word(word: &str) -> bool {
    match Currency::detect(word) {
        Some(Currency::Other(_)) => word.chars().all(|c| c.is_ascii_uppercase()),
        Some(_) => true,
        None => false,
    }
}

// Splits a leading magnitude word off `rest`. With no word, or a currency
// code, the number is taken as plain units and scaled down to billions.
// Any other word makes the amount unreadable.
fn split_scale(rest: &str) -> Option<(f64, &str)> {
    let word_len = rest
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(rest.len());
    let word = &rest[..word_len];
    let scale = match word.to_ascii_lowercase().as_str() {
        "" => return Some((1e-9, rest)),
        "b" | "bn" | "billion" | "billions" => 1.0,
        "m" | "mn" | "million" | "millions" => 1e-3,
        "k" | "thousand" => 1e-6,
        "t" | "tn" | "trillion" => 1e3,
        "cr" | "crore" | "crores" => 1e-2,
        "l" | "lakh" | "lakhs" | "lac" | "lacs" => 1e-4,
        _ if is_currency_word(word) => return Some((1e-9, rest)),
        _ => return None,
    };
    Some((scale, &rest[word_len..]))
}
