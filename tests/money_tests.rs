use metrodash::prelude::*;

fn parse(text: &str) -> Money {
    Money::parse(text).unwrap()
}

fn assert_amount(text: &str, currency: Currency, magnitude: f64) {
    let money = parse(text);
    assert_eq!(money.currency, currency, "currency of {text}");
    assert!(
        (money.magnitude - magnitude).abs() < 1e-9,
        "magnitude of {text} was {}",
        money.magnitude
    );
}

#[test]
fn symbol_prefix_test() {
    assert_amount("$3.2B", Currency::Usd, 3.2);
    assert_amount("€5.3B", Currency::Eur, 5.3);
    assert_amount("£1.1bn", Currency::Gbp, 1.1);
    assert_amount("₹25,000 Cr", Currency::Inr, 250.0);
}

#[test]
fn code_prefix_and_suffix_test() {
    assert_amount("SGD 5.7B", Currency::Sgd, 5.7);
    assert_amount("S$ 5.7B", Currency::Sgd, 5.7);
    assert_amount("US$2B", Currency::Usd, 2.0);
    assert_amount("750M EUR", Currency::Eur, 0.75);
    assert_amount("AED 11 billion", Currency::Other("AED".into()), 11.0);
}

#[test]
fn magnitude_suffix_test() {
    assert_amount("$1.5T", Currency::Usd, 1500.0);
    assert_amount("$250K", Currency::Usd, 0.00025);
    assert_amount("$1,200,000,000", Currency::Usd, 1.2);
}

#[test]
fn indian_magnitude_test() {
    assert_amount("₹500 crore", Currency::Inr, 5.0);
    assert_amount("Rs 40 lakh", Currency::Inr, 0.004);
    assert_amount("INR 1,20,000 Cr", Currency::Inr, 1200.0);
    assert_amount("₹75 lakhs", Currency::Inr, 0.0075);
}

#[test]
fn unknown_magnitude_word_is_unparseable_test() {
    assert!(Money::parse("$3.2 bil").is_none());
    assert!(Money::parse("€12 gazillion").is_none());
    assert!(!Investment::parse("₹900 arab").is_parseable());
    assert_amount("5700000000 SGD", Currency::Sgd, 5.7);
}

#[test]
fn missing_currency_is_unknown_test() {
    assert_amount("4.5B", Currency::Unknown, 4.5);
}

#[test]
fn unparseable_test() {
    assert!(Money::parse("TBD").is_none());
    assert!(Money::parse("").is_none());
    assert!(Money::parse("$.B").is_none());
    let investment = Investment::parse("  not disclosed ");
    assert!(!investment.is_parseable());
    assert_eq!(investment.to_string(), "not disclosed");
}

#[test]
fn trailing_punctuation_test() {
    assert_amount("about $3.2B.", Currency::Usd, 3.2);
}

#[test]
fn display_test() {
    assert_eq!(parse("$3.2B").to_string(), "$3.20B");
    assert_eq!(parse("AED 11B").to_string(), "AED 11.00B");
}

#[test]
fn currency_detect_test() {
    assert_eq!(Currency::detect("usd"), Some(Currency::Usd));
    assert_eq!(Currency::detect("Rs."), Some(Currency::Inr));
    assert_eq!(Currency::detect("dollars"), None);
    assert_eq!(Currency::detect(""), None);
    assert_eq!(Currency::Unknown.code(), "XXX");
}
