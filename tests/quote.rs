use mortgage_calculator::payment::{quote, PaymentQuote, QuoteError, TERM_OPTIONS};

#[test]
fn reference_quote_through_the_form_boundary() {
    let q = quote("200000", "4", "30").unwrap();
    assert_eq!(format!("{:.2}", q.monthly_payment), "954.83");
    assert_eq!(q.principal, 200_000.0);
    assert_eq!(q.annual_rate_percent, 4.0);
    assert_eq!(q.term_years, 30);
}

#[test]
fn term_options_match_the_form_dropdown() {
    assert_eq!(TERM_OPTIONS, [15, 30]);
}

#[test]
fn blank_form_is_rejected() {
    assert_eq!(quote("", "", "15"), Err(QuoteError::InvalidInput));
}

#[test]
fn quote_round_trips_through_json() {
    let original = quote("100000", "5", "15").unwrap();
    let encoded = serde_json::to_string_pretty(&original).unwrap();
    let decoded: PaymentQuote = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, original);
}
