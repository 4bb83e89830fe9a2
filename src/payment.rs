//! The payment core: parses raw form values and evaluates the standard
//! amortization formula. Pure functions only; the form layer owns all I/O.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Term choices offered by the form's dropdown. Free-text terms are not
/// reachable through the input surface.
pub const TERM_OPTIONS: [u32; 2] = [15, 30];

/// The single failure mode: a field that does not hold a finite number.
/// Its display text is exactly what the form shows in place of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("Please provide valid inputs.")]
    InvalidInput,
}

/// One submission's worth of parsed form state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub term_years: u32,
}

impl LoanInput {
    /// Parses the three raw field values. Principal and rate accept any sign
    /// and magnitude that parses to a finite number; nothing further is
    /// validated here.
    pub fn parse(balance: &str, rate: &str, term: &str) -> Result<Self, QuoteError> {
        let principal = parse_finite(balance)?;
        let annual_rate_percent = parse_finite(rate)?;
        let term_years = term
            .trim()
            .parse::<u32>()
            .map_err(|_| QuoteError::InvalidInput)?;
        Ok(Self {
            principal,
            annual_rate_percent,
            term_years,
        })
    }

    /// Amortized monthly payment over the full term.
    ///
    /// At a zero rate the annuity denominator vanishes, so the payment
    /// degenerates to straight-line principal over the term.
    pub fn monthly_payment(&self) -> f64 {
        let monthly_rate = self.annual_rate_percent / 100.0 / 12.0;
        let months = f64::from(self.term_years) * 12.0;
        if monthly_rate > 0.0 {
            let growth = (1.0 + monthly_rate).powf(months);
            self.principal * (monthly_rate * growth) / (growth - 1.0)
        } else {
            self.principal / months
        }
    }
}

/// A successful calculation: the inputs it was quoted for plus the payment.
/// The payment is kept unrounded; display rounds to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentQuote {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub term_years: u32,
    pub monthly_payment: f64,
}

/// The boundary the form calls on submission: parse, then compute.
pub fn quote(balance: &str, rate: &str, term: &str) -> Result<PaymentQuote, QuoteError> {
    let input = LoanInput::parse(balance, rate, term)?;
    Ok(PaymentQuote {
        principal: input.principal,
        annual_rate_percent: input.annual_rate_percent,
        term_years: input.term_years,
        monthly_payment: input.monthly_payment(),
    })
}

fn parse_finite(raw: &str) -> Result<f64, QuoteError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(QuoteError::InvalidInput),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(principal: f64, rate: f64, term: u32) -> f64 {
        LoanInput {
            principal,
            annual_rate_percent: rate,
            term_years: term,
        }
        .monthly_payment()
    }

    #[test]
    fn thirty_year_reference_loan() {
        assert_eq!(format!("{:.2}", payment(200_000.0, 4.0, 30)), "954.83");
    }

    #[test]
    fn fifteen_year_reference_loan() {
        assert_eq!(format!("{:.2}", payment(100_000.0, 5.0, 15)), "790.79");
    }

    #[test]
    fn zero_rate_is_straight_line_principal() {
        assert_eq!(payment(180_000.0, 0.0, 30), 500.0);
    }

    #[test]
    fn non_numeric_fields_are_invalid() {
        let cases = [
            ("", "4", "30"),
            ("200000", "", "30"),
            ("200000", "4", ""),
            ("two hundred grand", "4", "30"),
            ("200000", "4.x", "30"),
            ("200000", "4", "thirty"),
            ("200000", "4", "30.5"),
        ];
        for (balance, rate, term) in cases {
            assert_eq!(quote(balance, rate, term), Err(QuoteError::InvalidInput));
        }
    }

    #[test]
    fn overflowing_balance_is_invalid() {
        // parses to infinity, which is not a finite number
        assert_eq!(quote("1e400", "4", "30"), Err(QuoteError::InvalidInput));
        assert_eq!(quote("200000", "NaN", "30"), Err(QuoteError::InvalidInput));
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let quote = quote(" 250000 ", " 6.5 ", " 15 ").unwrap();
        assert_eq!(quote.principal, 250_000.0);
        assert_eq!(quote.term_years, 15);
    }

    #[test]
    fn identical_inputs_yield_identical_quotes() {
        assert_eq!(quote("200000", "4", "30"), quote("200000", "4", "30"));
    }

    #[test]
    fn invalid_input_displays_the_form_message() {
        assert_eq!(
            QuoteError::InvalidInput.to_string(),
            "Please provide valid inputs."
        );
    }
}
