//! Input form rules for the two percentage fields.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::{CalculatorError, Result};
use crate::types::Percentage;

/// keep only digits and decimal points, as typed into a numeric field
pub fn numeric_mask(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect()
}

/// pasted text is accepted only when it is a number as a whole
pub fn is_numeric_paste(text: &str) -> bool {
    Decimal::from_str(text.trim()).is_ok()
}

/// parse a bounded whole-number percentage; an empty field counts as zero
pub fn parse_percentage(field: &str, text: &str) -> Result<Percentage> {
    let trimmed = text.trim();
    let invalid = || CalculatorError::InvalidPercentage {
        field: field.to_string(),
        value: trimmed.to_string(),
    };

    if trimmed.is_empty() {
        return Ok(Percentage::ZERO);
    }

    let value: i64 = trimmed.parse().map_err(|_| invalid())?;
    Percentage::try_from(value).map_err(|_| invalid())
}

/// validated pair of percentages from the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepaymentRequest {
    pub interest: Percentage,
    pub repayment: Percentage,
}

impl RepaymentRequest {
    pub fn parse(interest: &str, repayment: &str) -> Result<Self> {
        Ok(Self {
            interest: parse_percentage("interest percentage", interest)?,
            repayment: parse_percentage("repayment percentage", repayment)?,
        })
    }
}
