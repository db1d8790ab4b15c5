use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{CalculatorError, Result};

/// default report file written by the report sink
pub const DEFAULT_REPORT_FILE: &str = "repayment_report.txt";

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// minimum repayment taken when the percentage repayment is smaller
    pub fixed_repayment_floor: Money,
    /// principal used when the caller does not supply one
    pub initial_debt: Money,
    /// optional hard stop for the monthly loop
    pub max_months: Option<u32>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            fixed_repayment_floor: Money::from_decimal(dec!(50.00)),
            initial_debt: Money::from_decimal(dec!(100.00)),
            max_months: None,
        }
    }
}

impl CalculatorConfig {
    /// configuration with a custom floor and principal
    pub fn new(fixed_repayment_floor: Money, initial_debt: Money) -> Self {
        Self {
            fixed_repayment_floor,
            initial_debt,
            ..Self::default()
        }
    }

    pub fn with_floor(mut self, floor: Money) -> Self {
        self.fixed_repayment_floor = floor;
        self
    }

    pub fn with_initial_debt(mut self, debt: Money) -> Self {
        self.initial_debt = debt;
        self
    }

    pub fn with_max_months(mut self, months: u32) -> Self {
        self.max_months = Some(months);
        self
    }

    /// reject parameters that could never terminate
    pub fn validate(&self) -> Result<()> {
        if !self.fixed_repayment_floor.is_positive() {
            return Err(CalculatorError::InvalidConfiguration {
                message: format!(
                    "fixed repayment floor must be positive, got {}",
                    self.fixed_repayment_floor
                ),
            });
        }

        if self.initial_debt.is_negative() {
            return Err(CalculatorError::InvalidConfiguration {
                message: format!("initial debt cannot be negative, got {}", self.initial_debt),
            });
        }

        if self.max_months == Some(0) {
            return Err(CalculatorError::InvalidConfiguration {
                message: "month limit must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}
