//! Error types for the bank account console
//!
//! This module defines every error that an account operation can report.
//! Messages are written for the person at the console, since every
//! business-rule rejection is shown to them verbatim.
//!
//! # Error Categories
//!
//! - **Account Errors**: negative opening balance, unknown identifier
//! - **Loan Errors**: out-of-range principal, rate, or term, loan already active
//! - **Identifier Errors**: malformed country code or identifier
//! - **I/O Errors**: console streams failing (the only fatal category)

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the bank account console
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// An account cannot be opened with a negative balance
    #[error("Initial balance must not be negative (got {amount})")]
    NegativeBalance {
        /// The rejected opening balance
        amount: Decimal,
    },

    /// The loan principal must be strictly positive
    #[error("Loan amount must be greater than zero (got {amount})")]
    InvalidLoanAmount {
        /// The rejected principal
        amount: Decimal,
    },

    /// The annual rate must lie in (0, 20]
    #[error("Annual interest rate must be above 0% and at most {max}% (got {rate}%)")]
    InvalidInterestRate {
        /// The rejected rate, in percent
        rate: Decimal,
        /// The ceiling that was exceeded
        max: Decimal,
    },

    /// The loan term must be strictly positive
    #[error("Loan term must be greater than zero years (got {years})")]
    InvalidLoanTerm {
        /// The rejected term, in years
        years: Decimal,
    },

    /// The account already carries its one loan
    #[error("Account {iban} already has an active loan")]
    LoanAlreadyActive {
        /// Identifier of the account
        iban: String,
    },

    /// No account with that identifier is registered
    #[error("Account {iban} not found")]
    AccountNotFound {
        /// The identifier that was looked up
        iban: String,
    },

    /// Identifier prefixes are exactly two uppercase ASCII letters
    #[error("Invalid country code '{code}': expected two uppercase letters")]
    InvalidCountryCode {
        /// The rejected code
        code: String,
    },

    /// A string that does not have the identifier shape
    #[error("Invalid IBAN '{value}': expected a two-letter prefix followed by {digits} digits")]
    InvalidIban {
        /// The rejected value
        value: String,
        /// Number of digits expected after the prefix
        digits: usize,
    },

    /// An amount grew past what a `Decimal` can hold
    ///
    /// Rejected before any state changes, like the other loan errors.
    #[error("Amount too large: {operation} would overflow")]
    AmountOverflow {
        /// What was being computed
        operation: String,
    },

    /// Reading from or writing to the console failed
    ///
    /// This is the only fatal error: the session stops and the binary exits.
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },
}

// Conversion from io::Error to BankError
impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::IoError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl BankError {
    /// Create a NegativeBalance error
    pub fn negative_balance(amount: Decimal) -> Self {
        BankError::NegativeBalance { amount }
    }

    /// Create an InvalidLoanAmount error
    pub fn invalid_loan_amount(amount: Decimal) -> Self {
        BankError::InvalidLoanAmount { amount }
    }

    /// Create an InvalidInterestRate error
    pub fn invalid_interest_rate(rate: Decimal, max: Decimal) -> Self {
        BankError::InvalidInterestRate { rate, max }
    }

    /// Create an InvalidLoanTerm error
    pub fn invalid_loan_term(years: Decimal) -> Self {
        BankError::InvalidLoanTerm { years }
    }

    /// Create a LoanAlreadyActive error
    pub fn loan_already_active(iban: &str) -> Self {
        BankError::LoanAlreadyActive {
            iban: iban.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(iban: &str) -> Self {
        BankError::AccountNotFound {
            iban: iban.to_string(),
        }
    }

    /// Create an AmountOverflow error
    pub fn amount_overflow(operation: &str) -> Self {
        BankError::AmountOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create an InvalidCountryCode error
    pub fn invalid_country_code(code: &str) -> Self {
        BankError::InvalidCountryCode {
            code: code.to_string(),
        }
    }

    /// Create an InvalidIban error
    pub fn invalid_iban(value: &str, digits: usize) -> Self {
        BankError::InvalidIban {
            value: value.to_string(),
            digits,
        }
    }
}
