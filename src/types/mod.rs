//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: the account record and its loan
//! - `iban`: account identifiers and their generator
//! - `error`: Error types for the bank account console

pub mod account;
pub mod error;
pub mod iban;

pub use account::{Account, Loan, MAX_ANNUAL_RATE_PERCENT};
pub use error::BankError;
pub use iban::{CountryCode, Iban, IbanGenerator};
