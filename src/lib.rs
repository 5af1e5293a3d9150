//! Bank Accounts Library
//! # Overview
//!
//! This library provides an interactive console for managing bank accounts
//! held in memory for the lifetime of a single process.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Loan, Iban, BankError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::registry`] - Insertion-ordered account collection
//! - [`io`] - Console prompting with the parse-or-default number policy
//! - [`session`] - Menu loop dispatching to the registry and accounts
//!
//! # Loans
//!
//! Each account may receive at most one loan in its lifetime:
//!
//! - The principal must be positive, the annual rate in (0%, 20%], the term positive
//! - The principal is credited to the balance immediately
//! - Interest is simple: `principal * rate / 100 * term`

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod session;
pub mod types;

pub use crate::core::AccountRegistry;
pub use session::{Session, SessionConfig};
pub use types::{Account, BankError, CountryCode, Iban, IbanGenerator, Loan};
