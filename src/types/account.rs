//! Account-related types for the bank account console
//!
//! This module defines the Account structure, its optional single loan,
//! and the validation and simple-interest rules attached to them.

use super::error::BankError;
use super::iban::Iban;
use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Highest annual interest rate a loan may carry, in percent
pub const MAX_ANNUAL_RATE_PERCENT: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Rendering format for opening timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Terms of a granted loan
///
/// Fixed for the life of the loan; there is no repayment or amortization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Loan {
    /// Amount disbursed into the account balance
    pub principal: Decimal,

    /// Annual rate in percent (5 means 5%)
    pub annual_rate_percent: Decimal,

    /// Duration in years, fractional years allowed
    pub term_years: Decimal,
}

impl Loan {
    /// Simple interest over the whole term: `principal * rate / 100 * term`
    ///
    /// Returns `None` if the result does not fit in a `Decimal`.
    pub fn checked_interest(&self) -> Option<Decimal> {
        self.annual_rate_percent
            .checked_div(Decimal::ONE_HUNDRED)
            .and_then(|rate| self.principal.checked_mul(rate))
            .and_then(|interest| interest.checked_mul(self.term_years))
    }

    /// Simple interest over the whole term
    ///
    /// Saturates at `Decimal::MAX`. Loans granted through
    /// [`Account::request_loan`] never reach it.
    pub fn interest(&self) -> Decimal {
        self.checked_interest().unwrap_or(Decimal::MAX)
    }
}

/// A bank account record
///
/// The identifier and opening timestamp are fixed at construction. Holder and
/// balance are freely editable through the setters; the loan goes from `None`
/// to `Some` at most once and never back.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    iban: Iban,
    holder: String,
    balance: Decimal,
    opened_at: NaiveDateTime,
    loan: Option<Loan>,
}

impl Account {
    /// Create a new account without a loan
    ///
    /// # Errors
    ///
    /// Returns `NegativeBalance` if `balance` is below zero. An account can
    /// never be opened in the red, whatever the caller checked beforehand.
    pub fn new(
        iban: Iban,
        holder: impl Into<String>,
        balance: Decimal,
        opened_at: NaiveDateTime,
    ) -> Result<Self, BankError> {
        if balance < Decimal::ZERO {
            return Err(BankError::negative_balance(balance));
        }

        Ok(Account {
            iban,
            holder: holder.into(),
            balance,
            opened_at,
            loan: None,
        })
    }

    pub fn iban(&self) -> &Iban {
        &self.iban
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn opened_at(&self) -> NaiveDateTime {
        self.opened_at
    }

    pub fn loan(&self) -> Option<&Loan> {
        self.loan.as_ref()
    }

    pub fn has_active_loan(&self) -> bool {
        self.loan.is_some()
    }

    pub fn set_holder(&mut self, holder: impl Into<String>) {
        self.holder = holder.into();
    }

    /// Overwrite the balance
    ///
    /// Not validated here: the console only calls this with non-negative
    /// amounts, and a balance may legitimately go anywhere after opening.
    pub fn set_balance(&mut self, balance: Decimal) {
        self.balance = balance;
    }

    /// Grant a loan and disburse it into the balance
    ///
    /// Succeeds iff there is no loan yet, `principal > 0`,
    /// `0 < annual_rate_percent <= 20` and `term_years > 0`. On failure the
    /// account is left untouched.
    ///
    /// # Errors
    ///
    /// - `LoanAlreadyActive` if a loan was granted before (checked first)
    /// - `InvalidLoanAmount`, `InvalidInterestRate`, `InvalidLoanTerm` for
    ///   out-of-range terms
    /// - `AmountOverflow` if the new balance or the interest would not fit
    ///   in a `Decimal`
    pub fn request_loan(
        &mut self,
        principal: Decimal,
        annual_rate_percent: Decimal,
        term_years: Decimal,
    ) -> Result<(), BankError> {
        if self.loan.is_some() {
            return Err(BankError::loan_already_active(self.iban.as_str()));
        }
        if principal <= Decimal::ZERO {
            return Err(BankError::invalid_loan_amount(principal));
        }
        if annual_rate_percent <= Decimal::ZERO || annual_rate_percent > MAX_ANNUAL_RATE_PERCENT
        {
            return Err(BankError::invalid_interest_rate(
                annual_rate_percent,
                MAX_ANNUAL_RATE_PERCENT,
            ));
        }
        if term_years <= Decimal::ZERO {
            return Err(BankError::invalid_loan_term(term_years));
        }

        let new_balance = self
            .balance
            .checked_add(principal)
            .ok_or_else(|| BankError::amount_overflow("loan disbursement"))?;
        let loan = Loan {
            principal,
            annual_rate_percent,
            term_years,
        };
        loan.checked_interest()
            .ok_or_else(|| BankError::amount_overflow("interest"))?;

        self.loan = Some(loan);
        self.balance = new_balance;

        Ok(())
    }

    /// Simple interest owed on the active loan, zero without one
    pub fn compute_interest(&self) -> Decimal {
        self.loan.map_or(Decimal::ZERO, |loan| loan.interest())
    }

    /// One-line human readable summary
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

// Half-away-from-zero, so 0.125 renders as 0.13
fn fixed(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IBAN: {}, Holder: {}, Balance: {:.2}€, Opened: {}",
            self.iban,
            self.holder,
            fixed(self.balance, 2),
            self.opened_at.format(TIMESTAMP_FORMAT)
        )?;

        if let Some(loan) = &self.loan {
            write!(
                f,
                ", Loan: {:.2}€ (Rate: {:.2}%, Term: {:.1} years, Interest: {:.2}€)",
                fixed(loan.principal, 2),
                fixed(loan.annual_rate_percent, 2),
                fixed(loan.term_years, 1),
                fixed(loan.interest(), 2)
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn opened_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn account(holder: &str, balance: Decimal) -> Account {
        let iban = "FR12345678901234".parse().unwrap();
        Account::new(iban, holder, balance, opened_at()).unwrap()
    }

    fn dec(value: i64) -> Decimal {
        Decimal::from(value)
    }

    #[test]
    fn test_new_account_has_no_loan() {
        let account = account("Alice", Decimal::new(10050, 2));

        assert_eq!(account.iban().as_str(), "FR12345678901234");
        assert_eq!(account.holder(), "Alice");
        assert_eq!(account.balance(), Decimal::new(10050, 2));
        assert_eq!(account.opened_at(), opened_at());
        assert!(account.loan().is_none());
        assert_eq!(account.compute_interest(), Decimal::ZERO);
    }

    #[test]
    fn test_new_account_accepts_zero_balance() {
        assert_eq!(account("Zoe", Decimal::ZERO).balance(), Decimal::ZERO);
    }

    #[test]
    fn test_new_account_rejects_negative_balance() {
        let iban = "FR12345678901234".parse().unwrap();
        let result = Account::new(iban, "Bob", dec(-50), opened_at());
        assert_eq!(result, Err(BankError::negative_balance(dec(-50))));
    }

    #[test]
    fn test_loan_is_disbursed_into_balance() {
        let mut account = account("Alice", dec(100));

        account.request_loan(dec(500), dec(5), dec(2)).unwrap();

        assert_eq!(account.balance(), dec(600));
        assert_eq!(account.compute_interest(), dec(50));
        assert_eq!(
            account.loan(),
            Some(&Loan {
                principal: dec(500),
                annual_rate_percent: dec(5),
                term_years: dec(2),
            })
        );
    }

    #[test]
    fn test_interest_is_simple() {
        let mut account = account("Carol", Decimal::ZERO);
        account.request_loan(dec(1000), dec(5), dec(2)).unwrap();
        assert_eq!(account.compute_interest(), dec(100));
    }

    #[test]
    fn test_interest_with_fractional_term() {
        let mut account = account("Carol", Decimal::ZERO);
        // 1200 at 2.5% over 1.5 years
        account
            .request_loan(dec(1200), Decimal::new(25, 1), Decimal::new(15, 1))
            .unwrap();
        assert_eq!(account.compute_interest(), dec(45));
    }

    #[rstest]
    #[case::zero_principal(dec(0), dec(5), dec(2), BankError::invalid_loan_amount(dec(0)))]
    #[case::negative_principal(dec(-10), dec(5), dec(2), BankError::invalid_loan_amount(dec(-10)))]
    #[case::zero_rate(dec(500), dec(0), dec(2), BankError::invalid_interest_rate(dec(0), dec(20)))]
    #[case::rate_above_ceiling(dec(500), dec(25), dec(2), BankError::invalid_interest_rate(dec(25), dec(20)))]
    #[case::rate_just_above_ceiling(
        dec(500),
        Decimal::new(2001, 2),
        dec(2),
        BankError::invalid_interest_rate(Decimal::new(2001, 2), dec(20))
    )]
    #[case::zero_term(dec(500), dec(5), dec(0), BankError::invalid_loan_term(dec(0)))]
    #[case::negative_term(dec(500), dec(5), dec(-1), BankError::invalid_loan_term(dec(-1)))]
    fn test_rejected_loan_leaves_account_unchanged(
        #[case] principal: Decimal,
        #[case] rate: Decimal,
        #[case] term: Decimal,
        #[case] expected: BankError,
    ) {
        let mut account = account("Dave", dec(100));
        let before = account.clone();

        let result = account.request_loan(principal, rate, term);

        assert_eq!(result, Err(expected));
        assert_eq!(account, before);
    }

    #[rstest]
    #[case::interest_overflow(Decimal::ZERO, Decimal::MAX, dec(20), dec(10), "interest")]
    #[case::balance_overflow(Decimal::MAX, dec(1), dec(5), dec(1), "loan disbursement")]
    fn test_overflowing_loan_is_rejected(
        #[case] balance: Decimal,
        #[case] principal: Decimal,
        #[case] rate: Decimal,
        #[case] term: Decimal,
        #[case] operation: &str,
    ) {
        let mut account = account("Mallory", balance);
        let before = account.clone();

        let result = account.request_loan(principal, rate, term);

        assert_eq!(result, Err(BankError::amount_overflow(operation)));
        assert_eq!(account, before);
        assert_eq!(account.compute_interest(), Decimal::ZERO);
    }

    #[test]
    fn test_huge_loan_that_fits_is_granted() {
        let mut account = account("Niaj", Decimal::ZERO);
        let principal = Decimal::from_i128_with_scale(10i128.pow(27), 0);

        account.request_loan(principal, dec(20), dec(1)).unwrap();

        assert_eq!(account.balance(), principal);
        assert_eq!(
            account.compute_interest(),
            Decimal::from_i128_with_scale(2 * 10i128.pow(26), 0)
        );
        assert!(account.describe().contains("Interest: 200000000000000000000000000.00€"));
    }

    #[test]
    fn test_interest_saturates_for_unchecked_loans() {
        let loan = Loan {
            principal: Decimal::MAX,
            annual_rate_percent: dec(20),
            term_years: dec(10),
        };
        assert_eq!(loan.checked_interest(), None);
        assert_eq!(loan.interest(), Decimal::MAX);
    }

    #[test]
    fn test_rate_at_ceiling_is_accepted() {
        let mut account = account("Erin", dec(100));
        assert!(account.request_loan(dec(100), dec(20), dec(1)).is_ok());
    }

    #[rstest]
    #[case::same_terms(dec(500), dec(5), dec(2))]
    #[case::valid_other_terms(dec(10), dec(1), dec(1))]
    #[case::invalid_terms(dec(0), dec(99), dec(0))]
    fn test_second_loan_always_fails(
        #[case] principal: Decimal,
        #[case] rate: Decimal,
        #[case] term: Decimal,
    ) {
        let mut account = account("Frank", dec(100));
        account.request_loan(dec(500), dec(5), dec(2)).unwrap();
        let before = account.clone();

        let result = account.request_loan(principal, rate, term);

        assert_eq!(
            result,
            Err(BankError::loan_already_active("FR12345678901234"))
        );
        assert_eq!(account, before);
    }

    #[test]
    fn test_setters_are_unconditional() {
        let mut account = account("Grace", dec(100));

        account.set_holder("Heidi");
        account.set_balance(dec(-5));

        assert_eq!(account.holder(), "Heidi");
        assert_eq!(account.balance(), dec(-5));
    }

    #[test]
    fn test_describe_without_loan() {
        let account = account("Alice", Decimal::new(1005, 1));
        assert_eq!(
            account.describe(),
            "IBAN: FR12345678901234, Holder: Alice, Balance: 100.50€, Opened: 2024-03-15 09:30:00"
        );
    }

    #[test]
    fn test_describe_with_loan() {
        let mut account = account("Alice", dec(100));
        account.request_loan(dec(500), dec(5), dec(2)).unwrap();
        assert_eq!(
            account.describe(),
            "IBAN: FR12345678901234, Holder: Alice, Balance: 600.00€, Opened: 2024-03-15 09:30:00, \
             Loan: 500.00€ (Rate: 5.00%, Term: 2.0 years, Interest: 50.00€)"
        );
    }

    #[test]
    fn test_describe_rounds_half_away_from_zero() {
        let mut account = account("Ivan", Decimal::new(12345, 3));
        // 1000 at 3.333% for 0.25 years = 8.3325
        account
            .request_loan(dec(1000), Decimal::new(3333, 3), Decimal::new(25, 2))
            .unwrap();

        let description = account.describe();
        assert!(description.contains("Balance: 1012.35€"), "{description}");
        assert!(description.contains("Rate: 3.33%"), "{description}");
        assert!(description.contains("Term: 0.3 years"), "{description}");
        assert!(description.contains("Interest: 8.33€"), "{description}");
    }
}
