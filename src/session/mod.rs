//! Interactive session module
//!
//! A `Session` owns the account registry and the console, reads one menu
//! selection at a time, and runs the matching operation to completion before
//! reading the next one. Business-rule rejections are reported to the user
//! and the loop continues; only a failing console stream ends the session
//! with an error.

pub mod menu;

use crate::core::AccountRegistry;
use crate::io::Console;
use crate::types::{BankError, CountryCode, IbanGenerator};
use log::{info, warn};
use menu::*;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

/// Session settings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionConfig {
    /// Prefix of generated identifiers
    pub country: CountryCode,

    /// Fixed RNG seed for reproducible identifiers
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Build the identifier generator described by this configuration
    pub fn generator(&self) -> IbanGenerator {
        match self.seed {
            Some(seed) => IbanGenerator::seeded(self.country.clone(), seed),
            None => IbanGenerator::new(self.country.clone()),
        }
    }
}

/// Whether the loop keeps going after an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// One interactive console session
pub struct Session<R, W> {
    console: Console<R, W>,
    registry: AccountRegistry,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: &SessionConfig, reader: R, writer: W) -> Self {
        Session {
            console: Console::new(reader, writer),
            registry: AccountRegistry::with_generator(config.generator()),
        }
    }

    pub fn registry(&self) -> &AccountRegistry {
        &self.registry
    }

    pub fn into_writer(self) -> W {
        self.console.into_writer()
    }

    /// Run the menu loop until the user quits or input ends
    ///
    /// # Errors
    ///
    /// Returns `BankError::IoError` if the console cannot be read or written.
    pub fn run(&mut self) -> Result<(), BankError> {
        self.console.say(GREETING)?;

        loop {
            self.console.say(MENU)?;
            let Some(line) = self.console.prompt(PROMPT_CHOICE)? else {
                info!("End of input, closing session");
                break;
            };

            if self.dispatch(MenuChoice::parse(&line))? == Flow::Quit {
                break;
            }
        }

        self.console.flush()
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow, BankError> {
        match choice {
            MenuChoice::Quit => {
                self.console.say(FAREWELL)?;
                Ok(Flow::Quit)
            }
            MenuChoice::CreateAccount => self.create_account(),
            MenuChoice::ListAccounts => self.list_accounts(),
            MenuChoice::ShowAccount => self.show_account(),
            MenuChoice::EditAccount => self.edit_account(),
            MenuChoice::DeleteAccount => self.delete_account(),
            MenuChoice::RequestLoan => self.request_loan(),
            MenuChoice::Invalid => {
                self.console.say(INVALID_CHOICE)?;
                Ok(Flow::Continue)
            }
        }
    }

    // Surrounding whitespace is dropped, so " FR… " finds FR…; lookups are
    // otherwise exact and case-sensitive
    fn prompt_iban(&mut self) -> Result<Option<String>, BankError> {
        self.console.prompt_trimmed(PROMPT_IBAN)
    }

    fn create_account(&mut self) -> Result<Flow, BankError> {
        let Some(holder) = self.console.prompt(PROMPT_HOLDER)? else {
            return Ok(Flow::Quit);
        };
        let Some(balance) = self.console.prompt_decimal(PROMPT_INITIAL_BALANCE)? else {
            return Ok(Flow::Quit);
        };

        match self.registry.open_account(holder, balance) {
            Ok(account) => {
                let message = format!("Account created: {account}");
                self.console.say(message)?;
            }
            Err(e) => {
                warn!("Account creation rejected: {}", e);
                self.console.say(e)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn list_accounts(&mut self) -> Result<Flow, BankError> {
        if self.registry.is_empty() {
            self.console.say(NO_ACCOUNTS)?;
            return Ok(Flow::Continue);
        }

        self.console.say(ACCOUNTS_HEADER)?;
        for (i, account) in self.registry.list_all().iter().enumerate() {
            self.console.say(format!("{}. {}", i + 1, account))?;
        }
        Ok(Flow::Continue)
    }

    fn show_account(&mut self) -> Result<Flow, BankError> {
        let Some(iban) = self.prompt_iban()? else {
            return Ok(Flow::Quit);
        };

        match self.registry.find_by_id(&iban) {
            Some(account) => self.console.say(account)?,
            None => self.console.say(ACCOUNT_NOT_FOUND)?,
        }
        Ok(Flow::Continue)
    }

    fn edit_account(&mut self) -> Result<Flow, BankError> {
        let Some(iban) = self.prompt_iban()? else {
            return Ok(Flow::Quit);
        };
        if self.registry.find_by_id(&iban).is_none() {
            self.console.say(ACCOUNT_NOT_FOUND)?;
            return Ok(Flow::Continue);
        }

        let Some(holder) = self.console.prompt(PROMPT_NEW_HOLDER)? else {
            return Ok(Flow::Quit);
        };
        let Some(balance) = self.console.prompt_decimal(PROMPT_NEW_BALANCE)? else {
            return Ok(Flow::Quit);
        };

        let Some(account) = self.registry.find_by_id_mut(&iban) else {
            self.console.say(ACCOUNT_NOT_FOUND)?;
            return Ok(Flow::Continue);
        };
        if !holder.is_empty() {
            account.set_holder(holder);
        }
        // Negative means "keep"; unparseable input arrives here as zero and is applied
        if balance >= Decimal::ZERO {
            account.set_balance(balance);
        }
        info!("Edited account {}", account.iban());

        let message = format!("Account updated: {account}");
        self.console.say(message)?;
        Ok(Flow::Continue)
    }

    fn delete_account(&mut self) -> Result<Flow, BankError> {
        let Some(iban) = self.prompt_iban()? else {
            return Ok(Flow::Quit);
        };

        match self.registry.remove(&iban) {
            Ok(_) => self.console.say(ACCOUNT_DELETED)?,
            Err(e) => {
                warn!("Delete rejected: {}", e);
                self.console.say(ACCOUNT_NOT_FOUND)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn request_loan(&mut self) -> Result<Flow, BankError> {
        let Some(iban) = self.prompt_iban()? else {
            return Ok(Flow::Quit);
        };
        match self.registry.find_by_id(&iban) {
            None => {
                self.console.say(ACCOUNT_NOT_FOUND)?;
                return Ok(Flow::Continue);
            }
            Some(account) if account.has_active_loan() => {
                self.console.say(LOAN_ALREADY_ACTIVE)?;
                return Ok(Flow::Continue);
            }
            Some(_) => {}
        }

        let Some(principal) = self.console.prompt_decimal(PROMPT_LOAN_AMOUNT)? else {
            return Ok(Flow::Quit);
        };
        let Some(rate) = self.console.prompt_decimal(PROMPT_LOAN_RATE)? else {
            return Ok(Flow::Quit);
        };
        let Some(term) = self.console.prompt_decimal(PROMPT_LOAN_TERM)? else {
            return Ok(Flow::Quit);
        };

        let Some(account) = self.registry.find_by_id_mut(&iban) else {
            self.console.say(ACCOUNT_NOT_FOUND)?;
            return Ok(Flow::Continue);
        };
        let message = match account.request_loan(principal, rate, term) {
            Ok(()) => {
                info!("Granted loan of {} on account {}", principal, account.iban());
                format!("Loan granted: {account}")
            }
            Err(e) => {
                warn!("Loan refused on account {}: {}", account.iban(), e);
                format!("Loan refused: {e}")
            }
        };
        self.console.say(message)?;
        Ok(Flow::Continue)
    }
}
