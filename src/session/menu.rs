//! Menu entries and console texts

/// Menu Entries

pub const MENU: &str = "\n=== Menu ===\n\
    1. Create an account\n\
    2. List all accounts\n\
    3. Show an account by IBAN\n\
    4. Edit an account\n\
    5. Delete an account\n\
    6. Request a loan\n\
    0. Quit";

pub const PROMPT_CHOICE: &str = "Your choice: ";

/// Prompts

pub const PROMPT_HOLDER: &str = "Holder: ";
pub const PROMPT_INITIAL_BALANCE: &str = "Initial balance (€): ";
pub const PROMPT_IBAN: &str = "Account IBAN: ";
pub const PROMPT_NEW_HOLDER: &str = "New holder (leave blank to keep current): ";
pub const PROMPT_NEW_BALANCE: &str = "New balance (€, enter -1 to keep current): ";
pub const PROMPT_LOAN_AMOUNT: &str = "Loan amount (€): ";
pub const PROMPT_LOAN_RATE: &str = "Annual interest rate (%): ";
pub const PROMPT_LOAN_TERM: &str = "Loan term (years): ";

/// Messages

pub const GREETING: &str = "Simple bank account management";
pub const FAREWELL: &str = "Goodbye!";
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
pub const NO_ACCOUNTS: &str = "No accounts available.";
pub const ACCOUNTS_HEADER: &str = "\n=== Accounts ===";
pub const ACCOUNT_NOT_FOUND: &str = "Account not found.";
pub const ACCOUNT_DELETED: &str = "Account deleted.";
pub const LOAN_ALREADY_ACTIVE: &str = "This account already has an active loan.";

/// One menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Quit,
    CreateAccount,
    ListAccounts,
    ShowAccount,
    EditAccount,
    DeleteAccount,
    RequestLoan,
    /// Anything that is not a number between 0 and 6
    Invalid,
}

impl MenuChoice {
    /// Interpret a raw input line
    ///
    /// Unparseable input is `Invalid`, never `Quit`.
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<i64>() {
            Ok(0) => MenuChoice::Quit,
            Ok(1) => MenuChoice::CreateAccount,
            Ok(2) => MenuChoice::ListAccounts,
            Ok(3) => MenuChoice::ShowAccount,
            Ok(4) => MenuChoice::EditAccount,
            Ok(5) => MenuChoice::DeleteAccount,
            Ok(6) => MenuChoice::RequestLoan,
            _ => MenuChoice::Invalid,
        }
    }
}
