//! Bank Accounts CLI
//!
//! Interactive console for managing bank accounts in memory.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --country DE
//! cargo run -- --seed 42 --log-level info
//! ```
//!
//! The menu, prompts, and account summaries go to stdout; diagnostics go to
//! stderr through `env_logger`.
//!
//! # Exit Codes
//!
//! - 0: Session ended normally (menu choice `0` or end of input)
//! - 1: The console could not be read or written

use bank_accounts::cli;
use bank_accounts::Session;
use std::io;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    env_logger::Builder::new()
        .filter_level(args.log_level.to_filter())
        .parse_default_env()
        .init();

    let config = args.to_session_config();
    let stdin = io::stdin();
    let mut session = Session::new(&config, stdin.lock(), io::stdout());

    if let Err(e) = session.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
