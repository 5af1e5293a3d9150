//! I/O module
//!
//! Handles the console conversation.
//!
//! # Components
//!
//! - `input` - line reading, prompting, and the parse-or-default number policy

pub mod input;

pub use input::{parse_decimal_or_default, Console};
