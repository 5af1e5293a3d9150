//! Account identifiers
//!
//! Identifiers look like an IBAN without being one: a two-letter country
//! prefix followed by [`IBAN_DIGITS`] random decimal digits. There is no
//! check-digit computation and no collision check, so uniqueness is only
//! probabilistic (10^14 possible values per prefix).

use super::error::BankError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;

/// Number of random digits following the country prefix
pub const IBAN_DIGITS: usize = 14;

/// Prefix used when none is configured
pub const DEFAULT_COUNTRY_CODE: &str = "FR";

/// Two uppercase ASCII letters used as the identifier prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CountryCode {
    fn default() -> Self {
        CountryCode(DEFAULT_COUNTRY_CODE.to_string())
    }
}

impl FromStr for CountryCode {
    type Err = BankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 2 && s.bytes().all(|b| b.is_ascii_uppercase()) {
            Ok(CountryCode(s.to_string()))
        } else {
            Err(BankError::invalid_country_code(s))
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generated account identifier
///
/// Immutable once created; the only way to obtain one is through
/// [`IbanGenerator::next_iban`] or by parsing a well-formed string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iban(String);

impl Iban {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two-letter prefix
    pub fn country(&self) -> &str {
        &self.0[..2]
    }
}

impl FromStr for Iban {
    type Err = BankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 2 + IBAN_DIGITS
            && bytes[..2].iter().all(u8::is_ascii_uppercase)
            && bytes[2..].iter().all(u8::is_ascii_digit);

        if well_formed {
            Ok(Iban(s.to_string()))
        } else {
            Err(BankError::invalid_iban(s, IBAN_DIGITS))
        }
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Produces fresh identifiers for new accounts
///
/// Owns its random source so that a session seeded with `--seed` hands out
/// the same sequence of identifiers on every run.
pub struct IbanGenerator {
    country: CountryCode,
    rng: StdRng,
}

impl IbanGenerator {
    /// Generator seeded from operating system entropy
    pub fn new(country: CountryCode) -> Self {
        IbanGenerator {
            country,
            rng: StdRng::from_entropy(),
        }
    }

    /// Generator with a fixed seed, for reproducible identifiers
    pub fn seeded(country: CountryCode, seed: u64) -> Self {
        IbanGenerator {
            country,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate the next identifier
    pub fn next_iban(&mut self) -> Iban {
        let mut value = String::with_capacity(2 + IBAN_DIGITS);
        value.push_str(self.country.as_str());
        for _ in 0..IBAN_DIGITS {
            let digit: u8 = self.rng.gen_range(0..10);
            value.push(char::from(b'0' + digit));
        }
        Iban(value)
    }
}

impl Default for IbanGenerator {
    fn default() -> Self {
        Self::new(CountryCode::default())
    }
}
