//! Candidate pools: character classes and passphrase wordlists.
//!
//! A pool is the set of symbols a draw selects from. For passwords
//! that is a concatenation of fixed class alphabets; for passphrases
//! it is an ordered word list.

mod charset;
mod wordlist;

pub use charset::{CharacterClasses, PoolError, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
pub use wordlist::{Wordlist, WordlistError};
