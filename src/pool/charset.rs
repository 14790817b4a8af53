//! Character class toggles and pool assembly.
//!
//! The four class alphabets are fixed constants. A pool is the
//! concatenation of the enabled alphabets; every password character
//! is drawn uniformly from that pool.

/// Lowercase ASCII letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Uppercase ASCII letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Decimal digits.
pub const DIGITS: &str = "0123456789";
/// The fixed symbol alphabet.
pub const SYMBOLS: &str = "!@#$%&*()-_=+[]{};:,.<>?/";

/// Which character classes participate in the pool.
///
/// Defaults match the CLI defaults: letters and digits on, symbols off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterClasses {
    /// Include lowercase letters.
    pub lowercase: bool,
    /// Include uppercase letters.
    pub uppercase: bool,
    /// Include digits.
    pub digits: bool,
    /// Include the symbol alphabet.
    pub symbols: bool,
}

impl Default for CharacterClasses {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: false,
        }
    }
}

impl CharacterClasses {
    /// Returns true if at least one class is enabled.
    pub fn any_enabled(&self) -> bool {
        self.lowercase || self.uppercase || self.digits || self.symbols
    }

    /// Assembles the character pool from the enabled classes.
    ///
    /// Fails if every class is disabled, since an empty pool admits
    /// no draws at all.
    pub fn build_pool(&self) -> Result<Vec<char>, PoolError> {
        if !self.any_enabled() {
            return Err(PoolError::NoClassesEnabled);
        }

        let mut pool = Vec::new();
        if self.lowercase {
            pool.extend(LOWERCASE.chars());
        }
        if self.uppercase {
            pool.extend(UPPERCASE.chars());
        }
        if self.digits {
            pool.extend(DIGITS.chars());
        }
        if self.symbols {
            pool.extend(SYMBOLS.chars());
        }
        Ok(pool)
    }
}

/// Pool assembly errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PoolError {
    #[error("no character classes enabled (need at least one of lowercase, uppercase, digits, symbols)")]
    NoClassesEnabled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pool_contents() {
        let pool = CharacterClasses::default().build_pool().unwrap();

        assert_eq!(pool.len(), 26 + 26 + 10);
        assert!(pool.contains(&'a'));
        assert!(pool.contains(&'Z'));
        assert!(pool.contains(&'7'));
        assert!(!pool.contains(&'!'));
    }

    #[test]
    fn test_all_disabled_fails() {
        let classes = CharacterClasses {
            lowercase: false,
            uppercase: false,
            digits: false,
            symbols: false,
        };

        assert!(matches!(
            classes.build_pool(),
            Err(PoolError::NoClassesEnabled)
        ));
    }

    #[test]
    fn test_single_class_pool() {
        let classes = CharacterClasses {
            lowercase: false,
            uppercase: false,
            digits: false,
            symbols: true,
        };

        let pool = classes.build_pool().unwrap();
        assert_eq!(pool, SYMBOLS.chars().collect::<Vec<_>>());
    }

    #[test]
    fn test_pool_is_union_of_enabled_alphabets() {
        let classes = CharacterClasses {
            lowercase: true,
            uppercase: false,
            digits: true,
            symbols: false,
        };

        let pool = classes.build_pool().unwrap();
        for c in &pool {
            assert!(
                LOWERCASE.contains(*c) || DIGITS.contains(*c),
                "unexpected character {:?} in pool",
                c
            );
        }
        assert_eq!(pool.len(), 26 + 10);
    }
}
