use std::num::NonZeroUsize;

use crate::error::ConfigError;

/// Maximum number of decimal digits a value may have unless configured
/// otherwise.
pub const DEFAULT_DIGIT_LIMIT: usize = 1000;
/// Maximum nesting depth the parser accepts unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Upper bound on the number of decimal digits of any [`BigInt`].
///
/// Every construction and arithmetic operation receives the limit explicitly,
/// so evaluations running with different limits never interfere.
///
/// [`BigInt`]: crate::bignum::BigInt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitLimit(NonZeroUsize);

impl DigitLimit {
    /// Creates a limit of `digits` decimal digits.
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroDigitLimit`] when `digits` is zero.
    ///
    /// # Example
    /// ```
    /// use stepcalc::config::DigitLimit;
    ///
    /// assert_eq!(DigitLimit::new(12).unwrap().get(), 12);
    /// assert!(DigitLimit::new(0).is_err());
    /// ```
    pub const fn new(digits: usize) -> Result<Self, ConfigError> {
        match NonZeroUsize::new(digits) {
            Some(limit) => Ok(Self(limit)),
            None => Err(ConfigError::ZeroDigitLimit),
        }
    }

    /// Returns the number of digits allowed.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Returns `true` if a value with `digits` decimal digits fits.
    #[must_use]
    pub const fn allows(self, digits: usize) -> bool {
        digits <= self.0.get()
    }
}

impl Default for DigitLimit {
    fn default() -> Self {
        match NonZeroUsize::new(DEFAULT_DIGIT_LIMIT) {
            Some(limit) => Self(limit),
            None => Self(NonZeroUsize::MIN),
        }
    }
}

/// Settings shared by parsing and evaluation.
///
/// `Config` is created by the caller and passed by reference; nothing in the
/// crate keeps configuration in global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    digit_limit: DigitLimit,
    max_depth:   usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { digit_limit: DigitLimit::default(),
               max_depth:   DEFAULT_MAX_DEPTH, }
    }
}

impl Config {
    /// Creates a configuration with the default digit limit and nesting
    /// depth.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the configured maximum digit count.
    #[must_use]
    pub const fn digit_limit(&self) -> DigitLimit {
        self.digit_limit
    }

    /// Sets the maximum digit count for every value built afterwards.
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroDigitLimit`] when `digits` is zero; the
    /// previous limit is kept.
    ///
    /// # Example
    /// ```
    /// use stepcalc::config::Config;
    ///
    /// let mut config = Config::new();
    /// config.set_digit_limit(40).unwrap();
    /// assert_eq!(config.digit_limit().get(), 40);
    ///
    /// assert!(config.set_digit_limit(0).is_err());
    /// assert_eq!(config.digit_limit().get(), 40);
    /// ```
    pub fn set_digit_limit(&mut self, digits: usize) -> Result<(), ConfigError> {
        self.digit_limit = DigitLimit::new(digits)?;
        Ok(())
    }

    /// Returns the deepest nesting of parentheses, `sqrt` operands and
    /// precedence levels the parser accepts.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Sets the maximum parser nesting depth.
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroNestingDepth`] when `depth` is zero.
    pub const fn set_max_depth(&mut self, depth: usize) -> Result<(), ConfigError> {
        if depth == 0 {
            return Err(ConfigError::ZeroNestingDepth);
        }
        self.max_depth = depth;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.digit_limit().get(), DEFAULT_DIGIT_LIMIT);
        assert_eq!(config.max_depth(), DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn zero_depth_is_rejected() {
        let mut config = Config::new();
        assert_eq!(config.set_max_depth(0), Err(ConfigError::ZeroNestingDepth));
        assert_eq!(config.max_depth(), DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn allows_is_inclusive() {
        let limit = DigitLimit::new(3).unwrap();
        assert!(limit.allows(3));
        assert!(!limit.allows(4));
    }
}
