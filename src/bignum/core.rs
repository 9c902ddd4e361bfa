use std::{cmp::Ordering, fmt};

use crate::{
    config::DigitLimit,
    error::{NumberError, NumberResult},
};

/// Arbitrary-precision unsigned integer.
///
/// Stores base-10 digits least-significant first. The representation is
/// always normalized: there is at least one digit, every digit is in `0..=9`,
/// and the most significant digit is non-zero unless the value is zero, which
/// is stored as the single digit `0`.
///
/// Values are immutable; every operation returns a new `BigInt`. Operations
/// that can grow a value take a [`DigitLimit`] and fail with
/// [`NumberError::LimitExceeded`] rather than produce a longer number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    digits: Vec<u8>,
}

impl BigInt {
    /// Returns `0`.
    #[must_use]
    pub fn zero() -> Self {
        Self { digits: vec![0] }
    }

    /// Returns `1`.
    #[must_use]
    pub fn one() -> Self {
        Self { digits: vec![1] }
    }

    /// Builds a `BigInt` from a native unsigned integer.
    ///
    /// # Errors
    /// Returns [`NumberError::LimitExceeded`] if `value` has more decimal
    /// digits than `limit` allows.
    ///
    /// # Example
    /// ```
    /// use stepcalc::{bignum::BigInt, config::DigitLimit};
    ///
    /// let n = BigInt::from_u64(9001, DigitLimit::default()).unwrap();
    /// assert_eq!(n.to_string(), "9001");
    ///
    /// let tiny = DigitLimit::new(3).unwrap();
    /// assert!(BigInt::from_u64(9001, tiny).is_err());
    /// ```
    pub fn from_u64(value: u64, limit: DigitLimit) -> NumberResult<Self> {
        let mut digits = Vec::new();
        let mut rest = value;
        loop {
            #[allow(clippy::cast_possible_truncation)]
            digits.push((rest % 10) as u8);
            rest /= 10;
            if rest == 0 {
                break;
            }
        }
        Self::from_raw(digits).within(limit)
    }

    /// Parses unsigned decimal text such as `"12345"`.
    ///
    /// Leading zeros are accepted and dropped, so `"007"` is `7`.
    ///
    /// # Errors
    /// - [`NumberError::Format`] if the text is empty or contains anything
    ///   but the digits `0`-`9`.
    /// - [`NumberError::LimitExceeded`] if the number has more digits than
    ///   `limit` allows.
    ///
    /// # Example
    /// ```
    /// use stepcalc::{bignum::BigInt, config::DigitLimit, error::NumberError};
    ///
    /// let limit = DigitLimit::default();
    /// let n = BigInt::from_decimal("123456789012345678901234567890", limit).unwrap();
    /// assert_eq!(n.digit_count(), 30);
    ///
    /// assert!(matches!(BigInt::from_decimal("12a", limit),
    ///                  Err(NumberError::Format { .. })));
    /// ```
    pub fn from_decimal(text: &str, limit: DigitLimit) -> NumberResult<Self> {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NumberError::Format { literal: text.to_string() });
        }
        let digits = text.bytes().rev().map(|b| b - b'0').collect();
        Self::from_raw(digits).within(limit)
    }

    /// Builds a `BigInt` from digits given least-significant first.
    ///
    /// # Errors
    /// - [`NumberError::Format`] if the sequence is empty or any element is
    ///   greater than 9.
    /// - [`NumberError::LimitExceeded`] if the normalized number is too long.
    ///
    /// # Example
    /// ```
    /// use stepcalc::{bignum::BigInt, config::DigitLimit};
    ///
    /// let n = BigInt::from_digits(vec![3, 2, 1, 0, 0], DigitLimit::default()).unwrap();
    /// assert_eq!(n.to_string(), "123");
    /// ```
    pub fn from_digits(digits: Vec<u8>, limit: DigitLimit) -> NumberResult<Self> {
        if digits.is_empty() || digits.iter().any(|&d| d > 9) {
            return Err(NumberError::Format { literal: format!("{digits:?}") });
        }
        Self::from_raw(digits).within(limit)
    }

    /// Number of decimal digits.
    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// The digits, least-significant first.
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    #[must_use]
    pub fn is_one(&self) -> bool {
        self.digits == [1]
    }

    #[must_use]
    pub fn is_even(&self) -> bool {
        self.digits[0] % 2 == 0
    }

    /// Wraps a digit buffer produced by an internal algorithm, dropping
    /// excess most-significant zeros.
    pub(super) fn from_raw(mut digits: Vec<u8>) -> Self {
        while digits.len() > 1 && digits.last() == Some(&0) {
            digits.pop();
        }
        if digits.is_empty() {
            digits.push(0);
        }
        Self { digits }
    }

    /// Passes `self` through if it fits in `limit`.
    pub(super) fn within(self, limit: DigitLimit) -> NumberResult<Self> {
        if limit.allows(self.digit_count()) {
            Ok(self)
        } else {
            Err(NumberError::LimitExceeded { digits: self.digit_count(),
                                             limit:  limit.get(), })
        }
    }

    /// Returns `self * 10^k + low`, where `low` holds `k` digits
    /// least-significant first. Used to bring down digits during long
    /// division and square root.
    pub(super) fn shifted_in(&self, low: &[u8]) -> Self {
        if self.is_zero() {
            return Self::from_raw(low.to_vec());
        }
        let mut digits = Vec::with_capacity(low.len() + self.digits.len());
        digits.extend_from_slice(low);
        digits.extend_from_slice(&self.digits);
        Self::from_raw(digits)
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.iter().rev().cmp(other.digits.iter().rev()))
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.digits.iter().rev().map(|&d| char::from(b'0' + d)).collect();
        f.pad(&text)
    }
}
