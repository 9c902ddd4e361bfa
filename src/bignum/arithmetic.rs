use crate::{
    bignum::BigInt,
    config::DigitLimit,
    error::{NumberError, NumberResult},
};

impl BigInt {
    /// Returns `self + other`.
    ///
    /// # Errors
    /// Returns [`NumberError::LimitExceeded`] if the sum is longer than
    /// `limit` allows.
    ///
    /// # Example
    /// ```
    /// use stepcalc::{bignum::BigInt, config::DigitLimit};
    ///
    /// let limit = DigitLimit::default();
    /// let a = BigInt::from_decimal("999999999999999999999", limit).unwrap();
    /// let sum = a.add(&BigInt::one(), limit).unwrap();
    /// assert_eq!(sum.to_string(), "1000000000000000000000");
    /// ```
    pub fn add(&self, other: &Self, limit: DigitLimit) -> NumberResult<Self> {
        self.sum(other).within(limit)
    }

    /// Returns `self - other`.
    ///
    /// The difference is never longer than `self`, so no limit applies.
    ///
    /// # Errors
    /// Returns [`NumberError::NegativeResult`] if `other` is greater than
    /// `self`.
    ///
    /// # Example
    /// ```
    /// use stepcalc::{bignum::BigInt, config::DigitLimit, error::NumberError};
    ///
    /// let limit = DigitLimit::default();
    /// let a = BigInt::from_u64(1000, limit).unwrap();
    /// let b = BigInt::from_u64(1, limit).unwrap();
    /// assert_eq!(a.sub(&b).unwrap().to_string(), "999");
    /// assert!(matches!(b.sub(&a), Err(NumberError::NegativeResult { .. })));
    /// ```
    pub fn sub(&self, other: &Self) -> NumberResult<Self> {
        if self < other {
            return Err(NumberError::NegativeResult { minuend:    self.to_string(),
                                                     subtrahend: other.to_string(), });
        }
        Ok(self.difference(other))
    }

    /// Returns `self * other`.
    ///
    /// Uses the O(n·m) schoolbook method and short-circuits when either
    /// operand is zero.
    ///
    /// # Errors
    /// Returns [`NumberError::LimitExceeded`] if the product is longer than
    /// `limit` allows.
    ///
    /// # Example
    /// ```
    /// use stepcalc::{bignum::BigInt, config::DigitLimit};
    ///
    /// let limit = DigitLimit::default();
    /// let a = BigInt::from_u64(123_456_789, limit).unwrap();
    /// let b = BigInt::from_u64(987_654_321, limit).unwrap();
    /// assert_eq!(a.mul(&b, limit).unwrap().to_string(), "121932631112635269");
    /// ```
    pub fn mul(&self, other: &Self, limit: DigitLimit) -> NumberResult<Self> {
        if self.is_zero() || other.is_zero() {
            return Ok(Self::zero());
        }
        // A product has at least len(a) + len(b) - 1 digits.
        let shortest = self.digit_count() + other.digit_count() - 1;
        if !limit.allows(shortest) {
            return Err(NumberError::LimitExceeded { digits: shortest,
                                                    limit:  limit.get(), });
        }
        Self::from_raw(multiply_digits(self.digits(), other.digits())).within(limit)
    }

    /// `self + other` without a limit check.
    pub(super) fn sum(&self, other: &Self) -> Self {
        let len = self.digit_count().max(other.digit_count());
        let mut result = Vec::with_capacity(len + 1);
        let mut carry = 0;
        for i in 0..len {
            let total = digit_at(self, i) + digit_at(other, i) + carry;
            result.push(total % 10);
            carry = total / 10;
        }
        if carry != 0 {
            result.push(carry);
        }
        Self::from_raw(result)
    }

    /// `self - other` for callers that already know `self >= other`.
    pub(super) fn difference(&self, other: &Self) -> Self {
        let mut result = Vec::with_capacity(self.digit_count());
        let mut borrow = 0;
        for i in 0..self.digit_count() {
            let mut digit = digit_at(self, i) + 10 - digit_at(other, i) - borrow;
            borrow = 1;
            if digit >= 10 {
                digit -= 10;
                borrow = 0;
            }
            result.push(digit);
        }
        debug_assert_eq!(borrow, 0, "{self} - {other} left a borrow");
        Self::from_raw(result)
    }

    /// `self * digit` for a single decimal digit, without a limit check.
    pub(super) fn times_digit(&self, digit: u8) -> Self {
        debug_assert!(digit <= 9);
        if digit == 0 {
            return Self::zero();
        }
        Self::from_raw(multiply_digits(self.digits(), &[digit]))
    }

    /// Unchecked product, for internal consistency checks.
    pub(super) fn product(&self, other: &Self) -> Self {
        Self::from_raw(multiply_digits(self.digits(), other.digits()))
    }
}

fn digit_at(n: &BigInt, i: usize) -> u8 {
    n.digits().get(i).copied().unwrap_or(0)
}

/// Schoolbook multiplication into a buffer of `a.len() + b.len()` digits.
fn multiply_digits(a: &[u8], b: &[u8]) -> Vec<u8> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut result = vec![0u8; long.len() + short.len()];
    for (j, &s) in short.iter().enumerate() {
        let mut carry = 0u32;
        for (i, &l) in long.iter().enumerate() {
            let cell = u32::from(l) * u32::from(s) + u32::from(result[i + j]) + carry;
            #[allow(clippy::cast_possible_truncation)]
            {
                result[i + j] = (cell % 10) as u8;
            }
            carry = cell / 10;
        }
        #[allow(clippy::cast_possible_truncation)]
        {
            result[long.len() + j] = carry as u8;
        }
    }
    result
}
