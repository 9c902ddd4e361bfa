use crate::{
    bignum::BigInt,
    error::{NumberError, NumberResult},
};

impl BigInt {
    /// Returns `⌊self / divisor⌋`.
    ///
    /// # Errors
    /// Returns [`NumberError::DivisionByZero`] if `divisor` is zero.
    ///
    /// # Example
    /// ```
    /// use stepcalc::{bignum::BigInt, config::DigitLimit};
    ///
    /// let limit = DigitLimit::default();
    /// let a = BigInt::from_u64(1000, limit).unwrap();
    /// let b = BigInt::from_u64(7, limit).unwrap();
    /// assert_eq!(a.floordiv(&b).unwrap().to_string(), "142");
    /// ```
    pub fn floordiv(&self, divisor: &Self) -> NumberResult<Self> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    /// Returns `self - ⌊self / divisor⌋ * divisor`.
    ///
    /// # Errors
    /// Returns [`NumberError::DivisionByZero`] if `divisor` is zero.
    ///
    /// # Example
    /// ```
    /// use stepcalc::{bignum::BigInt, config::DigitLimit};
    ///
    /// let limit = DigitLimit::default();
    /// let a = BigInt::from_u64(1000, limit).unwrap();
    /// let b = BigInt::from_u64(7, limit).unwrap();
    /// assert_eq!(a.rem(&b).unwrap().to_string(), "6");
    /// ```
    pub fn rem(&self, divisor: &Self) -> NumberResult<Self> {
        self.div_rem(divisor).map(|(_, remainder)| remainder)
    }

    /// Long division: quotient and remainder in a single pass.
    ///
    /// Digits of `self` are brought down most-significant first into a
    /// running remainder; each quotient digit is the number of times the
    /// divisor can be subtracted from it. Neither result is longer than
    /// `self`, so no limit applies.
    ///
    /// # Errors
    /// Returns [`NumberError::DivisionByZero`] if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> NumberResult<(Self, Self)> {
        if divisor.is_zero() {
            return Err(NumberError::DivisionByZero { dividend: self.to_string() });
        }
        if self < divisor {
            return Ok((Self::zero(), self.clone()));
        }

        let mut quotient = vec![0u8; self.digit_count()];
        let mut remainder = Self::zero();
        for (i, &digit) in self.digits().iter().enumerate().rev() {
            remainder = remainder.shifted_in(&[digit]);
            while remainder >= *divisor {
                quotient[i] += 1;
                remainder = remainder.difference(divisor);
            }
        }
        let quotient = Self::from_raw(quotient);

        debug_assert!(remainder < *divisor);
        debug_assert_eq!(quotient.product(divisor).sum(&remainder), *self);
        Ok((quotient, remainder))
    }

    /// Halves `self`, rounding down, by short division.
    pub(super) fn halved(&self) -> Self {
        let mut result = vec![0u8; self.digit_count()];
        let mut carry = 0;
        for (i, &digit) in self.digits().iter().enumerate().rev() {
            let current = carry * 10 + digit;
            result[i] = current / 2;
            carry = current % 2;
        }
        Self::from_raw(result)
    }
}
