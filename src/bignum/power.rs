use crate::{bignum::BigInt, config::DigitLimit, error::NumberResult};

impl BigInt {
    /// Returns `self` raised to `exponent`.
    ///
    /// Uses exponentiation by squaring, so only `O(log exponent)`
    /// multiplications are performed. Every intermediate square is at most
    /// the final result, so the limit is only exceeded when the result
    /// itself is too long.
    ///
    /// # Errors
    /// Returns [`NumberError::LimitExceeded`] if the result is longer than
    /// `limit` allows.
    ///
    /// # Example
    /// ```
    /// use stepcalc::{bignum::BigInt, config::DigitLimit};
    ///
    /// let limit = DigitLimit::default();
    /// let two = BigInt::from_u64(2, limit).unwrap();
    /// let hundred = BigInt::from_u64(100, limit).unwrap();
    /// assert_eq!(two.pow(&hundred, limit).unwrap().to_string(),
    ///            "1267650600228229401496703205376");
    /// assert_eq!(two.pow(&BigInt::zero(), limit).unwrap(), BigInt::one());
    /// ```
    ///
    /// [`NumberError::LimitExceeded`]: crate::error::NumberError::LimitExceeded
    pub fn pow(&self, exponent: &Self, limit: DigitLimit) -> NumberResult<Self> {
        if exponent.is_zero() {
            return Ok(Self::one());
        }
        if exponent.is_one() || self.is_zero() || self.is_one() {
            return Ok(self.clone());
        }
        let result = crate::util::stack::ensure_sufficient_stack(|| {
            self.pow_by_squaring(exponent, limit)
        })?;
        debug_assert!(result >= *self);
        Ok(result)
    }

    fn pow_by_squaring(&self, exponent: &Self, limit: DigitLimit) -> NumberResult<Self> {
        if exponent.is_zero() {
            return Ok(Self::one());
        }
        if exponent.is_one() {
            return Ok(self.clone());
        }
        let squared = self.mul(self, limit)?;
        let rest = squared.pow_by_squaring(&exponent.halved(), limit)?;
        if exponent.is_even() {
            Ok(rest)
        } else {
            self.mul(&rest, limit)
        }
    }
}
