use std::collections::VecDeque;

use crate::bignum::BigInt;

impl BigInt {
    /// Returns `⌊√self⌋`.
    ///
    /// Implements the manual long-division method: the digits are grouped
    /// into pairs from the least-significant end and consumed
    /// most-significant pair first. For each pair the remainder `r` grows by
    /// two digits and the next root digit is the greatest `d` with
    /// `(20·p + d)·d ≤ r`, where `p` is the root found so far.
    ///
    /// The root never has more digits than `self`, so no limit applies.
    ///
    /// # Example
    /// ```
    /// use stepcalc::{bignum::BigInt, config::DigitLimit};
    ///
    /// let limit = DigitLimit::default();
    /// let n = BigInt::from_decimal("2989441", limit).unwrap();
    /// assert_eq!(n.sqrt().to_string(), "1729");
    ///
    /// let n = BigInt::from_decimal("99", limit).unwrap();
    /// assert_eq!(n.sqrt().to_string(), "9");
    /// ```
    #[must_use]
    pub fn sqrt(&self) -> Self {
        if self.digit_count() == 1 && self.digits()[0] < 2 {
            return self.clone();
        }

        let mut padded = self.digits().to_vec();
        if padded.len() % 2 == 1 {
            padded.push(0);
        }
        let mut pairs = padded.chunks_exact(2).rev();

        // The leading pair is never zero, so the seed digit is at least 1.
        let leading = pairs.next().map_or(0, |pair| pair[1] * 10 + pair[0]);
        let seed = (0..=9u8).rev().find(|d| d * d <= leading).unwrap_or(0);
        let mut remainder = Self::from_raw(vec![(leading - seed * seed) % 10,
                                                (leading - seed * seed) / 10]);
        // Root digits, least-significant first; new digits enter at the front.
        let mut root = VecDeque::from([seed]);

        for pair in pairs {
            remainder = remainder.shifted_in(pair);
            let doubled = double(&root);
            let (digit, trial) = (0..=9u8).rev()
                                          .map(|d| (d, doubled.shifted_in(&[d]).times_digit(d)))
                                          .find(|(_, trial)| *trial <= remainder)
                                          .unwrap_or((0, Self::zero()));
            remainder = remainder.difference(&trial);
            root.push_front(digit);
        }

        let root = Self::from_raw(root.into());
        debug_assert!(root.product(&root) <= *self);
        debug_assert!({
            let next = root.sum(&Self::one());
            next.product(&next) > *self
        });
        root
    }
}

/// Returns `2·p` for a root stored least-significant first.
fn double(root: &VecDeque<u8>) -> BigInt {
    let mut digits = Vec::with_capacity(root.len() + 1);
    let mut carry = 0;
    for &digit in root {
        let twice = digit * 2 + carry;
        digits.push(twice % 10);
        carry = twice / 10;
    }
    if carry != 0 {
        digits.push(carry);
    }
    BigInt::from_raw(digits)
}
