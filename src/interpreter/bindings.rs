use std::collections::HashMap;

use crate::{bignum::BigInt, config::DigitLimit, error::BindingError};

/// Values supplied for the variables of one evaluation.
pub type Bindings = HashMap<String, BigInt>;

/// Returns `true` if `name` can be bound: one or more ASCII letters.
///
/// # Example
/// ```
/// use stepcalc::interpreter::bindings::is_valid_name;
///
/// assert!(is_valid_name("x"));
/// assert!(is_valid_name("Total"));
/// assert!(!is_valid_name("x1"));
/// assert!(!is_valid_name(""));
/// ```
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Builds [`Bindings`] from `(name, decimal value)` text pairs.
///
/// # Errors
/// - [`BindingError::InvalidName`] if a name is not made of letters only.
/// - [`BindingError::InvalidValue`] if a value is not unsigned decimal text
///   or exceeds `limit`.
/// - [`BindingError::DuplicateName`] if a name appears twice.
///
/// # Example
/// ```
/// use stepcalc::{config::DigitLimit, interpreter::bindings::bind};
///
/// let bindings = bind([("x", "2"), ("y", "9")], DigitLimit::default()).unwrap();
/// assert_eq!(bindings["y"].to_string(), "9");
///
/// assert!(bind([("x", "2"), ("x", "3")], DigitLimit::default()).is_err());
/// ```
pub fn bind<I, N, V>(pairs: I, limit: DigitLimit) -> Result<Bindings, BindingError>
    where I: IntoIterator<Item = (N, V)>,
          N: AsRef<str>,
          V: AsRef<str>
{
    let mut bindings = Bindings::new();
    for (name, value) in pairs {
        let name = name.as_ref();
        if !is_valid_name(name) {
            return Err(BindingError::InvalidName { name: name.to_string() });
        }
        let value = BigInt::from_decimal(value.as_ref(), limit).map_err(|source| {
                        BindingError::InvalidValue { name: name.to_string(),
                                                     source }
                    })?;
        if bindings.insert(name.to_string(), value).is_some() {
            return Err(BindingError::DuplicateName { name: name.to_string() });
        }
    }
    Ok(bindings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NumberError;

    #[test]
    fn rejects_names_outside_letters() {
        for name in ["", "x1", "_", "a b", "é"] {
            assert_eq!(bind([(name, "1")], DigitLimit::default()),
                       Err(BindingError::InvalidName { name: name.to_string() }));
        }
    }

    #[test]
    fn rejects_signed_and_oversized_values() {
        assert!(matches!(bind([("x", "-1")], DigitLimit::default()),
                         Err(BindingError::InvalidValue { source: NumberError::Format { .. }, .. })));

        let limit = DigitLimit::new(2).unwrap();
        assert!(matches!(bind([("x", "100")], limit),
                         Err(BindingError::InvalidValue { source: NumberError::LimitExceeded { .. },
                                                          .. })));
    }

    #[test]
    fn empty_input_gives_empty_bindings() {
        let pairs: [(&str, &str); 0] = [];
        assert!(bind(pairs, DigitLimit::default()).unwrap().is_empty());
    }
}
