/// Digit storage, construction, ordering and rendering.
///
/// Defines the [`BigInt`] type itself together with the constructors that
/// enforce the digit limit and the normalization every operation relies on.
pub mod core;
/// Schoolbook addition, subtraction and multiplication.
pub mod arithmetic;
/// Long division producing quotient and remainder in one pass.
pub mod division;
/// Exponentiation by squaring.
pub mod power;
/// Digit-pair long-division square root.
pub mod sqrt;

#[cfg(test)]
mod proptests;

pub use self::core::BigInt;
