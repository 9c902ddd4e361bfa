/// Stack growth for deep recursion.
///
/// Trees produced from long operator chains such as `1 + 1 + ... + 1` are as
/// deep as the chain is long, which the parser's nesting limit does not
/// bound. Recursive walks over such trees run through
/// [`stack::ensure_sufficient_stack`].
pub mod stack;
