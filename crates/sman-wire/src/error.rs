#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// A decimal field did not start with an ASCII digit.
    #[error("expected a decimal digit")]
    MissingDigits,

    /// A decimal digit run no longer fits in 64 bits.
    #[error("decimal value overflows 64 bits")]
    Overflow,
}
