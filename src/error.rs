use thiserror::Error;

/// Errors surfaced by the tour
#[derive(Error, Debug)]
pub enum Error {
    /// An integer division was attempted with a zero divisor.
    #[error("attempted to divide {dividend} by zero")]
    DivideByZero {
        /// the value that was being divided
        dividend: i32,
    },

    /// Writing narration to the output stream, or setting up the timer runtime, failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A `Result` alias defaulting to this crate's [`Error`]
pub type Result<T, E = Error> = std::result::Result<T, E>;
