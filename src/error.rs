//! When parsing or dividing big integers goes wrong.

use crate::lib::{fmt, result, Box};
use core::fmt::{Debug, Display};
#[cfg(feature = "std")]
use std::io;

/// This type represents all recoverable errors that can occur when parsing
/// decimal text or dividing big integers.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible.
    /// `Result<BigInteger, Error>` is returned from every fallible operation.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `limbint::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// One-based column of the character at which a syntax error was
    /// detected, counted in characters of the input text.
    ///
    /// The leading `-` sign, if any, is column 1. Errors that are not tied
    /// to a position, such as division by zero, report column 0.
    pub fn column(&self) -> usize {
        self.err.column
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Arithmetic` - an operation has no defined result
    /// - `Category::Syntax` - input that is not a valid decimal integer
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::DivisionByZero => Category::Arithmetic,
            ErrorCode::InvalidDigit | ErrorCode::EmptyNumber => Category::Syntax,
        }
    }

    /// Returns true if this error was caused by a zero divisor.
    pub fn is_division_by_zero(&self) -> bool {
        self.err.code == ErrorCode::DivisionByZero
    }

    /// Returns true if this error was caused by text that is not a valid
    /// decimal integer.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }
}

/// Categorizes the cause of a `limbint::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by an operation without a defined result, such
    /// as dividing by zero.
    Arithmetic,

    /// The error was caused by input text that is not a decimal integer.
    Syntax,
}

#[cfg(feature = "std")]
impl From<Error> for io::Error {
    /// Convert a `limbint::Error` into an `io::Error`.
    ///
    /// Syntax errors are turned into `InvalidData` IO errors. Arithmetic
    /// errors are turned into `InvalidInput` IO errors.
    fn from(j: Error) -> Self {
        match j.classify() {
            Category::Syntax => io::Error::new(io::ErrorKind::InvalidData, j),
            Category::Arithmetic => io::Error::new(io::ErrorKind::InvalidInput, j),
        }
    }
}

struct ErrorImpl {
    code: ErrorCode,
    column: usize,
}

/// This type describes all possible errors that can occur when parsing
/// decimal text or dividing big integers.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ErrorCode {
    /// Division or remainder with a divisor equal to zero.
    DivisionByZero,

    /// Character that is not an ASCII digit, the leading sign, or the
    /// accepted grouping separator.
    InvalidDigit,

    /// Text without any digits, such as `""` or `"-"`.
    EmptyNumber,
}

impl Error {
    #[cold]
    pub(crate) fn syntax(code: ErrorCode, column: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, column }),
        }
    }

    #[cold]
    pub(crate) fn division_by_zero() -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code: ErrorCode::DivisionByZero,
                column: 0,
            }),
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::DivisionByZero => f.write_str("division by zero"),
            ErrorCode::InvalidDigit => f.write_str("invalid digit"),
            ErrorCode::EmptyNumber => f.write_str("expected at least one digit"),
        }
    }
}

impl serde::de::StdError for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.column == 0 {
            Display::fmt(&self.code, f)
        } else {
            write!(f, "{} at column {}", self.code, self.column)
        }
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error(\"{}\", column: {})",
            self.err.code, self.err.column
        )
    }
}
