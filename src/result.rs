use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Cause of an [`ExError`](ExError). Callers usually only need to know that an
/// expression is invalid, the kind is there for diagnostics and tests.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ExErrorKind {
    /// The expression contains no tokens, e.g., `""` or `"   "`.
    EmptyExpression,
    /// A closing parenthesis without opening one or an unclosed opening parenthesis.
    MismatchedParentheses,
    /// Decimal points like in `2.5.7`, `t.3`, `cos(5).4`, or a literal ending with `.`.
    MisplacedDecimalPoint,
    /// Three letters that are neither `sin`, `cos`, nor `tan`.
    InvalidFunctionName,
    /// An operator or a function without operand, e.g., `3 + 4 ^` or `sin^2(5)`.
    DanglingOperator,
    /// `()`
    EmptyParens,
    /// Stack underflow or leftover operands during evaluation of a postfix sequence.
    MalformedPostfix,
    /// Lower bound of the curve parameter is greater than the upper bound.
    InvalidBounds,
}

/// This will be thrown at you if something within Paramex went wrong. Ok, obviously it is not an
/// exception, so thrown needs to be understood figuratively.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct ExError {
    pub kind: ExErrorKind,
    pub msg: String,
}
impl ExError {
    pub fn new(kind: ExErrorKind, msg: &str) -> ExError {
        ExError {
            kind,
            msg: msg.to_string(),
        }
    }
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }
}
impl Display for ExError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.msg)
    }
}
impl Error for ExError {}

/// Paramex' result type with [`ExError`](ExError) as error type.
pub type ExResult<U> = Result<U, ExError>;

/// Creates an [`ExError`](ExError) of the given kind with a formatted message.
///
/// ```rust
/// use paramex::{exerr, ExErrorKind};
/// let err = exerr!(ExErrorKind::EmptyParens, "found () at position {}", 3);
/// assert_eq!(err.msg, "found () at position 3");
/// ```
#[macro_export]
macro_rules! exerr {
    ($kind:expr, $s:literal $(, $exps:expr )* $(,)?) => {
        $crate::ExError::new($kind, format!($s, $($exps,)*).as_str())
    };
}

#[test]
fn test_exerr() {
    let e = exerr!(ExErrorKind::MalformedPostfix, "{} operands left", 2);
    assert_eq!(e.kind(), ExErrorKind::MalformedPostfix);
    assert_eq!(format!("{e}"), "2 operands left");
    let e = exerr!(ExErrorKind::EmptyExpression, "empty");
    assert_eq!(e, ExError::new(ExErrorKind::EmptyExpression, "empty"));
}
