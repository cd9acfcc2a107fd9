use crate::{eval::eval_postfix, parser::tokenize, shunting_yard::infix_to_postfix};
use crate::{parser::Token, ExError, ExResult};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
mod serde;

/// This is the core data type representing an expression in `t` that has been parsed
/// once and is evaluated many times, e.g., once per animation frame. It keeps the
/// string it was created from and the corresponding postfix sequence.
///
/// ```rust
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// #
/// use paramex::prelude::*;
///
/// let expr = PostfixEx::parse("5sin(t^3 * cos(0)) - 10t")?;
/// for i in 0..10 {
///     let t = i as f64 * 0.1;
///     assert!((expr.eval(t)? - (5.0 * (t.powi(3)).sin() - 10.0 * t)).abs() < 1e-12);
/// }
/// assert_eq!(format!("{}", expr), "5sin(t^3 * cos(0)) - 10t");
/// #
/// #     Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct PostfixEx {
    text: String,
    postfix: Vec<Token>,
}

impl PostfixEx {
    /// Tokenizes `text` and converts the tokens into postfix order.
    ///
    /// # Errors
    ///
    /// See [`tokenize`](crate::tokenize).
    ///
    pub fn parse(text: &str) -> ExResult<Self> {
        let tokens = tokenize(text)?;
        Ok(Self {
            text: text.to_string(),
            postfix: infix_to_postfix(&tokens),
        })
    }

    /// Evaluates the expression for the given value of `t`.
    ///
    /// # Errors
    ///
    /// See [`eval_postfix`](crate::eval_postfix).
    ///
    pub fn eval(&self, t: f64) -> ExResult<f64> {
        eval_postfix(&self.postfix, t)
    }

    /// Tokens in postfix order.
    pub fn postfix(&self) -> &[Token] {
        &self.postfix
    }

    /// Returns the string the expression was parsed from.
    pub fn unparse(&self) -> &str {
        &self.text
    }
}

impl FromStr for PostfixEx {
    type Err = ExError;
    fn from_str(text: &str) -> ExResult<Self> {
        Self::parse(text)
    }
}

/// The expression is displayed as the string it was parsed from.
impl Display for PostfixEx {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
