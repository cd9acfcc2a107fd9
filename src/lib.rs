#![doc(html_root_url = "https://docs.rs/paramex/0.1.0")]
//! Paramex evaluates mathematical expressions in the single variable `t`, such as the
//! coordinate functions of a parametric curve.
//! ```rust
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! #
//! let result = paramex::eval("-4 + t^2", 3.0)?;
//! assert!((result - 5.0).abs() < 1e-12);
//! #
//! #     Ok(())
//! # }
//! ```
//! Expressions consist of numbers, the variable `t`, the binary operators
//! `+`, `-`, `*`, `/`, and `^`, parentheses, unary minus, and the functions `sin`, `cos`,
//! and `tan` with arguments in radians. Multiplication can be implicit as in
//! `2t`, `(3)(4t)`, `-4sin(6)`, or `ttan(4)`. Whitespace is ignored, also between digits.
//!
//! Evaluation happens in three steps, each of which is exposed.
//! 1. [`tokenize`](tokenize) turns a string into [`Token`](Token)s,
//! 2. [`infix_to_postfix`](infix_to_postfix) sorts them into postfix order, and
//! 3. [`eval_postfix`](eval_postfix) evaluates the postfix sequence for a value of `t`.
//!
//! If an expression is evaluated many times, e.g., once per animation frame, it is
//! parsed only once.
//! ```rust
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! #
//! use paramex::prelude::*;
//! let expr = PostfixEx::parse("0.8^t^2")?;
//! for i in 0..100 {
//!     let t = i as f64 / 10.0;
//!     assert!((expr.eval(t)? - 0.8f64.powf(t.powf(2.0))).abs() < 1e-12);
//! }
//! #
//! #     Ok(())
//! # }
//! ```
//! The power operator is right-associative and binds stronger than unary minus and
//! functions, hence `-5^2` is `-25` and `tan(t)^2` is `tan(t^2)`. Functions and unary
//! minus are applied before `*`, `/`, `+`, and `-`, hence `sin -2t` is `sin(-2)*t`.
//!
//! Division by zero is not an error and results in `NaN` or infinity. All errors are
//! of type [`ExError`](ExError) and carry an [`ExErrorKind`](ExErrorKind).
//! ```rust
//! use paramex::ExErrorKind;
//! assert!(paramex::eval("0 / 0", 1.0).unwrap().is_nan());
//! let err = paramex::eval("sin^2(5)", 1.0).unwrap_err();
//! assert_eq!(err.kind(), ExErrorKind::DanglingOperator);
//! ```
//!
//! With [`ParametricCurve`](ParametricCurve) a curve is traced back and forth between two
//! bounds of `t`. The feature `serde` enables serialization of [`PostfixEx`](PostfixEx)
//! and [`CurveSettings`](CurveSettings).

mod curve;
mod eval;
mod expression;
mod operators;
mod parser;
mod result;
mod shunting_yard;

pub use {
    curve::{CurveSettings, ParametricCurve, DEFAULT_N_POINTS},
    eval::eval_postfix,
    expression::PostfixEx,
    operators::{BinaryOp, Function, OperatorInfo},
    parser::{tokenize, Token, UNARY_MINUS_TOKEN, VARIABLE_REPR},
    result::{ExError, ExErrorKind, ExResult},
    shunting_yard::infix_to_postfix,
};

/// Paramex' prelude with the expression type and the composed entry points.
pub mod prelude {
    pub use super::{eval, eval_postfix, parse, to_postfix, ExResult, PostfixEx};
}

/// Tokenizes `text` and converts the tokens into postfix order.
///
/// # Errors
///
/// See [`tokenize`](tokenize).
///
pub fn to_postfix(text: &str) -> ExResult<Vec<Token>> {
    Ok(infix_to_postfix(&tokenize(text)?))
}

/// Parses `text` into an expression that can be evaluated repeatedly, equivalent to
/// [`PostfixEx::parse`](PostfixEx::parse).
///
/// # Errors
///
/// See [`tokenize`](tokenize).
///
pub fn parse(text: &str) -> ExResult<PostfixEx> {
    PostfixEx::parse(text)
}

/// Parses `text` and evaluates it once for the given value of `t`.
///
/// # Errors
///
/// See [`tokenize`](tokenize) and [`eval_postfix`](eval_postfix).
///
pub fn eval(text: &str, t: f64) -> ExResult<f64> {
    eval_postfix(&to_postfix(text)?, t)
}
