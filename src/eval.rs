use crate::parser::Token;
use crate::{exerr, ExErrorKind, ExResult};
use smallvec::SmallVec;

const N_OPERANDS_ON_STACK: usize = 32;

/// Evaluates a sequence of tokens in postfix order for the given value of `t`.
/// The sequence is only borrowed, such that a stored sequence can be evaluated over
/// and over again with different values of `t`.
///
/// ```rust
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// #
/// use paramex::{eval_postfix, to_postfix};
/// let postfix = to_postfix("t^2 - 1")?;
/// assert_eq!(eval_postfix(&postfix, 3.0)?, 8.0);
/// assert_eq!(eval_postfix(&postfix, 2.0)?, 3.0);
/// #
/// #     Ok(())
/// # }
/// ```
///
/// # Errors
///
/// An error of kind [`MalformedPostfix`](crate::ExErrorKind::MalformedPostfix) is returned
/// if an operator lacks operands, if more than one value is left in the end, or if the
/// sequence contains parentheses. Division by zero is not an error but results in
/// `NaN` or infinity.
///
pub fn eval_postfix(postfix: &[Token], t: f64) -> ExResult<f64> {
    let mut operands = SmallVec::<[f64; N_OPERANDS_ON_STACK]>::new();
    let underflow = |token: &Token| {
        exerr!(
            ExErrorKind::MalformedPostfix,
            "missing operand for {} in postfix sequence",
            token
        )
    };
    for token in postfix {
        match token {
            Token::Num(n) => operands.push(*n),
            Token::Var => operands.push(t),
            Token::BinOp(op) => {
                let b = operands.pop().ok_or_else(|| underflow(token))?;
                let a = operands.pop().ok_or_else(|| underflow(token))?;
                operands.push(op.apply(a, b));
            }
            Token::UnaryMinus => {
                let a = operands.pop().ok_or_else(|| underflow(token))?;
                operands.push(-a);
            }
            Token::Func(f) => {
                let a = operands.pop().ok_or_else(|| underflow(token))?;
                operands.push(f.apply(a));
            }
            Token::LeftParen | Token::RightParen => {
                return Err(exerr!(
                    ExErrorKind::MalformedPostfix,
                    "parenthesis in postfix sequence"
                ))
            }
        }
    }
    match operands.as_slice() {
        [res] => Ok(*res),
        _ => Err(exerr!(
            ExErrorKind::MalformedPostfix,
            "postfix sequence leaves {} values instead of 1",
            operands.len()
        )),
    }
}
