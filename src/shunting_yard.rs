use crate::operators::{BinaryOp, Function};
use crate::parser::Token;
use smallvec::SmallVec;

const N_STACK_ENTRIES_ON_STACK: usize = 16;

/// Entries of the operator stack. Functions and unary minus are prefix operators
/// that are resolved by a closing parenthesis, the end of the input, or a following
/// left-associative binary operator.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum StackEntry {
    Func(Function),
    UnaryMinus,
    LeftParen,
    BinOp(BinaryOp),
}

impl StackEntry {
    /// Whether this entry needs to be moved to the output before `incoming` is pushed.
    fn yields_to(&self, incoming: BinaryOp) -> bool {
        let info = incoming.info();
        match self {
            // `^` binds stronger than prefix operators, `-5^2` is `-(5^2)`
            StackEntry::Func(_) | StackEntry::UnaryMinus => !info.is_right_assoc,
            StackEntry::BinOp(top) => {
                let top_info = top.info();
                top_info.prio > info.prio
                    || (top_info.prio == info.prio && !top_info.is_right_assoc)
            }
            StackEntry::LeftParen => false,
        }
    }

    fn to_token(self) -> Option<Token> {
        match self {
            StackEntry::Func(f) => Some(Token::Func(f)),
            StackEntry::UnaryMinus => Some(Token::UnaryMinus),
            StackEntry::BinOp(op) => Some(Token::BinOp(op)),
            StackEntry::LeftParen => None,
        }
    }
}

/// Converts tokens in infix order as returned by [`tokenize`](crate::tokenize) into
/// postfix order, see
/// [shunting-yard algorithm](https://en.wikipedia.org/wiki/Shunting-yard_algorithm).
/// The tokens are expected to come from a successful tokenization and are not
/// validated. Hence, the result of invalid input is a postfix sequence
/// that fails to evaluate.
///
/// ```rust
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// #
/// use paramex::{infix_to_postfix, tokenize};
/// let postfix = infix_to_postfix(&tokenize("2 + 3t")?);
/// let repr = postfix.iter().map(|t| t.to_string()).collect::<Vec<_>>();
/// assert_eq!(repr, ["2", "3", "t", "*", "+"]);
/// #
/// #     Ok(())
/// # }
/// ```
pub fn infix_to_postfix(tokens: &[Token]) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack = SmallVec::<[StackEntry; N_STACK_ENTRIES_ON_STACK]>::new();
    for token in tokens {
        match token {
            Token::Num(_) | Token::Var => output.push(*token),
            Token::Func(f) => stack.push(StackEntry::Func(*f)),
            Token::UnaryMinus => stack.push(StackEntry::UnaryMinus),
            Token::LeftParen => stack.push(StackEntry::LeftParen),
            Token::BinOp(op) => {
                while let Some(top) = stack.last() {
                    if !top.yields_to(*op) {
                        break;
                    }
                    output.extend(stack.pop().and_then(StackEntry::to_token));
                }
                stack.push(StackEntry::BinOp(*op));
            }
            Token::RightParen => {
                while let Some(top) = stack.pop() {
                    match top.to_token() {
                        Some(t) => output.push(t),
                        None => break,
                    }
                }
            }
        }
    }
    output.extend(stack.into_iter().rev().filter_map(StackEntry::to_token));
    log::trace!("postfix {:?}", output);
    output
}
