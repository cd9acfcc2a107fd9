use crate::operators::{BinaryOp, Function};
use crate::{exerr, ExErrorKind, ExResult};
use std::fmt::{self, Display, Formatter};

/// Name of the only variable.
pub const VARIABLE_REPR: char = 't';

/// Elements of a tokenized expression and of postfix sequences.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Token {
    Num(f64),
    /// The variable `t`
    Var,
    BinOp(BinaryOp),
    /// Prefix negation, not to be confused with `BinOp(BinaryOp::Sub)`.
    UnaryMinus,
    Func(Function),
    LeftParen,
    RightParen,
}

/// Distinguished token for prefix negation for code that builds token sequences directly.
pub const UNARY_MINUS_TOKEN: Token = Token::UnaryMinus;

impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Token::Num(n) => write!(f, "{n}"),
            Token::Var => write!(f, "{VARIABLE_REPR}"),
            Token::BinOp(op) => write!(f, "{op}"),
            Token::UnaryMinus => write!(f, "~"),
            Token::Func(func) => write!(f, "{func}"),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

const IMPLICIT_MUL: Token = Token::BinOp(BinaryOp::Mul);

/// Scan state. `literal` contains the digits of a number that is being read or
/// the variable name. The variable is kept pending such that `2t3` can be
/// turned into `2*t*3`.
struct Scanner<'a> {
    text: &'a str,
    tokens: Vec<Token>,
    n_open_parens: usize,
    literal: String,
    literal_has_point: bool,
    func_name: String,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Scanner {
            text,
            tokens: Vec::with_capacity(text.len()),
            n_open_parens: 0,
            literal: String::new(),
            literal_has_point: false,
            func_name: String::new(),
        }
    }

    fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    fn last_is_right_paren(&self) -> bool {
        matches!(self.last(), Some(Token::RightParen))
    }

    fn has_literal(&self) -> bool {
        !self.literal.is_empty()
    }

    fn literal_is_var(&self) -> bool {
        self.literal.len() == 1 && self.literal.starts_with(VARIABLE_REPR)
    }

    fn clear_literal(&mut self) {
        self.literal.clear();
        self.literal_has_point = false;
    }

    /// Emits the pending literal if there is one.
    fn flush_literal(&mut self) -> ExResult<()> {
        if !self.has_literal() {
            return Ok(());
        }
        let token = if self.literal_is_var() {
            Token::Var
        } else if self.literal.ends_with('.') {
            return Err(exerr!(
                ExErrorKind::MisplacedDecimalPoint,
                "literal '{}' in '{}' ends with a decimal point",
                self.literal,
                self.text
            ));
        } else {
            let n = self.literal.parse::<f64>().map_err(|e| {
                exerr!(
                    ExErrorKind::MisplacedDecimalPoint,
                    "could not parse '{}', {:?}",
                    self.literal,
                    e
                )
            })?;
            Token::Num(n)
        };
        self.tokens.push(token);
        self.clear_literal();
        Ok(())
    }

    /// Flushes the pending literal and appends `*` if there was one.
    fn flush_literal_with_mul(&mut self) -> ExResult<()> {
        if self.has_literal() {
            self.flush_literal()?;
            self.tokens.push(IMPLICIT_MUL);
        }
        Ok(())
    }

    fn digit(&mut self, c: char) {
        if self.last_is_right_paren() {
            self.tokens.push(IMPLICIT_MUL);
            self.clear_literal();
        } else if self.literal_is_var() {
            self.tokens.push(Token::Var);
            self.tokens.push(IMPLICIT_MUL);
            self.clear_literal();
        }
        self.literal.push(c);
    }

    fn binary_op(&mut self, op: BinaryOp) -> ExResult<()> {
        if self.has_literal() {
            self.flush_literal()?;
        } else if !self.last_is_right_paren() {
            return Err(exerr!(
                ExErrorKind::DanglingOperator,
                "operator {} in '{}' has no left operand",
                op,
                self.text
            ));
        }
        self.tokens.push(Token::BinOp(op));
        Ok(())
    }

    fn left_paren(&mut self) -> ExResult<()> {
        if matches!(self.last(), Some(Token::Var | Token::RightParen)) {
            self.tokens.push(IMPLICIT_MUL);
        } else {
            self.flush_literal_with_mul()?;
        }
        self.tokens.push(Token::LeftParen);
        self.n_open_parens += 1;
        Ok(())
    }

    fn right_paren(&mut self) -> ExResult<()> {
        if self.n_open_parens == 0 {
            return Err(exerr!(
                ExErrorKind::MismatchedParentheses,
                "too many closing parentheses in '{}'",
                self.text
            ));
        }
        self.n_open_parens -= 1;
        self.flush_literal()?;
        if matches!(self.last(), Some(Token::LeftParen)) {
            return Err(exerr!(
                ExErrorKind::EmptyParens,
                "empty parentheses in '{}'",
                self.text
            ));
        }
        self.tokens.push(Token::RightParen);
        Ok(())
    }

    fn minus(&mut self) -> ExResult<()> {
        let token = if self.tokens.is_empty() && !self.has_literal() {
            UNARY_MINUS_TOKEN
        } else {
            self.flush_literal()?;
            match self.last() {
                Some(
                    Token::BinOp(_) | Token::UnaryMinus | Token::LeftParen | Token::Func(_),
                ) => UNARY_MINUS_TOKEN,
                _ => Token::BinOp(BinaryOp::Sub),
            }
        };
        self.tokens.push(token);
        Ok(())
    }

    fn var(&mut self, next: Option<char>) -> ExResult<()> {
        if matches!(self.last(), Some(Token::Var | Token::RightParen)) {
            self.tokens.push(IMPLICIT_MUL);
        } else {
            self.flush_literal_with_mul()?;
        }
        if next == Some('a') {
            // beginning of tan
            self.func_name.push(VARIABLE_REPR);
        } else {
            self.literal.push(VARIABLE_REPR);
        }
        Ok(())
    }

    fn decimal_point(&mut self) -> ExResult<()> {
        if self.literal_has_point || self.literal_is_var() || self.last_is_right_paren() {
            return Err(exerr!(
                ExErrorKind::MisplacedDecimalPoint,
                "misplaced decimal point in '{}'",
                self.text
            ));
        }
        self.literal_has_point = true;
        self.literal.push('.');
        Ok(())
    }

    fn func_start(&mut self, c: char) -> ExResult<()> {
        if self.last_is_right_paren() {
            self.tokens.push(IMPLICIT_MUL);
        } else {
            self.flush_literal_with_mul()?;
        }
        self.func_name.push(c);
        Ok(())
    }

    fn func_continue(&mut self, c: char) -> ExResult<()> {
        self.func_name.push(c);
        if self.func_name.chars().count() == 3 {
            let func = Function::from_name(&self.func_name).ok_or_else(|| {
                exerr!(
                    ExErrorKind::InvalidFunctionName,
                    "unknown function '{}' in '{}'",
                    self.func_name,
                    self.text
                )
            })?;
            self.tokens.push(Token::Func(func));
            self.func_name.clear();
        }
        Ok(())
    }

    fn finish(mut self) -> ExResult<Vec<Token>> {
        self.flush_literal()?;
        if !self.func_name.is_empty() {
            return Err(exerr!(
                ExErrorKind::InvalidFunctionName,
                "incomplete function name '{}' in '{}'",
                self.func_name,
                self.text
            ));
        }
        let err = match self.tokens.last() {
            None => Some(exerr!(
                ExErrorKind::EmptyExpression,
                "cannot parse empty string"
            )),
            Some(_) if self.n_open_parens > 0 => Some(exerr!(
                ExErrorKind::MismatchedParentheses,
                "{} unclosed parentheses in '{}'",
                self.n_open_parens,
                self.text
            )),
            Some(last @ (Token::BinOp(_) | Token::UnaryMinus | Token::Func(_))) => Some(exerr!(
                ExErrorKind::DanglingOperator,
                "the last element of '{}' cannot be {}",
                self.text,
                last
            )),
            Some(_) => None,
        };
        match err {
            Some(e) => Err(e),
            None => Ok(self.tokens),
        }
    }
}

/// Splits an expression into tokens and inserts the multiplications that are implicit
/// in expressions such as `2t`, `(3)(4t)`, or `ttan(4)`. Whitespace is ignored entirely,
/// hence `3 7` is the number `37`. A `-` is a [`UNARY_MINUS_TOKEN`](UNARY_MINUS_TOKEN) at
/// the beginning and after operators, opening parentheses, and functions. There is no
/// unary `+`.
///
/// ```rust
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// #
/// use paramex::{tokenize, BinaryOp, Token};
/// let tokens = tokenize("2t")?;
/// assert_eq!(tokens, vec![Token::Num(2.0), Token::BinOp(BinaryOp::Mul), Token::Var]);
/// #
/// #     Ok(())
/// # }
/// ```
///
/// # Errors
///
/// An [`ExError`](crate::ExError) is returned for malformed expressions. Its
/// [`kind`](crate::ExError::kind) tells what was wrong.
///
pub fn tokenize(text: &str) -> ExResult<Vec<Token>> {
    let mut scanner = Scanner::new(text);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        if !scanner.func_name.is_empty() {
            scanner.func_continue(c)?;
            continue;
        }
        match c {
            _ if c.is_ascii_digit() => scanner.digit(c),
            '+' => scanner.binary_op(BinaryOp::Add)?,
            '*' => scanner.binary_op(BinaryOp::Mul)?,
            '/' => scanner.binary_op(BinaryOp::Div)?,
            '^' => scanner.binary_op(BinaryOp::Pow)?,
            '(' => scanner.left_paren()?,
            ')' => scanner.right_paren()?,
            '-' => scanner.minus()?,
            VARIABLE_REPR => scanner.var(chars.peek().copied())?,
            '.' => scanner.decimal_point()?,
            _ => scanner.func_start(c)?,
        }
    }
    let res = scanner.finish();
    match &res {
        Ok(tokens) => log::trace!("tokenized '{}' into {:?}", text, tokens),
        Err(e) => log::debug!("rejected '{}', {}", text, e),
    }
    res
}
