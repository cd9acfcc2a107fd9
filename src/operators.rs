use lazy_static::lazy_static;
use std::fmt::{self, Display, Formatter};

/// Binary operators that can appear in an expression.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Precedence and associativity of a binary operator.
#[derive(Copy, Clone, Debug)]
pub struct OperatorInfo {
    /// Implementation of the binary operation, e.g., `|a, b| a * b` for multiplication.
    pub apply: fn(f64, f64) -> f64,
    /// A binary operation with a higher number binds stronger.
    pub prio: u8,
    pub is_right_assoc: bool,
}

lazy_static! {
    // indexed by `BinaryOp as usize`
    static ref OPERATOR_INFOS: [OperatorInfo; 5] = [
        OperatorInfo {
            apply: |a, b| a + b,
            prio: 1,
            is_right_assoc: false,
        },
        OperatorInfo {
            apply: |a, b| a - b,
            prio: 1,
            is_right_assoc: false,
        },
        OperatorInfo {
            apply: |a, b| a * b,
            prio: 2,
            is_right_assoc: false,
        },
        OperatorInfo {
            apply: |a, b| a / b,
            prio: 2,
            is_right_assoc: false,
        },
        OperatorInfo {
            apply: |a: f64, b| a.powf(b),
            prio: 3,
            is_right_assoc: true,
        },
    ];
}

impl BinaryOp {
    pub fn from_char(c: char) -> Option<BinaryOp> {
        match c {
            '+' => Some(BinaryOp::Add),
            '-' => Some(BinaryOp::Sub),
            '*' => Some(BinaryOp::Mul),
            '/' => Some(BinaryOp::Div),
            '^' => Some(BinaryOp::Pow),
            _ => None,
        }
    }
    pub fn repr(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
        }
    }
    /// Entry of the process-wide operator table.
    pub fn info(&self) -> &'static OperatorInfo {
        &OPERATOR_INFOS[*self as usize]
    }
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        (self.info().apply)(a, b)
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.repr())
    }
}

/// Trigonometric functions, arguments are in radians.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Function {
    Sin,
    Cos,
    Tan,
}

impl Function {
    /// Returns the function named exactly `name`.
    pub fn from_name(name: &str) -> Option<Function> {
        match name {
            "sin" => Some(Function::Sin),
            "cos" => Some(Function::Cos),
            "tan" => Some(Function::Tan),
            _ => None,
        }
    }
    pub fn repr(&self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
        }
    }
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            Function::Sin => x.sin(),
            Function::Cos => x.cos(),
            Function::Tan => x.tan(),
        }
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.repr())
    }
}
