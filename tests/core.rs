#[cfg(test)]
mod utils;
use itertools::iproduct;
use paramex::{
    eval, eval_postfix, infix_to_postfix, parse, prelude::*, to_postfix, tokenize, BinaryOp,
    ExErrorKind, Function, ParametricCurve, Token, UNARY_MINUS_TOKEN,
};
use regex::Regex;
use std::f64::consts::{E, PI};
use std::fs::{self, File};
use std::io::{self, BufRead};
use utils::assert_float_eq_f64;

const VALID_EXPRESSIONS: [&str; 14] = [
    "4.5",
    "-4 + t^2",
    "5sin(t^3 * cos(0)) - 10t",
    "tan(-t - 1)^2",
    "(tan(-t - 1))^2",
    "-5^2t",
    "0.8^t^2",
    "0 / 0",
    "sin(t) * (2.718281828459045^cos(t) - 2cos(4t) - (sin(t / 12))^5)",
    "(3)(4t)",
    "sin(t)(cos(t))",
    "(3)4t",
    "(3)t(5)6",
    "cos(2t)sin(30t + 5)tan(6)",
];

const INVALID_EXPRESSIONS: [&str; 31] = [
    "",
    "(",
    ")",
    "+",
    "-",
    "*",
    "/",
    "sin",
    "cos",
    "tan",
    "()",
    "sin^2(5)",
    "    ",
    "cos(3t).67",
    "t.0",
    "2.t",
    "3. * 4",
    "2.5.7",
    "2..5",
    "3 + 2.",
    "3^-*.4",
    "arctan(1)",
    "3 + 4 --",
    "3 + 4 ^ ",
    "3 + 5cos(3 - (6t^2)",
    "4.",
    "4.(",
    "tan(4).6",
    "359. - 8",
    "6.cos(-1)",
    "cos(1.)",
];

fn same_value(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits()
}

#[test]
fn test_version() {
    // make sure the version strings in the Cargo.toml and lib.rs coincide
    let file = File::open("src/lib.rs").unwrap();
    let version_line_lib = io::BufReader::new(file)
        .lines()
        .find(|line| line.as_ref().unwrap().contains("html_root_url"))
        .unwrap()
        .unwrap();
    let re_version = Regex::new(r#"[0-9]{1,4}\.[0-9]{1,4}\.[0-9]{1,4}"#).unwrap();
    let match_lib = re_version.find(&version_line_lib).unwrap().as_str();

    let toml_string = fs::read_to_string("Cargo.toml").unwrap();
    let cargo_toml: toml::Value = toml::from_str(&toml_string).unwrap();
    let package = cargo_toml.get("package").unwrap().as_table().unwrap();
    let version = package.get("version").unwrap().as_str().unwrap();
    assert_eq!(match_lib, version);
}

#[test]
fn test_eval() -> ExResult<()> {
    fn test(text: &str, t: f64, reference: f64) -> ExResult<()> {
        println!("testing {}...", text);
        assert_float_eq_f64(eval(text, t)?, reference);
        assert_float_eq_f64(PostfixEx::parse(text)?.eval(t)?, reference);
        println!("...ok.");
        Ok(())
    }
    test("4.5", -304.46, 4.5)?;
    let t = 3.4594;
    test("-4 + t^2", t, -4.0 + t.powf(2.0))?;
    let t = 5.59542;
    test(
        "5sin(t^3 * cos(0)) - 10t",
        t,
        5.0 * (t.powf(3.0) * 0f64.cos()).sin() - 10.0 * t,
    )?;
    let t = -0.45813946938419;
    test("tan(-t - 1)^2", t, ((-t - 1.0).powf(2.0)).tan())?;
    let t = 89f64.sin();
    test("(tan(-t - 1))^2", t, (-t - 1.0).tan().powf(2.0))?;
    let t = 554.23745;
    test("-5^2t", t, -(5f64.powf(2.0)) * t)?;
    test("0.8^t^2", E, 0.8f64.powf(E.powf(2.0)))?;
    let t = 2.0 * PI;
    test(
        &format!("sin(t) * ({}^cos(t) - 2cos(4t) - (sin(t / 12))^5)", E),
        t,
        t.sin() * (E.powf(t.cos()) - 2.0 * (4.0 * t).cos() - (t / 12.0).sin().powf(5.0)),
    )?;
    test("(3)(4t)", 3.572, 3.0 * (4.0 * 3.572))?;
    let t = -E * PI;
    test("sin(t)(cos(t))", t, t.sin() * t.cos())?;
    test("(3)4t", 2.5, 3.0 * 4.0 * 2.5)?;
    test("(3)t(5)6", 4.12, 3.0 * 4.12 * 5.0 * 6.0)?;
    let t = 6.034;
    test(
        "cos(2t)sin(30t + 5)tan(6)",
        t,
        (2.0 * t).cos() * (30.0 * t + 5.0).sin() * 6f64.tan(),
    )?;
    test("2t3tt-4", 1.5, 2.0 * 1.5 * 3.0 * 1.5 * 1.5 - 4.0)?;
    test("4--2", 0.0, 6.0)?;
    test("t/-(50+t)8", 2.0, 2.0 / -(52.0) * 8.0)?;
    test("3 7", 0.0, 37.0)?;
    test("0002.43", 0.0, 2.43)?;
    test("2^3^2", 0.0, 512.0)?;
    test("8-4-2", 0.0, 2.0)?;
    test("8/4/2", 0.0, 1.0)?;
    test("sin -2t + 2", 3.0, (-2f64).sin() * 3.0 + 2.0)?;
    Ok(())
}

#[test]
fn test_division_by_zero() -> ExResult<()> {
    assert!(eval("0 / 0", 8f64.cos())?.is_nan());
    assert_eq!(eval("1/t", 0.0)?, f64::INFINITY);
    assert_eq!(eval("-1/t", 0.0)?, f64::NEG_INFINITY);
    assert_eq!(eval("1/(t-t)", 5.0)?, f64::INFINITY);
    Ok(())
}

#[test]
fn test_invalid() {
    let t = 1f64.cos();
    for text in INVALID_EXPRESSIONS {
        println!("testing {}...", text);
        assert!(tokenize(text).is_err());
        assert!(to_postfix(text).is_err());
        assert!(eval(text, t).is_err());
        assert!(parse(text).is_err());
    }
}

#[test]
fn test_error_kinds() {
    let kind = |text: &str| tokenize(text).unwrap_err().kind();
    assert_eq!(kind(""), ExErrorKind::EmptyExpression);
    assert_eq!(kind("(t"), ExErrorKind::MismatchedParentheses);
    assert_eq!(kind("t)"), ExErrorKind::MismatchedParentheses);
    assert_eq!(kind("2..5"), ExErrorKind::MisplacedDecimalPoint);
    assert_eq!(kind("arctan(1)"), ExErrorKind::InvalidFunctionName);
    assert_eq!(kind("3 + 4 ^ "), ExErrorKind::DanglingOperator);
    assert_eq!(kind("()"), ExErrorKind::EmptyParens);
    let malformed = eval_postfix(&[Token::Num(2.0), Token::Num(4.0)], 0.0).unwrap_err();
    assert_eq!(malformed.kind(), ExErrorKind::MalformedPostfix);
    assert!(!malformed.to_string().is_empty());
    // accepted by the tokenizer, rejected when evaluated
    assert!(tokenize("(2+)").is_ok());
    assert_eq!(
        eval("(2+)", 0.0).unwrap_err().kind(),
        ExErrorKind::MalformedPostfix
    );
}

#[test]
fn test_tokenize() -> ExResult<()> {
    assert_eq!(
        tokenize("2t")?,
        [Token::Num(2.0), Token::BinOp(BinaryOp::Mul), Token::Var]
    );
    assert_eq!(
        tokenize("-3.14159 + 43")?,
        [
            UNARY_MINUS_TOKEN,
            Token::Num(3.14159),
            Token::BinOp(BinaryOp::Add),
            Token::Num(43.0)
        ]
    );
    assert_eq!(
        tokenize("5 + 2tan(-t - 9)")?,
        [
            Token::Num(5.0),
            Token::BinOp(BinaryOp::Add),
            Token::Num(2.0),
            Token::BinOp(BinaryOp::Mul),
            Token::Func(Function::Tan),
            Token::LeftParen,
            UNARY_MINUS_TOKEN,
            Token::Var,
            Token::BinOp(BinaryOp::Sub),
            Token::Num(9.0),
            Token::RightParen,
        ]
    );
    Ok(())
}

#[test]
fn test_composition() -> ExResult<()> {
    let ts = (0..20)
        .map(|_| (rand::random::<f64>() - 0.5) * 100.0)
        .chain([0.0, -0.0, 1.0, PI]);
    for (text, t) in iproduct!(VALID_EXPRESSIONS, ts) {
        let postfix = to_postfix(text)?;
        assert_eq!(postfix, infix_to_postfix(&tokenize(text)?));
        let one_shot = eval(text, t)?;
        assert!(same_value(one_shot, eval_postfix(&postfix, t)?));
        assert!(same_value(one_shot, eval(text, t)?));
    }
    Ok(())
}

#[test]
fn test_reuse_postfix() -> ExResult<()> {
    for text in VALID_EXPRESSIONS {
        let postfix = to_postfix(text)?;
        let copy = postfix.clone();
        let first = eval_postfix(&postfix, 0.5)?;
        eval_postfix(&postfix, -2.5)?;
        assert_eq!(postfix.len(), copy.len());
        assert_eq!(postfix, copy);
        assert!(same_value(first, eval_postfix(&postfix, 0.5)?));
    }
    Ok(())
}

#[test]
fn test_threads() -> ExResult<()> {
    let expr = PostfixEx::parse("sin(t)^2 + cos(t)^2")?;
    let reference = (0..100)
        .map(|i| expr.eval(i as f64))
        .collect::<ExResult<Vec<_>>>()?;
    std::thread::scope(|s| {
        let handles = (0..4)
            .map(|_| {
                s.spawn(|| {
                    (0..100)
                        .map(|i| expr.eval(i as f64).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Vec<_>>();
        for h in handles {
            assert_eq!(h.join().unwrap(), reference);
        }
    });
    Ok(())
}

#[test]
fn test_curve() -> ExResult<()> {
    let mut curve = ParametricCurve::new("2cos(t)", "3sin(t)", 0.0, 2.0 * PI)?;
    let x_postfix = curve.x_expr().postfix().to_vec();
    for _ in 0..2500 {
        curve.update()?;
        let (x, y) = curve.point();
        assert_float_eq_f64(x, 2.0 * curve.t().cos());
        assert_float_eq_f64((x / 2.0).powi(2) + (y / 3.0).powi(2), 1.0);
    }
    assert_eq!(curve.x_expr().postfix(), x_postfix.as_slice());
    Ok(())
}
