use lazy_static::lazy_static;
use paramex::{eval, ExResult};
use regex::Regex;
use std::io::{self, BufRead, Write};

/// A line of the REPL, either an assignment of `t` or an expression to be evaluated.
#[derive(Debug, PartialEq)]
enum Statement<'a> {
    AssignT(&'a str),
    Expr(&'a str),
}

fn line_2_statement(line: &str) -> Option<Statement<'_>> {
    lazy_static! {
        static ref RE_ASSIGN_T: Regex = Regex::new(r"^\s*t\s*=(.*)$").unwrap();
    }
    if line.trim().is_empty() {
        None
    } else if let Some(rhs) = RE_ASSIGN_T.captures(line).and_then(|c| c.get(1)) {
        Some(Statement::AssignT(rhs.as_str()))
    } else {
        Some(Statement::Expr(line))
    }
}

/// Executes a statement and returns the new value of `t` and the value to print.
fn execute(statement: &Statement, t: f64) -> ExResult<(f64, f64)> {
    match statement {
        Statement::AssignT(rhs) => {
            let new_t = eval(rhs, t)?;
            Ok((new_t, new_t))
        }
        Statement::Expr(expr) => Ok((t, eval(expr, t)?)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut stdout = io::stdout();
    let stdin = io::stdin();
    let mut buffer = String::new();
    let mut t = 0.0;
    loop {
        stdout.write_all(format!("[t={t}]> ").as_bytes())?;
        stdout.flush()?;
        buffer.clear();
        if stdin.lock().read_line(&mut buffer)? == 0 {
            break;
        }
        if let Some(statement) = line_2_statement(buffer.trim_end()) {
            match execute(&statement, t) {
                Ok((new_t, x)) => {
                    t = new_t;
                    println!("{x:?}");
                }
                Err(e) => eprintln!("Error {e}"),
            }
        }
    }
    Ok(())
}

#[test]
fn test_statements() {
    assert_eq!(line_2_statement("t = 123"), Some(Statement::AssignT(" 123")));
    assert_eq!(line_2_statement("  t=2t"), Some(Statement::AssignT("2t")));
    assert_eq!(line_2_statement("tan(t)"), Some(Statement::Expr("tan(t)")));
    assert_eq!(line_2_statement("   "), None);

    let (t, x) = execute(&Statement::AssignT("2t"), 1.5).unwrap();
    assert_eq!((t, x), (3.0, 3.0));
    let (t, x) = execute(&Statement::Expr("t^2"), 3.0).unwrap();
    assert_eq!((t, x), (3.0, 9.0));
    assert!(execute(&Statement::Expr("t^"), 3.0).is_err());
}
