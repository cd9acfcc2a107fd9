#![no_main]
use libfuzzer_sys::fuzz_target;

use paramex::{eval_postfix, prelude::*};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(expr) = PostfixEx::parse(s) {
            let _ = eval_postfix(expr.postfix(), 0.5);
            let _ = expr.eval(-0.5);
        }
    }
});
