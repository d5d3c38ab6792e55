#![no_main]

use libfuzzer_sys::fuzz_target;
use sango::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // The lexer never fails; the parser must not panic on any token stream.
        let _ = lexer::lex(s);
        let _ = parser::parse(s);
    }
});
