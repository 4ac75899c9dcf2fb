#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use litscan::{
    ErrorKind, LiteralScanner, Number, ScanOptions, SignPolicy, Whitespace, bencode, window_len,
};

#[derive(Debug, Arbitrary)]
struct Input {
    size: u16,
    whitespace: u8,
    sign: u8,
    bytes: Vec<u8>,
}

fn options(whitespace: u8, sign: u8) -> ScanOptions {
    ScanOptions {
        whitespace: match whitespace % 3 {
            0 => Whitespace::Control,
            1 => Whitespace::Ascii,
            _ => Whitespace::None,
        },
        sign: match sign % 3 {
            0 => SignPolicy::Optional,
            1 => SignPolicy::NegativeOnly,
            _ => SignPolicy::Forbidden,
        },
    }
}

/// The consumed prefix without its leading whitespace, as text.
fn literal(bytes: &[u8], consumed: usize) -> &str {
    let lexeme = std::str::from_utf8(&bytes[..consumed]).expect("literal bytes are ASCII");
    lexeme.trim_start_matches(|c: char| c != '+' && c != '-' && !c.is_ascii_digit())
}

fn scanner(input: Input) {
    let size = usize::from(input.size);
    let scanner = LiteralScanner::new(options(input.whitespace, input.sign));
    let bytes = input.bytes.as_slice();
    let window = window_len(bytes, size);

    match scanner.integer(bytes, size) {
        Ok(n) => {
            assert!(n.consumed <= window);
            let text = literal(bytes, n.consumed);
            assert_eq!(text.parse::<i64>().ok(), Some(n.value), "{text:?}");
        }
        Err(err) => {
            assert!(err.offset <= window);
            if err.kind == ErrorKind::Overflow {
                let text = literal(bytes, err.offset + 1);
                assert!(text.parse::<i64>().is_err(), "{text:?}");
            }
        }
    }

    match scanner.float(bytes, size) {
        Ok(x) => {
            assert!(x.consumed <= window);
            let text = literal(bytes, x.consumed).trim_end_matches('.');
            let expected: f64 = text.parse().expect("scanned literal is a valid float");
            let tolerance = (expected.abs() * 1e-9).max(1e-300);
            assert!(
                (x.value - expected).abs() <= tolerance || x.value == expected,
                "{text:?}: {} vs {expected}",
                x.value
            );
        }
        Err(err) => assert_ne!(err.kind, ErrorKind::Overflow),
    }

    if let Ok(n) = scanner.number(bytes, size) {
        let has_point = bytes[..n.consumed].contains(&b'.');
        assert_eq!(matches!(n.value, Number::Float(_)), has_point);
    }

    if let Ok(n) = bencode::decode_integer(bytes) {
        assert!(n.consumed <= bytes.len());
        assert_eq!(bytes[n.consumed - 1], b'e');
    }
    if let Ok(n) = bencode::decode_length(bytes) {
        assert_eq!(bytes[n.consumed - 1], b':');
    }
}

fuzz_target!(|input: Input| scanner(input));
