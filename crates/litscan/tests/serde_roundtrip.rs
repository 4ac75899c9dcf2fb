#![allow(missing_docs)]

use litscan::bencode::{TokenError, decode_integer, decode_length};
use litscan::{
    ErrorKind, Number, ScanError, ScanOptions, Scanned, SignPolicy, Whitespace, parse_number,
};

#[test]
fn scanned_number_roundtrip() {
    for input in [&b"-17"[..], b"2.5", b"  +0"] {
        let scanned = parse_number(input, input.len()).unwrap();
        let json = serde_json::to_string(&scanned).unwrap();
        let back: Scanned<Number> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scanned);
    }
}

#[test]
fn error_wire_shape() {
    let err = ScanError {
        kind: ErrorKind::Overflow,
        offset: 18,
    };
    let json = serde_json::to_string(&err).unwrap();
    assert_eq!(json, r#"{"kind":"Overflow","offset":18}"#);
    assert_eq!(serde_json::from_str::<ScanError>(&json).unwrap(), err);
}

#[test]
fn token_error_roundtrip() {
    for err in [
        decode_integer(b"i03e").unwrap_err(),
        decode_integer(b"ix").unwrap_err(),
        decode_length(b"4spam").unwrap_err(),
    ] {
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(serde_json::from_str::<TokenError>(&json).unwrap(), err);
    }
}

#[test]
fn options_from_config() {
    let options: ScanOptions =
        serde_json::from_str(r#"{"whitespace":"Ascii","sign":"Forbidden"}"#).unwrap();
    assert_eq!(
        options,
        ScanOptions {
            whitespace: Whitespace::Ascii,
            sign: SignPolicy::Forbidden,
        }
    );
}
