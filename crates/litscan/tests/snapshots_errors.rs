#![allow(missing_docs)]

use core::fmt::Write;

use bstr::BStr;
use litscan::{
    bencode::{decode_integer, decode_length},
    parse_float, parse_integer,
};

fn render<E: core::fmt::Display>(cases: &[(&[u8], Result<usize, E>)]) -> String {
    let mut out = String::new();
    for (input, res) in cases {
        let written = match res {
            Ok(consumed) => writeln!(out, "{:?} => ok, consumed {consumed}", BStr::new(input)),
            Err(err) => writeln!(out, "{:?} => {err}", BStr::new(input)),
        };
        written.unwrap();
    }
    out
}

#[test]
fn snapshot_scan_errors() {
    let cases: [(&[u8], usize); 7] = [
        (b"", 0),
        (b"\x00", 1),
        (b"abc", 3),
        (b"  -", 3),
        (b"99999999999999999999", 21),
        (b"12345", 3),
        (b"-42xyz", 3),
    ];
    let results: Vec<(&[u8], _)> = cases
        .iter()
        .map(|&(input, size)| (input, parse_integer(input, size).map(|n| n.consumed)))
        .collect();

    insta::assert_snapshot!(render(&results), @r#"
    "" => empty input at byte 0
    "\0" => empty input at byte 0
    "abc" => no digits at byte 0
    "  -" => no digits at byte 3
    "99999999999999999999" => integer overflow at byte 18
    "12345" => literal truncated by size budget at byte 3
    "-42xyz" => ok, consumed 3
    "#);
}

#[test]
fn snapshot_float_errors() {
    let cases: [(&[u8], usize); 4] = [(b".5", 2), (b"3.14", 1), (b"3.14", 2), (b"3.14", 4)];
    let results: Vec<(&[u8], _)> = cases
        .iter()
        .map(|&(input, size)| (input, parse_float(input, size).map(|n| n.consumed)))
        .collect();

    insta::assert_snapshot!(render(&results), @r#"
    ".5" => no digits at byte 0
    "3.14" => literal truncated by size budget at byte 1
    "3.14" => literal truncated by size budget at byte 2
    "3.14" => ok, consumed 4
    "#);
}

#[test]
fn snapshot_bencode_errors() {
    let integers: [&[u8]; 5] = [b"x", b"i03e", b"i-0e", b"i12", b"i-12e"];
    let mut results: Vec<(&[u8], _)> = integers
        .iter()
        .map(|&input| (input, decode_integer(input).map(|n| n.consumed)))
        .collect();
    let lengths: [&[u8]; 3] = [b"04:spam", b"4spam", b"4:spam"];
    results.extend(
        lengths
            .iter()
            .map(|&input| (input, decode_length(input).map(|n| n.consumed))),
    );

    insta::assert_snapshot!(render(&results), @r#"
    "x" => expected 'i' at byte 0
    "i03e" => leading zero at byte 1
    "i-0e" => negative zero at byte 1
    "i12" => expected 'e' at byte 3
    "i-12e" => ok, consumed 5
    "04:spam" => leading zero at byte 0
    "4spam" => expected ':' at byte 1
    "4:spam" => ok, consumed 2
    "#);
}
