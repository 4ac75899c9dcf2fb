use rstest::rstest;

use crate::{ErrorKind, ScanError, parse_float, parse_integer, parse_integer_as, parse_number};

#[rstest]
#[case::empty(b"", 5, ErrorKind::EmptyInput, 0)]
#[case::nul(b"\x00", 1, ErrorKind::EmptyInput, 0)]
#[case::letters(b"abc", 3, ErrorKind::NoDigits, 0)]
#[case::sign_only(b"-", 1, ErrorKind::NoDigits, 1)]
#[case::space_sign_only(b"  +", 3, ErrorKind::NoDigits, 3)]
#[case::double_sign(b"+-1", 3, ErrorKind::NoDigits, 1)]
#[case::too_big(b"99999999999999999999", 21, ErrorKind::Overflow, 18)]
#[case::too_small(b"-9223372036854775809", 20, ErrorKind::Overflow, 19)]
#[case::cut_in_digits(b"12345", 3, ErrorKind::Truncated, 3)]
#[case::zero_window(b"1", 0, ErrorKind::Truncated, 0)]
fn integer_failures(
    #[case] input: &[u8],
    #[case] size: usize,
    #[case] kind: ErrorKind,
    #[case] offset: usize,
) {
    assert_eq!(
        parse_integer(input, size),
        Err(ScanError { kind, offset })
    );
}

#[rstest]
#[case::empty(b"", 0, ErrorKind::EmptyInput)]
#[case::point_first(b".5", 2, ErrorKind::NoDigits)]
#[case::letters(b"e10", 3, ErrorKind::NoDigits)]
#[case::cut_before_point(b"3.14", 1, ErrorKind::Truncated)]
#[case::cut_after_point(b"3.14", 2, ErrorKind::Truncated)]
fn float_failures(#[case] input: &[u8], #[case] size: usize, #[case] kind: ErrorKind) {
    assert_eq!(parse_float(input, size).map_err(|e| e.kind), Err(kind));
}

#[test]
fn number_integer_overflow() {
    let err = parse_number(b"-9223372036854775809", 20).unwrap_err();
    assert_eq!(err, ScanError { kind: ErrorKind::Overflow, offset: 19 });
}

#[test]
fn unsigned_rejects_negative_literals() {
    assert_eq!(
        parse_integer_as::<u64>(b"-1", 2).map_err(|e| e.kind),
        Err(ErrorKind::Overflow)
    );
    assert_eq!(parse_integer_as::<u64>(b"-0", 2).map(|n| n.value), Ok(0));
}

#[test]
fn failure_leaves_no_partial_value() {
    // A wrapped accumulator would have produced 7766279631452241919.
    let res = parse_integer(b"99999999999999999999", 20);
    assert!(matches!(res, Err(ScanError { kind: ErrorKind::Overflow, .. })));
}
