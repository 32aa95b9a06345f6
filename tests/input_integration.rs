use subseq_max::input::{bank_values, validate_count};
use subseq_max::{parse_banks, total_max, DigitError, InputError, Strategy};

const SAMPLE: &str = "\
987654321111111
811111111111119
234234234234278
818181911112111
";

#[test]
fn sample_values_per_bank() {
    let banks = parse_banks(SAMPLE).unwrap();
    assert_eq!(
        bank_values(&banks, 2, Strategy::Pair).unwrap(),
        vec![98, 89, 78, 92]
    );
    assert_eq!(
        bank_values(&banks, 12, Strategy::Table).unwrap(),
        vec![987_654_321_111, 811_111_111_119, 434_234_234_278, 888_911_112_111]
    );
}

#[test]
fn sample_totals_agree_across_strategies() {
    let banks = parse_banks(SAMPLE).unwrap();
    for strategy in Strategy::ALL {
        assert_eq!(total_max(&banks, 2, strategy), Ok(357), "{strategy}");
    }
    for strategy in [Strategy::Memoized, Strategy::Table] {
        assert_eq!(total_max(&banks, 12, strategy), Ok(3_121_910_778_619), "{strategy}");
    }
}

#[test]
fn windows_line_endings() {
    let banks = parse_banks("905\r\n109\r\n").unwrap();
    assert_eq!(total_max(&banks, 2, Strategy::Pair), Ok(95 + 19));
}

#[test]
fn bad_character_reports_line_and_column() {
    let err = parse_banks("12\n\n3 4\n").unwrap_err();
    assert_eq!(
        err,
        InputError::Digit {
            line: 3,
            source: DigitError::InvalidDigit { column: 2, ch: ' ' },
        }
    );
}

#[test]
fn count_validation() {
    let banks = parse_banks("123456789012345678901\n").unwrap();
    assert_eq!(validate_count(19, Strategy::Table, &banks), Ok(()));
    assert_eq!(
        validate_count(20, Strategy::Table, &banks),
        Err(InputError::UnsupportedCount { k: 20 })
    );
    assert!(validate_count(2, Strategy::Pair, &banks).is_ok());
    assert!(matches!(
        validate_count(12, Strategy::Pair, &banks),
        Err(InputError::UnsupportedStrategy { .. })
    ));
}

#[test]
fn error_messages_are_readable() {
    let err = InputError::TooShort { line: 7, len: 3, k: 12 };
    assert_eq!(err.to_string(), "line 7: bank has 3 digits, cannot select 12");
    let err = InputError::UnsupportedCount { k: 0 };
    assert_eq!(err.to_string(), "cannot select 0 digits: supported range is 1..=19");
}
