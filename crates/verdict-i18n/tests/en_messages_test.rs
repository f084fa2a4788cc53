//! English messages and the batch/single reporting surfaces

use chrono::NaiveDate;
use verdict_i18n::{Composer, Locale};
use verdict_issues::{
    BoundValue, Comparison, Issue, IssueKind, LiteralValue, ParsedType, SizeBound,
    ValidationFailure,
};

fn message(kind: IssueKind) -> String {
    Composer::new(Locale::English)
        .compose(&Issue::new(kind))
        .into_text()
}

#[test]
fn empty_string_against_exact_length_constraint() {
    assert_eq!(
        message(IssueKind::InvalidStringBounds {
            bound: SizeBound::Exactly(5)
        }),
        "String must contain exactly 5 character(s)"
    );
}

#[test]
fn type_mismatch_names_expected_then_actual() {
    assert_eq!(
        message(IssueKind::TypeMismatch {
            expected: ParsedType::Number,
            actual: ParsedType::String,
        }),
        "Expected number, received string"
    );
}

#[test]
fn range_messages_distinguish_subject_and_inclusivity() {
    assert_eq!(
        message(IssueKind::OutOfRange {
            comparison: Comparison::LessThan,
            bound: BoundValue::Number(5.0),
        }),
        "Number must be less than 5"
    );
    assert_eq!(
        message(IssueKind::OutOfRange {
            comparison: Comparison::GreaterThanOrEqual,
            bound: BoundValue::Date(NaiveDate::from_ymd_opt(2022, 8, 1).unwrap()),
        }),
        "Date must be greater than or equal to 8/1/2022"
    );
}

#[test]
fn literal_and_enum_messages() {
    assert_eq!(
        message(IssueKind::InvalidLiteral {
            expected: LiteralValue::Int(12)
        }),
        "Invalid literal value, expected 12"
    );
    assert_eq!(
        message(IssueKind::InvalidEnumValue {
            expected: vec!["A".into(), "B".into(), "C".into()],
            received: "D".into(),
        }),
        "Invalid enum value. Expected 'A' | 'B' | 'C', received 'D'"
    );
}

#[test]
fn unrecognized_keys_keep_input_order() {
    assert_eq!(
        message(IssueKind::UnrecognizedKeys {
            keys: vec!["cat".into(), "rat".into()]
        }),
        "Unrecognized key(s) in object: 'cat', 'rat'"
    );
}

#[test]
fn compose_first_and_compose_all() {
    let failure = ValidationFailure::new(vec![
        Issue::new(IssueKind::Required).at(["name"]),
        Issue::new(IssueKind::TypeMismatch {
            expected: ParsedType::Number,
            actual: ParsedType::String,
        })
        .at(["age"]),
    ])
    .unwrap();

    let composer = Composer::new(Locale::English);

    let first = composer.compose_first(&failure);
    assert_eq!(first.text(), "Required");
    assert_eq!(first.code(), "required");

    let all = composer.compose_all(&failure);
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].text(), "Expected number, received string");
    assert_eq!(all[1].code(), "type_mismatch");
}
