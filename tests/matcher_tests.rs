//! Matcher grading and diagnostic decode tests

use morse_trainer::dictionary::Dictionary;
use morse_trainer::matcher::{decode_candidate, evaluate, MatchResult};

#[test]
fn test_every_letter_code_grades_correct_against_itself() {
    for entry in Dictionary::Letters.entries() {
        assert_eq!(
            evaluate(entry.code, entry.code),
            MatchResult::Correct,
            "letter {}",
            entry.label
        );
    }
}

#[test]
fn test_every_word_code_grades_correct_against_itself() {
    for entry in Dictionary::Words.entries() {
        assert_eq!(
            evaluate(entry.code, entry.code),
            MatchResult::Correct,
            "word {}",
            entry.label
        );
    }
}

#[test]
fn test_close_misses_grade_incorrect() {
    // One token off.
    assert_eq!(evaluate(".--.", ".-.."), MatchResult::Incorrect);
    // Prefix of the right word.
    assert_eq!(evaluate("-.-. .-", "-.-. .- -"), MatchResult::Incorrect);
    // Extra trailing token.
    assert_eq!(evaluate(".-..", ".-."), MatchResult::Incorrect);
}

#[test]
fn test_decode_reports_what_was_keyed() {
    let mut buf = [0u8; 32];

    // A valid word keyed against the wrong challenge still decodes.
    assert_eq!(decode_candidate("-.. --- --.", &mut buf), "DOG");

    // Mixed garbage: resolved letters plus one trailing question mark.
    assert_eq!(decode_candidate(".- ------- -", &mut buf), "AT?");
}

#[test]
fn test_decode_never_false_matches() {
    let mut buf = [0u8; 32];
    assert_eq!(decode_candidate("-------", &mut buf), "?");
}

#[test]
fn test_decode_handles_double_spaces() {
    let mut buf = [0u8; 32];
    // Empty tokens from repeated delimiters are skipped, not unknown.
    assert_eq!(decode_candidate(".-  -", &mut buf), "AT");
}
