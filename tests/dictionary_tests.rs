//! Dictionary data integrity tests

use morse_trainer::dictionary::{Dictionary, LETTERS, WORDS};

#[test]
fn test_letter_set_covers_alphabet_and_digits() {
    assert_eq!(LETTERS.len(), 36);

    let labels: String = LETTERS.iter().map(|e| e.label).collect();
    assert_eq!(labels, "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789");
}

#[test]
fn test_letter_codes_use_only_dots_and_dashes() {
    for entry in &LETTERS {
        assert!(!entry.code.is_empty());
        assert!(
            entry.code.chars().all(|c| c == '.' || c == '-'),
            "bad token in {}",
            entry.code
        );
    }
}

#[test]
fn test_word_codes_match_letter_table() {
    // Every word code must be its letters' codes joined by single spaces.
    for word in &WORDS {
        let expected: Vec<&str> = word
            .label
            .chars()
            .map(|c| {
                let mut buf = [0u8; 4];
                let s: &str = c.encode_utf8(&mut buf);
                LETTERS
                    .iter()
                    .find(|e| e.label == s)
                    .unwrap_or_else(|| panic!("{} has non-letter {}", word.label, c))
                    .code
            })
            .collect();
        assert_eq!(word.code, expected.join(" "), "word {}", word.label);
    }
}

#[test]
fn test_word_set_size() {
    assert_eq!(WORDS.len(), 25);
    assert_eq!(Dictionary::Words.len(), 25);
}

#[test]
fn test_find_by_code_round_trip() {
    for set in [Dictionary::Letters, Dictionary::Words] {
        for entry in set.entries() {
            assert_eq!(set.find_by_code(entry.code), Some(entry.label));
        }
    }
}

#[test]
fn test_find_by_code_absent_is_unknown() {
    // Never a false match, in either set.
    assert_eq!(Dictionary::Letters.find_by_code(".......-"), None);
    assert_eq!(Dictionary::Words.find_by_code(".-"), None);
    assert_eq!(Dictionary::Words.find_by_code("not morse"), None);
}

#[test]
fn test_level_select_codes_are_digit_codes() {
    // The menu codes reuse the digit entries: 1-4 select, 5 quits.
    assert_eq!(Dictionary::Letters.find_by_code(".----"), Some("1"));
    assert_eq!(Dictionary::Letters.find_by_code("..---"), Some("2"));
    assert_eq!(Dictionary::Letters.find_by_code("...--"), Some("3"));
    assert_eq!(Dictionary::Letters.find_by_code("....-"), Some("4"));
    assert_eq!(Dictionary::Letters.find_by_code("....."), Some("5"));
}
