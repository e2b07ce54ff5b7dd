//! Module: dictionary
//!
//! Purpose: Static Morse dictionaries. Two sets exist: 36 letters/digits
//! and 25 short training words. Pure lookup data, populated at compile
//! time, never mutated.
//!
//! Word codes are the space-delimited concatenation of their letters'
//! codes; a test enforces consistency against the letter table.
//!
//! Safety: Safe. No unsafe blocks. `'static` data only.

/// One dictionary entry: a human-readable label and its Morse code.
///
/// Codes use `.` and `-`, with single spaces between letters in the
/// word set. Codes are unique within a set by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MorseEntry {
    pub label: &'static str,
    pub code: &'static str,
}

const fn entry(label: &'static str, code: &'static str) -> MorseEntry {
    MorseEntry { label, code }
}

/// Letter dictionary: A-Z then 0-9, ITU codes.
pub static LETTERS: [MorseEntry; 36] = [
    entry("A", ".-"),
    entry("B", "-..."),
    entry("C", "-.-."),
    entry("D", "-.."),
    entry("E", "."),
    entry("F", "..-."),
    entry("G", "--."),
    entry("H", "...."),
    entry("I", ".."),
    entry("J", ".---"),
    entry("K", "-.-"),
    entry("L", ".-.."),
    entry("M", "--"),
    entry("N", "-."),
    entry("O", "---"),
    entry("P", ".--."),
    entry("Q", "--.-"),
    entry("R", ".-."),
    entry("S", "..."),
    entry("T", "-"),
    entry("U", "..-"),
    entry("V", "...-"),
    entry("W", ".--"),
    entry("X", "-..-"),
    entry("Y", "-.--"),
    entry("Z", "--.."),
    entry("0", "-----"),
    entry("1", ".----"),
    entry("2", "..---"),
    entry("3", "...--"),
    entry("4", "....-"),
    entry("5", "....."),
    entry("6", "-...."),
    entry("7", "--..."),
    entry("8", "---.."),
    entry("9", "----."),
];

/// Word dictionary: short training words with precomputed codes.
pub static WORDS: [MorseEntry; 25] = [
    entry("CAT", "-.-. .- -"),
    entry("DOG", "-.. --- --."),
    entry("SUN", "... ..- -."),
    entry("RUN", ".-. ..- -."),
    entry("MAP", "-- .- .--."),
    entry("KEY", "-.- . -.--"),
    entry("BOX", "-... --- -..-"),
    entry("FOX", "..-. --- -..-"),
    entry("HAT", ".... .- -"),
    entry("ICE", ".. -.-. ."),
    entry("JAM", ".--- .- --"),
    entry("LOG", ".-.. --- --."),
    entry("NET", "-. . -"),
    entry("OWL", "--- .-- .-.."),
    entry("PIG", ".--. .. --."),
    entry("QUIZ", "--.- ..- .. --.."),
    entry("RED", ".-. . -.."),
    entry("SKY", "... -.- -.--"),
    entry("TEA", "- . .-"),
    entry("VAN", "...- .- -."),
    entry("WEB", ".-- . -..."),
    entry("YES", "-.-- . ..."),
    entry("ZIP", "--.. .. .--."),
    entry("ARM", ".- .-. --"),
    entry("BUS", "-... ..- ..."),
];

/// Dictionary set selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dictionary {
    Letters,
    Words,
}

impl Dictionary {
    /// All entries in this set, in stable index order.
    #[inline]
    pub fn entries(self) -> &'static [MorseEntry] {
        match self {
            Dictionary::Letters => &LETTERS,
            Dictionary::Words => &WORDS,
        }
    }

    /// Number of entries in this set.
    #[inline]
    pub fn len(self) -> usize {
        self.entries().len()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        false
    }

    /// Look up an entry by stable index.
    ///
    /// Indices come from a uniform random draw in `[0, len)`; out-of-range
    /// indices are a caller bug and wrap to the first entry.
    #[inline]
    pub fn entry(self, index: usize) -> &'static MorseEntry {
        let entries = self.entries();
        entries.get(index).unwrap_or(&entries[0])
    }

    /// Resolve a code back to its label.
    ///
    /// Linear scan, first exact match. `None` is the distinguished
    /// "unknown" result; the caller renders it as `?`. Never a failure.
    pub fn find_by_code(self, code: &str) -> Option<&'static str> {
        self.entries()
            .iter()
            .find(|e| e.code == code)
            .map(|e| e.label)
    }
}
