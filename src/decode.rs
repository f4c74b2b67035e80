//! ASCII folding for headword keys.
//!
//! Words are NFC-composed so decomposed accents fold with their base letter,
//! stray combining marks are dropped, a small table pins punctuation and a few
//! letters, and everything else outside ASCII is transliterated by `deunicode`.
//! Greek, Cyrillic and other scripts therefore keep their letters.

use deunicode::deunicode_char;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

fn transliterate(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'æ' => "ae",
        'Æ' => "AE",
        'œ' => "oe",
        'Œ' => "OE",
        'ß' => "ss",
        'ẞ' => "SS",
        'ø' => "o",
        'Ø' => "O",
        'ł' => "l",
        'Ł' => "L",
        'đ' | 'ð' => "d",
        'Đ' | 'Ð' => "D",
        'þ' => "th",
        'Þ' => "Th",
        'ı' => "i",
        'ŋ' => "ng",
        'Ŋ' => "NG",
        'ĸ' => "q",
        'ſ' => "s",
        'µ' => "u",
        '\u{2018}' | '\u{2019}' | '\u{02BB}' | '\u{02BC}' => "'",
        '\u{201C}' | '\u{201D}' => "\"",
        '\u{2010}' | '\u{2011}' | '\u{2013}' | '\u{2014}' => "-",
        '\u{00A0}' => " ",
        _ => return None,
    };
    Some(folded)
}

/// Fold a word to ASCII.
pub fn decode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.nfc() {
        if ch.is_ascii() {
            out.push(ch);
        } else if is_combining_mark(ch) {
            continue;
        } else if let Some(folded) = transliterate(ch).or_else(|| deunicode_char(ch)) {
            out.push_str(folded);
        }
    }
    out
}

/// Headword key for a word: decoded and upper-cased.
pub fn headword_key(word: &str) -> String {
    decode(word).to_ascii_uppercase()
}

/// True for a non-empty string made only of ASCII letters.
pub fn is_alpha(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_diacritics() {
        assert_eq!(decode("café"), "cafe");
        assert_eq!(decode("naïve"), "naive");
        assert_eq!(decode("Ångström"), "Angstrom");
    }

    #[test]
    fn transliterates_ligatures() {
        assert_eq!(decode("encyclopædia"), "encyclopaedia");
        assert_eq!(decode("Straße"), "Strasse");
        assert_eq!(decode("Þór"), "Thor");
    }

    #[test]
    fn folds_decomposed_accents() {
        assert_eq!(decode("cafe\u{301}"), "cafe");
        assert_eq!(decode("\u{301}a"), "a");
    }

    #[test]
    fn transliterates_other_scripts() {
        assert_eq!(headword_key("π"), "P");
        assert_eq!(headword_key("Ω"), "O");
        assert_eq!(headword_key("Москва"), "MOSKVA");
        assert!(!headword_key("猫").is_empty());
    }

    #[test]
    fn mixed_script_words_keep_every_letter() {
        assert_eq!(headword_key("µg"), "UG");
        assert_eq!(headword_key("Hawaiʻi"), "HAWAI'I");
        assert!(!is_alpha(&headword_key("Hawaiʻi")));
    }

    #[test]
    fn keys_are_upper_case() {
        assert_eq!(headword_key("déjà vu"), "DEJA VU");
        assert_eq!(headword_key("rock’n’roll"), "ROCK'N'ROLL");
    }

    #[test]
    fn alpha_check() {
        assert!(is_alpha("CAT"));
        assert!(!is_alpha(""));
        assert!(!is_alpha("DEJA VU"));
        assert!(!is_alpha("X-RAY"));
        assert!(!is_alpha("CAFÉ"));
    }
}
