//! Human ordering of product names.
//!
//! Approximates the root-locale collation a browser applies in
//! `localeCompare` for Latin text, in three levels:
//!
//! 1. letters with case and diacritics folded away (`Ä` ≡ `a`, `ß` ≡ `ss`),
//! 2. diacritics (`a` < `ä`),
//! 3. case, lowercase first (`a` < `A`).
//!
//! Strings equal on all three levels fall back to code point order so the
//! result is a total order.

use std::cmp::Ordering;

/// Compares two names the way a menu would list them.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    primary(a)
        .cmp(primary(b))
        .then_with(|| secondary(a).cmp(secondary(b)))
        .then_with(|| tertiary(a).cmp(tertiary(b)))
        .then_with(|| a.cmp(b))
}

fn primary(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase).flat_map(fold)
}

fn secondary(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

fn tertiary(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

/// Base letters of a lowercase character.
fn fold(c: char) -> Folded {
    let base: &'static str = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'æ' => "ae",
        'ç' | 'ć' | 'ĉ' | 'č' => "c",
        'ď' | 'đ' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => "e",
        'ğ' | 'ĝ' | 'ġ' | 'ģ' => "g",
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'į' | 'ı' => "i",
        'ł' | 'ľ' | 'ĺ' | 'ļ' => "l",
        'ñ' | 'ń' | 'ň' | 'ņ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => "o",
        'œ' => "oe",
        'ŕ' | 'ř' => "r",
        'ś' | 'š' | 'ş' | 'ŝ' => "s",
        'ß' => "ss",
        'ť' | 'ţ' => "t",
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ů' | 'ű' | 'ų' => "u",
        'ý' | 'ÿ' => "y",
        'ź' | 'ż' | 'ž' => "z",
        _ => return Folded::Same(Some(c)),
    };
    Folded::Base(base.chars())
}

enum Folded {
    Same(Option<char>),
    Base(std::str::Chars<'static>),
}

impl Iterator for Folded {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        match self {
            Folded::Same(c) => c.take(),
            Folded::Base(chars) => chars.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_is_ignored_before_it_breaks_ties() {
        assert_eq!(compare_names("apfelsaft", "Bier"), Ordering::Less);
        assert_eq!(compare_names("Apfelsaft", "bier"), Ordering::Less);
        assert_eq!(compare_names("cola", "Cola"), Ordering::Less);
        assert_eq!(compare_names("Cola", "cola"), Ordering::Greater);
    }

    #[test]
    fn diacritics_sort_with_their_base_letter() {
        // A plain byte comparison would put "Ä" after "Z".
        assert_eq!(compare_names("Äpfel", "Zwiebeln"), Ordering::Less);
        assert_eq!(compare_names("Käse", "Kuchen"), Ordering::Less);
        assert_eq!(compare_names("Kase", "Käse"), Ordering::Less);
        assert_eq!(compare_names("Straße", "Strasse"), Ordering::Greater);
        assert_eq!(compare_names("Strasse", "Strassf"), Ordering::Less);
    }

    #[test]
    fn equal_names_compare_equal() {
        assert_eq!(compare_names("Pommes", "Pommes"), Ordering::Equal);
        assert_eq!(compare_names("", ""), Ordering::Equal);
        assert_eq!(compare_names("", "A"), Ordering::Less);
    }

    #[test]
    fn is_antisymmetric_over_a_sample() {
        let names = ["a", "A", "ä", "Ä", "b", "ss", "ß", "Schnitzel", "schnitzel", "Ölig", "Ol", "", "10", "9"];
        for a in names {
            for b in names {
                assert_eq!(compare_names(a, b), compare_names(b, a).reverse(), "{a:?} vs {b:?}");
            }
        }
    }
}
