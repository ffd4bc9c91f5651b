//! Locale-aware ordering of country names.
//!
//! Names are compared on a folded form first (lowercase, Latin diacritics
//! stripped), so `Åland Islands` sits between `Afghanistan` and `Albania` and
//! `Réunion` precedes `Romania`. Ties are broken the way a collator does:
//! unaccented before accented, lowercase before uppercase, then by code point.

use std::cmp::Ordering;

/// Compares two display names for the country selector.
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary(a)
        .cmp(primary(b))
        .then_with(|| accents(a).cmp(accents(b)))
        .then_with(|| case(a).cmp(case(b)))
        .then_with(|| a.cmp(b))
}

/// Sorts names in place with [`locale_cmp`].
pub fn sort_names(names: &mut [String]) {
    names.sort_by(|a, b| locale_cmp(a, b));
}

fn primary(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase).map(fold)
}

fn accents(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().flat_map(char::to_lowercase).map(|c| fold(c) != c)
}

fn case(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

/// Maps a lowercase Latin letter with a diacritic to its base letter.
const fn fold(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' | 'æ' => 'a',
        'ç' | 'ć' | 'č' | 'ĉ' | 'ċ' => 'c',
        'ď' | 'đ' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ğ' | 'ģ' => 'g',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' | 'ı' => 'i',
        'ķ' => 'k',
        'ł' | 'ļ' | 'ľ' => 'l',
        'ñ' | 'ń' | 'ň' | 'ņ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' | 'œ' => 'o',
        'ř' => 'r',
        'ś' | 'ş' | 'š' | 'ș' | 'ß' => 's',
        'ţ' | 'ť' | 'ț' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' | 'ų' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut names: Vec<String> = names.iter().map(|&n| n.to_owned()).collect();
        sort_names(&mut names);
        names
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        assert_eq!(
            sorted(&["Albania", "Åland Islands", "Afghanistan"]),
            ["Afghanistan", "Åland Islands", "Albania"]
        );
        assert_eq!(sorted(&["Romania", "Réunion", "Qatar"]), ["Qatar", "Réunion", "Romania"]);
        assert_eq!(
            sorted(&["Cuba", "Curaçao", "Côte d'Ivoire", "Croatia"]),
            ["Côte d'Ivoire", "Croatia", "Cuba", "Curaçao"]
        );
    }

    #[test]
    fn case_does_not_drive_primary_order() {
        assert_eq!(sorted(&["bhutan", "Belarus", "Aruba"]), ["Aruba", "Belarus", "bhutan"]);
    }

    #[test]
    fn ties_prefer_plain_then_lowercase() {
        assert_eq!(locale_cmp("Aland", "Åland"), Ordering::Less);
        assert_eq!(locale_cmp("chad", "Chad"), Ordering::Less);
        assert_eq!(locale_cmp("Chad", "Chad"), Ordering::Equal);
    }

    #[test]
    fn prefixes_sort_first() {
        assert_eq!(sorted(&["Guinea-Bissau", "Guinea"]), ["Guinea", "Guinea-Bissau"]);
    }
}
