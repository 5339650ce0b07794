//! German collation for stable, user-expected ordering of group keys and
//! project labels (DIN 5007-1: umlauts fold to their base vowel, ß to ss,
//! comparison is case-insensitive on the primary level).

use std::cmp::Ordering;

/// Build the primary collation key for a string.
pub fn sort_key_de(s: &str) -> String {
    let mut key = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'ä' | 'Ä' => key.push('a'),
            'ö' | 'Ö' => key.push('o'),
            'ü' | 'Ü' => key.push('u'),
            'ß' => key.push_str("ss"),
            _ => key.extend(c.to_lowercase()),
        }
    }
    key
}

/// Compare two strings with German collation. The raw strings break ties so
/// that distinct inputs never compare equal and the sort stays deterministic.
pub fn compare_de(a: &str, b: &str) -> Ordering {
    sort_key_de(a).cmp(&sort_key_de(b)).then_with(|| a.cmp(b))
}
