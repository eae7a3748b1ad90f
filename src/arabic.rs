//! Arabic text normalization for search matching.
//!
//! The output is only ever compared against other normalized strings. It
//! folds away diacritics (tashkeel), tatweel and the common letter-shape
//! variants so that "أَحمد" and "احمد" compare equal. Displayed text is never
//! passed through here.

use unicode_normalization::UnicodeNormalization;

const TATWEEL: char = '\u{0640}';
const ALEF: char = '\u{0627}';
const YEH: char = '\u{064A}';
const WAW: char = '\u{0648}';
const HEH: char = '\u{0647}';

/// Arabic combining marks removed before comparison.
fn is_arabic_diacritic(c: char) -> bool {
    matches!(
        c,
        '\u{0610}'..='\u{061A}' | '\u{064B}'..='\u{065F}' | '\u{0670}' | '\u{06D6}'..='\u{06ED}'
    )
}

fn fold_letter(c: char) -> char {
    match c {
        // إ أ آ
        '\u{0625}' | '\u{0623}' | '\u{0622}' => ALEF,
        // ى
        '\u{0649}' => YEH,
        // ؤ
        '\u{0624}' => WAW,
        // ئ
        '\u{0626}' => YEH,
        // ة
        '\u{0629}' => HEH,
        other => other,
    }
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Canonicalize Arabic text for diacritic- and variant-insensitive matching.
///
/// Steps, in order: NFKD decomposition, removal of Arabic diacritics and
/// tatweel, letter-variant folding, removal of all whitespace.
pub fn normalize_arabic(text: &str) -> String {
    let folded: String = text
        .nfkd()
        .filter(|&c| !is_arabic_diacritic(c) && c != TATWEEL)
        .map(fold_letter)
        .filter(|&c| !is_space(c))
        .collect();
    folded.trim().to_string()
}
