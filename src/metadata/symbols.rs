//! Homoglyph normalization
//!
//! World titles are stored with ASCII punctuation swapped for look-alike
//! Unicode characters. Normalization maps each look-alike back to ASCII.

/// `(ascii, homoglyph)` pairs, mirrored by [`ascii_for`]
pub const SYMBOL_MAP: [(char, char); 27] = [
    ('@', '\u{FF20}'),
    ('#', '\u{FF03}'),
    ('$', '\u{FF04}'),
    ('%', '\u{FF05}'),
    ('&', '\u{FF06}'),
    ('=', '\u{FF1D}'),
    ('+', '\u{FF0B}'),
    ('/', '\u{2044}'),
    ('\\', '\u{FF3C}'),
    (';', '\u{037E}'),
    (':', '\u{02F8}'),
    (',', '\u{201A}'),
    ('?', '\u{FF1F}'),
    ('!', '\u{01C3}'),
    ('"', '\u{FF02}'),
    ('<', '\u{227A}'),
    ('>', '\u{227B}'),
    ('.', '\u{2024}'),
    ('^', '\u{FF3E}'),
    ('{', '\u{FF5B}'),
    ('}', '\u{FF5D}'),
    ('[', '\u{FF3B}'),
    (']', '\u{FF3D}'),
    ('(', '\u{FF08}'),
    (')', '\u{FF09}'),
    ('|', '\u{FF5C}'),
    ('*', '\u{2217}'),
];

/// ASCII original for a homoglyph, if `c` is one
pub fn ascii_for(c: char) -> Option<char> {
    let ascii = match c {
        '\u{FF20}' => '@',
        '\u{FF03}' => '#',
        '\u{FF04}' => '$',
        '\u{FF05}' => '%',
        '\u{FF06}' => '&',
        '\u{FF1D}' => '=',
        '\u{FF0B}' => '+',
        '\u{2044}' => '/',
        '\u{FF3C}' => '\\',
        '\u{037E}' => ';',
        '\u{02F8}' => ':',
        '\u{201A}' => ',',
        '\u{FF1F}' => '?',
        '\u{01C3}' => '!',
        '\u{FF02}' => '"',
        '\u{227A}' => '<',
        '\u{227B}' => '>',
        '\u{2024}' => '.',
        '\u{FF3E}' => '^',
        '\u{FF5B}' => '{',
        '\u{FF5D}' => '}',
        '\u{FF3B}' => '[',
        '\u{FF3D}' => ']',
        '\u{FF08}' => '(',
        '\u{FF09}' => ')',
        '\u{FF5C}' => '|',
        '\u{2217}' => '*',
        _ => return None,
    };
    Some(ascii)
}

/// Replace every homoglyph in `input` with its ASCII original in one pass
pub fn normalize_symbols(input: &str) -> String {
    input.chars().map(|c| ascii_for(c).unwrap_or(c)).collect()
}
