//! The coupon alphabet and the confusable normalizer.
//!
//! Codes are written with 32 symbols: the ten digits and the uppercase
//! letters minus `I`, `O`, `S` and `Z`. Those four are never generated, but
//! the validator reads them back as `1`, `0`, `5` and `2`.

/// Ordered symbol table. A symbol's index is its numeric value.
pub const SYMBOLS: &[u8; 32] = b"0123456789ABCDEFGHJKLMNPQRTUVWXY";

/// Number of symbols in the alphabet.
pub const ALPHABET_SIZE: usize = SYMBOLS.len();

/// Letters that look like digits, paired with the digit they stand for.
pub const CONFUSABLES: [(u8, u8); 4] = [(b'O', b'0'), (b'I', b'1'), (b'Z', b'2'), (b'S', b'5')];

const NO_INDEX: u8 = 0xff;

const INDEX_TABLE: [u8; 256] = {
    let mut table = [NO_INDEX; 256];
    let mut i = 0;
    while i < ALPHABET_SIZE {
        table[SYMBOLS[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Numeric value of an alphabet symbol, or `None` for anything else.
#[inline]
pub fn index_of(symbol: u8) -> Option<u8> {
    match INDEX_TABLE[symbol as usize] {
        NO_INDEX => None,
        index => Some(index),
    }
}

/// Symbol at `index mod 32`.
#[inline]
pub fn symbol_at(index: usize) -> u8 {
    SYMBOLS[index % ALPHABET_SIZE]
}

/// Whether `symbol` is one of the 32 alphabet members.
#[inline]
pub fn contains(symbol: u8) -> bool {
    index_of(symbol).is_some()
}

/// Normalize one input character for validation.
///
/// Lowercase letters are uppercased and confusable letters are folded onto
/// their digit. Characters outside `[0-9A-Za-z]` yield `None` and are meant
/// to be dropped.
///
/// Only ASCII is folded. Non-ASCII letters whose Unicode uppercase is an
/// ASCII confusable, such as dotless `ı` or long `ſ`, are dropped rather
/// than read as `1` or `5`.
pub fn normalize_char(c: char) -> Option<u8> {
    if !c.is_ascii_alphanumeric() {
        return None;
    }
    let upper = c.to_ascii_uppercase() as u8;
    let folded = CONFUSABLES
        .iter()
        .find(|(alias, _)| *alias == upper)
        .map_or(upper, |(_, digit)| *digit);
    Some(folded)
}

/// Normalize free-form input into a run of alphabet symbols.
///
/// Separators, whitespace and punctuation are stripped. The result contains
/// only alphabet members.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter_map(normalize_char)
        .map(char::from)
        .collect()
}
