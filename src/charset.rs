//! Charset translation: two 256-entry code-point substitution tables.
//!
//! Table *contents* are a fixed, built-in lookup keyed by a single letter
//! (`B`, `0`, `U`, `K`); the screen only ever consumes the resulting
//! 256-entry map, never a caller-supplied one (no user-defined charsets).

/// A 256-entry code-point→code-point substitution table.
pub type Table = [char; 256];

fn identity_table() -> Table {
    let mut table = [' '; 256];
    for (i, slot) in table.iter_mut().enumerate() {
        *slot = i as u8 as char;
    }
    table
}

/// US-ASCII / Latin-1, the identity mapping.
pub fn lat1() -> Table {
    identity_table()
}

/// DEC Special Character and Line Drawing Set, mapped over `0x60..=0x7e`.
pub fn vt100() -> Table {
    let mut table = identity_table();
    const GRAPHICS: &[(u8, char)] = &[
        (0x60, '◆'),
        (0x61, '▒'),
        (0x62, '\u{2409}'),
        (0x63, '\u{240c}'),
        (0x64, '\u{240d}'),
        (0x65, '\u{240a}'),
        (0x66, '°'),
        (0x67, '±'),
        (0x68, '\u{2424}'),
        (0x69, '\u{240b}'),
        (0x6a, '┘'),
        (0x6b, '┐'),
        (0x6c, '┌'),
        (0x6d, '└'),
        (0x6e, '┼'),
        (0x6f, '⎺'),
        (0x70, '⎻'),
        (0x71, '─'),
        (0x72, '⎼'),
        (0x73, '⎽'),
        (0x74, '├'),
        (0x75, '┤'),
        (0x76, '┴'),
        (0x77, '┬'),
        (0x78, '│'),
        (0x79, '≤'),
        (0x7a, '≥'),
        (0x7b, 'π'),
        (0x7c, '≠'),
        (0x7d, '£'),
        (0x7e, '·'),
    ];
    for &(byte, ch) in GRAPHICS {
        table[byte as usize] = ch;
    }
    table
}

/// British/national replacement set: `#` becomes `£`.
pub fn uk() -> Table {
    let mut table = identity_table();
    table[b'#' as usize] = '£';
    table
}

/// German (DIN 66003) replacement set.
pub fn german() -> Table {
    let mut table = identity_table();
    const REPLACEMENTS: &[(u8, char)] = &[
        (b'@', '§'),
        (b'[', 'Ä'),
        (b'\\', 'Ö'),
        (b']', 'Ü'),
        (b'{', 'ä'),
        (b'|', 'ö'),
        (b'}', 'ü'),
        (b'~', 'ß'),
    ];
    for &(byte, ch) in REPLACEMENTS {
        table[byte as usize] = ch;
    }
    table
}

/// Look up the fixed table for a charset designation code.
///
/// `code` is one of `B`, `0`, `U`, `K`; unknown codes return `None` and
/// leave the target slot unchanged.
pub fn table_for_code(code: char) -> Option<Table> {
    match code {
        'B' => Some(lat1()),
        '0' => Some(vt100()),
        'U' => Some(uk()),
        'K' => Some(german()),
        _ => None,
    }
}

/// Translate `text` through `table`, substituting only code points in
/// `0x00..=0xFF`; everything else passes through unchanged.
pub fn translate(text: &str, table: &Table) -> String {
    text.chars()
        .map(|c| if (c as u32) <= 0xFF { table[c as usize] } else { c })
        .collect()
}
