//! Built-in 8x8 glyph table
//!
//! Glyphs are stored as 8 column bytes with bit 0 at the top, the same
//! packing as a framebuffer page, so a glyph can be copied into a page
//! byte-for-byte. Letters are 5x7 with one blank column on each side.
//!
//! | Index  | Character   |
//! |--------|-------------|
//! | 0      | blank       |
//! | 1..=26 | `A`..=`Z`   |
//! | 27..=36| `0`..=`9`   |
//! | 37     | `=`         |
//! | 38     | `,`         |
//! | 39     | `%`         |
//! | 40     | `.`         |

/// Width and height of a glyph in pixels
pub const GLYPH_SIZE: usize = 8;

/// Number of glyphs in [`GLYPHS`]
pub const GLYPH_COUNT: usize = 41;

/// One glyph: 8 column bytes, bit 0 at the top
pub type Glyph = [u8; GLYPH_SIZE];

/// The glyph table, indexed by [`char_to_glyph_index`]
pub static GLYPHS: [Glyph; GLYPH_COUNT] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // blank
    [0x00, 0x7C, 0x12, 0x11, 0x12, 0x7C, 0x00, 0x00], // A
    [0x00, 0x7F, 0x49, 0x49, 0x49, 0x36, 0x00, 0x00], // B
    [0x00, 0x3E, 0x41, 0x41, 0x41, 0x22, 0x00, 0x00], // C
    [0x00, 0x7F, 0x41, 0x41, 0x22, 0x1C, 0x00, 0x00], // D
    [0x00, 0x7F, 0x49, 0x49, 0x49, 0x41, 0x00, 0x00], // E
    [0x00, 0x7F, 0x09, 0x09, 0x09, 0x01, 0x00, 0x00], // F
    [0x00, 0x3E, 0x41, 0x49, 0x49, 0x7A, 0x00, 0x00], // G
    [0x00, 0x7F, 0x08, 0x08, 0x08, 0x7F, 0x00, 0x00], // H
    [0x00, 0x00, 0x41, 0x7F, 0x41, 0x00, 0x00, 0x00], // I
    [0x00, 0x20, 0x40, 0x41, 0x3F, 0x01, 0x00, 0x00], // J
    [0x00, 0x7F, 0x08, 0x14, 0x22, 0x41, 0x00, 0x00], // K
    [0x00, 0x7F, 0x40, 0x40, 0x40, 0x40, 0x00, 0x00], // L
    [0x00, 0x7F, 0x02, 0x0C, 0x02, 0x7F, 0x00, 0x00], // M
    [0x00, 0x7F, 0x04, 0x08, 0x10, 0x7F, 0x00, 0x00], // N
    [0x00, 0x3E, 0x41, 0x41, 0x41, 0x3E, 0x00, 0x00], // O
    [0x00, 0x7F, 0x09, 0x09, 0x09, 0x06, 0x00, 0x00], // P
    [0x00, 0x3E, 0x41, 0x51, 0x21, 0x5E, 0x00, 0x00], // Q
    [0x00, 0x7F, 0x09, 0x19, 0x29, 0x46, 0x00, 0x00], // R
    [0x00, 0x26, 0x49, 0x49, 0x49, 0x32, 0x00, 0x00], // S
    [0x00, 0x01, 0x01, 0x7F, 0x01, 0x01, 0x00, 0x00], // T
    [0x00, 0x3F, 0x40, 0x40, 0x40, 0x3F, 0x00, 0x00], // U
    [0x00, 0x1F, 0x20, 0x40, 0x20, 0x1F, 0x00, 0x00], // V
    [0x00, 0x3F, 0x40, 0x38, 0x40, 0x3F, 0x00, 0x00], // W
    [0x00, 0x63, 0x14, 0x08, 0x14, 0x63, 0x00, 0x00], // X
    [0x00, 0x07, 0x08, 0x70, 0x08, 0x07, 0x00, 0x00], // Y
    [0x00, 0x61, 0x51, 0x49, 0x45, 0x43, 0x00, 0x00], // Z
    [0x00, 0x3E, 0x51, 0x49, 0x45, 0x3E, 0x00, 0x00], // 0
    [0x00, 0x00, 0x42, 0x7F, 0x40, 0x00, 0x00, 0x00], // 1
    [0x00, 0x42, 0x61, 0x51, 0x49, 0x46, 0x00, 0x00], // 2
    [0x00, 0x21, 0x41, 0x45, 0x4B, 0x31, 0x00, 0x00], // 3
    [0x00, 0x18, 0x14, 0x12, 0x7F, 0x10, 0x00, 0x00], // 4
    [0x00, 0x27, 0x45, 0x45, 0x45, 0x39, 0x00, 0x00], // 5
    [0x00, 0x3C, 0x4A, 0x49, 0x49, 0x30, 0x00, 0x00], // 6
    [0x00, 0x01, 0x71, 0x09, 0x05, 0x03, 0x00, 0x00], // 7
    [0x00, 0x36, 0x49, 0x49, 0x49, 0x36, 0x00, 0x00], // 8
    [0x00, 0x06, 0x49, 0x49, 0x29, 0x1E, 0x00, 0x00], // 9
    [0x00, 0x14, 0x14, 0x14, 0x14, 0x14, 0x00, 0x00], // =
    [0x00, 0x00, 0x50, 0x30, 0x00, 0x00, 0x00, 0x00], // ,
    [0x00, 0x23, 0x13, 0x08, 0x64, 0x62, 0x00, 0x00], // %
    [0x00, 0x00, 0x60, 0x60, 0x00, 0x00, 0x00, 0x00], // .
];

/// Map a character to its index in [`GLYPHS`]
///
/// ASCII letters are folded to upper case first. Anything without a glyph
/// maps to 0, the blank glyph, so this never fails.
///
/// ```
/// use ssd1306_paged::font::char_to_glyph_index;
///
/// assert_eq!(char_to_glyph_index('A'), 1);
/// assert_eq!(char_to_glyph_index('a'), 1);
/// assert_eq!(char_to_glyph_index('0'), 27);
/// assert_eq!(char_to_glyph_index('!'), 0);
/// ```
pub const fn char_to_glyph_index(ch: char) -> usize {
    match ch.to_ascii_uppercase() {
        c @ 'A'..='Z' => c as usize - 'A' as usize + 1,
        c @ '0'..='9' => c as usize - '0' as usize + 27,
        '=' => 37,
        ',' => 38,
        '%' => 39,
        '.' => 40,
        _ => 0,
    }
}

/// Glyph for `ch`, blank if it is unsupported
pub fn glyph(ch: char) -> &'static Glyph {
    &GLYPHS[char_to_glyph_index(ch)]
}
