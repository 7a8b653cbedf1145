//! Support for the "drunken bishop" fingerprint algorithm, a.k.a. "randomart".
//!
//! The algorithm is described in the paper:
//!
//! "The drunken bishop: An analysis of the OpenSSH fingerprint visualization algorithm"
//!
//! <http://www.dirk-loss.de/sshvis/drunken_bishop.pdf>

use crate::label::{self, Caption, Title};
use core::fmt;

/// Base size the field dimensions are derived from.
pub const FIELD_BASE: usize = 8;

/// Width of the field in characters, borders excluded.
pub const WIDTH: usize = FIELD_BASE * 2 + 1;

/// Height of the field in rows, borders excluded.
pub const HEIGHT: usize = FIELD_BASE + 1;

/// Glyphs indexed by the number of times the bishop visited a square.
///
/// The last two are reserved for the start and end squares.
pub const SYMBOLS: &[u8; 17] = b" .o+=*BOX@%&#/^SE";

/// Start sentinel.
const START: u8 = (SYMBOLS.len() - 2) as u8;

/// End sentinel.
const END: u8 = (SYMBOLS.len() - 1) as u8;

/// Visit counts stop growing here.
const MAX_VISITS: u8 = (SYMBOLS.len() - 3) as u8;

/// Square the bishop starts on.
const CENTER: (usize, usize) = (WIDTH / 2, HEIGHT / 2);

type Field = [[u8; WIDTH]; HEIGHT];

/// "randomart" renderer.
///
/// The walk is performed when the [`Randomart`] is constructed. Its
/// [`Display`][`fmt::Display`] impl writes the framed field:
///
/// ```text
/// +--[ED25519 256]--+
/// |o+oO==+ o..      |
/// |.o++Eo+o..       |
/// |. +.oO.o . .     |
/// | . o..B.. . .    |
/// |  ...+ .S. o     |
/// |  .o. . . . .    |
/// |  o..    o       |
/// |   B      .      |
/// |  .o*            |
/// +----[SHA256]-----+
/// ```
///
/// The output is always `HEIGHT + 2` lines of `WIDTH + 2` bytes, with no
/// trailing newline.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Randomart<'a> {
    title: Title<'a>,
    field: Field,
    end: (usize, usize),
    caption: Caption<'a>,
}

impl<'a> Randomart<'a> {
    /// Walk the bishop across the field using the given digest.
    ///
    /// `hash_alg` names the hash function which produced `digest`, and
    /// `key_type`/`key_bits` describe the key. These only label the frame.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn new(hash_alg: &'a str, digest: &[u8], key_type: &'a str, key_bits: i64) -> Self {
        let mut field: Field = [[0; WIDTH]; HEIGHT];
        let (mut x, mut y) = CENTER;

        // Each byte encodes four moves, low bits first
        for mut byte in digest.iter().copied() {
            for _ in 0..4 {
                if byte & 0x1 == 0 {
                    x = x.saturating_sub(1);
                } else {
                    x = x.saturating_add(1);
                }

                if byte & 0x2 == 0 {
                    y = y.saturating_sub(1);
                } else {
                    y = y.saturating_add(1);
                }

                x = x.min(WIDTH - 1);
                y = y.min(HEIGHT - 1);

                if field[y][x] < MAX_VISITS {
                    field[y][x] += 1;
                }

                byte >>= 2;
            }
        }

        field[CENTER.1][CENTER.0] = START;
        field[y][x] = END;

        Self {
            title: Title::new(key_type, key_bits),
            field,
            end: (x, y),
            caption: Caption::new(hash_alg),
        }
    }

    /// Position `(x, y)` the walk started from: the center of the field.
    pub fn start(&self) -> (usize, usize) {
        CENTER
    }

    /// Position `(x, y)` the walk ended on.
    pub fn end(&self) -> (usize, usize) {
        self.end
    }

    /// Glyph rendered for the square at `(x, y)`, if it lies in the field.
    pub fn glyph(&self, x: usize, y: usize) -> Option<char> {
        self.field.get(y)?.get(x).copied().map(symbol)
    }

    /// Title in the upper border.
    pub fn title(&self) -> Title<'a> {
        self.title
    }

    /// Caption in the lower border.
    pub fn caption(&self) -> Caption<'a> {
        self.caption
    }
}

impl fmt::Display for Randomart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        label::fmt_border(f, self.title, self.title.len())?;
        writeln!(f)?;

        for row in &self.field {
            write!(f, "|")?;

            for &count in row {
                write!(f, "{}", symbol(count))?;
            }

            writeln!(f, "|")?;
        }

        label::fmt_border(f, self.caption, self.caption.len())
    }
}

/// Look up the glyph for a visit count, saturating at the last symbol.
fn symbol(count: u8) -> char {
    let index = usize::from(count).min(SYMBOLS.len().saturating_sub(1));
    SYMBOLS[index] as char
}
