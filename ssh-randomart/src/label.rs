//! Labels embedded in the upper and lower borders of the randomart frame.

use crate::randomart::WIDTH;
use core::fmt;

/// Title shown in the upper border.
///
/// The title carries the key type and size, e.g. `[RSA 2048]`. When that
/// won't fit in the frame it falls back to the key type alone, and if even
/// that is too wide the border is left blank.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Title<'a> {
    /// `[TYPE BITS]`
    KeyTypeAndBits {
        /// Key type name, e.g. `ED25519`.
        key_type: &'a str,

        /// Key size in bits. Only ever displayed.
        key_bits: i64,
    },

    /// `[TYPE]`
    KeyType(&'a str),

    /// No title.
    Empty,
}

impl<'a> Title<'a> {
    /// Select the widest title for the given key which fits in the frame.
    pub fn new(key_type: &'a str, key_bits: i64) -> Self {
        let title = Self::KeyTypeAndBits { key_type, key_bits };

        if title.len() <= WIDTH {
            return title;
        }

        // Fits e.g. "[ED25519-CERT]"
        let title = Self::KeyType(key_type);

        if title.len() <= WIDTH {
            title
        } else {
            Self::Empty
        }
    }

    /// Length of the rendered title in bytes, brackets included.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn len(&self) -> usize {
        match self {
            Self::KeyTypeAndBits { key_type, key_bits } => {
                bracketed_len(key_type) + 1 + decimal_width(*key_bits)
            }
            Self::KeyType(key_type) => bracketed_len(key_type),
            Self::Empty => 0,
        }
    }

    /// Is this the blank title?
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for Title<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyTypeAndBits { key_type, key_bits } => write!(f, "[{key_type} {key_bits}]"),
            Self::KeyType(key_type) => write!(f, "[{key_type}]"),
            Self::Empty => Ok(()),
        }
    }
}

/// Caption shown in the lower border: the bracketed name of the hash
/// algorithm which produced the digest, e.g. `[SHA256]`.
///
/// Names too wide for the frame are dropped.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Caption<'a> {
    hash_alg: Option<&'a str>,
}

impl<'a> Caption<'a> {
    /// Create a caption for the given hash algorithm name.
    pub fn new(hash_alg: &'a str) -> Self {
        let hash_alg = Some(hash_alg).filter(|name| bracketed_len(name) <= WIDTH);
        Self { hash_alg }
    }

    /// Hash algorithm name, if it fits in the frame.
    pub fn hash_alg(&self) -> Option<&'a str> {
        self.hash_alg
    }

    /// Length of the rendered caption in bytes, brackets included.
    pub fn len(&self) -> usize {
        self.hash_alg.map_or(0, bracketed_len)
    }

    /// Is this the blank caption?
    pub fn is_empty(&self) -> bool {
        self.hash_alg.is_none()
    }
}

impl fmt::Display for Caption<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.hash_alg {
            Some(hash_alg) => write!(f, "[{hash_alg}]"),
            None => Ok(()),
        }
    }
}

/// Write a border line: `label` centered in a run of dashes between two `+`
/// corners. Odd leftover padding goes to the right.
pub(crate) fn fmt_border(
    f: &mut fmt::Formatter<'_>,
    label: impl fmt::Display,
    label_len: usize,
) -> fmt::Result {
    let padding = WIDTH.saturating_sub(label_len);
    let left = padding / 2;
    let right = padding.saturating_sub(left);
    write!(f, "+{:-<left$}{label}{:-<right$}+", "", "")
}

/// Byte length of `name` once wrapped in `[` `]`.
fn bracketed_len(name: &str) -> usize {
    name.len().saturating_add(2)
}

/// Number of characters in the decimal representation of `n`, sign included.
#[allow(clippy::arithmetic_side_effects)]
fn decimal_width(n: i64) -> usize {
    let digits = n
        .unsigned_abs()
        .checked_ilog10()
        .map_or(1, |log| log as usize + 1);

    digits + usize::from(n < 0)
}
