#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/6ee8e381/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/6ee8e381/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::arithmetic_side_effects,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod algorithm;
mod error;
mod fingerprint;
mod label;
mod randomart;

pub use crate::{
    algorithm::HashAlg,
    error::{Error, Result},
    fingerprint::Fingerprint,
    label::{Caption, Title},
    randomart::{FIELD_BASE, HEIGHT, Randomart, SYMBOLS, WIDTH},
};

#[cfg(feature = "alloc")]
use alloc::string::{String, ToString};

/// Render the "randomart" for a digest as a string.
///
/// `hash_alg` is the name of the hash function which produced `digest` (e.g.
/// `SHA256`) and appears in the lower border. `key_type` and `key_bits` (e.g.
/// `RSA`, `2048`) appear in the upper border.
///
/// This never fails: any digest, including an empty one, produces a frame of
/// [`HEIGHT`] `+ 2` lines each [`WIDTH`] `+ 2` bytes wide.
#[cfg(feature = "alloc")]
pub fn render(hash_alg: &str, digest: &[u8], key_type: &str, key_bits: i64) -> String {
    Randomart::new(hash_alg, digest, key_type, key_bits).to_string()
}
