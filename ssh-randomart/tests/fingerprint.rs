//! Fingerprint parsing and rendering tests.

use hex_literal::hex;
use ssh_randomart::{Error, Fingerprint, HashAlg};

const EXAMPLE_FINGERPRINT: &str = "SHA256:UCUiLr7Pjs9wFFJMDByLgc3NrtdU344OgUM45wZPcIQ";

const EXAMPLE_DIGEST: [u8; 32] =
    hex!("5025222ebecf8ecf7014524c0c1c8b81cdcdaed754df8e0e814338e7064f7084");

#[test]
fn parse_sha256() {
    let fingerprint = EXAMPLE_FINGERPRINT.parse::<Fingerprint>().unwrap();
    assert_eq!(fingerprint.algorithm(), HashAlg::Sha256);
    assert_eq!(fingerprint.prefix(), "SHA256");
    assert!(fingerprint.is_sha256());
    assert!(!fingerprint.is_sha512());
    assert_eq!(fingerprint.sha256(), Some(EXAMPLE_DIGEST));
    assert_eq!(fingerprint.sha512(), None);
    assert_eq!(fingerprint.as_bytes(), &EXAMPLE_DIGEST);
}

#[test]
fn sha512_from_digest() {
    let fingerprint = Fingerprint::from_digest(HashAlg::Sha512, &[0x42; 64]).unwrap();
    assert!(fingerprint.is_sha512());
    assert_eq!(fingerprint.as_bytes(), &[0x42u8; 64]);

    let encoded = fingerprint.to_string();
    assert!(encoded.starts_with("SHA512:QkJC"));
    assert_eq!(encoded.len(), "SHA512:".len() + 86);
    assert_eq!(encoded.parse::<Fingerprint>(), Ok(fingerprint));
}

#[test]
fn display() {
    let fingerprint = Fingerprint::from_digest(HashAlg::Sha256, &EXAMPLE_DIGEST).unwrap();
    assert_eq!(fingerprint.to_string(), EXAMPLE_FINGERPRINT);
}

#[test]
fn from_digest_wrong_length() {
    assert_eq!(
        Fingerprint::from_digest(HashAlg::Sha256, &[0; 20]),
        Err(Error::Length)
    );
    assert_eq!(
        Fingerprint::from_digest(HashAlg::Sha512, &EXAMPLE_DIGEST),
        Err(Error::Length)
    );
}

#[test]
fn parse_errors() {
    assert_eq!(
        "UCUiLr7Pjs9wFFJMDByLgc3NrtdU344OgUM45wZPcIQ".parse::<Fingerprint>(),
        Err(Error::AlgorithmUnknown)
    );
    assert_eq!(
        "MD5:UCUiLr7Pjs9wFFJMDByLgc3NrtdU344OgUM45wZPcIQ".parse::<Fingerprint>(),
        Err(Error::AlgorithmUnknown)
    );
    assert_eq!(
        "sha256:UCUiLr7Pjs9wFFJMDByLgc3NrtdU344OgUM45wZPcIQ".parse::<Fingerprint>(),
        Err(Error::AlgorithmUnknown)
    );

    // 16-byte digest
    assert_eq!(
        "SHA256:AAAAAAAAAAAAAAAAAAAAAA".parse::<Fingerprint>(),
        Err(Error::Length)
    );

    assert!(matches!(
        "SHA256:!!!!".parse::<Fingerprint>(),
        Err(Error::Base64(_))
    ));
}

#[test]
fn error_display() {
    assert_eq!(Error::AlgorithmUnknown.to_string(), "unknown algorithm");
    assert_eq!(Error::Length.to_string(), "length invalid");
}

#[cfg(feature = "alloc")]
#[test]
fn to_randomart() {
    let fingerprint = EXAMPLE_FINGERPRINT.parse::<Fingerprint>().unwrap();

    assert_eq!(
        fingerprint.to_randomart("ED25519", 256),
        "\
+--[ED25519 256]--+
|o+oO==+ o..      |
|.o++Eo+o..       |
|. +.oO.o . .     |
| . o..B.. . .    |
|  ...+ .S. o     |
|  .o. . . . .    |
|  o..    o       |
|   B      .      |
|  .o*            |
+----[SHA256]-----+"
    );

    assert_eq!(
        fingerprint.to_randomart("ED25519", 256),
        ssh_randomart::render("SHA256", &EXAMPLE_DIGEST, "ED25519", 256)
    );
}

#[cfg(feature = "alloc")]
#[test]
fn fmt_randomart() {
    struct Art(Fingerprint);

    impl core::fmt::Display for Art {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            self.0.fmt_randomart("ED25519", 256, f)
        }
    }

    let fingerprint = EXAMPLE_FINGERPRINT.parse::<Fingerprint>().unwrap();
    assert_eq!(
        Art(fingerprint).to_string(),
        fingerprint.to_randomart("ED25519", 256)
    );
}

#[cfg(feature = "serde")]
#[test]
fn serde_string_form() {
    let fingerprint = EXAMPLE_FINGERPRINT.parse::<Fingerprint>().unwrap();

    let json = serde_json::to_string(&fingerprint).unwrap();
    assert_eq!(json, format!("\"{EXAMPLE_FINGERPRINT}\""));
    assert_eq!(
        serde_json::from_str::<Fingerprint>(&json).unwrap(),
        fingerprint
    );
    assert!(serde_json::from_str::<Fingerprint>("\"SHA1:AAAA\"").is_err());
}
