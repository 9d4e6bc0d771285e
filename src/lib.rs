//! # Database wire decoders
//!
//! Two independent, low-level decoders used by a database client:
//!
//! - a [temporal](temporal/index.html) decoder converting textual date/time and duration
//!   literals, as they appear in text result rows, into structured values;
//! - an [RSA key](rsa/index.html) decoder walking the DER encoding of a PEM-wrapped RSA
//!   public key to extract the modulus and exponent used to encrypt a password during
//!   authentication.
//!
//! Both are pure functions over caller-owned buffers: they perform no I/O, keep no state
//! between calls and never return partial values.
//!
//! # Temporal literals
//!
//! ```rust
//! use dbwire_parser::temporal::*;
//!
//! let value = parse_datetime(b"2021-06-05 04:03:02.123", ZeroDatePolicy::Fail);
//! assert_eq!(
//!     value,
//!     Ok(TemporalValue::DateTime { year: 2021, month: 6, day: 5, hour: 4, minute: 3, second: 2, microsecond: 123_000 })
//! );
//!
//! let span = parse_duration(b"-10:20:30.5");
//! assert_eq!(
//!     span,
//!     Ok(TemporalValue::Duration(TimeSpan { hours: -10, minutes: -20, seconds: -30, microseconds: -500_000 }))
//! );
//! ```
//!
//! The parsers scan the bytes once, left to right, assigning each digit run to the next
//! [`Field`](scan/enum.Field.html) of a fixed order. A slower decoder splitting the text
//! on delimiters is kept in [`temporal::legacy`](temporal/legacy/index.html) as a reference
//! for differential testing.
//!
//! # RSA public keys
//!
//! [`decode_rsa_public_key`](rsa/fn.decode_rsa_public_key.html) accepts a
//! `-----BEGIN PUBLIC KEY-----` (`SubjectPublicKeyInfo`) or `-----BEGIN RSA PUBLIC KEY-----`
//! (PKCS#1) block. This is not a general ASN.1 parser: only the exact tag/length shapes found
//! in these structures are recognized, and any other byte pattern is reported with the step
//! and offset where it was found.
//!
//! # Features
//!
//! - `serialize` (default): DER encoding of [`RsaPublicKeyParams`](rsa/struct.RsaPublicKeyParams.html)
//! - `bigint`: access to the key parameters as `num_bigint::BigUint`

#![deny(/*missing_docs,*/unsafe_code,
        unstable_features,
        unused_import_braces, unused_qualifications)]

pub mod error;
pub mod rsa;
pub mod scan;
pub mod temporal;

pub use rsa::{decode_rsa_public_key, RsaPublicKeyParams};
pub use temporal::{parse_datetime, parse_duration, TemporalValue, TimeSpan, ZeroDatePolicy};
