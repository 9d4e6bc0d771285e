//! RSA public keys, as sent by the server for password encryption
//!
//! During authentication, the server may send its RSA public key as PEM text. The client
//! needs the modulus and public exponent of this key to encrypt the password.
//!
//! The DER content is read by a fixed walk over the bytes, recognizing only the tag and
//! length shapes produced for RSA keys:
//!
//! ```text
//! SEQUENCE (0x30 0x81 xx | 0x30 0x82 xx xx)
//!   SEQUENCE { OID rsaEncryption, NULL }       15 bytes, compared as a whole
//!   BIT STRING (0x03 0x81 xx | 0x03 0x82 xx xx)
//!     0x00                                      unused bits
//!     SEQUENCE (0x30 0x81 xx | 0x30 0x82 xx xx)
//!       INTEGER modulus (0x02 0x81 xx | 0x02 0x82 xx xx)
//!       INTEGER exponent (0x02 len)
//! ```
//!
//! PKCS#1 keys (`RSA PUBLIC KEY`) hold only the innermost SEQUENCE.

use crate::error::*;

mod pem;
#[cfg(feature = "serialize")]
mod serialize;
mod walk;

pub use crate::rsa::pem::*;
#[cfg(feature = "serialize")]
pub use crate::rsa::serialize::*;
pub use crate::rsa::walk::*;

/// Parameters of an RSA public key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKeyParams {
    /// Big-endian modulus, without sign byte
    pub modulus: Vec<u8>,
    /// Big-endian public exponent
    pub exponent: Vec<u8>,
}

impl RsaPublicKeyParams {
    /// Key size in bits
    pub fn bits(&self) -> usize {
        match self.modulus.iter().position(|&b| b != 0) {
            Some(idx) => {
                (self.modulus.len() - idx) * 8 - self.modulus[idx].leading_zeros() as usize
            }
            None => 0,
        }
    }

    #[cfg(feature = "bigint")]
    #[cfg_attr(docsrs, doc(cfg(feature = "bigint")))]
    pub fn modulus_biguint(&self) -> num_bigint::BigUint {
        num_bigint::BigUint::from_bytes_be(&self.modulus)
    }

    #[cfg(feature = "bigint")]
    #[cfg_attr(docsrs, doc(cfg(feature = "bigint")))]
    pub fn exponent_biguint(&self) -> num_bigint::BigUint {
        num_bigint::BigUint::from_bytes_be(&self.exponent)
    }
}

/// Decode the RSA public key of a PEM block
///
/// Both `-----BEGIN PUBLIC KEY-----` and `-----BEGIN RSA PUBLIC KEY-----` blocks are
/// accepted. Any unexpected byte pattern fails the whole decoding; no partial key is
/// returned.
pub fn decode_rsa_public_key(pem_text: &str) -> KeyResult<RsaPublicKeyParams> {
    let (kind, der) = unwrap_pem(pem_text)?;
    match kind {
        PemKind::SubjectPublicKeyInfo => decode_spki_der(&der),
        PemKind::Pkcs1 => decode_pkcs1_der(&der),
    }
}
