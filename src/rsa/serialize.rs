use crate::rsa::walk::{Tag, RSA_ALGORITHM_IDENTIFIER};
use crate::rsa::RsaPublicKeyParams;
use cookie_factory::bytes::{be_u16, be_u8};
use cookie_factory::combinator::slice;
use cookie_factory::sequence::tuple;
use cookie_factory::{gen_simple, GenError, SerializeFn, WriteContext};
use std::io::Write;

/// Error code returned (as `GenError::CustomError`) for contents longer than 65535 bytes
pub const DER_LENGTH_TOO_LARGE: u32 = 1;

/// Write a DER length, using the short form when possible
fn der_length<W: Write>(len: usize) -> impl SerializeFn<W> {
    move |out: WriteContext<W>| {
        if len < 0x80 {
            be_u8(len as u8)(out)
        } else if len <= 0xff {
            tuple((be_u8(0x81), be_u8(len as u8)))(out)
        } else if len <= 0xffff {
            tuple((be_u8(0x82), be_u16(len as u16)))(out)
        } else {
            Err(GenError::CustomError(DER_LENGTH_TOO_LARGE))
        }
    }
}

fn der_tlv<W: Write, F: SerializeFn<W>>(tag: Tag, len: usize, content: F) -> impl SerializeFn<W> {
    tuple((be_u8(tag.0), der_length(len), content))
}

/// Encode an unsigned big-endian value as an INTEGER, with a sign byte when needed
fn der_unsigned_integer(value: &[u8]) -> Result<Vec<u8>, GenError> {
    let value = match value.iter().position(|&b| b != 0) {
        Some(idx) => &value[idx..],
        None => &[0u8][..],
    };
    let pad = value[0] & 0x80 != 0;
    let padding: &[u8] = if pad { &[0] } else { &[] };
    gen_simple(
        der_tlv(
            Tag::Integer,
            value.len() + padding.len(),
            tuple((slice(padding), slice(value))),
        ),
        Vec::new(),
    )
}

fn der_wrap(tag: Tag, prefix: &[u8], content: &[u8]) -> Result<Vec<u8>, GenError> {
    gen_simple(
        der_tlv(
            tag,
            prefix.len() + content.len(),
            tuple((slice(prefix), slice(content))),
        ),
        Vec::new(),
    )
}

impl RsaPublicKeyParams {
    /// Encode as a DER PKCS#1 `RSAPublicKey`
    pub fn to_pkcs1_der(&self) -> Result<Vec<u8>, GenError> {
        let mut integers = der_unsigned_integer(&self.modulus)?;
        integers.extend(der_unsigned_integer(&self.exponent)?);
        der_wrap(Tag::Sequence, &[], &integers)
    }

    /// Encode as a DER `SubjectPublicKeyInfo` with the `rsaEncryption` algorithm
    pub fn to_spki_der(&self) -> Result<Vec<u8>, GenError> {
        let key = self.to_pkcs1_der()?;
        // no unused bits
        let bit_string = der_wrap(Tag::BitString, &[0], &key)?;
        der_wrap(Tag::Sequence, &RSA_ALGORITHM_IDENTIFIER, &bit_string)
    }
}
