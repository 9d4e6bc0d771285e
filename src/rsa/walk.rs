use crate::error::*;
use crate::rsa::RsaPublicKeyParams;
use nom::bytes::complete::take;
use nom::combinator::peek;
use nom::number::complete::{be_u16, be_u8};
use nom::{Err, IResult};
use rusticata_macros::newtype_enum;
use std::fmt;
use tracing::{debug, trace};

/// Identifier octet of the DER elements found in RSA public keys
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Tag(pub u8);

newtype_enum! {
impl debug Tag {
    Integer = 0x02,
    BitString = 0x03,
    Sequence = 0x30,
}
}

/// Length octet announcing one following length byte
const LONG_FORM_1: u8 = 0x81;
/// Length octet announcing two following length bytes
const LONG_FORM_2: u8 = 0x82;

/// DER `AlgorithmIdentifier` for `rsaEncryption` (1.2.840.113549.1.1.1), NULL parameters
pub const RSA_ALGORITHM_IDENTIFIER: [u8; 15] = [
    0x30, 0x0d, 0x06, 0x09, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01, 0x05, 0x00,
];

/// Step of the RSA public key walk
///
/// `SubjectPublicKeyInfo` keys go through every step, PKCS#1 `RSAPublicKey` keys start at
/// `KeySequence`. Errors report the step at which they were detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStep {
    OuterSequence,
    AlgorithmIdentifier,
    BitString,
    BitStringPadding,
    KeySequence,
    Modulus,
    Exponent,
}

impl WalkStep {
    /// Step following `self`, `None` after the exponent
    pub fn next(self) -> Option<WalkStep> {
        match self {
            WalkStep::OuterSequence => Some(WalkStep::AlgorithmIdentifier),
            WalkStep::AlgorithmIdentifier => Some(WalkStep::BitString),
            WalkStep::BitString => Some(WalkStep::BitStringPadding),
            WalkStep::BitStringPadding => Some(WalkStep::KeySequence),
            WalkStep::KeySequence => Some(WalkStep::Modulus),
            WalkStep::Modulus => Some(WalkStep::Exponent),
            WalkStep::Exponent => None,
        }
    }
}

impl fmt::Display for WalkStep {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            WalkStep::OuterSequence => "outer SEQUENCE",
            WalkStep::AlgorithmIdentifier => "algorithm identifier",
            WalkStep::BitString => "BIT STRING",
            WalkStep::BitStringPadding => "BIT STRING padding",
            WalkStep::KeySequence => "key SEQUENCE",
            WalkStep::Modulus => "modulus INTEGER",
            WalkStep::Exponent => "exponent INTEGER",
        };
        f.write_str(s)
    }
}

/// Byte cursor over a DER-encoded key
struct KeyWalker<'a> {
    data: &'a [u8],
    rem: &'a [u8],
}

impl<'a> KeyWalker<'a> {
    fn new(data: &'a [u8]) -> Self {
        KeyWalker { data, rem: data }
    }

    #[inline]
    fn offset(&self) -> usize {
        self.data.len() - self.rem.len()
    }

    /// Run `parser` at the cursor, advancing past the consumed bytes
    ///
    /// Running out of input is reported as `Truncated` at the current offset.
    fn read<O, F>(&mut self, step: WalkStep, mut parser: F) -> KeyResult<O>
    where
        F: FnMut(&'a [u8]) -> IResult<&'a [u8], O, FormatError>,
    {
        match parser(self.rem) {
            Ok((rem, o)) => {
                self.rem = rem;
                Ok(o)
            }
            Err(Err::Error(FormatError::NomError(_)))
            | Err(Err::Failure(FormatError::NomError(_)))
            | Err(Err::Incomplete(_)) => {
                let offset = self.offset();
                debug!(%step, offset, "RSA public key truncated");
                Err(FormatError::Truncated { step, offset })
            }
            Err(Err::Error(e)) | Err(Err::Failure(e)) => Err(e),
        }
    }

    fn unexpected(&self, step: WalkStep, offset: usize, found: &[u8]) -> FormatError {
        debug!(%step, offset, ?found, "unexpected marker in RSA public key");
        FormatError::UnexpectedMarker {
            step,
            offset,
            found: found.to_vec(),
        }
    }

    /// Read a `tag` header whose length uses the `0x81` or `0x82` form, returning the length
    ///
    /// Short form lengths are refused: every element read this way is longer than 127 bytes
    /// in a key of 1024 bits or more.
    fn long_header(&mut self, step: WalkStep, tag: Tag) -> KeyResult<usize> {
        let offset = self.offset();
        let marker = self.read(step, be_u16)?.to_be_bytes();
        match marker {
            [t, LONG_FORM_1] if t == tag.0 => Ok(usize::from(self.read(step, be_u8)?)),
            [t, LONG_FORM_2] if t == tag.0 => Ok(usize::from(self.read(step, be_u16)?)),
            found => Err(self.unexpected(step, offset, &found)),
        }
    }

    fn algorithm_identifier(&mut self) -> KeyResult<()> {
        let step = WalkStep::AlgorithmIdentifier;
        let offset = self.offset();
        let found = self.read(step, |i| take(RSA_ALGORITHM_IDENTIFIER.len())(i))?;
        if found != &RSA_ALGORITHM_IDENTIFIER[..] {
            debug!(offset, ?found, "not an rsaEncryption key");
            return Err(FormatError::AlgorithmMismatch {
                offset,
                found: found.to_vec(),
            });
        }
        Ok(())
    }

    fn bit_string_padding(&mut self) -> KeyResult<()> {
        let step = WalkStep::BitStringPadding;
        let offset = self.offset();
        match self.read(step, be_u8)? {
            0 => Ok(()),
            b => Err(self.unexpected(step, offset, &[b])),
        }
    }

    fn modulus(&mut self) -> KeyResult<Vec<u8>> {
        let step = WalkStep::Modulus;
        let mut len = self.long_header(step, Tag::Integer)?;
        // drop the sign byte of moduli with the highest bit set
        if len > 0 && self.read(step, |i| peek(be_u8)(i))? == 0 {
            self.read(step, be_u8)?;
            len -= 1;
        }
        if len == 0 {
            let offset = self.offset();
            debug!(offset, "empty RSA modulus");
            return Err(FormatError::InvalidLength { step, offset });
        }
        Ok(self.read(step, |i| take(len)(i))?.to_vec())
    }

    fn exponent(&mut self) -> KeyResult<Vec<u8>> {
        let step = WalkStep::Exponent;
        let offset = self.offset();
        let tag = self.read(step, be_u8)?;
        let len = self.read(step, be_u8)?;
        if tag != Tag::Integer.0 || len & 0x80 != 0 {
            return Err(self.unexpected(step, offset, &[tag, len]));
        }
        if len == 0 {
            return Err(FormatError::InvalidLength { step, offset });
        }
        Ok(self.read(step, |i| take(len)(i))?.to_vec())
    }

    fn walk(mut self, first: WalkStep) -> KeyResult<RsaPublicKeyParams> {
        let mut modulus = None;
        let mut exponent = None;
        let mut step = Some(first);
        while let Some(current) = step {
            trace!(step = %current, offset = self.offset(), "walking RSA public key");
            match current {
                WalkStep::OuterSequence | WalkStep::KeySequence => {
                    self.long_header(current, Tag::Sequence)?;
                }
                WalkStep::AlgorithmIdentifier => self.algorithm_identifier()?,
                WalkStep::BitString => {
                    self.long_header(current, Tag::BitString)?;
                }
                WalkStep::BitStringPadding => self.bit_string_padding()?,
                WalkStep::Modulus => modulus = Some(self.modulus()?),
                WalkStep::Exponent => exponent = Some(self.exponent()?),
            }
            step = current.next();
        }
        if !self.rem.is_empty() {
            trace!(trailing = self.rem.len(), "ignoring bytes after RSA exponent");
        }
        match (modulus, exponent) {
            (Some(modulus), Some(exponent)) => Ok(RsaPublicKeyParams { modulus, exponent }),
            _ => Err(FormatError::Truncated {
                step: WalkStep::Modulus,
                offset: self.offset(),
            }),
        }
    }
}

/// Decode a DER-encoded `SubjectPublicKeyInfo` holding an RSA key
pub fn decode_spki_der(der: &[u8]) -> KeyResult<RsaPublicKeyParams> {
    KeyWalker::new(der).walk(WalkStep::OuterSequence)
}

/// Decode a DER-encoded PKCS#1 `RSAPublicKey`
pub fn decode_pkcs1_der(der: &[u8]) -> KeyResult<RsaPublicKeyParams> {
    KeyWalker::new(der).walk(WalkStep::KeySequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_order() {
        let mut steps = vec![WalkStep::OuterSequence];
        while let Some(next) = steps.last().unwrap().next() {
            steps.push(next);
        }
        assert_eq!(
            steps,
            vec![
                WalkStep::OuterSequence,
                WalkStep::AlgorithmIdentifier,
                WalkStep::BitString,
                WalkStep::BitStringPadding,
                WalkStep::KeySequence,
                WalkStep::Modulus,
                WalkStep::Exponent,
            ]
        );
    }

    #[test]
    fn test_tag_debug() {
        assert_eq!(format!("{:?}", Tag::Sequence), "Sequence");
        assert_eq!(Tag::Integer, Tag(2));
    }

    #[test]
    fn test_long_header() {
        let data = [0x30, 0x81, 0x9f, 0x30, 0x82, 0x01, 0x22, 0x30, 0x10];
        let mut walker = KeyWalker::new(&data);
        assert_eq!(walker.long_header(WalkStep::OuterSequence, Tag::Sequence), Ok(0x9f));
        assert_eq!(walker.offset(), 3);
        assert_eq!(walker.long_header(WalkStep::OuterSequence, Tag::Sequence), Ok(0x122));
        assert_eq!(walker.offset(), 7);
        assert_eq!(
            walker.long_header(WalkStep::KeySequence, Tag::Sequence),
            Err(FormatError::UnexpectedMarker {
                step: WalkStep::KeySequence,
                offset: 7,
                found: vec![0x30, 0x10]
            })
        );
    }

    #[test]
    fn test_truncated_header() {
        let data = [0x30, 0x82, 0x01];
        let mut walker = KeyWalker::new(&data);
        assert_eq!(
            walker.long_header(WalkStep::OuterSequence, Tag::Sequence),
            Err(FormatError::Truncated {
                step: WalkStep::OuterSequence,
                offset: 2
            })
        );
    }
}
