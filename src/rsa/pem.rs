use crate::error::*;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

const BEGIN: &str = "-----BEGIN ";
const END: &str = "-----END ";
const DASHES: &str = "-----";

/// Structure held by a PEM public key block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PemKind {
    /// `PUBLIC KEY`: X.509 `SubjectPublicKeyInfo`
    SubjectPublicKeyInfo,
    /// `RSA PUBLIC KEY`: PKCS#1 `RSAPublicKey`
    Pkcs1,
}

impl PemKind {
    fn from_label(label: &str) -> Option<PemKind> {
        match label {
            "PUBLIC KEY" => Some(PemKind::SubjectPublicKeyInfo),
            "RSA PUBLIC KEY" => Some(PemKind::Pkcs1),
            _ => None,
        }
    }
}

/// Strip the boundary lines of the first PEM block of `text` and decode its body
///
/// Whitespace (line breaks included) inside the body is ignored. Text before the
/// `-----BEGIN` line and after the `-----END` line is ignored.
pub fn unwrap_pem(text: &str) -> KeyResult<(PemKind, Vec<u8>)> {
    let start = text.find(BEGIN).ok_or(FormatError::MissingPemBoundary)? + BEGIN.len();
    let label_len = text[start..]
        .find(DASHES)
        .ok_or(FormatError::MissingPemBoundary)?;
    let label = &text[start..start + label_len];
    let body_start = start + label_len + DASHES.len();

    let footer = format!("{}{}{}", END, label, DASHES);
    let body_len = text[body_start..]
        .find(&footer)
        .ok_or(FormatError::MissingPemBoundary)?;
    let kind = PemKind::from_label(label)
        .ok_or_else(|| FormatError::UnsupportedPemLabel(label.to_owned()))?;

    let body: String = text[body_start..body_start + body_len]
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let der = STANDARD.decode(body)?;
    Ok((kind, der))
}
