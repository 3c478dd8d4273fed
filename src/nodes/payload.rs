//! Drag-and-drop payload carried from the palette to the drop area
//!
//! The payload is tagged with a format string and carries the block label as
//! a length-prefixed UTF-16 big-endian string. The drop area only accepts
//! payloads with the block format tag.

use crate::constants::BLOCK_PAYLOAD_FORMAT;
use thiserror::Error;

/// Length prefix marking a null string
const NULL_STRING_LEN: u32 = u32::MAX;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Unexpected payload format: {0}")]
    UnexpectedFormat(String),
    #[error("Payload truncated: expected {expected} bytes, found {found}")]
    Truncated { expected: usize, found: usize },
    #[error("Odd string byte length: {0}")]
    OddLength(u32),
    #[error("Invalid UTF-16 label")]
    InvalidUtf16,
    #[error("Payload carries a null label")]
    NullLabel,
}

/// Tagged bytes attached to an in-flight drag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub format: String,
    pub data: Vec<u8>,
}

impl DragPayload {
    /// Creates a payload with an arbitrary format tag
    pub fn new(format: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            format: format.into(),
            data,
        }
    }

    /// Creates a block payload carrying `label`
    pub fn for_label(label: &str) -> Self {
        Self::new(BLOCK_PAYLOAD_FORMAT, encode_string(label))
    }

    /// Checks if the payload carries the block format tag
    pub fn has_block_format(&self) -> bool {
        self.format == BLOCK_PAYLOAD_FORMAT
    }

    /// Decodes the block label from the payload
    pub fn label(&self) -> Result<String, PayloadError> {
        if !self.has_block_format() {
            return Err(PayloadError::UnexpectedFormat(self.format.clone()));
        }
        decode_string(&self.data)
    }
}

/// Encodes a string as a u32 byte length followed by UTF-16 big-endian code units
pub fn encode_string(text: &str) -> Vec<u8> {
    let units: Vec<u16> = text.encode_utf16().collect();
    let mut bytes = Vec::with_capacity(4 + units.len() * 2);
    bytes.extend_from_slice(&((units.len() * 2) as u32).to_be_bytes());
    for unit in units {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    bytes
}

/// Decodes a string written by [`encode_string`]
pub fn decode_string(bytes: &[u8]) -> Result<String, PayloadError> {
    let header: [u8; 4] = bytes
        .get(..4)
        .and_then(|h| h.try_into().ok())
        .ok_or(PayloadError::Truncated {
            expected: 4,
            found: bytes.len(),
        })?;
    let byte_len = u32::from_be_bytes(header);
    if byte_len == NULL_STRING_LEN {
        return Err(PayloadError::NullLabel);
    }
    if byte_len % 2 != 0 {
        return Err(PayloadError::OddLength(byte_len));
    }

    let body = &bytes[4..];
    let expected = byte_len as usize;
    if body.len() < expected {
        return Err(PayloadError::Truncated {
            expected: expected + 4,
            found: bytes.len(),
        });
    }

    let units: Vec<u16> = body[..expected]
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|_| PayloadError::InvalidUtf16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_payload_layout() {
        let payload = DragPayload::for_label("方塊 1");
        assert!(payload.has_block_format());
        // four UTF-16 units, eight bytes, behind a big-endian length
        assert_eq!(&payload.data[..4], &[0, 0, 0, 8]);
        assert_eq!(&payload.data[4..6], &0x65B9u16.to_be_bytes());
        assert_eq!(payload.label().unwrap(), "方塊 1");
    }

    #[test]
    fn test_surrogate_pairs_survive() {
        let payload = DragPayload::for_label("block 🧱");
        assert_eq!(payload.label().unwrap(), "block 🧱");
    }

    #[test]
    fn test_wrong_format_is_rejected() {
        let payload = DragPayload::new("text/plain", encode_string("方塊 1"));
        assert!(!payload.has_block_format());
        assert_eq!(
            payload.label(),
            Err(PayloadError::UnexpectedFormat("text/plain".to_string()))
        );
    }

    #[test]
    fn test_malformed_bodies() {
        assert!(matches!(decode_string(&[0, 0]), Err(PayloadError::Truncated { .. })));
        assert_eq!(decode_string(&[0, 0, 0, 3, 0, 65, 0]), Err(PayloadError::OddLength(3)));
        assert!(matches!(
            decode_string(&[0, 0, 0, 4, 0, 65]),
            Err(PayloadError::Truncated { expected: 8, found: 6 })
        ));
        assert_eq!(decode_string(&[0xFF, 0xFF, 0xFF, 0xFF]), Err(PayloadError::NullLabel));
        // lone high surrogate
        assert_eq!(decode_string(&[0, 0, 0, 2, 0xD8, 0x00]), Err(PayloadError::InvalidUtf16));
    }

    #[test]
    fn test_empty_label() {
        assert_eq!(decode_string(&encode_string("")).unwrap(), "");
    }
}
