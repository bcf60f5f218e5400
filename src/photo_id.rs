//! Photo-id tokens as stored in TagTable.photo_id_list
//!
//! Shotwell writes each tagged photo as a type prefix followed by the photo
//! id in hex (`thumb000000000000002a` is photo 42). Only one prefix is
//! decoded; anything else is rejected rather than guessed at.

use thiserror::Error;

/// Prefix Shotwell uses for still photos.
pub const DEFAULT_PREFIX: &str = "thumb";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhotoIdError {
    #[error("Photo id token {token:?} does not start with {prefix:?}")]
    WrongPrefix { token: String, prefix: String },
    #[error("Photo id token {0:?} has no id after its prefix")]
    Empty(String),
    #[error("Photo id token {0:?} is not hexadecimal after its prefix")]
    NotHex(String),
    #[error("Photo id token {0:?} does not fit in a 64-bit id")]
    Overflow(String),
}

/// Decodes tokens carrying one fixed prefix
#[derive(Debug, Clone)]
pub struct PhotoIdDecoder {
    prefix: String,
}

impl Default for PhotoIdDecoder {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl PhotoIdDecoder {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn decode(&self, token: &str) -> Result<i64, PhotoIdError> {
        let hex = token
            .strip_prefix(self.prefix.as_str())
            .ok_or_else(|| PhotoIdError::WrongPrefix {
                token: token.to_string(),
                prefix: self.prefix.clone(),
            })?;

        if hex.is_empty() {
            return Err(PhotoIdError::Empty(token.to_string()));
        }
        // from_str_radix would accept a leading sign
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(PhotoIdError::NotHex(token.to_string()));
        }

        i64::from_str_radix(hex, 16).map_err(|_| PhotoIdError::Overflow(token.to_string()))
    }
}

/// Token for `id` in Shotwell's own layout: prefix plus 16 zero-padded hex digits.
pub fn encode(prefix: &str, id: i64) -> String {
    format!("{}{:016x}", prefix, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_shotwell_token() {
        let decoder = PhotoIdDecoder::default();
        assert_eq!(decoder.decode("thumb000000000000002a").unwrap(), 42);
        assert_eq!(decoder.decode("thumb1F").unwrap(), 31);
    }

    #[test]
    fn test_encode_then_decode_returns_id() {
        let decoder = PhotoIdDecoder::default();
        for id in [0, 1, 255, 4096, 1_234_567, i64::MAX] {
            assert_eq!(decoder.decode(&encode(DEFAULT_PREFIX, id)).unwrap(), id);
        }
    }

    #[test]
    fn test_encode_layout() {
        assert_eq!(encode("thumb", 26), "thumb000000000000001a");
    }

    #[test]
    fn test_video_token_is_rejected() {
        let err = PhotoIdDecoder::default()
            .decode("video-0000000000000003")
            .unwrap_err();
        assert!(matches!(err, PhotoIdError::WrongPrefix { .. }));
    }

    #[test]
    fn test_malformed_remainder() {
        let decoder = PhotoIdDecoder::default();
        assert_eq!(decoder.decode("thumb"), Err(PhotoIdError::Empty("thumb".into())));
        assert_eq!(decoder.decode("thumbxyz"), Err(PhotoIdError::NotHex("thumbxyz".into())));
        assert_eq!(decoder.decode("thumb+1f"), Err(PhotoIdError::NotHex("thumb+1f".into())));
        assert_eq!(
            decoder.decode("thumbffffffffffffffff"),
            Err(PhotoIdError::Overflow("thumbffffffffffffffff".into()))
        );
    }

    #[test]
    fn test_custom_prefix() {
        let decoder = PhotoIdDecoder::new("video-");
        assert_eq!(decoder.decode("video-0000000000000003").unwrap(), 3);
    }
}
