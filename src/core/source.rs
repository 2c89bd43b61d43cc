use encoding_rs::{Encoding, UTF_8, WINDOWS_1251};

/// Source text decoded from raw file bytes.
#[derive(Debug, Clone)]
pub struct DecodedSource {
    pub text: String,
    pub encoding: &'static Encoding,
}

/// Decode file bytes as UTF-8, falling back to windows-1251.
///
/// windows-1251 maps every byte, so decoding never fails.
pub fn decode_source(bytes: &[u8]) -> DecodedSource {
    match std::str::from_utf8(bytes) {
        Ok(text) => DecodedSource {
            text: text.to_string(),
            encoding: UTF_8,
        },
        Err(_) => {
            tracing::warn!("UTF-8 decode failed, trying windows-1251");
            let (cow, _, _) = WINDOWS_1251.decode(bytes);
            DecodedSource {
                text: cow.into_owned(),
                encoding: WINDOWS_1251,
            }
        }
    }
}
