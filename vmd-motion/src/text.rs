//! Decoding of the legacy-encoded name fields.

use crate::document::trim_nul;

/// Converts a fixed-width name field from the file's legacy encoding into a
/// `String`.
///
/// Implemented for any `Fn(&[u8]) -> String`, so callers can inject their own
/// conversion. [`ShiftJis`] is the encoding MMD writes.
pub trait LegacyTextDecoder {
    fn decode(&self, bytes: &[u8]) -> String;
}

impl<F> LegacyTextDecoder for F
where
    F: Fn(&[u8]) -> String,
{
    fn decode(&self, bytes: &[u8]) -> String {
        self(bytes)
    }
}

/// Shift-JIS decoder. The field ends at the first NUL; anything after it is
/// ignored, malformed sequences become U+FFFD.
#[derive(Copy, Clone, Debug, Default)]
pub struct ShiftJis;

impl LegacyTextDecoder for ShiftJis {
    fn decode(&self, bytes: &[u8]) -> String {
        let (decoded, had_errors) =
            encoding_rs::SHIFT_JIS.decode_without_bom_handling(trim_nul(bytes));
        if had_errors {
            log::debug!("malformed Shift-JIS in name field {bytes:02x?}");
        }
        decoded.into_owned()
    }
}
