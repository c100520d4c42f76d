//! The QR encoder boundary.
//!
//! Handlers only see [`QrEncoder`]; the production implementation delegates
//! symbol construction (version search, error correction, masking) to the
//! `qrcode` crate.

use qrcode::bits::Bits;
use qrcode::types::{Color, EcLevel, QrError, Version};
use qrcode::QrCode;
use thiserror::Error;

use crate::models::{EncodingMode, ModuleMatrix};

/// Largest QR version the encoder will try.
pub const MAX_VERSION: i16 = 40;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Invalid error correction level: {0}")]
    InvalidEcLevel(String),

    #[error("Data too long for any QR version at error correction level {0}")]
    DataTooLong(String),

    #[error("QR encoding failed: {0}")]
    Qr(String),
}

impl EncodeError {
    pub fn kind(&self) -> &'static str {
        match self {
            EncodeError::InvalidEcLevel(_) => "invalid_ec_level",
            EncodeError::DataTooLong(_) => "data_too_long",
            EncodeError::Qr(_) => "encoder",
        }
    }
}

/// Computes the module matrix for `content` in a fixed `mode` at error
/// correction level `ecc` (`L`, `M`, `Q` or `H`), picking the smallest
/// version that fits.
pub trait QrEncoder: Send + Sync {
    fn encode(
        &self,
        content: &str,
        mode: EncodingMode,
        ecc: &str,
    ) -> Result<ModuleMatrix, EncodeError>;
}

/// [`QrEncoder`] backed by the `qrcode` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrcodeEncoder;

impl QrcodeEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl QrEncoder for QrcodeEncoder {
    fn encode(
        &self,
        content: &str,
        mode: EncodingMode,
        ecc: &str,
    ) -> Result<ModuleMatrix, EncodeError> {
        let ec_level = parse_ec_level(ecc)?;

        for version in 1..=MAX_VERSION {
            let mut bits = Bits::new(Version::Normal(version));
            match push_content(&mut bits, content.as_bytes(), mode, ec_level) {
                Ok(()) => {
                    let code = QrCode::with_bits(bits, ec_level)
                        .map_err(|e| EncodeError::Qr(e.to_string()))?;
                    return Ok(ModuleMatrix::from_fn(code.width(), |row, col| {
                        code[(col, row)] == Color::Dark
                    }));
                }
                Err(QrError::DataTooLong) => continue,
                Err(e) => return Err(EncodeError::Qr(e.to_string())),
            }
        }

        Err(EncodeError::DataTooLong(ecc.to_string()))
    }
}

fn parse_ec_level(ecc: &str) -> Result<EcLevel, EncodeError> {
    match ecc {
        "L" => Ok(EcLevel::L),
        "M" => Ok(EcLevel::M),
        "Q" => Ok(EcLevel::Q),
        "H" => Ok(EcLevel::H),
        other => Err(EncodeError::InvalidEcLevel(other.to_string())),
    }
}

fn push_content(
    bits: &mut Bits,
    content: &[u8],
    mode: EncodingMode,
    ec_level: EcLevel,
) -> Result<(), QrError> {
    match mode {
        EncodingMode::Alphanumeric => bits.push_alphanumeric_data(content)?,
        EncodingMode::Byte => bits.push_byte_data(content)?,
    }
    bits.push_terminator(ec_level)
}
