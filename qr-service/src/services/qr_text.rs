use std::sync::Arc;

use crate::models::{EncodingMode, QrParams};
use crate::services::encoder::{EncodeError, QrEncoder};
use crate::services::render::render_text;

/// Encodes validated parameters and rasterizes the result.
#[derive(Clone)]
pub struct QrTextService {
    encoder: Arc<dyn QrEncoder>,
}

impl QrTextService {
    pub fn new(encoder: Arc<dyn QrEncoder>) -> Self {
        Self { encoder }
    }

    /// Renders `params` as block-character text. Output depends only on
    /// `params`.
    pub fn generate(&self, params: &QrParams) -> Result<(EncodingMode, String), EncodeError> {
        let (mode, content) = EncodingMode::select(&params.text);
        let matrix = self.encoder.encode(&content, mode, &params.ecc)?;

        tracing::debug!(
            mode = %mode,
            ecc = %params.ecc,
            quiet_zone = params.quiet_zone(),
            size = matrix.size(),
            "Encoded QR matrix"
        );

        Ok((mode, render_text(&matrix, params.quiet_zone(), params.invert)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModuleMatrix;
    use crate::services::encoder::QrcodeEncoder;
    use crate::services::render::{DARK_PIXEL, LIGHT_PIXEL};
    use std::sync::Mutex;

    /// Records what it was asked to encode and returns a 1x1 dark matrix.
    #[derive(Default)]
    struct RecordingEncoder {
        calls: Mutex<Vec<(String, EncodingMode, String)>>,
    }

    impl QrEncoder for RecordingEncoder {
        fn encode(
            &self,
            content: &str,
            mode: EncodingMode,
            ecc: &str,
        ) -> Result<ModuleMatrix, EncodeError> {
            self.calls
                .lock()
                .unwrap()
                .push((content.to_string(), mode, ecc.to_string()));
            Ok(ModuleMatrix::from_fn(1, |_, _| true))
        }
    }

    fn params(text: &str, margin: f64, invert: bool) -> QrParams {
        QrParams {
            text: text.to_string(),
            ecc: "L".to_string(),
            margin,
            invert,
        }
    }

    #[test]
    fn passes_uppercased_content_in_alphanumeric_mode() {
        let encoder = Arc::new(RecordingEncoder::default());
        let service = QrTextService::new(encoder.clone());

        let (mode, text) = service.generate(&params("hello", 0.0, false)).unwrap();

        assert_eq!(mode, EncodingMode::Alphanumeric);
        assert_eq!(text, DARK_PIXEL);
        let calls = encoder.calls.lock().unwrap();
        assert_eq!(
            calls[0],
            ("HELLO".to_string(), EncodingMode::Alphanumeric, "L".to_string())
        );
    }

    #[test]
    fn fractional_margin_is_floored() {
        let service = QrTextService::new(Arc::new(RecordingEncoder::default()));

        let (_, text) = service.generate(&params("HI", 1.9, false)).unwrap();

        assert_eq!(
            text,
            [
                LIGHT_PIXEL.repeat(3),
                format!("{LIGHT_PIXEL}{DARK_PIXEL}{LIGHT_PIXEL}"),
                LIGHT_PIXEL.repeat(3),
            ]
            .join("\n")
        );
    }

    #[test]
    fn lowercase_and_uppercase_render_identically() {
        let service = QrTextService::new(Arc::new(QrcodeEncoder::new()));

        let (_, lower) = service.generate(&params("hello", 2.0, false)).unwrap();
        let (_, upper) = service.generate(&params("HELLO", 2.0, false)).unwrap();

        assert_eq!(lower, upper);
    }

    #[test]
    fn output_side_is_matrix_plus_two_margins() {
        let service = QrTextService::new(Arc::new(QrcodeEncoder::new()));

        let (_, text) = service.generate(&params("HELLO", 8.0, false)).unwrap();
        let lines: Vec<&str> = text.split('\n').collect();

        assert_eq!(lines.len(), 21 + 16);
        assert!(lines
            .iter()
            .all(|line| line.chars().count() == 2 * (21 + 16)));
    }
}
