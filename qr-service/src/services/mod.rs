pub mod encoder;
pub mod metrics;
pub mod qr_text;
pub mod render;

pub use encoder::{EncodeError, QrEncoder, QrcodeEncoder};
pub use metrics::{get_metrics, init_metrics};
pub use qr_text::QrTextService;
