pub mod matrix;
pub mod mode;
pub mod params;

pub use matrix::ModuleMatrix;
pub use mode::EncodingMode;
pub use params::QrParams;
