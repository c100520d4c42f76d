pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use std::sync::Arc;

use services::{QrEncoder, QrTextService};

pub use startup::{build_router, Application};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub qr: QrTextService,
}

impl AppState {
    pub fn new(encoder: Arc<dyn QrEncoder>) -> Self {
        Self {
            qr: QrTextService::new(encoder),
        }
    }
}
