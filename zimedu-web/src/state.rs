//! Application state shared by every handler

use crate::{WebConfig, WebError, WebResult};
use std::sync::Arc;
use tracing::info;
use zimedu_applications::ZimEduApplication;
use zimedu_core::ZimEduConfig;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Web configuration
    pub config: WebConfig,
    /// Application root owning the session and the catalog
    pub application: Arc<ZimEduApplication>,
}

impl AppState {
    /// Create a new application state
    pub async fn new(config: WebConfig) -> WebResult<Self> {
        let app_config = match &config.config_file {
            Some(path) => {
                info!("Loading application config from {}", path);
                ZimEduConfig::from_file(path).map_err(|e| WebError::Config(e.to_string()))?
            }
            None => ZimEduConfig::default(),
        };

        let application = ZimEduApplication::new(app_config)?;
        Ok(Self::with_application(config, application))
    }

    /// Wrap an already built application
    pub fn with_application(config: WebConfig, application: ZimEduApplication) -> Self {
        Self {
            config,
            application: Arc::new(application),
        }
    }
}
