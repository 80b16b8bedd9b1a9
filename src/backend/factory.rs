//! Backend factory for creating backend instances from configuration.

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};

use super::{FixtureBackend, HttpBackend, ResumeBackend};
use crate::config::{ApiConfig, BackendKind};

/// Create the backend described by the `[api]` section.
///
/// # Errors
/// Returns error if:
/// - The fixture backend is selected without a `fixture_path`
/// - The HTTP client cannot be built
pub fn create_backend(config: &ApiConfig) -> Result<Arc<dyn ResumeBackend>> {
    match config.backend {
        BackendKind::Http => {
            let backend = HttpBackend::new(&config.base_url, config.timeout())
                .with_context(|| format!("Failed to create HTTP backend for {}", config.base_url))?;
            Ok(Arc::new(backend))
        }
        BackendKind::Fixture => {
            let path = config
                .fixture_path
                .as_ref()
                .ok_or_else(|| anyhow!("backend 'fixture' requires fixture_path"))?;
            Ok(Arc::new(FixtureBackend::new(path)))
        }
    }
}
