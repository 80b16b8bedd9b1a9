/// Failure to hand a URL to the platform.
#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("Nothing to open")]
    Empty,

    #[error("Failed to open {url}: {source}")]
    Launch {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

/// Hands `mailto:`, `tel:` and web URLs to whatever the platform registered for them.
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<(), OpenError>;
}

/// Opens links with the system handler (`xdg-open`, `open`, `start`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) -> Result<(), OpenError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(OpenError::Empty);
        }
        open::that(url).map_err(|source| OpenError::Launch {
            url: url.to_string(),
            source,
        })
    }
}
