use rutcheck_browser::SessionConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Shared state for the endpoint.
///
/// Chrome is resolved once at startup; each request still gets its own
/// disposable browser process, but `sessions` bounds how many run at the
/// same time so a burst of requests cannot fork Chrome unboundedly.
#[derive(Clone)]
pub struct ServeState {
    pub chrome_path: PathBuf,
    pub session: SessionConfig,
    pub portal_url: String,
    pub sessions: Arc<Semaphore>,
}

impl ServeState {
    pub fn new(
        chrome_path: PathBuf,
        session: SessionConfig,
        portal_url: impl Into<String>,
        max_sessions: usize,
    ) -> Self {
        Self {
            chrome_path,
            session,
            portal_url: portal_url.into(),
            sessions: Arc::new(Semaphore::new(max_sessions)),
        }
    }
}
