use crate::{Error, Result};
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use std::path::Path;
use tempfile::TempDir;
use tokio::task::JoinHandle;

/// Where a non-headless window is parked.
///
/// `OffScreen` keeps the window out of view by positioning it far outside
/// the visible desktop. Only meaningful when `headless` is off; headless is
/// the default and makes this irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowPlacement {
    #[default]
    OnScreen,
    OffScreen,
}

/// The recognized session options. This set is closed: lookups are meant to
/// be reproducible, so per-call tuning beyond these knobs is not accepted.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub headless: bool,
    pub viewport: (u32, u32),
    pub locale: String,
    pub user_agent: Option<String>,
    pub suppress_automation_signals: bool,
    pub window_placement: WindowPlacement,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            headless: true,
            viewport: (1200, 800),
            locale: "es-CL".to_string(),
            user_agent: None,
            suppress_automation_signals: true,
            window_placement: WindowPlacement::OnScreen,
        }
    }
}

/// One isolated browser context bound to a single lookup.
///
/// Each session spawns its own Chrome process on a fresh temporary profile,
/// so no cookies or fingerprint state can leak between subjects. Sessions
/// are not pooled or reused; callers must `close` on every exit path.
pub struct Session {
    browser: Browser,
    page: Page,
    handler: JoinHandle<()>,
    // Held so the profile directory outlives the Chrome process.
    _profile: TempDir,
}

impl Session {
    /// Spawn a Chrome process for one lookup
    pub async fn launch(chrome: &Path, config: &SessionConfig) -> Result<Self> {
        let profile = tempfile::tempdir().map_err(Error::Io)?;
        tracing::debug!("Session profile at {}", profile.path().display());

        let (width, height) = config.viewport;
        let mut builder = BrowserConfig::builder()
            .chrome_executable(chrome)
            .user_data_dir(profile.path())
            .window_size(width, height)
            .args(launch_args(config));
        if !config.headless {
            builder = builder.with_head();
        }
        let browser_config = builder.build().map_err(Error::Launch)?;

        let (browser, mut handler) = Browser::launch(browser_config).await?;

        // The handler task must run for any CDP command to complete
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    // Some CDP events are not fully parseable; keep going
                    tracing::debug!("CDP handler event error (continuing): {}", e);
                }
            }
        });

        let page = browser.new_page("about:blank").await?;

        tracing::info!("Browser session started");

        Ok(Self {
            browser,
            page,
            handler: handler_task,
            _profile: profile,
        })
    }

    /// The single page this session drives
    pub(crate) fn page(&self) -> &Page {
        &self.page
    }

    /// Tear the session down: close Chrome, stop the handler task, drop the
    /// temporary profile. Close failures are logged, never propagated — a
    /// lookup result must not be lost to teardown noise.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            tracing::warn!("Error closing browser: {}", e);
        }
        self.handler.abort();
        tracing::info!("Browser session closed");
    }
}

/// Chrome command-line arguments derived from a config.
///
/// Kept separate from the builder wiring so the mapping stays testable.
fn launch_args(config: &SessionConfig) -> Vec<String> {
    let mut args = vec![
        "--no-sandbox".to_string(),
        format!("--lang={}", config.locale),
    ];

    if let Some(ua) = &config.user_agent {
        args.push(format!("--user-agent={}", ua));
    }

    if config.suppress_automation_signals {
        args.extend([
            "--disable-blink-features=AutomationControlled".to_string(),
            "--disable-infobars".to_string(),
            "--disable-notifications".to_string(),
            "--disable-popup-blocking".to_string(),
        ]);
    }

    if config.window_placement == WindowPlacement::OffScreen {
        args.push("--window-position=-3000,-3000".to_string());
    }

    args
}
